use kinderhub_domain::ID;
use serde::{Deserialize, Serialize};

/// Raw activity notification row as the backend sends it. `due_date` stays
/// textual (`dd/MM/yyyy hh:mm:ss a`); parsing and the future-only filter
/// happen in the domain layer.
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NotificationDTO {
    pub activity_id: ID,
    pub student_id: ID,
    pub class_group_subject_id: ID,
    pub student_activity_id: ID,
    pub activity_name: String,
    pub due_date: String,
}
