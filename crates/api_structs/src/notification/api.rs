use serde::{Deserialize, Serialize};

use crate::dtos::NotificationDTO;
use kinderhub_domain::ID;

pub mod activity_notifications {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub activity_id: ID,
        pub student_id: ID,
    }

    pub type APIResponse = Vec<NotificationDTO>;
}

pub mod mark_notification_read {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub activity_id: ID,
        pub student_id: ID,
        pub class_group_subject_id: ID,
        pub student_activity_id: ID,
    }

    /// Success/failure is carried by the status code alone.
    #[derive(Debug, Deserialize, Serialize)]
    pub struct APIResponse {}
}
