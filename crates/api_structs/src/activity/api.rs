use kinderhub_domain::ID;
use serde::{Deserialize, Serialize};

pub mod create_activity {
    use super::*;

    /// Optional keys are omitted entirely when unset; the backend treats an
    /// empty string subject id as a real reference.
    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub title: String,
        pub description: String,
        pub activity_name: String,
        pub due_date: String,
        pub class_group_id: ID,
        pub teacher_id: ID,
        pub weightage_percent: i64,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub subject_id: Option<ID>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub file_base64: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub file_name: Option<String>,
    }

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub activity_id: ID,
    }
}
