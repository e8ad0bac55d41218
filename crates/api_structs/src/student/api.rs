use kinderhub_domain::ID;
use serde::{Deserialize, Serialize};

pub mod get_student_id {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub username: String,
    }

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub student_id: ID,
    }
}
