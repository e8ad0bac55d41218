use crate::base::{APIResponse, BaseClient};
use kinderhub_api_structs::*;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct StudentClient {
    base: Arc<BaseClient>,
}

impl StudentClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn get_id(&self, username: &str) -> APIResponse<get_student_id::APIResponse> {
        self.base
            .get(format!("student/id/{}", username), StatusCode::OK)
            .await
    }
}
