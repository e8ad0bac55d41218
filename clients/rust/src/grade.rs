use crate::base::{APIResponse, BaseClient};
use kinderhub_api_structs::*;
use kinderhub_domain::ID;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct GradeClient {
    base: Arc<BaseClient>,
}

impl GradeClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn upcoming(&self, student_id: ID) -> APIResponse<get_upcoming_grade::APIResponse> {
        self.base
            .get(format!("grade/upcoming/{}", student_id), StatusCode::OK)
            .await
    }
}
