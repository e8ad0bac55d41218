use kinderhub_domain::ID;
use serde::Deserialize;

use crate::dtos::GradeDTO;

pub mod get_upcoming_grade {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub student_id: ID,
    }

    pub type APIResponse = GradeDTO;
}
