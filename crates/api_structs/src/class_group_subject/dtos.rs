use kinderhub_domain::{ClassGroupSubjectOption, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ClassGroupSubjectDTO {
    pub class_group_id: ID,
    pub class_group_name: String,
    pub subject_id: ID,
    pub subject_name: String,
}

impl From<ClassGroupSubjectDTO> for ClassGroupSubjectOption {
    fn from(dto: ClassGroupSubjectDTO) -> Self {
        Self {
            class_group_id: dto.class_group_id,
            class_group_name: dto.class_group_name,
            subject_id: dto.subject_id,
            subject_name: dto.subject_name,
        }
    }
}
