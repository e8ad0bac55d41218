use crate::dtos::ClassGroupSubjectDTO;

pub mod list_class_group_subjects {
    use super::*;

    pub type APIResponse = Vec<ClassGroupSubjectDTO>;
}
