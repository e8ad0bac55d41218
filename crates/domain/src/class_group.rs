use crate::shared::entity::ID;
use itertools::Itertools;

/// One row of the class-group/subject lookup table. A class group offering
/// several subjects appears once per subject.
#[derive(Debug, Clone)]
pub struct ClassGroupSubjectOption {
    pub class_group_id: ID,
    pub class_group_name: String,
    pub subject_id: ID,
    pub subject_name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SubjectOption {
    pub id: ID,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClassGroupChoice {
    pub id: ID,
    pub name: String,
}

/// The dependent option set for a selected class group: every distinct
/// subject offered by that class group, first-seen order.
pub fn subjects_for_class_group(
    options: &[ClassGroupSubjectOption],
    class_group_id: &ID,
) -> Vec<SubjectOption> {
    options
        .iter()
        .filter(|option| &option.class_group_id == class_group_id)
        .unique_by(|option| option.subject_id.clone())
        .map(|option| SubjectOption {
            id: option.subject_id.clone(),
            name: option.subject_name.clone(),
        })
        .collect()
}

/// Distinct class groups in the lookup table, first-seen order.
pub fn class_group_choices(options: &[ClassGroupSubjectOption]) -> Vec<ClassGroupChoice> {
    options
        .iter()
        .unique_by(|option| option.class_group_id.clone())
        .map(|option| ClassGroupChoice {
            id: option.class_group_id.clone(),
            name: option.class_group_name.clone(),
        })
        .collect()
}
