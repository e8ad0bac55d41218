mod activity;
mod class_group_subject;
mod grade;
mod notification;
mod student;

pub mod dtos {
    pub use crate::class_group_subject::dtos::*;
    pub use crate::grade::dtos::*;
    pub use crate::notification::dtos::*;
}

pub use crate::activity::api::*;
pub use crate::class_group_subject::api::*;
pub use crate::grade::api::*;
pub use crate::notification::api::*;
pub use crate::student::api::*;
