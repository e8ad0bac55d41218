use crate::base::APIError;
use crate::notification::{
    ActivityNotificationsInput, MarkNotificationReadInput, NotificationClient,
};
use crate::student::StudentClient;
use crate::KinderhubSDK;
use chrono::Utc;
use kinderhub_domain::{NotificationRecord, ID};
use thiserror::Error;
use tracing::{error, warn};

/// Keeps the pending-activity notifications of one signed-in user in sync
/// with the backend.
///
/// [`NotificationReconciler::initialize`] runs once per mount of the owning
/// view: it resolves the stored user key to a student id, fetches the raw
/// notification list and keeps only the rows whose due date is still in the
/// future. Reads are confirm-then-mutate: a record is counted as read only
/// after the backend has acknowledged it.
pub struct NotificationReconciler {
    student: StudentClient,
    notification: NotificationClient,
    records: Vec<NotificationRecord>,
}

#[derive(Debug, Error)]
pub enum DismissError {
    #[error("No notification at position {0}")]
    UnknownRecord(usize),
    #[error("Failed to confirm notification as read: {0}")]
    Api(#[from] APIError),
}

impl NotificationReconciler {
    pub fn new(sdk: &KinderhubSDK) -> Self {
        Self {
            student: sdk.student.clone(),
            notification: sdk.notification.clone(),
            records: Vec::new(),
        }
    }

    /// Resolves `user_key` and fetches the active notification set. A missing
    /// key or a failed call means "no notifications": the failure is logged
    /// and the active set stays empty, nothing is surfaced to the caller.
    ///
    /// The identity lookup always completes before the list request goes out;
    /// the two calls are sequentially dependent.
    pub async fn initialize(&mut self, user_key: Option<&str>) {
        self.records.clear();

        let username = match user_key {
            Some(username) if !username.is_empty() => username,
            _ => {
                warn!("No stored user identity, skipping notification fetch");
                return;
            }
        };
        let student_id = match self.student.get_id(username).await {
            Ok(res) => res.student_id,
            Err(e) => {
                error!("Failed to resolve student id for {}: {}", username, e);
                return;
            }
        };
        let input = ActivityNotificationsInput {
            // The backend does not filter on this field; the contract still
            // requires it.
            activity_id: ID::nil(),
            student_id,
        };
        let raw = match self.notification.query(input).await {
            Ok(raw) => raw,
            Err(e) => {
                error!("Failed to fetch activity notifications: {}", e);
                return;
            }
        };

        // One "now" snapshot for the whole batch keeps the filter
        // deterministic. Server order is preserved and duplicates are kept.
        let now = Utc::now().naive_utc();
        self.records = raw
            .into_iter()
            .filter_map(|n| {
                NotificationRecord::new_if_pending(
                    n.activity_id,
                    n.student_id,
                    n.class_group_subject_id,
                    n.student_activity_id,
                    n.activity_name,
                    &n.due_date,
                    now,
                )
            })
            .collect();
    }

    /// The active set, in server response order.
    pub fn active(&self) -> &[NotificationRecord] {
        &self.records
    }

    /// Badge value: active records not yet confirmed as read.
    pub fn unread_count(&self) -> usize {
        self.records.iter().filter(|r| !r.is_read).count()
    }

    /// Confirms the record at `position` as read. Already-read records are a
    /// no-op without a network call. On failure the record stays unread and
    /// the error is returned for the caller to surface.
    pub async fn dismiss(&mut self, position: usize) -> Result<(), DismissError> {
        let record = self
            .records
            .get(position)
            .ok_or(DismissError::UnknownRecord(position))?;
        if record.is_read {
            return Ok(());
        }

        let input = MarkNotificationReadInput {
            activity_id: record.activity_id.clone(),
            student_id: record.student_id.clone(),
            class_group_subject_id: record.class_group_subject_id.clone(),
            student_activity_id: record.student_activity_id.clone(),
        };
        if let Err(e) = self.notification.mark_read(input).await {
            warn!("Failed to mark notification as read: {}", e);
            return Err(e.into());
        }
        self.records[position].is_read = true;
        Ok(())
    }
}
