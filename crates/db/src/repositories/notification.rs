//! Notification repository.

use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, QuerySelect, Set,
};
use uuid::Uuid;
use vera_core::clinic::NewNotification;

use crate::entities::notifications;

/// Number of notifications returned by [`NotificationRepository::list_recent`].
pub const RECENT_LIMIT: u64 = 50;

/// Error types for notification operations.
#[derive(Debug, thiserror::Error)]
pub enum NotificationError {
    /// Notification not found.
    #[error("Notification not found: {0}")]
    NotFound(Uuid),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Notification repository.
#[derive(Debug, Clone)]
pub struct NotificationRepository {
    db: DatabaseConnection,
}

impl NotificationRepository {
    /// Creates a new notification repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns the most recent notifications, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_recent(&self) -> Result<Vec<notifications::Model>, NotificationError> {
        let rows = notifications::Entity::find()
            .order_by_desc(notifications::Column::CreatedAt)
            .limit(RECENT_LIMIT)
            .all(&self.db)
            .await?;
        Ok(rows)
    }

    /// Posts a notification, unread.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub async fn create(
        &self,
        input: NewNotification,
    ) -> Result<notifications::Model, NotificationError> {
        let now = chrono::Utc::now().into();
        let notification = notifications::ActiveModel {
            id: Set(Uuid::new_v4()),
            kind: Set(input.kind.into()),
            message: Set(input.message),
            read: Set(false),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = notification.insert(&self.db).await?;
        Ok(result)
    }

    /// Marks a notification as read.
    ///
    /// # Errors
    ///
    /// Returns [`NotificationError::NotFound`] if no notification has this id.
    pub async fn mark_read(&self, id: Uuid) -> Result<notifications::Model, NotificationError> {
        let notification = notifications::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(NotificationError::NotFound(id))?;

        if notification.read {
            return Ok(notification);
        }

        let mut active: notifications::ActiveModel = notification.into();
        active.read = Set(true);
        active.updated_at = Set(chrono::Utc::now().into());

        let updated = active.update(&self.db).await?;
        Ok(updated)
    }

    /// Deletes a notification.
    ///
    /// # Errors
    ///
    /// Returns [`NotificationError::NotFound`] if no notification has this id.
    pub async fn delete(&self, id: Uuid) -> Result<(), NotificationError> {
        let result = notifications::Entity::delete_by_id(id).exec(&self.db).await?;
        if result.rows_affected == 0 {
            return Err(NotificationError::NotFound(id));
        }
        Ok(())
    }
}
