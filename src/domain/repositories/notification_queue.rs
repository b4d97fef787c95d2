use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::domain::value_objects::notification_emails::NotificationCommand;

/// Hands emails to the deferred-delivery queue. Delivery itself (and any
/// retries) belongs to the worker consuming the queue.
#[async_trait]
#[automock]
pub trait NotificationQueueRepository {
    async fn enqueue_email(
        &self,
        command: NotificationCommand,
        subscription_id: Uuid,
    ) -> Result<i64>;
}
