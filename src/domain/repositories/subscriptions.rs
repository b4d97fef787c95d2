use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mockall::automock;
use uuid::Uuid;

use crate::domain::entities::subscriptions::SubscriptionEntity;

#[async_trait]
#[automock]
pub trait SubscriptionRepository {
    async fn find_by_id(&self, subscription_id: Uuid) -> Result<Option<SubscriptionEntity>>;

    /// Looks up a subscription by its opaque manage-link token.
    async fn find_by_token(&self, token: &str) -> Result<Option<SubscriptionEntity>>;

    async fn list_for_seller(&self, seller_id: Uuid) -> Result<Vec<SubscriptionEntity>>;

    /// Persists a completed transition. Writes both pause columns with the
    /// values the transition produced.
    async fn update_pause_state(
        &self,
        subscription_id: Uuid,
        paused_at: Option<DateTime<Utc>>,
        user_requested_pause_at: Option<DateTime<Utc>>,
    ) -> Result<()>;
}
