use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::infrastructure::postgres::schema::subscriptions;

#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = subscriptions)]
pub struct SubscriptionEntity {
    pub id: Uuid,
    pub user_id: Uuid,
    pub seller_id: Uuid,
    pub token: String,
    pub created_at: DateTime<Utc>,
    pub paused_at: Option<DateTime<Utc>>,
    pub user_requested_pause_at: Option<DateTime<Utc>>,
}

impl SubscriptionEntity {
    pub fn is_paused(&self) -> bool {
        self.paused_at.is_some()
    }
}
