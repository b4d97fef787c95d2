use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::subscriptions::SubscriptionEntity;

/// Data behind the buyer's manage page. `paused` drives the
/// Pause/Resume button swap.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ManageSubscriptionDto {
    pub subscription_id: Uuid,
    pub paused: bool,
    pub paused_at: Option<DateTime<Utc>>,
}

impl From<SubscriptionEntity> for ManageSubscriptionDto {
    fn from(entity: SubscriptionEntity) -> Self {
        Self {
            subscription_id: entity.id,
            paused: entity.is_paused(),
            paused_at: entity.paused_at,
        }
    }
}

/// One row of the seller's audience screen.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AudienceSubscriptionDto {
    pub subscription_id: Uuid,
    pub user_id: Uuid,
    pub paused: bool,
    pub created_at: DateTime<Utc>,
}

impl From<SubscriptionEntity> for AudienceSubscriptionDto {
    fn from(entity: SubscriptionEntity) -> Self {
        Self {
            subscription_id: entity.id,
            user_id: entity.user_id,
            paused: entity.is_paused(),
            created_at: entity.created_at,
        }
    }
}

/// Acknowledgement returned to the presentation layer after a pause or
/// resume request.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PauseReceipt {
    pub message: &'static str,
    pub paused: bool,
}
