use std::sync::Arc;

use anyhow::anyhow;
use axum::http::StatusCode;
use chrono::Utc;
use thiserror::Error;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::domain::{
    entities::subscriptions::SubscriptionEntity,
    repositories::{
        notification_queue::NotificationQueueRepository, sellers::SellerRepository,
        subscriptions::SubscriptionRepository,
    },
    value_objects::{
        enums::{pause_actions::PauseAction, pause_initiators::PauseInitiator},
        subscription_pause::PauseState,
        subscriptions::{AudienceSubscriptionDto, ManageSubscriptionDto, PauseReceipt},
    },
};

pub const MEMBERSHIP_PAUSED_MESSAGE: &str = "Membership paused";
pub const MEMBERSHIP_RESUMED_MESSAGE: &str = "Membership resumed";

#[derive(Debug, Error)]
pub enum PauseError {
    #[error("subscription not found")]
    SubscriptionNotFound,
    #[error("unknown manage token")]
    InvalidManageToken,
    #[error("subscription belongs to another seller")]
    NotSubscriptionOwner,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl PauseError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            PauseError::SubscriptionNotFound => StatusCode::NOT_FOUND,
            PauseError::InvalidManageToken => StatusCode::UNAUTHORIZED,
            PauseError::NotSubscriptionOwner => StatusCode::FORBIDDEN,
            PauseError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub type UseCaseResult<T> = std::result::Result<T, PauseError>;

pub struct SubscriptionPauseUseCase<S, O, N>
where
    S: SubscriptionRepository + Send + Sync + 'static,
    O: SellerRepository + Send + Sync + 'static,
    N: NotificationQueueRepository + Send + Sync + 'static,
{
    subscription_repo: Arc<S>,
    seller_repo: Arc<O>,
    notification_queue: Arc<N>,
}

impl<S, O, N> SubscriptionPauseUseCase<S, O, N>
where
    S: SubscriptionRepository + Send + Sync + 'static,
    O: SellerRepository + Send + Sync + 'static,
    N: NotificationQueueRepository + Send + Sync + 'static,
{
    pub fn new(subscription_repo: Arc<S>, seller_repo: Arc<O>, notification_queue: Arc<N>) -> Self {
        Self {
            subscription_repo,
            seller_repo,
            notification_queue,
        }
    }

    pub async fn manage_view(&self, token: &str) -> UseCaseResult<ManageSubscriptionDto> {
        let subscription = self.resolve_by_token(token).await?;
        Ok(ManageSubscriptionDto::from(subscription))
    }

    pub async fn pause_as_customer(&self, token: &str) -> UseCaseResult<PauseReceipt> {
        let subscription = self.resolve_by_token(token).await?;
        self.apply_action(subscription, PauseAction::Pause, PauseInitiator::Buyer)
            .await
    }

    pub async fn resume_as_customer(&self, token: &str) -> UseCaseResult<PauseReceipt> {
        let subscription = self.resolve_by_token(token).await?;
        self.apply_action(subscription, PauseAction::Resume, PauseInitiator::Buyer)
            .await
    }

    pub async fn pause_as_seller(
        &self,
        seller_id: Uuid,
        subscription_id: Uuid,
    ) -> UseCaseResult<PauseReceipt> {
        let subscription = self.resolve_for_seller(seller_id, subscription_id).await?;
        self.apply_action(subscription, PauseAction::Pause, PauseInitiator::Seller)
            .await
    }

    pub async fn resume_as_seller(
        &self,
        seller_id: Uuid,
        subscription_id: Uuid,
    ) -> UseCaseResult<PauseReceipt> {
        let subscription = self.resolve_for_seller(seller_id, subscription_id).await?;
        self.apply_action(subscription, PauseAction::Resume, PauseInitiator::Seller)
            .await
    }

    pub async fn list_for_seller(
        &self,
        seller_id: Uuid,
    ) -> UseCaseResult<Vec<AudienceSubscriptionDto>> {
        let subscriptions = self
            .subscription_repo
            .list_for_seller(seller_id)
            .await
            .map_err(|err| {
                error!(
                    %seller_id,
                    db_error = ?err,
                    "subscriptions: failed to list seller audience"
                );
                PauseError::Internal(err)
            })?;

        Ok(subscriptions
            .into_iter()
            .map(AudienceSubscriptionDto::from)
            .collect())
    }

    async fn resolve_by_token(&self, token: &str) -> UseCaseResult<SubscriptionEntity> {
        self.subscription_repo
            .find_by_token(token)
            .await
            .map_err(|err| {
                error!(db_error = ?err, "subscriptions: failed to look up manage token");
                PauseError::Internal(err)
            })?
            .ok_or_else(|| {
                warn!("subscriptions: unknown manage token presented");
                PauseError::InvalidManageToken
            })
    }

    async fn resolve_for_seller(
        &self,
        seller_id: Uuid,
        subscription_id: Uuid,
    ) -> UseCaseResult<SubscriptionEntity> {
        let subscription = self
            .subscription_repo
            .find_by_id(subscription_id)
            .await
            .map_err(|err| {
                error!(
                    %subscription_id,
                    db_error = ?err,
                    "subscriptions: failed to load subscription"
                );
                PauseError::Internal(err)
            })?
            .ok_or_else(|| {
                warn!(%subscription_id, "subscriptions: subscription not found");
                PauseError::SubscriptionNotFound
            })?;

        if subscription.seller_id != seller_id {
            warn!(
                %subscription_id,
                %seller_id,
                "subscriptions: seller does not own this subscription"
            );
            return Err(PauseError::NotSubscriptionOwner);
        }

        Ok(subscription)
    }

    /// Shared tail of every pause/resume path: load the seller's email
    /// preference, run the pure transition, persist, then enqueue. The
    /// timestamp write happens before any enqueue so a persistence failure
    /// never leaks an email; an enqueue failure is logged and swallowed
    /// because delivery is asynchronous anyway.
    async fn apply_action(
        &self,
        subscription: SubscriptionEntity,
        action: PauseAction,
        initiator: PauseInitiator,
    ) -> UseCaseResult<PauseReceipt> {
        let subscription_id = subscription.id;
        info!(
            %subscription_id,
            %action,
            %initiator,
            "subscriptions: membership state change requested"
        );

        let seller = self
            .seller_repo
            .find_by_id(subscription.seller_id)
            .await
            .map_err(|err| {
                error!(
                    %subscription_id,
                    seller_id = %subscription.seller_id,
                    db_error = ?err,
                    "subscriptions: failed to load seller"
                );
                PauseError::Internal(err)
            })?
            .ok_or_else(|| {
                PauseError::Internal(anyhow!(
                    "subscription {} references missing seller {}",
                    subscription_id,
                    subscription.seller_id
                ))
            })?;

        let state = PauseState {
            paused_at: subscription.paused_at,
            user_requested_pause_at: subscription.user_requested_pause_at,
        };

        let transition =
            match state.apply(action, initiator, seller.enable_payment_email, Utc::now()) {
                Some(transition) => transition,
                None => {
                    info!(
                        %subscription_id,
                        %action,
                        "subscriptions: membership already in requested state"
                    );
                    return Ok(receipt(action, state.is_paused()));
                }
            };

        self.subscription_repo
            .update_pause_state(
                subscription_id,
                transition.state.paused_at,
                transition.state.user_requested_pause_at,
            )
            .await
            .map_err(|err| {
                error!(
                    %subscription_id,
                    db_error = ?err,
                    "subscriptions: failed to persist pause state"
                );
                PauseError::Internal(err)
            })?;

        for command in &transition.notifications {
            if let Err(err) = self
                .notification_queue
                .enqueue_email(*command, subscription_id)
                .await
            {
                warn!(
                    %subscription_id,
                    template = %command.template(),
                    error = ?err,
                    "subscriptions: failed to enqueue notification email"
                );
            }
        }

        info!(
            %subscription_id,
            %action,
            %initiator,
            paused = transition.state.is_paused(),
            "subscriptions: membership state change completed"
        );

        Ok(receipt(action, transition.state.is_paused()))
    }
}

fn receipt(action: PauseAction, paused: bool) -> PauseReceipt {
    PauseReceipt {
        message: match action {
            PauseAction::Pause => MEMBERSHIP_PAUSED_MESSAGE,
            PauseAction::Resume => MEMBERSHIP_RESUMED_MESSAGE,
        },
        paused,
    }
}
