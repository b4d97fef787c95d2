use std::fmt::Display;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::value_objects::enums::{
    pause_actions::PauseAction, pause_initiators::PauseInitiator,
};

/// Templates delivered to the buyer of a membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomerEmailTemplate {
    SubscriptionPaused,
    SubscriptionPausedBySeller,
    SubscriptionResumed,
    SubscriptionResumedBySeller,
}

impl Display for CustomerEmailTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let template = match self {
            CustomerEmailTemplate::SubscriptionPaused => "subscription_paused",
            CustomerEmailTemplate::SubscriptionPausedBySeller => "subscription_paused_by_seller",
            CustomerEmailTemplate::SubscriptionResumed => "subscription_resumed",
            CustomerEmailTemplate::SubscriptionResumedBySeller => "subscription_resumed_by_seller",
        };
        write!(f, "{}", template)
    }
}

/// Templates delivered to the seller owning the membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SellerEmailTemplate {
    SubscriptionPaused,
    SubscriptionPausedByCustomer,
    SubscriptionResumed,
    SubscriptionResumedByCustomer,
}

impl Display for SellerEmailTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let template = match self {
            SellerEmailTemplate::SubscriptionPaused => "subscription_paused",
            SellerEmailTemplate::SubscriptionPausedByCustomer => "subscription_paused_by_customer",
            SellerEmailTemplate::SubscriptionResumed => "subscription_resumed",
            SellerEmailTemplate::SubscriptionResumedByCustomer => {
                "subscription_resumed_by_customer"
            }
        };
        write!(f, "{}", template)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NotificationAudience {
    Customer,
    Seller,
}

/// A single email to hand to the deferred-delivery queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationCommand {
    Customer(CustomerEmailTemplate),
    Seller(SellerEmailTemplate),
}

impl NotificationCommand {
    pub fn audience(&self) -> NotificationAudience {
        match self {
            NotificationCommand::Customer(_) => NotificationAudience::Customer,
            NotificationCommand::Seller(_) => NotificationAudience::Seller,
        }
    }

    pub fn template(&self) -> String {
        match self {
            NotificationCommand::Customer(template) => template.to_string(),
            NotificationCommand::Seller(template) => template.to_string(),
        }
    }
}

/// Body of a `NotificationEmail` job row. The delivery worker resolves the
/// recipient address from the subscription id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NotificationEmailPayload {
    pub audience: NotificationAudience,
    pub template: String,
    pub subscription_id: Uuid,
}

/// Selects the emails for one completed transition. The buyer-facing notice
/// is unconditional; the seller-facing one is gated on the seller's
/// payment-email preference.
pub fn commands_for(
    action: PauseAction,
    initiator: PauseInitiator,
    seller_notifications_enabled: bool,
) -> Vec<NotificationCommand> {
    let (customer, seller) = match (action, initiator) {
        (PauseAction::Pause, PauseInitiator::Buyer) => (
            CustomerEmailTemplate::SubscriptionPaused,
            SellerEmailTemplate::SubscriptionPausedByCustomer,
        ),
        (PauseAction::Pause, PauseInitiator::Seller) => (
            CustomerEmailTemplate::SubscriptionPausedBySeller,
            SellerEmailTemplate::SubscriptionPaused,
        ),
        (PauseAction::Resume, PauseInitiator::Buyer) => (
            CustomerEmailTemplate::SubscriptionResumed,
            SellerEmailTemplate::SubscriptionResumedByCustomer,
        ),
        (PauseAction::Resume, PauseInitiator::Seller) => (
            CustomerEmailTemplate::SubscriptionResumedBySeller,
            SellerEmailTemplate::SubscriptionResumed,
        ),
    };

    let mut commands = vec![NotificationCommand::Customer(customer)];
    if seller_notifications_enabled {
        commands.push(NotificationCommand::Seller(seller));
    }
    commands
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buyer_pause_selects_customer_paused_and_seller_paused_by_customer() {
        let commands = commands_for(PauseAction::Pause, PauseInitiator::Buyer, true);

        assert_eq!(
            commands,
            vec![
                NotificationCommand::Customer(CustomerEmailTemplate::SubscriptionPaused),
                NotificationCommand::Seller(SellerEmailTemplate::SubscriptionPausedByCustomer),
            ]
        );
    }

    #[test]
    fn seller_pause_selects_customer_paused_by_seller_and_seller_paused() {
        let commands = commands_for(PauseAction::Pause, PauseInitiator::Seller, true);

        assert_eq!(
            commands,
            vec![
                NotificationCommand::Customer(CustomerEmailTemplate::SubscriptionPausedBySeller),
                NotificationCommand::Seller(SellerEmailTemplate::SubscriptionPaused),
            ]
        );
    }

    #[test]
    fn buyer_resume_selects_resumed_variants() {
        let commands = commands_for(PauseAction::Resume, PauseInitiator::Buyer, true);

        assert_eq!(
            commands,
            vec![
                NotificationCommand::Customer(CustomerEmailTemplate::SubscriptionResumed),
                NotificationCommand::Seller(SellerEmailTemplate::SubscriptionResumedByCustomer),
            ]
        );
    }

    #[test]
    fn seller_resume_selects_resumed_by_seller_for_the_buyer() {
        let commands = commands_for(PauseAction::Resume, PauseInitiator::Seller, true);

        assert_eq!(
            commands,
            vec![
                NotificationCommand::Customer(CustomerEmailTemplate::SubscriptionResumedBySeller),
                NotificationCommand::Seller(SellerEmailTemplate::SubscriptionResumed),
            ]
        );
    }

    #[test]
    fn seller_email_is_dropped_when_payment_emails_are_disabled() {
        for action in [PauseAction::Pause, PauseAction::Resume] {
            for initiator in [PauseInitiator::Buyer, PauseInitiator::Seller] {
                let commands = commands_for(action, initiator, false);

                assert_eq!(commands.len(), 1);
                assert_eq!(commands[0].audience(), NotificationAudience::Customer);
            }
        }
    }

    #[test]
    fn template_names_match_the_mailer_catalog() {
        assert_eq!(
            NotificationCommand::Customer(CustomerEmailTemplate::SubscriptionPausedBySeller)
                .template(),
            "subscription_paused_by_seller"
        );
        assert_eq!(
            NotificationCommand::Seller(SellerEmailTemplate::SubscriptionPausedByCustomer)
                .template(),
            "subscription_paused_by_customer"
        );
        assert_eq!(
            NotificationCommand::Seller(SellerEmailTemplate::SubscriptionResumed).template(),
            "subscription_resumed"
        );
    }
}
