pub mod enums;
pub mod notification_emails;
pub mod subscription_pause;
pub mod subscriptions;
