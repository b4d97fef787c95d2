pub mod notification_queue;
pub mod sellers;
pub mod subscriptions;
