pub mod jobs;
pub mod sellers;
pub mod subscriptions;
