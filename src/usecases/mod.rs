pub mod subscription_pause;
