pub mod products;
pub mod webhooks;
