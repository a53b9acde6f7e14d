mod list;

pub use list::WebhooksPage;
