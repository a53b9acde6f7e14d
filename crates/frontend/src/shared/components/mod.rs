pub mod feedback_banner;

pub use feedback_banner::FeedbackBanner;
