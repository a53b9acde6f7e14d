pub mod api_utils;
pub mod components;
pub mod feedback;
pub mod job_tracker;
pub mod session;
pub mod store;
pub mod sync;
pub mod transport;
