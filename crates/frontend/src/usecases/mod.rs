pub mod jobs;
pub mod upload;
