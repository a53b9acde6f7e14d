pub mod job;
pub mod product;
pub mod webhook;
