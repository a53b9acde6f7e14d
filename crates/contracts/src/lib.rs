//! Shared data model for the import console client.
//!
//! Everything here is platform-neutral: resource aggregates, the drafts
//! sent on create, the list/error envelopes of the REST contract, and the
//! error taxonomy shared by the sync engine and the view layer.

pub mod domain;
pub mod envelope;
pub mod error;
pub mod resource;
