//! API module - HTTP client for the dashboard server

mod client;
mod model;
mod outcome;

pub use client::{ApiClient, ApiError};
pub use model::{OrderRequest, ServerReply};
pub use outcome::{submit_outcome, transfer_outcome, SubmitOutcome, TransferOutcome};
