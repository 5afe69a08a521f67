//! Submission Collaborator
//!
//! Async boundary for sending the contact form. The real backend is an
//! external collaborator; this simulates it with latency and an occasional
//! failure so the workflow around it stays honest.

use std::fmt;

use gloo_timers::future::TimeoutFuture;

use crate::storage::ContactDraft;

const SIMULATED_LATENCY_MS: u32 = 2000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitError {
    Network,
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::Network => write!(f, "network error"),
        }
    }
}

/// Send the message. Resolves after ~2s; fails roughly 10% of the time.
/// No automatic retry — a failure needs a new user-initiated submit.
pub async fn send_message(_draft: &ContactDraft) -> Result<(), SubmitError> {
    TimeoutFuture::new(SIMULATED_LATENCY_MS).await;
    if js_sys::Math::random() > 0.1 {
        Ok(())
    } else {
        Err(SubmitError::Network)
    }
}
