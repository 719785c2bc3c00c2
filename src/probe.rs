//! Sequential probing over candidate endpoints.
//!
//! Some registrar APIs expose the same resource under several paths
//! depending on account type and API revision. [`probe_candidates`] tries
//! each candidate in order and hands back the first one that works.

use crate::error::{BrandkitError, ProbeAttempt, Result};
use std::future::Future;

/// The winning candidate together with what it returned.
#[derive(Debug, Clone, PartialEq)]
pub struct Probed<T> {
    pub candidate: String,
    pub value: T,
}

/// Runs `attempt` against each candidate in order, one at a time.
///
/// Failures before the first success are logged and dropped. If every
/// candidate fails, the result is a single `EndpointNotFound` listing all
/// attempts in the order they were made.
pub async fn probe_candidates<T, F, Fut>(
    operation: &str,
    candidates: &[String],
    mut attempt: F,
) -> Result<Probed<T>>
where
    F: FnMut(String) -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let mut attempts = Vec::with_capacity(candidates.len());

    for candidate in candidates {
        log::debug!("Probing {} candidate: {}", operation, candidate);
        match attempt(candidate.clone()).await {
            Ok(value) => {
                return Ok(Probed {
                    candidate: candidate.clone(),
                    value,
                })
            }
            Err(e) => {
                log::info!("Tried {}, got: {}", candidate, e);
                attempts.push(ProbeAttempt {
                    candidate: candidate.clone(),
                    error: e.to_string(),
                });
            }
        }
    }

    Err(BrandkitError::EndpointNotFound {
        operation: operation.to_string(),
        attempts,
    })
}
