//! Race-based CEP resolution.
//!
//! Two geocoding providers are queried concurrently and the first usable
//! result wins. A single provider failing must not end the race while the
//! other is still in flight; only when every provider has failed, or the
//! deadline has passed with no outcome at all, does resolution fail.

use crate::models::Location;
use crate::services::{LocationProvider, ProviderOutcome};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Wall-clock deadline for a whole resolution, anchored at the start of
/// `resolve` and never extended.
pub const RESOLVE_TIMEOUT: Duration = Duration::from_secs(10);

/// Terminal failure states of a resolution.
///
/// Callers collapse both into "not found"; they are kept distinct here so
/// logs can tell an unresponsive pair of providers from an unsuccessful one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// Every provider reported a failure before the deadline.
    AllFailed,
    /// No provider produced any outcome within the deadline.
    TimedOut,
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveError::AllFailed => write!(f, "all providers failed"),
            ResolveError::TimedOut => write!(f, "timed out waiting for providers"),
        }
    }
}

/// Resolves a CEP to a location by racing independent providers.
pub struct LocationResolver {
    providers: Vec<Arc<dyn LocationProvider>>,
    timeout: Duration,
}

impl LocationResolver {
    /// Build a resolver over the given providers with the default deadline.
    pub fn new(providers: Vec<Arc<dyn LocationProvider>>) -> Self {
        Self::with_timeout(providers, RESOLVE_TIMEOUT)
    }

    /// Build a resolver with an explicit deadline.
    pub fn with_timeout(providers: Vec<Arc<dyn LocationProvider>>, timeout: Duration) -> Self {
        Self { providers, timeout }
    }

    /// Resolve a CEP to a location, racing all providers concurrently.
    ///
    /// Each provider call runs in its own task so a slow provider cannot
    /// delay a fast one. The first success wins and is returned
    /// immediately; the losing call keeps running to completion in the
    /// background and its outcome is discarded (the channel is buffered, so
    /// it never blocks and never outlives its own send).
    ///
    /// # Arguments
    ///
    /// * `cep` - An already-validated 8-digit postal code.
    pub async fn resolve(&self, cep: &str) -> Result<Location, ResolveError> {
        let (tx, mut rx) =
            mpsc::channel::<(&'static str, ProviderOutcome)>(self.providers.len().max(1));

        for provider in &self.providers {
            let provider = Arc::clone(provider);
            let tx = tx.clone();
            let cep = cep.to_string();
            tokio::spawn(async move {
                let outcome = provider.fetch_location(&cep).await;
                // The receiver is gone once another provider has won; a
                // failed send just means this call lost the race.
                let _ = tx.send((provider.name(), outcome)).await;
            });
        }
        // Only the spawned tasks hold senders now, so the channel closes
        // exactly when the last provider has reported.
        drop(tx);

        let deadline = tokio::time::sleep(self.timeout);
        tokio::pin!(deadline);

        loop {
            tokio::select! {
                received = rx.recv() => match received {
                    Some((provider, Ok(location))) => {
                        tracing::debug!(
                            "Provider {} won the race for CEP {} with city {}",
                            provider,
                            location.cep,
                            location.city
                        );
                        return Ok(location);
                    }
                    Some((provider, Err(reason))) => {
                        // One provider down is not a resolution failure:
                        // keep waiting for the others.
                        tracing::warn!("Provider {} failed: {}", provider, reason);
                    }
                    None => return Err(ResolveError::AllFailed),
                },
                _ = &mut deadline => return Err(ResolveError::TimedOut),
            }
        }
    }
}
