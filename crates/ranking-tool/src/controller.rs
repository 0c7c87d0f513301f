// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Request controller
//!
//! Owns the single query state slot and drives it through
//! `Loading -> Success | Failure` for every query. Each query is tagged with a
//! sequence number; a query that settles after a newer one was started leaves
//! the state alone.

use std::sync::Arc;

use api_client::{CollectionSource, QueryInput};
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::state::{QuerySnapshot, QueryState};

/// How a query settled
#[derive(Debug, Clone, PartialEq)]
pub enum QueryOutcome {
    /// The query was still the latest one and its result is now the state
    Settled(QueryState),
    /// A newer query started first; the result was dropped
    Superseded {
        /// Sequence number of the dropped query
        sequence: u64,
    },
}

/// Controller for collection queries against a [`CollectionSource`]
#[derive(Debug)]
pub struct RequestController<S> {
    source: Arc<S>,
    state: Arc<watch::Sender<QuerySnapshot>>,
}

impl<S> Clone for RequestController<S> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
            state: Arc::clone(&self.state),
        }
    }
}

impl<S> RequestController<S>
where
    S: CollectionSource + 'static,
{
    /// Create an idle controller
    pub fn new(source: S) -> Self {
        Self::with_source(Arc::new(source))
    }

    /// Create an idle controller sharing an existing source
    pub fn with_source(source: Arc<S>) -> Self {
        let (state, _) = watch::channel(QuerySnapshot::default());
        Self {
            source,
            state: Arc::new(state),
        }
    }

    /// Start a query
    ///
    /// The previous result is cleared and the state set to `Loading` before
    /// this returns, ahead of any network I/O. The returned future performs the
    /// single request and applies its outcome when polled to completion.
    pub fn run_query(
        &self,
        input: QueryInput,
    ) -> impl Future<Output = QueryOutcome> + Send + 'static {
        let mut sequence = 0;
        self.state.send_modify(|snapshot| {
            snapshot.sequence += 1;
            snapshot.state = QueryState::Loading;
            sequence = snapshot.sequence;
        });

        info!(
            sequence,
            contract_address = %input.contract_address,
            chain = input.blockchain.as_str(),
            "query started"
        );

        let source = Arc::clone(&self.source);
        let state = Arc::clone(&self.state);

        async move {
            let next = match source.get_collection(&input).await {
                Ok(result) => QueryState::Success(result),
                Err(error) => {
                    warn!(
                        sequence,
                        source = source.name(),
                        %error,
                        "query failed"
                    );
                    QueryState::failed()
                }
            };

            let applied = state.send_if_modified(|snapshot| {
                if snapshot.sequence != sequence {
                    return false;
                }
                snapshot.state.clone_from(&next);
                true
            });

            if applied {
                debug!(sequence, "query settled");
                QueryOutcome::Settled(next)
            } else {
                debug!(sequence, "dropping result of superseded query");
                QueryOutcome::Superseded { sequence }
            }
        }
    }

    /// Current query state
    pub fn state(&self) -> QueryState {
        self.state.borrow().state.clone()
    }

    /// Current state with the sequence number of its query
    pub fn snapshot(&self) -> QuerySnapshot {
        self.state.borrow().clone()
    }

    /// Receiver notified on every state transition
    pub fn subscribe(&self) -> watch::Receiver<QuerySnapshot> {
        self.state.subscribe()
    }

    /// The source queries are sent to
    pub fn source(&self) -> &Arc<S> {
        &self.source
    }
}
