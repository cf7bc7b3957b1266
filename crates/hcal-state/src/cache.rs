//! # Holiday Fetch & Cache
//!
//! Memoizes holiday lists per [`ScopeKey`]. The first request for a scope
//! goes to the [`HolidaySource`]; every later request is served from memory.
//! Entries are never evicted: a year's holiday schedule does not change
//! while the process runs.
//!
//! ## Failure policy
//!
//! Only non-empty results are stored. A transport/decode failure and an
//! empty upstream list both leave the scope uncached, so the next request
//! goes back to the network.
//!
//! ## In-flight de-duplication
//!
//! Each scope being fetched has an async gate. Concurrent callers for the
//! same scope queue on the gate; the first one fetches, the rest find the
//! stored entry when they get through. Locks on the entry map are
//! `parking_lot` and are never held across `.await`.

use std::collections::HashMap;
use std::sync::Arc;

use hcal_client::HolidaySource;
use hcal_core::{HolidayRecord, ScopeKey};
use parking_lot::{Mutex, RwLock};

use crate::error::LookupError;

/// Shared, immutable holiday list for one scope.
pub type Holidays = Arc<[HolidayRecord]>;

type Gate = Arc<tokio::sync::Mutex<()>>;

/// Process-lifetime holiday cache over an injected source.
#[derive(Debug)]
pub struct HolidayCache<S> {
    source: S,
    entries: RwLock<HashMap<ScopeKey, Holidays>>,
    in_flight: Mutex<HashMap<ScopeKey, Gate>>,
}

impl<S: HolidaySource> HolidayCache<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            entries: RwLock::new(HashMap::new()),
            in_flight: Mutex::new(HashMap::new()),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Cached list for `scope`, without touching the network.
    pub fn peek(&self, scope: &ScopeKey) -> Option<Holidays> {
        self.entries.read().get(scope).cloned()
    }

    pub fn contains(&self, scope: &ScopeKey) -> bool {
        self.entries.read().contains_key(scope)
    }

    /// Number of cached scopes.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Cached scopes in key order.
    pub fn scopes(&self) -> Vec<ScopeKey> {
        let mut scopes: Vec<ScopeKey> = self.entries.read().keys().cloned().collect();
        scopes.sort();
        scopes
    }

    /// Holidays for `scope`, fetching on a miss.
    pub async fn get_holidays(&self, scope: &ScopeKey) -> Result<Holidays, LookupError> {
        if let Some(hit) = self.peek(scope) {
            tracing::debug!(%scope, "holiday cache hit");
            return Ok(hit);
        }

        let gate = self.gate(scope);
        let outcome = {
            let _turn = gate.lock().await;
            match self.peek(scope) {
                Some(hit) => {
                    tracing::debug!(%scope, "holiday cache filled by concurrent fetch");
                    Ok(hit)
                }
                None => self.fetch_and_store(scope).await,
            }
        };
        self.release_gate(scope, &gate);
        outcome
    }

    async fn fetch_and_store(&self, scope: &ScopeKey) -> Result<Holidays, LookupError> {
        tracing::debug!(%scope, "holiday cache miss; fetching");

        let records = match self.source.fetch_holidays(scope).await {
            Ok(records) => records,
            Err(source) => {
                tracing::error!(%scope, "holiday fetch failed: {source}");
                return Err(LookupError::Fetch {
                    scope: scope.clone(),
                    source,
                });
            }
        };

        if records.is_empty() {
            tracing::warn!(%scope, "holiday service returned no data");
            return Err(LookupError::Empty {
                scope: scope.clone(),
            });
        }

        let holidays: Holidays = records.into();
        self.entries.write().insert(scope.clone(), Arc::clone(&holidays));
        tracing::info!(%scope, count = holidays.len(), "holidays cached");
        Ok(holidays)
    }

    fn gate(&self, scope: &ScopeKey) -> Gate {
        Arc::clone(self.in_flight.lock().entry(scope.clone()).or_default())
    }

    /// Drop the gate once nobody else holds it. Clones are only made under
    /// the `in_flight` lock, so the count cannot grow while we hold it.
    fn release_gate(&self, scope: &ScopeKey, gate: &Gate) {
        let mut in_flight = self.in_flight.lock();
        let idle = in_flight
            .get(scope)
            .is_some_and(|g| Arc::ptr_eq(g, gate) && Arc::strong_count(gate) == 2);
        if idle {
            in_flight.remove(scope);
        }
    }
}
