//! One-shot snapshot store for the loaded country list.
//!
//! The dashboard session works like this: the collaborator emits the
//! full list at most once, every view subscribes for that single
//! emission, and dropping a subscription handle is the unsubscribe —
//! a detached handle can never observe the emission afterwards, so
//! nothing fires against a torn-down view.

use crate::{Country, OlympicsError, OlympicsSource};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::watch;

/// The immutable country list for the session.
pub type CountrySnapshot = Arc<[Country]>;

/// Snapshot plus the moment it arrived, for readiness reporting.
#[derive(Clone, Debug)]
pub struct Loaded {
    pub countries: CountrySnapshot,
    pub loaded_at: DateTime<Utc>,
}

/// Holds `None` until the session data arrives, then the snapshot
/// forever. Cheap to clone; all clones share the same channel.
#[derive(Clone, Debug)]
pub struct CountryStore {
    tx: Arc<watch::Sender<Option<Loaded>>>,
}

impl CountryStore {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(None);
        Self { tx: Arc::new(tx) }
    }

    /// Install the session snapshot. The source is one-shot, so a
    /// second publish is ignored and the existing snapshot stays.
    /// Returns whether this call installed the snapshot.
    pub fn publish(&self, countries: Vec<Country>) -> bool {
        let mut installed = false;
        self.tx.send_if_modified(|slot| {
            if slot.is_some() {
                return false;
            }
            *slot = Some(Loaded {
                countries: countries.into(),
                loaded_at: Utc::now(),
            });
            installed = true;
            true
        });
        installed
    }

    /// Current snapshot, if the session data has arrived.
    pub fn current(&self) -> Option<Loaded> {
        self.tx.borrow().clone()
    }

    /// Subscribe for the one-shot emission. Dropping the returned
    /// handle releases the subscription.
    pub fn subscribe(&self) -> CountryFeed {
        CountryFeed {
            rx: self.tx.subscribe(),
        }
    }

    /// Fetch through `source` and publish on success. On failure the
    /// store stays empty ("not yet loaded") and the error is returned
    /// for the caller to log.
    pub async fn load_from(&self, source: &dyn OlympicsSource) -> Result<(), OlympicsError> {
        let countries = source.fetch_countries().await?;
        tracing::info!(countries = countries.len(), "country snapshot loaded");
        if !self.publish(countries) {
            tracing::debug!("snapshot already installed; keeping the existing one");
        }
        Ok(())
    }
}

impl Default for CountryStore {
    fn default() -> Self {
        Self::new()
    }
}

/// A per-view subscription to the snapshot emission.
#[derive(Debug)]
pub struct CountryFeed {
    rx: watch::Receiver<Option<Loaded>>,
}

impl CountryFeed {
    /// Wait for the session data. Returns `None` only if the store is
    /// torn down before anything was published.
    pub async fn recv(&mut self) -> Option<Loaded> {
        match self.rx.wait_for(|v| v.is_some()).await {
            Ok(guard) => guard.clone(),
            Err(_) => None,
        }
    }

    /// Whatever the store holds right now, without waiting.
    pub fn current(&self) -> Option<Loaded> {
        self.rx.borrow().clone()
    }
}
