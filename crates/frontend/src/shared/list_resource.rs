//! Remote list bound to signals.
//!
//! Filters may change faster than responses arrive, so every load takes a
//! ticket from a [`RequestSequence`] and only the newest ticket may publish.
//! A failed load keeps the last good items and reports through a toast.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::http::ApiError;
use crate::shared::toast::{use_toast, ToastService};

#[derive(Debug, Clone, Default)]
pub struct RequestSequence {
    latest: Arc<AtomicU64>,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a request and returns its ticket
    pub fn begin(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket
    }
}

pub struct ListResource<T: Send + Sync + 'static> {
    pub items: RwSignal<Vec<T>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    sequence: StoredValue<RequestSequence>,
    toast: ToastService,
}

impl<T: Send + Sync + 'static> Clone for ListResource<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for ListResource<T> {}

impl<T: Clone + Send + Sync + 'static> ListResource<T> {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
            sequence: StoredValue::new(RequestSequence::new()),
            toast: use_toast(),
        }
    }

    pub fn load<F, Fut>(&self, fetch: F)
    where
        F: FnOnce() -> Fut + 'static,
        Fut: Future<Output = Result<Vec<T>, ApiError>> + 'static,
    {
        let ticket = self.sequence.with_value(|s| s.begin());
        let this = *self;
        this.loading.set(true);
        spawn_local(async move {
            let result = fetch().await;
            if !this.sequence.with_value(|s| s.is_current(ticket)) {
                log::debug!("Discarding stale list response #{}", ticket);
                return;
            }
            match result {
                Ok(items) => {
                    this.items.set(items);
                    this.error.set(None);
                }
                Err(e) => {
                    let message = e.to_string();
                    this.toast.error(message.clone());
                    this.error.set(Some(message));
                }
            }
            this.loading.set(false);
        });
    }

    pub fn len(&self) -> usize {
        self.items.with(Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.items.with(Vec::is_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_latest_ticket_is_current() {
        let seq = RequestSequence::new();
        let first = seq.begin();
        let second = seq.begin();
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
    }

    #[test]
    fn test_clones_share_the_counter() {
        let seq = RequestSequence::new();
        let other = seq.clone();
        let ticket = seq.begin();
        assert!(other.is_current(ticket));
        other.begin();
        assert!(!seq.is_current(ticket));
    }
}
