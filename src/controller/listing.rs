//! The listing query controller.
//!
//! Owns one page's [`FilterState`], mirrors it into the page's location and
//! drives the fetch lifecycle. Every fetch bumps a generation counter stored
//! next to the render state inside a `watch` channel; a completion is applied
//! only if its generation is still current, and the check and the write happen
//! under the channel's lock. The previous in-flight task is also aborted, so
//! a superseded response can never overwrite a newer one.
//!
//! Fetches run on spawned tokio tasks, so the mutating methods must be called
//! from within a runtime.

use super::navigation::{properties_location, without_filter_keys, Navigator};
use super::render::{fetch_listings, RenderState};
use crate::api::{ListingQuery, ListingSource};
use crate::filters::{FilterField, FilterState};
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Render state tagged with the fetch generation that produced it
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderSnapshot {
    pub generation: u64,
    pub state: RenderState,
}

pub struct ListingQueryController<N: Navigator> {
    source: Arc<dyn ListingSource>,
    navigator: N,
    filters: FilterState,
    page_size: u32,
    render: Arc<watch::Sender<RenderSnapshot>>,
    in_flight: Option<JoinHandle<()>>,
}

impl<N: Navigator> ListingQueryController<N> {
    pub fn new(source: Arc<dyn ListingSource>, navigator: N, page_size: u32) -> Self {
        let (render, _) = watch::channel(RenderSnapshot::default());
        Self {
            source,
            navigator,
            filters: FilterState::default(),
            page_size,
            render: Arc::new(render),
            in_flight: None,
        }
    }

    /// Hydrates filters from the navigator's current location and starts the
    /// first fetch. The location is only rewritten when it carries a filter
    /// value that hydration dropped, so it never shows a constraint the
    /// request ignores.
    pub fn mount(&mut self) -> &FilterState {
        let location = self.navigator.current();
        let (filters, rejected) = FilterState::hydrate_with_rejects(&location);
        if !rejected.is_empty() {
            warn!("Dropping unsupported filter values for {:?} from {}", rejected, location);
            self.navigator.replace(without_filter_keys(&location, &rejected));
        }
        self.filters = filters;
        debug!("Mounted listing page with filters {:?}", self.filters);
        self.start_fetch();
        &self.filters
    }

    /// Replaces one filter, rewrites the location in place and re-fetches
    pub fn set_filter(&mut self, field: FilterField, value: &str) -> &FilterState {
        self.filters = self.filters.with(field, value);
        self.navigator.replace(properties_location(&self.filters));
        self.start_fetch();
        &self.filters
    }

    /// Clears every filter, drops the query string and re-fetches
    pub fn reset_filters(&mut self) -> &FilterState {
        self.filters = FilterState::default();
        self.navigator.replace(properties_location(&self.filters));
        self.start_fetch();
        &self.filters
    }

    /// Re-issues the fetch for the current filters, unchanged
    pub fn retry(&mut self) -> u64 {
        self.start_fetch()
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn query(&self) -> ListingQuery {
        ListingQuery::new(self.filters.clone(), self.page_size)
    }

    pub fn render_state(&self) -> RenderState {
        self.render.borrow().state.clone()
    }

    pub fn generation(&self) -> u64 {
        self.render.borrow().generation
    }

    pub fn subscribe(&self) -> watch::Receiver<RenderSnapshot> {
        self.render.subscribe()
    }

    /// Waits until the latest fetch has resolved and returns its state.
    /// Returns immediately when nothing is loading.
    pub async fn settled(&self) -> RenderState {
        let mut rx = self.render.subscribe();
        let result = rx
            .wait_for(|snapshot| !snapshot.state.is_loading())
            .await
            .map(|snapshot| snapshot.state.clone());
        match result {
            Ok(state) => state,
            Err(_) => self.render_state(),
        }
    }

    fn start_fetch(&mut self) -> u64 {
        if let Some(previous) = self.in_flight.take() {
            previous.abort();
        }

        let mut generation = 0;
        self.render.send_modify(|snapshot| {
            snapshot.generation += 1;
            snapshot.state = RenderState::Loading;
            generation = snapshot.generation;
        });

        let source = Arc::clone(&self.source);
        let render = Arc::clone(&self.render);
        let query = self.query();
        debug!("Starting listing fetch #{} for {:?}", generation, query.filters);

        self.in_flight = Some(tokio::spawn(async move {
            let state = fetch_listings(source.as_ref(), &query).await;
            apply_if_current(&render, generation, state);
        }));

        generation
    }
}

/// Stores a fetch result only if `generation` is still the latest one.
/// The check and the write happen under the channel lock.
fn apply_if_current(
    render: &watch::Sender<RenderSnapshot>,
    generation: u64,
    state: RenderState,
) -> bool {
    let applied = render.send_if_modified(|snapshot| {
        if snapshot.generation == generation {
            snapshot.state = state;
            true
        } else {
            false
        }
    });
    if !applied {
        debug!("Discarding stale listing response #{}", generation);
    }
    applied
}

impl<N: Navigator> Drop for ListingQueryController<N> {
    fn drop(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            handle.abort();
        }
    }
}
