use tokio::runtime::Handle;
use tokio::sync::mpsc;

use super::{
    dependencies::ServiceDependencies,
    planner,
    types::{PlannedRoute, Place, ServiceError},
};

/// Identifier of a submitted request, for matching logs and results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestId(pub u64);

/// Completed collaborator call.
#[derive(Debug)]
pub enum ServiceEvent {
    SearchCompleted {
        id: RequestId,
        query: String,
        result: Result<Vec<Place>, ServiceError>,
    },
    RouteCompleted {
        id: RequestId,
        result: Result<PlannedRoute, ServiceError>,
    },
}

impl ServiceEvent {
    pub fn id(&self) -> RequestId {
        match self {
            ServiceEvent::SearchCompleted { id, .. } | ServiceEvent::RouteCompleted { id, .. } => {
                *id
            }
        }
    }
}

/// Runs geocoding and routing calls off the caller's thread.
///
/// Every request runs on the blocking pool; results arrive on a channel in completion
/// order, not submission order. There is no timeout and no cancellation.
pub struct ServiceDispatcher {
    runtime: Handle,
    dependencies: ServiceDependencies,
    event_tx: mpsc::UnboundedSender<ServiceEvent>,
    event_rx: mpsc::UnboundedReceiver<ServiceEvent>,
    next_id: u64,
    in_flight: usize,
}

impl ServiceDispatcher {
    /// Create a dispatcher that spawns work on `runtime_handle`.
    pub fn new(runtime_handle: &Handle, dependencies: ServiceDependencies) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        Self {
            runtime: runtime_handle.clone(),
            dependencies,
            event_tx,
            event_rx,
            next_id: 0,
            in_flight: 0,
        }
    }

    /// Number of requests submitted but not yet received.
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Starts a place search. Non-blocking.
    pub fn request_search(&mut self, query: &str) -> RequestId {
        let id = self.allocate_id();
        let query = query.to_string();
        let geocoder = self.dependencies.geocoder.clone();
        let limit = self.dependencies.search_limit;
        log::debug!("Dispatching search {:?}: '{}'", id, query);

        let failed_query = query.clone();
        self.spawn(
            id,
            move || {
                let result = planner::search(geocoder.as_ref(), &query, limit);
                ServiceEvent::SearchCompleted { id, query, result }
            },
            move |error| ServiceEvent::SearchCompleted {
                id,
                query: failed_query,
                result: Err(error),
            },
        );
        id
    }

    /// Starts a route calculation between two free-text locations. Non-blocking.
    pub fn request_route(&mut self, start: &str, end: &str) -> RequestId {
        let id = self.allocate_id();
        let (start, end) = (start.to_string(), end.to_string());
        let geocoder = self.dependencies.geocoder.clone();
        let router = self.dependencies.router.clone();
        log::debug!("Dispatching route {:?}: '{}' -> '{}'", id, start, end);

        self.spawn(
            id,
            move || {
                let result = planner::plan_route(geocoder.as_ref(), router.as_ref(), &start, &end);
                ServiceEvent::RouteCompleted { id, result }
            },
            move |error| ServiceEvent::RouteCompleted {
                id,
                result: Err(error),
            },
        );
        id
    }

    /// Returns a finished result without waiting.
    pub fn try_next(&mut self) -> Option<ServiceEvent> {
        let event = self.event_rx.try_recv().ok()?;
        self.in_flight = self.in_flight.saturating_sub(1);
        Some(event)
    }

    /// Waits for the next finished result; `None` when nothing is in flight.
    pub async fn next_event(&mut self) -> Option<ServiceEvent> {
        if self.in_flight == 0 {
            return None;
        }
        let event = self.event_rx.recv().await?;
        self.in_flight -= 1;
        Some(event)
    }

    fn allocate_id(&mut self) -> RequestId {
        self.next_id += 1;
        self.in_flight += 1;
        RequestId(self.next_id)
    }

    fn spawn<F, E>(&self, id: RequestId, job: F, on_panic: E)
    where
        F: FnOnce() -> ServiceEvent + Send + 'static,
        E: FnOnce(ServiceError) -> ServiceEvent + Send + 'static,
    {
        let event_tx = self.event_tx.clone();
        let blocking = self.runtime.spawn_blocking(job);
        self.runtime.spawn(async move {
            let event = match blocking.await {
                Ok(event) => event,
                Err(join_error) => {
                    log::error!("Service request {:?} panicked: {}", id, join_error);
                    on_panic(ServiceError::WorkerError(join_error.to_string()))
                }
            };
            if event_tx.send(event).is_err() {
                log::warn!("Dropping result of request {:?}: dispatcher gone", id);
            }
        });
    }
}
