use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
    time::Duration,
};

use super::*;
use crate::geo::GeoPoint;

#[derive(Default)]
struct FakeGeocoder {
    places: HashMap<String, Vec<Place>>,
    delays: HashMap<String, Duration>,
    fail: bool,
    queries: Mutex<Vec<(String, usize)>>,
}

impl FakeGeocoder {
    fn with_place(mut self, query: &str, lat: f64, lng: f64) -> Self {
        self.places.entry(query.to_string()).or_default().push(Place {
            display_name: format!("{query}, Somewhere"),
            position: GeoPoint::new(lat, lng),
        });
        self
    }

    fn with_delay(mut self, query: &str, delay: Duration) -> Self {
        self.delays.insert(query.to_string(), delay);
        self
    }
}

impl Geocoder for FakeGeocoder {
    fn search(&self, query: &str, limit: usize) -> Result<Vec<Place>, ServiceError> {
        self.queries
            .lock()
            .unwrap()
            .push((query.to_string(), limit));
        if let Some(delay) = self.delays.get(query) {
            std::thread::sleep(*delay);
        }
        if self.fail {
            return Err(ServiceError::HttpError("connection refused".to_string()));
        }
        let mut places = self.places.get(query).cloned().unwrap_or_default();
        places.truncate(limit);
        Ok(places)
    }
}

struct FakeRouter {
    code: &'static str,
}

impl Router for FakeRouter {
    fn route(&self, start: GeoPoint, end: GeoPoint) -> Result<Route, ServiceError> {
        if self.code != "Ok" {
            return Err(ServiceError::RouteFailed {
                code: self.code.to_string(),
                message: String::new(),
            });
        }
        Ok(Route {
            geometry: vec![start, end],
            distance_km: 12.5,
            duration_min: 18,
        })
    }
}

fn deps(geocoder: FakeGeocoder, code: &'static str) -> ServiceDependencies {
    ServiceDependencies {
        geocoder: Arc::new(geocoder),
        router: Arc::new(FakeRouter { code }),
        search_limit: 5,
    }
}

#[test]
fn plan_route_geocodes_first_hit_of_each_endpoint() {
    let geocoder = FakeGeocoder::default()
        .with_place("London", 51.5, -0.12)
        .with_place("London", 42.98, -81.24)
        .with_place("Paris", 48.85, 2.35);
    let planned = plan_route(&geocoder, &FakeRouter { code: "Ok" }, "London", " Paris ").unwrap();

    assert_eq!(planned.start.position, GeoPoint::new(51.5, -0.12));
    assert_eq!(planned.end.position, GeoPoint::new(48.85, 2.35));
    assert_eq!(planned.route.geometry.len(), 2);
    assert!(
        geocoder
            .queries
            .lock()
            .unwrap()
            .iter()
            .all(|(_, limit)| *limit == 1)
    );
}

#[test]
fn plan_route_reports_which_endpoint_is_missing() {
    let geocoder = FakeGeocoder::default().with_place("Paris", 48.85, 2.35);
    let router = FakeRouter { code: "Ok" };

    assert!(matches!(
        plan_route(&geocoder, &router, "Atlantis", "Paris"),
        Err(ServiceError::StartNotFound(_))
    ));
    assert!(matches!(
        plan_route(&geocoder, &router, "Paris", "Atlantis"),
        Err(ServiceError::EndNotFound(_))
    ));
    assert!(matches!(
        plan_route(&geocoder, &router, "", "Paris"),
        Err(ServiceError::MissingEndpoints)
    ));
}

#[test]
fn plan_route_surfaces_router_failure() {
    let geocoder = FakeGeocoder::default()
        .with_place("A", 0.0, 0.0)
        .with_place("B", 1.0, 1.0);
    assert!(matches!(
        plan_route(&geocoder, &FakeRouter { code: "NoRoute" }, "A", "B"),
        Err(ServiceError::RouteFailed { .. })
    ));
}

#[test]
fn search_with_no_hits_is_an_error() {
    let geocoder = FakeGeocoder::default();
    assert!(matches!(
        search(&geocoder, "nowhere", 5),
        Err(ServiceError::NoResults(_))
    ));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn dispatcher_delivers_results_in_completion_order() {
    let geocoder = FakeGeocoder::default()
        .with_place("slow", 1.0, 1.0)
        .with_place("fast", 2.0, 2.0)
        .with_delay("slow", Duration::from_millis(200));
    let mut dispatcher = ServiceDispatcher::new(&tokio::runtime::Handle::current(), deps(geocoder, "Ok"));

    let slow = dispatcher.request_search("slow");
    let fast = dispatcher.request_search("fast");
    assert_eq!(dispatcher.in_flight(), 2);

    let first = dispatcher.next_event().await.expect("first result");
    let second = dispatcher.next_event().await.expect("second result");
    assert_eq!(first.id(), fast);
    assert_eq!(second.id(), slow);
    assert_eq!(dispatcher.in_flight(), 0);
    assert!(dispatcher.next_event().await.is_none());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn dispatcher_reports_route_failures() {
    let geocoder = FakeGeocoder {
        fail: true,
        ..FakeGeocoder::default()
    };
    let mut dispatcher = ServiceDispatcher::new(&tokio::runtime::Handle::current(), deps(geocoder, "Ok"));
    dispatcher.request_route("A", "B");

    match dispatcher.next_event().await {
        Some(ServiceEvent::RouteCompleted { result, .. }) => {
            assert!(matches!(result, Err(ServiceError::HttpError(_))));
        }
        other => panic!("unexpected event: {other:?}"),
    }
}
