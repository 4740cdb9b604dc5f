use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request, State},
    middleware::{self, Next},
    response::Response,
    routing::get,
    Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::ServiceDescriptor;
use service::inquiry::InquiryService;
use service::listing::ListingService;
use service::{InquiryStore, ListingStore};

use crate::descriptor::{INQUIRY_SERVICE, LISTING_SERVICE};
use crate::openapi;
use crate::state::ServiceState;

pub mod health;
pub mod inquiries;
pub mod listings;

/// Record one request into the Prometheus counters, labelled by the matched route template.
pub async fn track_metrics(
    State(descriptor): State<&'static ServiceDescriptor>,
    req: Request,
    next: Next,
) -> Response {
    let route = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_else(|| req.uri().path().to_owned());
    let started = Instant::now();
    let res = next.run(req).await;
    common::metrics::observe_request(descriptor.name, &route, res.status().as_u16(), started.elapsed());
    res
}

/// Listing service router: `/`, `/health`, `/listings`, `/openapi.json`, `/metrics`.
pub fn listing_router<S: ListingStore + 'static>(svc: Arc<ListingService<S>>) -> Router {
    let routes = Router::new()
        .route("/", get(health::root))
        .route("/health", get(health::health))
        .route("/listings", get(listings::list::<S>).post(listings::create::<S>))
        .route("/openapi.json", get(openapi::listing_openapi))
        .route("/metrics", get(health::metrics));
    finish(routes, ServiceState::new(svc, &LISTING_SERVICE))
}

/// Inquiry service router: `/`, `/health`, `/inquiries`, `/openapi.json`, `/metrics`.
pub fn inquiry_router<S: InquiryStore + 'static>(svc: Arc<InquiryService<S>>) -> Router {
    let routes = Router::new()
        .route("/", get(health::root))
        .route("/health", get(health::health))
        .route("/inquiries", get(inquiries::list::<S>).post(inquiries::create::<S>))
        .route("/openapi.json", get(openapi::inquiry_openapi))
        .route("/metrics", get(health::metrics));
    finish(routes, ServiceState::new(svc, &INQUIRY_SERVICE))
}

fn finish<T: Send + Sync + 'static>(routes: Router<ServiceState<T>>, state: ServiceState<T>) -> Router {
    let descriptor = state.descriptor;
    routes
        .route_layer(middleware::from_fn_with_state(descriptor, track_metrics))
        .with_state(state)
        .layer(CorsLayer::very_permissive())
        .layer(
            TraceLayer::new_for_http()
                // one INFO span per request, headers left out
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                // status and latency on the way out
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
