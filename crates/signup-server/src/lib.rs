// signup-server - Submission sink for partner registrations
// Stores validated registrations and serves them back to the list page

pub mod config;
pub mod handlers;
pub mod response;

use axum::routing::get;
use axum::Router;
use signup_store::PartnerRepository;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

pub use config::Config;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub repository: Arc<dyn PartnerRepository>,
    /// Entries added per "Load more" on the list page
    pub page_size: usize,
}

impl AppState {
    pub fn new(repository: Arc<dyn PartnerRepository>, page_size: usize) -> Self {
        Self {
            repository,
            page_size: page_size.max(1),
        }
    }
}

/// Router of the sink API
pub fn app(state: AppState) -> Router {
    Router::new()
        .route(
            "/partners",
            get(handlers::list_partners).post(handlers::create_partner),
        )
        .route("/partners/listing", get(handlers::listing))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}
