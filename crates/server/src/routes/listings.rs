use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use tracing::info;

use models::listing::{self, NewListing};
use service::listing::ListingService;
use service::{ListingStore, Pagination};

use crate::errors::JsonApiError;
use crate::state::ServiceState;

#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListingQuery {
    /// Records to skip (default 0)
    pub skip: Option<i64>,
    /// Maximum records to return (default 100)
    pub limit: Option<i64>,
}

type ListingState<S> = ServiceState<ListingService<S>>;

#[utoipa::path(
    post, path = "/listings", tag = "listings",
    request_body = crate::openapi::NewListingDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::ListingDoc),
        (status = 409, description = "Listing with this plot_id already exists"),
        (status = 422, description = "Validation Error"),
        (status = 500, description = "Failed to create listing")
    )
)]
pub async fn create<S: ListingStore + 'static>(
    State(state): State<ListingState<S>>,
    body: Result<Json<NewListing>, JsonRejection>,
) -> Result<(StatusCode, Json<listing::Model>), JsonApiError> {
    let Json(input) = body?;
    let created = state.records.create(input).await?;
    common::metrics::record_created(state.descriptor.name);
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get, path = "/listings", tag = "listings",
    params(ListingQuery),
    responses(
        (status = 200, description = "Listings in creation order", body = [crate::openapi::ListingDoc]),
        (status = 422, description = "Validation Error"),
        (status = 500, description = "Failed to retrieve listings")
    )
)]
pub async fn list<S: ListingStore + 'static>(
    State(state): State<ListingState<S>>,
    query: Result<Query<ListingQuery>, QueryRejection>,
) -> Result<Json<Vec<listing::Model>>, JsonApiError> {
    let Query(q) = query?;
    let page = Pagination::from_query(q.skip, q.limit)?;
    let rows = state.records.list(page).await?;
    info!(count = rows.len(), skip = page.skip, limit = page.limit, "list listings");
    Ok(Json(rows))
}
