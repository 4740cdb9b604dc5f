use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use tracing::info;

use models::inquiry::{self, NewInquiry};
use service::inquiry::{InquiryFilter, InquiryService};
use service::{InquiryStore, Pagination};

use crate::errors::JsonApiError;
use crate::state::ServiceState;

#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct InquiryQuery {
    /// Records to skip (default 0)
    pub skip: Option<i64>,
    /// Maximum records to return (default 100)
    pub limit: Option<i64>,
    /// Only inquiries for this plot (exact match)
    pub plot_id: Option<String>,
}

impl InquiryQuery {
    /// `?plot_id=` with an empty value means "no filter".
    fn filter(&self) -> InquiryFilter {
        InquiryFilter { plot_id: self.plot_id.clone().filter(|p| !p.is_empty()) }
    }
}

type InquiryState<S> = ServiceState<InquiryService<S>>;

#[utoipa::path(
    post, path = "/inquiries", tag = "inquiries",
    request_body = crate::openapi::NewInquiryDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::InquiryDoc),
        (status = 422, description = "Validation Error"),
        (status = 500, description = "Failed to create inquiry")
    )
)]
pub async fn create<S: InquiryStore + 'static>(
    State(state): State<InquiryState<S>>,
    body: Result<Json<NewInquiry>, JsonRejection>,
) -> Result<(StatusCode, Json<inquiry::Model>), JsonApiError> {
    let Json(input) = body?;
    let created = state.records.create(input).await?;
    common::metrics::record_created(state.descriptor.name);
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get, path = "/inquiries", tag = "inquiries",
    params(InquiryQuery),
    responses(
        (status = 200, description = "Inquiries in id order", body = [crate::openapi::InquiryDoc]),
        (status = 422, description = "Validation Error"),
        (status = 500, description = "Failed to retrieve inquiries")
    )
)]
pub async fn list<S: InquiryStore + 'static>(
    State(state): State<InquiryState<S>>,
    query: Result<Query<InquiryQuery>, QueryRejection>,
) -> Result<Json<Vec<inquiry::Model>>, JsonApiError> {
    let Query(q) = query?;
    let page = Pagination::from_query(q.skip, q.limit)?;
    let filter = q.filter();
    let rows = state.records.list(filter, page).await?;
    info!(count = rows.len(), skip = page.skip, limit = page.limit, "list inquiries");
    Ok(Json(rows))
}
