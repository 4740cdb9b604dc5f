use axum::Json;
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse {
    /// Always `healthy` while the process serves requests
    pub status: String,
    pub service: String,
    pub version: String,
}

#[derive(ToSchema)]
pub struct NewListingDoc {
    pub plot_id: String,
    pub title: String,
    pub location: String,
    /// `Sale` or `Rent`
    pub category: String,
    /// Strictly positive
    pub price: f64,
    /// Defaults to true
    pub available: Option<bool>,
}

#[derive(ToSchema)]
pub struct ListingDoc {
    pub plot_id: String,
    pub title: String,
    pub location: String,
    pub category: String,
    pub price: f64,
    pub available: bool,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(ToSchema)]
pub struct NewInquiryDoc {
    pub plot_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

#[derive(ToSchema)]
pub struct InquiryDoc {
    pub id: i32,
    pub plot_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub created_at: String,
}

#[derive(OpenApi)]
#[openapi(
    info(title = "Listing Service"),
    paths(
        crate::routes::health::health,
        crate::routes::health::root,
        crate::routes::listings::create,
        crate::routes::listings::list,
    ),
    components(schemas(HealthResponse, NewListingDoc, ListingDoc)),
    tags((name = "health"), (name = "listings"))
)]
pub struct ListingApiDoc;

#[derive(OpenApi)]
#[openapi(
    info(title = "Inquiry Service"),
    paths(
        crate::routes::health::health,
        crate::routes::health::root,
        crate::routes::inquiries::create,
        crate::routes::inquiries::list,
    ),
    components(schemas(HealthResponse, NewInquiryDoc, InquiryDoc)),
    tags((name = "health"), (name = "inquiries"))
)]
pub struct InquiryApiDoc;

pub async fn listing_openapi() -> Json<utoipa::openapi::OpenApi> { Json(ListingApiDoc::openapi()) }

pub async fn inquiry_openapi() -> Json<utoipa::openapi::OpenApi> { Json(InquiryApiDoc::openapi()) }
