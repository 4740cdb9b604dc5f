use std::sync::Arc;

use reqwest::StatusCode;
use serde_json::{json, Value};

use server::startup::ServiceKind;
use service::inquiry::InquiryService;
use service::store::mock::MemoryInquiryStore;

mod helpers;
use helpers::{spawn_router, spawn_service};

fn inquiry(plot_id: &str, name: &str) -> Value {
    json!({
        "plot_id": plot_id,
        "name": name,
        "email": "john@example.com",
        "phone": "+94771234567",
        "message": "I'm interested in this property. Please contact me."
    })
}

#[tokio::test]
async fn health_and_root_describe_the_service() -> anyhow::Result<()> {
    let app = spawn_service(ServiceKind::Inquiry).await?;
    let body = app.get_json("/health").await?;
    assert_eq!(body, json!({"status": "healthy", "service": "inquiry-service", "version": env!("CARGO_PKG_VERSION")}));

    let root = app.get_json("/").await?;
    assert_eq!(root["service"], "Inquiry Service");
    assert_eq!(root["endpoints"]["create_inquiry"], "POST /inquiries");
    assert_eq!(root["endpoints"]["get_inquiries"], "GET /inquiries");
    Ok(())
}

#[tokio::test]
async fn two_inquiries_for_one_plot_get_increasing_ids() -> anyhow::Result<()> {
    let app = spawn_service(ServiceKind::Inquiry).await?;

    let res = app.post_json("/inquiries", &inquiry("P1", "John Doe")).await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    let first: Value = res.json().await?;
    let res = app.post_json("/inquiries", &inquiry("P1", "John Doe")).await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    let second: Value = res.json().await?;

    assert!(second["id"].as_i64().unwrap() > first["id"].as_i64().unwrap());
    assert_eq!(first["plot_id"], "P1");
    assert_eq!(first["email"], "john@example.com");
    assert!(first["created_at"].is_string());

    let listed = app.get_json("/inquiries?plot_id=P1").await?;
    assert_eq!(listed.as_array().unwrap().len(), 2);
    Ok(())
}

#[tokio::test]
async fn plot_filter_is_exact_and_empty_means_all() -> anyhow::Result<()> {
    let app = spawn_service(ServiceKind::Inquiry).await?;
    for (plot, name) in [("P1", "Ann"), ("P2", "Bob"), ("P1", "Cat"), ("p1", "Dan")] {
        assert_eq!(app.post_json("/inquiries", &inquiry(plot, name)).await?.status(), StatusCode::CREATED);
    }

    let p1 = app.get_json("/inquiries?plot_id=P1").await?;
    let names: Vec<_> = p1.as_array().unwrap().iter().map(|i| i["name"].as_str().unwrap().to_owned()).collect();
    assert_eq!(names, ["Ann", "Cat"]);

    assert_eq!(app.get_json("/inquiries?plot_id=NOPE").await?, json!([]));
    assert_eq!(app.get_json("/inquiries").await?.as_array().unwrap().len(), 4);
    assert_eq!(app.get_json("/inquiries?plot_id=").await?.as_array().unwrap().len(), 4);

    let page = app.get_json("/inquiries?skip=1&limit=2").await?;
    let names: Vec<_> = page.as_array().unwrap().iter().map(|i| i["name"].as_str().unwrap().to_owned()).collect();
    assert_eq!(names, ["Bob", "Cat"]);
    assert_eq!(app.get("/inquiries?skip=-1").await?.status(), StatusCode::UNPROCESSABLE_ENTITY);

    // identical reads with no writes in between
    let path = "/inquiries?plot_id=P1&skip=0&limit=1";
    let first = app.get_json(path).await?;
    assert_eq!(first.as_array().unwrap().len(), 1);
    assert_eq!(first, app.get_json(path).await?);
    assert_eq!(app.get_json("/inquiries?skip=1&limit=3").await?, app.get_json("/inquiries?skip=1&limit=3").await?);
    Ok(())
}

#[tokio::test]
async fn long_plot_id_is_accepted() -> anyhow::Result<()> {
    let app = spawn_service(ServiceKind::Inquiry).await?;
    let plot_id = "Y".repeat(200);
    let res = app.post_json("/inquiries", &inquiry(&plot_id, "Ann")).await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    let listed = app.get_json(&format!("/inquiries?plot_id={plot_id}")).await?;
    assert_eq!(listed.as_array().unwrap().len(), 1);
    Ok(())
}

#[tokio::test]
async fn inquiry_for_unlisted_plot_is_accepted() -> anyhow::Result<()> {
    let app = spawn_service(ServiceKind::Inquiry).await?;
    let res = app.post_json("/inquiries", &inquiry("NEVER-LISTED", "Eve")).await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    Ok(())
}

#[tokio::test]
async fn empty_or_missing_fields_are_rejected() -> anyhow::Result<()> {
    let app = spawn_service(ServiceKind::Inquiry).await?;

    let mut empty = inquiry("P1", "Ann");
    empty["phone"] = json!("");
    let res = app.post_json("/inquiries", &empty).await?;
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = res.json().await?;
    assert_eq!(body["detail"][0]["field"], "phone");

    let missing = json!({"plot_id": "P1", "name": "Ann", "email": "a@b.c", "phone": "1"});
    assert_eq!(app.post_json("/inquiries", &missing).await?.status(), StatusCode::UNPROCESSABLE_ENTITY);

    assert_eq!(app.get_json("/inquiries").await?, json!([]));
    Ok(())
}

#[tokio::test]
async fn storage_failures_are_generic_500s() -> anyhow::Result<()> {
    let svc = InquiryService::new(Arc::new(MemoryInquiryStore::failing_writes()));
    let app = spawn_router(server::inquiry_router(Arc::new(svc))).await?;
    let res = app.post_json("/inquiries", &inquiry("P1", "Ann")).await?;
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = res.json().await?;
    assert_eq!(body, json!({"error": "Internal Server Error", "detail": "Failed to create inquiry"}));

    let svc = InquiryService::new(Arc::new(MemoryInquiryStore::failing_reads()));
    let app = spawn_router(server::inquiry_router(Arc::new(svc))).await?;
    let res = app.get("/inquiries?plot_id=P1").await?;
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = res.json().await?;
    assert_eq!(body["detail"], "Failed to retrieve inquiries");
    Ok(())
}

#[tokio::test]
async fn openapi_lists_inquiry_routes() -> anyhow::Result<()> {
    let app = spawn_service(ServiceKind::Inquiry).await?;
    let doc = app.get_json("/openapi.json").await?;
    assert!(doc["paths"]["/inquiries"]["post"].is_object());
    assert!(doc["paths"]["/inquiries"]["get"].is_object());
    assert!(doc["paths"]["/listings"].is_null());
    Ok(())
}
