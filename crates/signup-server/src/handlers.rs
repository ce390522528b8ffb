// File: src/handlers.rs
// Purpose: Sink API handlers - POST /partners, GET /partners, GET /partners/listing

use crate::response::ErrorResponse;
use crate::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use signup_core::{FieldError, Partner, PartnerSubmission};
use signup_store::{ListingPage, ListingQuery, PartnerFilter};
use tracing::{error, info};

/// Response for POST /partners
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub success: bool,
    pub partner: Partner,
}

/// Response for GET /partners
#[derive(Debug, Serialize)]
pub struct CollectionResponse {
    pub partners: Vec<Partner>,
}

/// POST /partners
/// Validate a registration, assign id and timestamp, append it
pub async fn create_partner(
    State(state): State<AppState>,
    payload: Result<Json<PartnerSubmission>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedResponse>), ErrorResponse> {
    let Json(submission) = payload.map_err(|rejection| {
        ErrorResponse::validation(vec![FieldError {
            field: "body".to_string(),
            message: rejection.body_text(),
        }])
    })?;

    submission.validate().map_err(ErrorResponse::validation)?;

    let partner = Partner::create(submission);

    state.repository.append(partner.clone()).await.map_err(|e| {
        error!("Error adding partner: {}", e);
        ErrorResponse::internal("Failed to add partner")
    })?;

    info!("Registered {} ({})", partner.submission.company, partner.id);

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            success: true,
            partner,
        }),
    ))
}

/// GET /partners?company=:substring
pub async fn list_partners(
    State(state): State<AppState>,
    Query(filter): Query<PartnerFilter>,
) -> Result<Json<CollectionResponse>, ErrorResponse> {
    let partners = state.repository.query(&filter).await.map_err(|e| {
        error!("Error retrieving partners: {}", e);
        ErrorResponse::internal("Failed to retrieve partners")
    })?;

    Ok(Json(CollectionResponse { partners }))
}

/// GET /partners/listing?search=:term&limit=:n
/// Newest first, de-duplicated, searched and paged for the list page
pub async fn listing(
    State(state): State<AppState>,
    Query(query): Query<ListingQuery>,
) -> Result<Json<ListingPage>, ErrorResponse> {
    let partners = state.repository.all().await.map_err(|e| {
        error!("Error retrieving partners: {}", e);
        ErrorResponse::internal("Failed to retrieve partners")
    })?;

    Ok(Json(query.apply(partners, state.page_size)))
}
