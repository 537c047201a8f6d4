//! Claims handlers

use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    Json,
};

use core_kernel::ClaimId;
use domain_claims::{ClaimSubmission, DocumentUpload};

use crate::dto::claims::{ClaimResponse, RedirectResponse, SubmitClaimResponse};
use crate::error::ApiError;
use crate::AppState;

/// Submits a new claim with an optional supporting document
///
/// Accepts a multipart form with `lecturer_name`, optional `notes`,
/// optional `claim_id`, and an optional `document` file part. Any
/// `status` field in the form is ignored; submitted claims are always
/// pending.
pub async fn submit_claim(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<SubmitClaimResponse>), ApiError> {
    let (submission, document) = parse_submission(multipart).await?;

    let receipt = state.service.submit_claim(submission, document).await?;

    Ok((
        StatusCode::CREATED,
        Json(SubmitClaimResponse {
            claim_id: receipt.claim_id,
            redirect: receipt.redirect,
        }),
    ))
}

/// Lists all claims awaiting review
pub async fn pending_claims(
    State(state): State<AppState>,
) -> Result<Json<Vec<ClaimResponse>>, ApiError> {
    let claims = state.service.pending_claims().await?;
    Ok(Json(claims.into_iter().map(ClaimResponse::from).collect()))
}

/// Approves a claim; missing identifiers are a no-op
pub async fn approve_claim(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<RedirectResponse>, ApiError> {
    let redirect = state.service.approve_claim(ClaimId::new(id)).await?;
    Ok(Json(RedirectResponse { redirect }))
}

/// Rejects a claim; missing identifiers redirect back to the pending list
pub async fn reject_claim(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<RedirectResponse>, ApiError> {
    let redirect = state.service.reject_claim(ClaimId::new(id)).await?;
    Ok(Json(RedirectResponse { redirect }))
}

/// Deletes a claim; idempotent
pub async fn delete_claim(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<RedirectResponse>, ApiError> {
    let redirect = state.service.delete_claim(ClaimId::new(id)).await?;
    Ok(Json(RedirectResponse { redirect }))
}

/// Pulls the claim fields and the optional document out of the form
async fn parse_submission(
    mut multipart: Multipart,
) -> Result<(ClaimSubmission, Option<DocumentUpload>), ApiError> {
    let mut claim_id = None;
    let mut lecturer_name = None;
    let mut notes = None;
    let mut status = None;
    let mut document = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("malformed multipart form: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "claim_id" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| ApiError::BadRequest(e.to_string()))?;
                let parsed: ClaimId = text
                    .parse()
                    .map_err(|_| ApiError::BadRequest(format!("invalid claim_id '{text}'")))?;
                claim_id = Some(parsed);
            }
            "lecturer_name" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| ApiError::BadRequest(e.to_string()))?;
                lecturer_name = Some(text);
            }
            "notes" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| ApiError::BadRequest(e.to_string()))?;
                if !text.is_empty() {
                    notes = Some(text);
                }
            }
            "status" => {
                // Carried through so submit can normalize it; never trusted.
                let text = field
                    .text()
                    .await
                    .map_err(|e| ApiError::BadRequest(e.to_string()))?;
                status = text.parse().ok();
            }
            "document" => {
                let file_name = field.file_name().unwrap_or("upload").to_string();
                let content = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::BadRequest(e.to_string()))?;
                document = Some(DocumentUpload::new(file_name, content.to_vec()));
            }
            _ => {}
        }
    }

    let lecturer_name = lecturer_name
        .filter(|name| !name.trim().is_empty())
        .ok_or_else(|| ApiError::BadRequest("lecturer_name is required".to_string()))?;

    let submission = ClaimSubmission {
        claim_id,
        lecturer_name,
        notes,
        status,
    };

    Ok((submission, document))
}
