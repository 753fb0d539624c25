//! Request handlers for the API endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;

use super::AppState;
use super::types::{ApplianceRecord, ErrorResponse, EstimateResponse, TariffRecord};
use crate::advisor::EstimateRequest;
use crate::error::AdvisorError;

/// Lists the appliance catalog in file order.
///
/// `GET /catalog` → 200 + `Vec<ApplianceRecord>` JSON
pub async fn get_catalog(State(state): State<Arc<AppState>>) -> Json<Vec<ApplianceRecord>> {
    Json(
        state
            .advisor
            .catalog()
            .iter()
            .map(ApplianceRecord::from)
            .collect(),
    )
}

/// Lists configured tariffs in source order.
///
/// `GET /tariff` → 200 + `Vec<TariffRecord>` JSON
pub async fn get_tariff(State(state): State<Arc<AppState>>) -> Json<Vec<TariffRecord>> {
    Json(
        state
            .advisor
            .settings()
            .tariff
            .iter()
            .map(|(source, rate_per_kwh)| TariffRecord {
                source,
                rate_per_kwh,
            })
            .collect(),
    )
}

/// Runs one estimation.
///
/// `POST /estimate` → 200 + `EstimateResponse` JSON
/// Malformed body, unknown appliance or out-of-range input → 400 + `ErrorResponse`
/// Tariff misconfiguration → 500 + `ErrorResponse`
pub async fn post_estimate(
    State(state): State<Arc<AppState>>,
    body: Result<Json<EstimateRequest>, JsonRejection>,
) -> Result<Json<EstimateResponse>, (StatusCode, Json<ErrorResponse>)> {
    // Negative or fractional counts fail here, before `UsageEntry::validate`.
    let Json(request) = body.map_err(|rejection| {
        let error = rejection.body_text();
        tracing::warn!(%error, status = 400, "estimate body rejected");
        (StatusCode::BAD_REQUEST, Json(ErrorResponse { error }))
    })?;

    match state.advisor.estimate(&request) {
        Ok(report) => Ok(Json(EstimateResponse::from(report))),
        Err(e) => {
            let status = status_for(&e);
            tracing::warn!(error = %e, status = status.as_u16(), "estimate rejected");
            Err((
                status,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            ))
        }
    }
}

fn status_for(error: &AdvisorError) -> StatusCode {
    match error {
        AdvisorError::UnknownAppliance(_) | AdvisorError::InvalidUsage { .. } => {
            StatusCode::BAD_REQUEST
        }
        AdvisorError::EmptyEstimate
        | AdvisorError::MissingTariff(_)
        | AdvisorError::InvalidTariff(..) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}
