use std::collections::HashMap;
use std::sync::PoisonError;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::catalog::{Activity, SharedCatalog};
use crate::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct ParticipantQuery {
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

pub async fn activities_handler(
    State(catalog): State<SharedCatalog>,
) -> Json<HashMap<String, Activity>> {
    let catalog = catalog.read().unwrap_or_else(PoisonError::into_inner);
    Json(catalog.activities().clone())
}

/// POST /activities/:name/signup?email=...
///
/// The activity name arrives percent-encoded in the path; axum decodes it
/// before we look it up. The email is an opaque string, no format checks.
pub async fn signup_handler(
    Path(name): Path<String>,
    Query(query): Query<ParticipantQuery>,
    State(catalog): State<SharedCatalog>,
) -> Result<Json<MessageResponse>, ApiError> {
    {
        let mut catalog = catalog.write().unwrap_or_else(PoisonError::into_inner);
        catalog.signup(&name, &query.email)?;
    }

    info!(activity = %name, email = %query.email, "participant signed up");
    Ok(Json(MessageResponse {
        message: format!("Signed up {} for {}", query.email, name),
    }))
}

/// DELETE /activities/:name/signup?email=...
pub async fn unregister_handler(
    Path(name): Path<String>,
    Query(query): Query<ParticipantQuery>,
    State(catalog): State<SharedCatalog>,
) -> Result<Json<MessageResponse>, ApiError> {
    {
        let mut catalog = catalog.write().unwrap_or_else(PoisonError::into_inner);
        catalog.unregister(&name, &query.email)?;
    }

    info!(activity = %name, email = %query.email, "participant unregistered");
    Ok(Json(MessageResponse {
        message: format!("Unregistered {} from {}", query.email, name),
    }))
}
