//! API REST pour la gestion des presets.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use utoipa::ToSchema;

use crate::{Error, PresetStore, StreamEntry};

/// Router combinant `/api/presets` et `/api/preset/{name}`.
pub fn presets_api_router(store: Arc<PresetStore>) -> Router {
    Router::new()
        .route("/api/presets", get(list_presets))
        .route("/api/preset/{name}", get(get_preset).post(save_preset))
        .with_state(store)
}

/// Liste des noms de presets
#[derive(Debug, Serialize, ToSchema)]
pub struct PresetListResponse {
    pub presets: Vec<String>,
}

/// Contenu d'un preset
#[derive(Debug, Serialize, ToSchema)]
pub struct PresetResponse {
    pub streams: Vec<StreamEntry>,
}

/// Corps d'une sauvegarde de preset.
#[derive(Debug, Deserialize, ToSchema)]
pub struct SavePresetRequest {
    /// Flux dans l'ordre d'affichage. Obligatoire : absent ou `null`, la
    /// requête reçoit un 400 `{"error": "Invalid data"}`.
    #[schema(required = true, nullable = false)]
    pub streams: Option<Vec<StreamEntry>>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

/// Réponse d'erreur REST générique.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Erreur API, rendue sous la forme `{"error": message}`
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn invalid_data() -> Self {
        Self::new(StatusCode::BAD_REQUEST, "Invalid data")
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorResponse {
                error: self.message,
            }),
        )
            .into_response()
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        match err {
            Error::NotFound(_) => Self::new(StatusCode::NOT_FOUND, "Preset not found"),
            Error::InvalidName(_) => Self::new(StatusCode::BAD_REQUEST, "Invalid preset name"),
            other => {
                error!("Preset storage failure: {}", other);
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, other.to_string())
            }
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/presets",
    tag = "presets",
    responses(
        (status = 200, description = "Noms de tous les presets", body = PresetListResponse),
        (status = 500, description = "Répertoire illisible", body = ErrorResponse)
    )
)]
pub async fn list_presets(
    State(store): State<Arc<PresetStore>>,
) -> Result<Json<PresetListResponse>, ApiError> {
    let presets = store.list()?;
    Ok(Json(PresetListResponse { presets }))
}

#[utoipa::path(
    get,
    path = "/api/preset/{name}",
    tag = "presets",
    params(
        ("name" = String, Path, description = "Nom du preset")
    ),
    responses(
        (status = 200, description = "Flux du preset, dans l'ordre d'affichage", body = PresetResponse),
        (status = 400, description = "Nom de preset invalide", body = ErrorResponse),
        (status = 404, description = "Preset inexistant", body = ErrorResponse),
        (status = 500, description = "Fichier illisible ou mal formé", body = ErrorResponse)
    )
)]
pub async fn get_preset(
    State(store): State<Arc<PresetStore>>,
    Path(name): Path<String>,
) -> Result<Json<PresetResponse>, ApiError> {
    let streams = store.read(&name)?;
    Ok(Json(PresetResponse { streams }))
}

#[utoipa::path(
    post,
    path = "/api/preset/{name}",
    tag = "presets",
    params(
        ("name" = String, Path, description = "Nom du preset")
    ),
    request_body = SavePresetRequest,
    responses(
        (status = 200, description = "Preset enregistré", body = StatusResponse),
        (status = 400, description = "Corps sans `streams` ou nom invalide", body = ErrorResponse),
        (status = 500, description = "Échec d'écriture", body = ErrorResponse)
    )
)]
pub async fn save_preset(
    State(store): State<Arc<PresetStore>>,
    Path(name): Path<String>,
    payload: Result<Json<SavePresetRequest>, JsonRejection>,
) -> Result<Json<StatusResponse>, ApiError> {
    let streams = match payload {
        Ok(Json(SavePresetRequest {
            streams: Some(streams),
        })) => streams,
        _ => return Err(ApiError::invalid_data()),
    };

    let created = !store.exists(&name);
    store.write(&name, &streams)?;
    info!(preset=%name, streams = streams.len(), created, "Preset saved");

    Ok(Json(StatusResponse {
        status: "success".to_string(),
    }))
}
