//! Endpoint `/api/system_info` : identité réseau de l'hôte.
//!
//! En cas d'échec de résolution, l'endpoint répond quand même 200 avec des
//! valeurs de remplacement (`"Error getting hostname"`, liste vide).

use std::sync::Arc;

use axum::{Json, Router, extract::State, routing::get};
use mvutils::{HostIdentity, HostResolver, host_identity};
use serde::{Deserialize, Serialize};
use tracing::warn;
use utoipa::OpenApi;

use crate::Server;

pub const HOSTNAME_ERROR: &str = "Error getting hostname";

/// Réponse de `/api/system_info`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct SystemInfo {
    pub hostname: String,
    /// Adresses IPv4 uniques, triées
    pub ip_addresses: Vec<String>,
}

impl SystemInfo {
    pub fn degraded() -> Self {
        Self {
            hostname: HOSTNAME_ERROR.to_string(),
            ip_addresses: Vec::new(),
        }
    }
}

impl From<HostIdentity> for SystemInfo {
    fn from(identity: HostIdentity) -> Self {
        Self {
            hostname: identity.hostname,
            ip_addresses: identity.ip_addresses,
        }
    }
}

pub type SharedResolver = Arc<dyn HostResolver>;

#[utoipa::path(
    get,
    path = "/api/system_info",
    tag = "system",
    responses(
        (status = 200, description = "Nom d'hôte et adresses IPv4 (valeurs de remplacement si la résolution échoue)", body = SystemInfo)
    )
)]
pub async fn system_info(State(resolver): State<SharedResolver>) -> Json<SystemInfo> {
    // La résolution DNS peut bloquer
    let lookup = tokio::task::spawn_blocking(move || host_identity(resolver.as_ref())).await;

    let info = match lookup {
        Ok(Ok(identity)) => identity.into(),
        Ok(Err(err)) => {
            warn!("Failed to resolve host identity: {}", err);
            SystemInfo::degraded()
        }
        Err(err) => {
            warn!("Host identity lookup aborted: {}", err);
            SystemInfo::degraded()
        }
    };

    Json(info)
}

pub fn system_info_router(resolver: SharedResolver) -> Router {
    Router::new()
        .route("/api/system_info", get(system_info))
        .with_state(resolver)
}

#[derive(OpenApi)]
#[openapi(
    paths(system_info),
    components(schemas(SystemInfo)),
    tags(
        (name = "system", description = "Informations sur l'hôte")
    )
)]
pub struct SystemApiDoc;

impl Server {
    /// Enregistre `GET /api/system_info` et sa documentation Swagger
    pub async fn init_system_info<R>(&mut self, resolver: R)
    where
        R: HostResolver + 'static,
    {
        let router = system_info_router(Arc::new(resolver));
        self.add_openapi(router, SystemApiDoc::openapi(), "system").await;
    }
}
