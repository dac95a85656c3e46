//! # Module Server - API de haut niveau pour Axum
//!
//! Ce module fournit une abstraction simple pour créer le serveur HTTP de
//! MultiView avec Axum, en cachant la configuration et le routage.
//!
//! ## Fonctionnalités
//!
//! - 🎯 **Handlers avec état** : endpoints SSE/JSON avec `add_handler_with_state()`
//! - ⚛️ **Applications SPA** : page unique embarquée avec `add_spa()`
//! - 📚 **Documentation API** : OpenAPI/Swagger automatique avec `add_openapi()`
//! - ⚡ **Arrêt gracieux** : arrêt propre sur Ctrl+C

use crate::logs::{LoggingOptions, LogsApiDoc, create_logs_router, init_logging, log_dump, log_sse};
use anyhow::Context;
use axum::extract::Request;
use axum::handler::Handler;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use axum_embed::ServeEmbed;
use mvconfig::get_config;
use rust_embed::RustEmbed;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::{signal, sync::RwLock, task::JoinHandle};
use tower::ServiceExt;
use tracing::{error, info};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Serveur principal
pub struct Server {
    name: String,
    base_url: String,
    http_port: u16,
    router: Arc<RwLock<Router>>,
    join_handle: Option<JoinHandle<()>>,
}

impl Server {
    /// Crée une nouvelle instance de serveur
    ///
    /// # Arguments
    ///
    /// * `name` - Nom du serveur (pour les logs)
    /// * `base_url` - Hôte annoncé dans les logs (ex: "192.168.1.10")
    /// * `http_port` - Port HTTP à écouter
    pub fn new(name: impl Into<String>, base_url: impl Into<String>, http_port: u16) -> Self {
        Self {
            name: name.into(),
            base_url: base_url.into(),
            http_port,
            router: Arc::new(RwLock::new(Router::new())),
            join_handle: None,
        }
    }

    /// Ajoute un handler GET avec état
    pub async fn add_handler_with_state<H, T, S>(&mut self, path: &str, handler: H, state: S)
    where
        H: Handler<T, S> + Clone + 'static,
        T: 'static,
        S: Clone + Send + Sync + 'static,
    {
        let route = Router::new()
            .route("/", get(handler))
            .with_state(state);

        let mut r = self.router.write().await;
        *r = if path == "/" {
            std::mem::take(&mut *r).merge(route)
        } else {
            std::mem::take(&mut *r).nest(path, route)
        };
    }

    /// Ajoute une Single Page Application (SPA)
    ///
    /// Les fichiers embarqués sont servis tels quels. Un chemin à un seul
    /// segment qui ne correspond à aucun fichier renvoie `index.html`, ce qui
    /// permet à la page de lire son propre chemin (ex: `/lobby` pour charger
    /// le preset `lobby`). Tout autre chemin inconnu, et en particulier
    /// tout ce qui est sous `/api`, reçoit un 404 JSON.
    ///
    /// # Exemple
    ///
    /// ```rust,ignore
    /// # use mvserver::Server;
    /// # use rust_embed::RustEmbed;
    /// #[derive(RustEmbed, Clone)]
    /// #[folder = "webapp"]
    /// struct WebApp;
    ///
    /// # #[tokio::main]
    /// # async fn main() {
    /// # let mut server = Server::new("Test", "localhost", 5030);
    /// server.add_spa::<WebApp>("/").await;
    /// # }
    /// ```
    pub async fn add_spa<E>(&mut self, path: &str)
    where
        E: RustEmbed + Clone + Send + Sync + 'static,
    {
        let serve = ServeEmbed::<E>::with_parameters(
            Some("index.html".to_string()),
            axum_embed::FallbackBehavior::Ok,
            Some("index.html".to_string()),
        );

        let fallback = move |req: Request| {
            let serve = serve.clone();
            async move {
                let uri_path = req.uri().path();
                let embedded = E::get(uri_path.trim_start_matches('/')).is_some();
                if is_api_path(uri_path) || !(embedded || is_page_path(uri_path)) {
                    return not_found();
                }
                serve.oneshot(req).await.into_response()
            }
        };

        let mut r = self.router.write().await;

        let route = Router::new().fallback(fallback);
        *r = if path == "/" {
            std::mem::take(&mut *r).merge(route)
        } else {
            std::mem::take(&mut *r).nest(path, route)
        };
    }

    /// Ajoute une API documentée avec OpenAPI et Swagger UI
    ///
    /// `api_router` est fusionné tel quel au router principal : ses routes
    /// portent leur chemin complet (ex: `/api/presets`).
    ///
    /// - `/swagger-ui/{name}` affiche la documentation Swagger
    /// - `/api-docs/{name}.json` fournit la spécification OpenAPI
    pub async fn add_openapi(
        &mut self,
        api_router: Router,
        openapi: utoipa::openapi::OpenApi,
        name: &str,
    ) {
        // Appelé une fois par API au démarrage
        let swagger_path: &'static str =
            Box::leak(format!("/swagger-ui/{}", name).into_boxed_str());
        let openapi_json_path: &'static str =
            Box::leak(format!("/api-docs/{}.json", name).into_boxed_str());

        let swagger = SwaggerUi::new(swagger_path).url(openapi_json_path, openapi);

        let mut r = self.router.write().await;
        *r = std::mem::take(&mut *r).merge(api_router).merge(swagger);
    }

    /// Démarre le serveur HTTP
    ///
    /// Écoute sur toutes les interfaces au port configuré et met en place la
    /// gestion de Ctrl+C. Une erreur de bind est remontée à l'appelant.
    pub async fn start(&mut self) -> anyhow::Result<()> {
        let addr = SocketAddr::from(([0, 0, 0, 0], self.http_port));
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .with_context(|| format!("Failed to bind {}", addr))?;

        info!(
            "Server {} running at http://{}:{}",
            self.name, self.base_url, self.http_port
        );

        let router = self.router.read().await.clone();
        let server_task = tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, router.into_make_service()).await {
                error!("HTTP server stopped: {}", e);
            }
        });

        let shutdown_task = tokio::spawn(async move {
            match signal::ctrl_c().await {
                Ok(()) => info!("Ctrl+C reçu, arrêt gracieux"),
                Err(e) => {
                    error!("Unable to listen for Ctrl+C: {}", e);
                    std::future::pending::<()>().await;
                }
            }
        });

        self.join_handle = Some(tokio::spawn(async move {
            tokio::select! {
                _ = server_task => {},
                _ = shutdown_task => {},
            }
        }));

        Ok(())
    }

    /// Attend la fin du serveur (Ctrl+C ou arrêt du serveur HTTP)
    pub async fn wait(&mut self) {
        if let Some(h) = self.join_handle.take() {
            let _ = h.await;
        }
    }

    /// Copie du router courant, utilisable directement comme service
    pub async fn router(&self) -> Router {
        self.router.read().await.clone()
    }

    /// Initialise le système de logging et enregistre les routes de logs
    ///
    /// Routes enregistrées :
    ///
    /// - `GET /api/logs/sse` - flux SSE des logs
    /// - `GET /api/logs/dump` - contenu du buffer circulaire
    /// - `GET|POST /api/log_setup` - lecture/modification du niveau de log
    pub async fn init_logging(&mut self, options: LoggingOptions) {
        let log_state = init_logging(&options);

        self.add_handler_with_state("/api/logs/sse", log_sse, log_state.clone())
            .await;
        self.add_handler_with_state("/api/logs/dump", log_dump, log_state.clone())
            .await;
        self.add_openapi(create_logs_router(log_state), LogsApiDoc::openapi(), "logs")
            .await;
    }
}

const API_PREFIX: &str = "/api";

fn is_api_path(path: &str) -> bool {
    path.strip_prefix(API_PREFIX)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
}

/// `/` ou `/{segment}` : chemins servis par la page elle-même
fn is_page_path(path: &str) -> bool {
    !path.trim_start_matches('/').contains('/')
}

fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({ "error": "Not found" })),
    )
        .into_response()
}

/// Builder pattern
pub struct ServerBuilder {
    name: String,
    base_url: String,
    http_port: u16,
}

impl ServerBuilder {
    /// Crée un nouveau builder
    pub fn new(name: impl Into<String>, base_url: impl Into<String>, http_port: u16) -> Self {
        Self {
            name: name.into(),
            base_url: base_url.into(),
            http_port,
        }
    }

    /// Builder initialisé depuis la configuration globale
    pub fn new_configured() -> Self {
        let config = get_config();
        Self {
            name: "MultiView".to_string(),
            base_url: config.get_base_url(),
            http_port: config.get_http_port(),
        }
    }

    /// Construit le serveur
    pub fn build(self) -> Server {
        Server::new(self.name, self.base_url, self.http_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_paths() {
        assert!(is_api_path("/api"));
        assert!(is_api_path("/api/"));
        assert!(is_api_path("/api/nope"));
        assert!(!is_api_path("/apiary"));
        assert!(!is_api_path("/lobby"));
    }

    #[test]
    fn test_page_paths() {
        assert!(is_page_path("/"));
        assert!(is_page_path("/lobby"));
        assert!(!is_page_path("/a/b"));
        assert!(!is_page_path("/lobby/"));
    }
}
