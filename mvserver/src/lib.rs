//! # mvserver - Serveur web MultiView basé sur Axum
//!
//! Cette crate fournit une abstraction simple pour créer le serveur HTTP de
//! MultiView avec Axum.
//!
//! ## Fonctionnalités
//!
//! - 🚀 **API de haut niveau** : interface simple autour d'un `Router` Axum
//! - 📡 **Server-Sent Events (SSE)** : logs en temps réel via SSE
//! - ⚛️ **Applications SPA** : page unique embarquée avec `RustEmbed`
//! - 🖥️ **Identité de l'hôte** : endpoint `/api/system_info`
//! - 📚 **Documentation OpenAPI** : génération automatique de Swagger UI
//! - ⚡ **Arrêt gracieux** : gestion propre de l'arrêt sur Ctrl+C
//!
//! ## Architecture
//!
//! - [`server`] : implémentation du serveur principal et du builder
//! - [`logs`] : système de logs (buffer circulaire, SSE, niveau dynamique)
//! - [`system_info`] : nom d'hôte et adresses IPv4
//!
//! ## Exemple d'utilisation
//!
//! ```rust,no_run
//! use mvserver::{ServerBuilder, logs::LoggingOptions};
//! use mvutils::SystemResolver;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let mut server = ServerBuilder::new("MyServer", "localhost", 5030).build();
//!     server.init_logging(LoggingOptions::default()).await;
//!     server.init_system_info(SystemResolver).await;
//!
//!     server.start().await?;
//!     server.wait().await;
//!     Ok(())
//! }
//! ```

pub mod logs;
pub mod server;
pub mod system_info;

pub use logs::{LogState, LoggingOptions, SseLayer, log_dump, log_sse};
pub use server::{Server, ServerBuilder};
pub use system_info::SystemInfo;
