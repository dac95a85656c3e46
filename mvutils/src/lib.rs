//! Utilitaires réseau pour MultiView.
//!
//! Ce module fournit les fonctions permettant d'identifier la machine hôte
//! sur le réseau local :
//!
//! - [`guess_local_ip`] : devine l'adresse IP locale utilisée pour les connexions sortantes
//! - [`host_identity`] : nom d'hôte et adresses IPv4 associées, via un [`HostResolver`]
//!
//! # Examples
//!
//! ```no_run
//! use mvutils::{host_identity, SystemResolver};
//!
//! let identity = host_identity(&SystemResolver)?;
//! println!("{} -> {:?}", identity.hostname, identity.ip_addresses);
//! # Ok::<(), mvutils::HostInfoError>(())
//! ```
mod host;
mod ip_utils;

pub use host::{HostIdentity, HostInfoError, HostResolver, SystemResolver, host_identity};
pub use ip_utils::guess_local_ip;
