//! Résolution de l'identité réseau de l'hôte (nom + adresses IPv4).

use std::collections::BTreeSet;
use std::io;
use std::net::IpAddr;

/// Erreurs de résolution de l'identité de l'hôte
#[derive(Debug, thiserror::Error)]
pub enum HostInfoError {
    #[error("Failed to get hostname: {0}")]
    Hostname(#[source] io::Error),

    #[error("Hostname is not valid UTF-8")]
    InvalidHostname,

    #[error("Failed to resolve {host}: {source}")]
    Resolve {
        host: String,
        #[source]
        source: io::Error,
    },
}

/// Source du nom d'hôte et de la résolution d'adresses.
///
/// [`SystemResolver`] interroge le système ; les tests fournissent leurs
/// propres implémentations.
pub trait HostResolver: Send + Sync {
    fn hostname(&self) -> Result<String, HostInfoError>;

    fn resolve(&self, host: &str) -> Result<Vec<IpAddr>, HostInfoError>;
}

/// Résolution via `gethostname(2)` puis `getaddrinfo(3)`
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemResolver;

impl HostResolver for SystemResolver {
    fn hostname(&self) -> Result<String, HostInfoError> {
        hostname::get()
            .map_err(HostInfoError::Hostname)?
            .into_string()
            .map_err(|_| HostInfoError::InvalidHostname)
    }

    fn resolve(&self, host: &str) -> Result<Vec<IpAddr>, HostInfoError> {
        dns_lookup::lookup_host(host).map_err(|source| HostInfoError::Resolve {
            host: host.to_string(),
            source,
        })
    }
}

/// Nom d'hôte et adresses IPv4 uniques, triées
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostIdentity {
    pub hostname: String,
    pub ip_addresses: Vec<String>,
}

/// Résout le nom d'hôte local puis les adresses IPv4 qui lui sont associées.
///
/// Les adresses IPv6 sont ignorées. La liste est dédoublonnée et triée dans
/// l'ordre lexicographique de leur forme textuelle.
pub fn host_identity(resolver: &dyn HostResolver) -> Result<HostIdentity, HostInfoError> {
    let hostname = resolver.hostname()?;
    let ip_addresses: BTreeSet<String> = resolver
        .resolve(&hostname)?
        .into_iter()
        .filter(IpAddr::is_ipv4)
        .map(|ip| ip.to_string())
        .collect();

    Ok(HostIdentity {
        hostname,
        ip_addresses: ip_addresses.into_iter().collect(),
    })
}
