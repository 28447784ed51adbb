// src/journal.rs
//
// Journal (tracing) côté natif : stderr, filtre RUST_LOG ou --log.
// Par défaut "warn" : les lignes refusées apparaissent, pas le détail du pipeline.

use tracing_subscriber::EnvFilter;

pub const FILTRE_DEFAUT: &str = "warn";

/// Installe l’abonné global. `filtre` (--log) passe avant RUST_LOG.
pub fn init(filtre: Option<&str>) {
    let filtre = match filtre {
        Some(f) => EnvFilter::new(f),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(FILTRE_DEFAUT)),
    };

    // try_init : un second appel (tests) ne doit pas paniquer
    let installe = tracing_subscriber::fmt()
        .with_env_filter(filtre)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .try_init();

    match installe {
        Ok(()) => tracing::debug!("journal initialisé"),
        Err(e) => tracing::debug!(erreur = %e, "journal déjà installé, abonné existant conservé"),
    }
}
