// src/journal.rs
//
// Journal (tracing) — natif seulement.
// Niveau par défaut "warn" (silencieux) ; RUST_LOG=calculatrice_tactile=debug pour voir les actions.

use std::sync::Once;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Filtre si RUST_LOG est absent ou invalide.
const FILTRE_DEFAUT: &str = "warn";

static INIT: Once = Once::new();

/// À appeler au démarrage. Plusieurs appels : seul le premier compte.
pub fn init() {
    INIT.call_once(|| {
        let filtre =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(FILTRE_DEFAUT));

        let couche = tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_level(true)
            .with_filter(filtre);

        // try_init : un subscriber déjà installé (tests) n’est pas une erreur fatale.
        let _ = tracing_subscriber::registry().with(couche).try_init();
    });
}
