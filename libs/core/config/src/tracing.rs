use crate::Environment;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, prelude::*};

const PRODUCTION_FILTER: &str = "info,tower_http=info,sea_orm=warn,sqlx=warn";
const DEVELOPMENT_FILTER: &str = "debug,tower_http=debug,sea_orm=info,sqlx=warn";

/// Install color-eyre for the binary's error reports.
///
/// Call first in `main`. Shows error locations and hides the env section.
/// Repeated calls are ignored.
pub fn install_color_eyre() {
    let _ = color_eyre::config::HookBuilder::default()
        .display_location_section(true)
        .display_env_section(false)
        .install();
}

/// Default directives when `RUST_LOG` is not set.
pub fn default_filter(environment: &Environment) -> &'static str {
    if environment.is_production() {
        PRODUCTION_FILTER
    } else {
        DEVELOPMENT_FILTER
    }
}

/// Initialize tracing with `tracing_error::ErrorLayer` for span capture.
///
/// - **Production** (`APP_ENV=production`): flattened JSON events, no targets
/// - **Development**: pretty, human-readable output
///
/// `RUST_LOG` overrides [`default_filter`]. Safe to call more than once; later
/// calls leave the first subscriber in place.
pub fn init_tracing(environment: &Environment) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(environment)));

    let result = if environment.is_production() {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(false)
                    .flatten_event(true),
            )
            .with(tracing_error::ErrorLayer::default())
            .with(filter)
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_file(false)
                    .with_line_number(false)
                    .pretty(),
            )
            .with(tracing_error::ErrorLayer::default())
            .with(filter)
            .try_init()
    };

    match result {
        Ok(_) => info!(
            "Tracing initialized with ErrorLayer. Environment: {:?}",
            environment
        ),
        Err(_) => debug!("Tracing already initialized, skipping re-initialization"),
    }
}
