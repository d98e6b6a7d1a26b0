use std::sync::OnceLock;
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt};

static INIT: OnceLock<()> = OnceLock::new();

/// Install the stderr subscriber, honouring `RUST_LOG` and defaulting to `info`.
pub fn init() {
    INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let subscriber = Registry::default().with(filter).with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        );

        // A subscriber may already be installed by an embedding program.
        let _ = tracing::subscriber::set_global_default(subscriber);
    });
}
