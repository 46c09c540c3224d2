use tracing_subscriber::EnvFilter;
use waypoint::Registry;

#[allow(dead_code)]
pub fn setup_system() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}

#[allow(dead_code)]
pub fn registry() -> Registry<&'static str> {
    setup_system();
    Registry::new()
}
