use tracing_subscriber::EnvFilter;

/// Setup logging of events reported by hostauth and the test suite.
///
/// Use the RUST_LOG environment variable to override the defaults.
///
/// E.g. To see how hosts are being classified:
///   RUST_LOG=TRACE
///
/// Or to log only the decisions taken while parsing host authorities:
///   RUST_LOG=hostauth::base::host=TRACE
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_thread_ids(true)
        .without_time()
        .try_init()
        .ok();
}
