use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Installs a `tracing` subscriber for tests once.
///
/// The filter is read from `TEST_LOG`, then `RUST_LOG`, and is `warn` otherwise. Events go
/// through the test writer so they are only shown for failing tests.
pub fn init_test_logging() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_twice() {
        init_test_logging();
        init_test_logging();

        assert!(INITIALIZED.get().is_some());
    }
}
