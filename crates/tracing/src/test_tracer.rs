use tracing::level_filters::LevelFilter;

use crate::{env_filter_or, FileWorkerGuard, Tracer};

/// Initializes a tracing subscriber for tests.
///
/// Events are written through the test writer, so they are captured per test and only shown for
/// failing tests.
#[derive(Debug, Clone, Copy, Default)]
#[non_exhaustive]
pub struct TestTracer;

impl TestTracer {
    /// Creates a new `TestTracer`.
    pub fn new() -> Self {
        Self
    }
}

impl Tracer for TestTracer {
    fn init(self) -> eyre::Result<Option<FileWorkerGuard>> {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(env_filter_or(LevelFilter::INFO))
            .with_test_writer()
            .try_init();
        Ok(None)
    }
}
