//! One-time, process-wide harness setup.

use std::sync::OnceLock;
use std::sync::atomic::{AtomicU64, Ordering};

use axum::Router;
use tracing::info;

use sgtn_translation::router::build_router;
use sgtn_translation::state::AppState;

use crate::client::{AssertionClient, build_client};
use crate::config::HarnessConfig;
use crate::random::{FixtureRng, clock_seed};
use crate::root::{ProjectRoot, RootSource, establish};

static HARNESS: OnceLock<Harness> = OnceLock::new();

/// The booted harness for this test binary, created on first use.
///
/// The first caller loads [`HarnessConfig::from_env`], settles the project
/// root and builds the service router; every later caller (from any thread)
/// gets the same instance.
pub fn harness() -> &'static Harness {
    HARNESS.get_or_init(|| Harness::bootstrap(HarnessConfig::from_env()))
}

/// Shared, read-only state every functional test runs against.
pub struct Harness {
    root: ProjectRoot,
    root_source: RootSource,
    router: Router,
    seed: u64,
    draws: AtomicU64,
}

impl Harness {
    /// Settle the project root (changing the process working directory at
    /// most once), then build the service engine over `root/<marker>`.
    ///
    /// Prefer [`harness`]; call this directly only from a test binary that
    /// owns its working directory.
    pub fn bootstrap(config: HarnessConfig) -> Self {
        sgtn_core::tracing::init_test_tracing();

        let (root, root_source) = establish(config.wd.as_deref(), &config.marker);
        let router = build_router(AppState::new(root.join(&config.marker)));
        let seed = config.seed.unwrap_or_else(clock_seed);

        info!(
            root = %root.path().display(),
            source = ?root_source,
            seed,
            args = ?std::env::args().collect::<Vec<_>>(),
            "test harness ready"
        );

        Self {
            root,
            root_source,
            router,
            seed,
            draws: AtomicU64::new(0),
        }
    }

    pub fn root(&self) -> &ProjectRoot {
        &self.root
    }

    pub fn root_source(&self) -> RootSource {
        self.root_source
    }

    /// Base seed for fixture generators. Pin it with `SGTN_TEST_SEED`.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// A handle to the in-process service engine.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// A fresh assertion client with its own cookie jar.
    pub fn client(&self) -> anyhow::Result<AssertionClient> {
        build_client(self.router())
    }

    /// A generator of its own, seeded from the base seed and the number of
    /// generators handed out before it.
    pub fn rng(&self) -> FixtureRng {
        let n = self.draws.fetch_add(1, Ordering::Relaxed);
        FixtureRng::seeded(self.seed ^ n.wrapping_mul(0x9E37_79B9_7F4A_7C15))
    }
}
