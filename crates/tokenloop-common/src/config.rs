//! Run configuration, loaded once at start and immutable for the run.

/// Default API host.
pub const DEFAULT_HOST: &str = "192.168.0.231";
/// Default API port.
pub const DEFAULT_PORT: u16 = 32082;
/// Default protection policy name.
pub const DEFAULT_POLICY: &str = "P03";
/// Default starting value for the numeric input sequence.
pub const DEFAULT_START_DATA: &str = "0123456789123";
/// Default iteration count.
pub const DEFAULT_ITERATIONS: u32 = 100;
/// Default per-request timeout, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
/// Default batch size for bulk operations.
pub const DEFAULT_BATCH_SIZE: usize = 25;

/// Configuration for one benchmarking run.
///
/// Display flags live here rather than in process-wide logger state so the
/// components that report progress receive them explicitly.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// API host.
    pub host: String,
    /// API port.
    pub port: u16,
    /// `protection_policy_name` sent with every request.
    pub policy: String,
    /// Starting value of the fixed-width numeric input sequence; its
    /// length fixes the width for the whole run.
    pub start_data: String,
    /// Number of iterations (items, in bulk mode).
    pub iterations: u32,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
    /// Debug-level logging.
    pub verbose: bool,
    /// Print request/response JSON bodies.
    pub show_bodies: bool,
    /// Print one progress line per iteration.
    pub show_progress: bool,
    /// Use the bulk endpoints.
    pub bulk: bool,
    /// Batch size for bulk operations.
    pub batch_size: usize,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_owned(),
            port: DEFAULT_PORT,
            policy: DEFAULT_POLICY.to_owned(),
            start_data: DEFAULT_START_DATA.to_owned(),
            iterations: DEFAULT_ITERATIONS,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            verbose: false,
            show_bodies: false,
            show_progress: false,
            bulk: false,
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }
}
