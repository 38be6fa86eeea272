//! State store configuration.

use std::time::Duration;

/// Default number of entries the map is pre-sized for.
pub const DEFAULT_INITIAL_CAPACITY: usize = 64;

/// Default timeout callers pass when they have none of their own.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for an in-memory state store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Number of entries to reserve space for up front.
    pub initial_capacity: usize,

    /// Number of map shards. Must be a power of two greater than one;
    /// `None` lets the map pick based on available parallelism.
    pub shard_amount: Option<usize>,

    /// Timeout handed to store operations by callers that do not carry
    /// their own deadline. The in-memory store never enforces it.
    pub default_timeout: Duration,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            shard_amount: None,
            default_timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl StoreConfig {
    /// Create a configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial capacity.
    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Set the shard amount.
    pub fn with_shard_amount(mut self, shards: usize) -> Self {
        self.shard_amount = Some(shards);
        self
    }

    /// Set the default operation timeout.
    pub fn with_default_timeout(mut self, timeout: Duration) -> Self {
        self.default_timeout = timeout;
        self
    }

    /// The configured shard amount, if it is one the map accepts.
    pub fn valid_shard_amount(&self) -> Option<usize> {
        self.shard_amount.filter(|n| *n > 1 && n.is_power_of_two())
    }
}
