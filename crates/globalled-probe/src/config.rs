//! Public configuration for the reachability prober.

use std::time::Duration;

/// Configuration for [`HttpImageProber`](crate::HttpImageProber).
///
/// # Example
///
/// ```
/// use globalled_probe::ProberConfig;
/// use std::time::Duration;
///
/// let config = ProberConfig::new().with_timeout(Duration::from_secs(5));
/// ```
#[derive(Debug, Clone)]
pub struct ProberConfig {
    /// Hard bound on one probe, covering connect, headers, and body sniff
    pub(crate) timeout: Duration,
    /// How many leading body bytes the magic-number sniff may look at
    pub(crate) max_probe_bytes: usize,
    /// User agent string for HTTP requests
    pub(crate) user_agent: String,
}

impl Default for ProberConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(15),
            max_probe_bytes: 512,
            user_agent: concat!("globalled-probe/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ProberConfig {
    /// Create a configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the hard bound on one probe.
    ///
    /// Defaults to 15 seconds.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the sniffing byte budget.
    ///
    /// Defaults to 512 bytes; every recognized magic number fits well
    /// within that.
    #[must_use]
    pub const fn with_max_probe_bytes(mut self, bytes: usize) -> Self {
        self.max_probe_bytes = bytes;
        self
    }

    /// Set the user agent string for HTTP requests.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}
