use std::time::Duration;

#[derive(Debug, Clone)]
pub struct PortalConfig {
    pub base_url: String,
    pub request_timeout: Duration,
    /// Quiet period the debounced filter waits before committing a query.
    pub quiet_period: Duration,
    pub max_cached_pages: usize,
    /// Cached pages older than this are refetched on next read.
    pub cache_ttl: Option<Duration>,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000/api".to_string(),
            request_timeout: Duration::from_secs(30),
            quiet_period: Duration::from_millis(350),
            max_cached_pages: 256,
            cache_ttl: Some(Duration::from_secs(60)),
        }
    }
}

impl PortalConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_quiet_period(mut self, quiet_period: Duration) -> Self {
        self.quiet_period = quiet_period;
        self
    }

    pub fn with_max_cached_pages(mut self, max: usize) -> Self {
        self.max_cached_pages = max;
        self
    }

    pub fn with_cache_ttl(mut self, ttl: Option<Duration>) -> Self {
        self.cache_ttl = ttl;
        self
    }
}
