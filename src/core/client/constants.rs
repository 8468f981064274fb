//! Centralized constants for default endpoints and UA.

/// Default UA sent with every request.
pub(crate) const USER_AGENT: &str = concat!("iex-rs/", env!("CARGO_PKG_VERSION"));

/// IEX API base (`stock/...` paths are appended).
pub(crate) const DEFAULT_BASE_URL: &str = "https://api.iextrading.com/1.0/";
