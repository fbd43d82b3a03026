// Upstream catalogue
pub const CANONICAL_HOST: &str = "swapi.dev";
pub const DEFAULT_HOST: &str = CANONICAL_HOST;
pub const DEFAULT_SCHEME: &str = "https";
pub const API_NAMESPACE: &str = "/api";
pub const PEOPLE_URI: &str = "/people/";

// Environment overrides for mirrored deployments
pub const HOST_ENV_VAR: &str = "HOLONET_HOST";
pub const SCHEME_ENV_VAR: &str = "HOLONET_SCHEME";

// HTTP client
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

// Error reporting
pub const ERROR_BODY_EXCERPT_LEN: usize = 120;
