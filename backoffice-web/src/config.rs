//! Frontend configuration module
//!
//! Settings are baked in at build time through environment variables so the
//! compiled bundle needs no runtime config endpoint.

/// Page size used when `BACKOFFICE_PAGE_SIZE` is unset or invalid.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Frontend configuration for the API location and list defaults
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontendConfig {
    /// API base URL as configured; may be empty or relative.
    pub api_base_url: String,
    /// Initial page size for every paginated list.
    pub default_page_size: u32,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            api_base_url: option_env!("BACKOFFICE_API_BASE_URL")
                .unwrap_or_default()
                .to_string(),
            default_page_size: parse_page_size(option_env!("BACKOFFICE_PAGE_SIZE")),
        }
    }
}

impl FrontendConfig {
    /// Create a new frontend configuration instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Absolute API base URL, resolved against the page origin when the
    /// configured value is empty or relative.
    pub fn api_base_url(&self) -> String {
        let origin = web_sys::window().and_then(|window| window.location().origin().ok());
        resolve_base_url(&self.api_base_url, origin.as_deref())
    }

    /// Initial page size for lists.
    pub fn default_page_size(&self) -> u32 {
        self.default_page_size
    }
}

/// Join a configured base URL with the page origin.
///
/// Absolute URLs win. Without an origin a relative base is returned as is.
/// The result never ends with a slash.
pub fn resolve_base_url(configured: &str, origin: Option<&str>) -> String {
    let configured = configured.trim().trim_end_matches('/');
    if configured.starts_with("http://") || configured.starts_with("https://") {
        return configured.to_string();
    }
    let origin = origin.unwrap_or_default().trim_end_matches('/');
    if configured.is_empty() {
        return origin.to_string();
    }
    format!("{origin}/{}", configured.trim_start_matches('/'))
}

fn parse_page_size(raw: Option<&str>) -> u32 {
    raw.and_then(|value| value.trim().parse::<u32>().ok())
        .filter(|size| *size > 0)
        .unwrap_or(DEFAULT_PAGE_SIZE)
}
