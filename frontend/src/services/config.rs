use crate::chart::CanvasSize;

/// Used when `FITNESS_API_BASE_URL` is not set at build time
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";

/// How long success/error banners stay visible
pub const DEFAULT_FLASH_TIMEOUT_MS: u32 = 3_000;

/// Frontend settings. The API location is baked in at compile time since the
/// bundle has no runtime environment to read from.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub chart_canvas: CanvasSize,
    pub flash_timeout_ms: u32,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::with_base_url(option_env!("FITNESS_API_BASE_URL").unwrap_or(DEFAULT_API_BASE_URL))
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            api_base_url: normalize_base_url(base_url),
            chart_canvas: CanvasSize::default(),
            flash_timeout_ms: DEFAULT_FLASH_TIMEOUT_MS,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Trim whitespace and trailing slashes so paths can be appended with `/`
pub fn normalize_base_url(base_url: &str) -> String {
    let trimmed = base_url.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_API_BASE_URL.to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base_url() {
        assert_eq!(normalize_base_url("http://api.local/api/"), "http://api.local/api");
        assert_eq!(normalize_base_url("  http://api.local//  "), "http://api.local");
        assert_eq!(normalize_base_url(""), DEFAULT_API_BASE_URL);
        assert_eq!(normalize_base_url("/"), DEFAULT_API_BASE_URL);
    }

    #[test]
    fn test_with_base_url_uses_default_chart_size() {
        let config = AppConfig::with_base_url("http://example.test/api/");
        assert_eq!(config.api_base_url, "http://example.test/api");
        assert_eq!(config.chart_canvas, CanvasSize::new(800.0, 400.0));
        assert_eq!(config.flash_timeout_ms, 3_000);
    }
}
