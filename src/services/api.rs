use crate::models::{
    error::AppError,
    forecast::{Forecast, ForecastGroup},
};

// CONSTANTS
const BASE_URL: &str = "https://www.jma.go.jp/bosai/forecast/data/forecast";

/// Kanto-region prefectures selectable in the panel.
/// Each carries the JMA office code used in forecast URLs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Area {
    /// 東京
    #[default]
    Tokyo,
    /// 神奈川
    Kanagawa,
    /// 千葉
    Chiba,
    /// 埼玉
    Saitama,
    /// 茨城
    Ibaraki,
    /// 栃木
    Tochigi,
    /// 群馬
    Gunma,
}

impl Area {
    /// Returns the JMA office code used in forecast URLs.
    pub fn code(&self) -> &'static str {
        match self {
            Area::Tokyo => "130000",
            Area::Kanagawa => "140000",
            Area::Chiba => "120000",
            Area::Saitama => "110000",
            Area::Ibaraki => "080000",
            Area::Tochigi => "090000",
            Area::Gunma => "100000",
        }
    }

    /// Returns the Japanese display name shown on the tab.
    pub fn name(&self) -> &'static str {
        match self {
            Area::Tokyo => "東京",
            Area::Kanagawa => "神奈川",
            Area::Chiba => "千葉",
            Area::Saitama => "埼玉",
            Area::Ibaraki => "茨城",
            Area::Tochigi => "栃木",
            Area::Gunma => "群馬",
        }
    }

    /// All selectable areas, in tab display order.
    pub fn all() -> &'static [Area] {
        &[
            Area::Tokyo,
            Area::Kanagawa,
            Area::Chiba,
            Area::Saitama,
            Area::Ibaraki,
            Area::Tochigi,
            Area::Gunma,
        ]
    }
}

impl std::fmt::Display for Area {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name(), self.code())
    }
}

impl std::str::FromStr for Area {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Area::all()
            .iter()
            .find(|area| area.code() == s)
            .copied()
            .ok_or_else(|| AppError::UnknownArea(s.to_string()))
    }
}

// API CONFIGURATION
/// Configuration for the JMA forecast client.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Creates a builder for constructing an `ApiConfig`.
    pub fn builder() -> ApiConfigBuilder {
        ApiConfigBuilder::default()
    }

    /// Constructs the full forecast URL for an area.
    pub fn forecast_url(&self, area: Area) -> String {
        format!("{}/{}.json", self.base_url, area.code())
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfigBuilder::default().build()
    }
}

/// Builder for constructing an `ApiConfig` with custom settings.
#[derive(Debug, Default)]
pub struct ApiConfigBuilder {
    base_url: Option<String>,
}

impl ApiConfigBuilder {
    /// Sets a custom base URL (primarily for testing).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Builds the `ApiConfig`.
    pub fn build(self) -> ApiConfig {
        ApiConfig {
            base_url: self.base_url.unwrap_or_else(|| BASE_URL.to_string()),
        }
    }
}

// JMA CLIENT
/// HTTP client for the JMA forecast endpoint.
pub struct JmaClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl JmaClient {
    /// Creates a new client with default configuration.
    pub fn new() -> Result<Self, AppError> {
        Self::with_config(ApiConfig::default())
    }

    /// Creates a new client with the specified configuration.
    pub fn with_config(config: ApiConfig) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::Config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { http, config })
    }

    /// Returns a reference to the client's configuration.
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Fetches the forecast document for one area. Issues exactly one GET;
    /// no retry, no cache.
    pub async fn fetch_forecast(&self, area: Area) -> Result<Forecast, AppError> {
        let url = self.config.forecast_url(area);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| Self::classify_error(&e))?;

        if !response.status().is_success() {
            return Err(AppError::Communication);
        }

        let groups: Vec<ForecastGroup> = response
            .json()
            .await
            .map_err(|e| AppError::Parse(e.to_string()))?;

        Ok(Forecast::new(groups))
    }

    /// Converts a reqwest error into an appropriate AppError.
    fn classify_error(error: &reqwest::Error) -> AppError {
        if error.is_timeout() {
            AppError::Network(format!("request timeout: {error}"))
        } else if error.is_request() {
            AppError::Network(format!("request error: {error}"))
        } else {
            AppError::Network(error.to_string())
        }
    }
}

impl Default for JmaClient {
    fn default() -> Self {
        Self::new().expect("Failed to create default client")
    }
}

// CONVENIENCE FUNCTIONS
/// Fetches the forecast for an area using default configuration.
pub async fn fetch_forecast_for_area(area: Area) -> Result<Forecast, AppError> {
    JmaClient::new()?.fetch_forecast(area).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_area_parsing() {
        assert_eq!("130000".parse::<Area>().unwrap(), Area::Tokyo);
        assert_eq!("100000".parse::<Area>().unwrap(), Area::Gunma);
        assert!("999999".parse::<Area>().is_err());
    }

    #[test]
    fn test_area_code_and_name() {
        assert_eq!(Area::Tokyo.code(), "130000");
        assert_eq!(Area::Kanagawa.name(), "神奈川");
    }

    #[test]
    fn test_all_areas_order() {
        let areas = Area::all();
        assert_eq!(areas.len(), 7);

        // Tab order starts with Tokyo and ends with Gunma
        assert_eq!(areas[0], Area::Tokyo);
        assert_eq!(areas[6], Area::Gunma);
    }

    #[test]
    fn test_default_area() {
        assert_eq!(Area::default(), Area::Tokyo);
    }

    #[test]
    fn test_forecast_url_construction() {
        let config = ApiConfig::builder().build();
        assert_eq!(
            config.forecast_url(Area::Chiba),
            "https://www.jma.go.jp/bosai/forecast/data/forecast/120000.json"
        );
    }

    #[test]
    fn test_client_exposes_config() {
        let config = ApiConfig::builder()
            .base_url("http://localhost:9/forecast")
            .build();
        let client = JmaClient::with_config(config).unwrap();
        assert_eq!(
            client.config().forecast_url(Area::Gunma),
            "http://localhost:9/forecast/100000.json"
        );
    }

    #[test]
    fn test_forecast_url_custom_base() {
        let config = ApiConfig::builder()
            .base_url("http://localhost:8080/forecast")
            .build();
        assert_eq!(
            config.forecast_url(Area::Tokyo),
            "http://localhost:8080/forecast/130000.json"
        );
    }
}
