use crate::core::pages::DEFAULT_SITE_NAME;
use crate::core::ConfigProvider;
use crate::utils::error::{PagesError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

const DEFAULT_TIMEOUT_SECONDS: u64 = 10;
const DEFAULT_PHONE_PREFIX: &str = "+55";
const DEFAULT_COHORT_SLUG: &str = "atual";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub site: SiteSection,
    #[serde(default)]
    pub subscription: SubscriptionConfig,
    #[serde(default)]
    pub cohort: CohortConfig,
    #[serde(default)]
    pub phone: PhoneConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteSection {
    pub name: Option<String>,
    pub templates_dir: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubscriptionConfig {
    pub endpoint: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CohortConfig {
    pub slug: String,
}

impl Default for CohortConfig {
    fn default() -> Self {
        Self {
            slug: DEFAULT_COHORT_SLUG.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PhoneConfig {
    pub country_prefix: Option<String>,
}

impl SiteConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(PagesError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        // 處理環境變數替換
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| PagesError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${BROKER_URL})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| PagesError::ConfigError {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        if let Some(endpoint) = &self.subscription.endpoint {
            validation::validate_url("subscription.endpoint", endpoint)?;
        }

        if let Some(timeout) = self.subscription.timeout_seconds {
            validation::validate_positive_number("subscription.timeout_seconds", timeout, 1)?;
        }

        if let Some(dir) = &self.site.templates_dir {
            validation::validate_path("site.templates_dir", dir)?;
        }

        validation::validate_non_empty_string("cohort.slug", &self.cohort.slug)?;
        validation::validate_phone_prefix("phone.country_prefix", self.phone_prefix())?;

        Ok(())
    }

    pub fn site_name(&self) -> &str {
        self.site.name.as_deref().unwrap_or(DEFAULT_SITE_NAME)
    }

    pub fn phone_prefix(&self) -> &str {
        self.phone
            .country_prefix
            .as_deref()
            .unwrap_or(DEFAULT_PHONE_PREFIX)
    }
}

impl ConfigProvider for SiteConfig {
    fn subscription_endpoint(&self) -> Option<&str> {
        self.subscription.endpoint.as_deref()
    }

    fn subscription_timeout_seconds(&self) -> u64 {
        self.subscription
            .timeout_seconds
            .unwrap_or(DEFAULT_TIMEOUT_SECONDS)
    }

    fn cohort_slug(&self) -> &str {
        &self.cohort.slug
    }

    fn phone_prefix(&self) -> &str {
        SiteConfig::phone_prefix(self)
    }

    fn site_name(&self) -> &str {
        SiteConfig::site_name(self)
    }

    fn templates_dir(&self) -> Option<&str> {
        self.site.templates_dir.as_deref()
    }
}

impl Validate for SiteConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[site]
name = "Python Pro"
templates_dir = "./templates"

[subscription]
endpoint = "https://broker.example.com/tasks/subscribe"
timeout_seconds = 3

[cohort]
slug = "2024-05"

[phone]
country_prefix = "+351"
"#;

        let config = SiteConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(ConfigProvider::site_name(&config), "Python Pro");
        assert_eq!(
            config.subscription_endpoint(),
            Some("https://broker.example.com/tasks/subscribe")
        );
        assert_eq!(config.subscription_timeout_seconds(), 3);
        assert_eq!(config.cohort_slug(), "2024-05");
        assert_eq!(ConfigProvider::phone_prefix(&config), "+351");
        assert_eq!(config.templates_dir(), Some("./templates"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = SiteConfig::from_toml_str("").unwrap();

        assert_eq!(config.subscription_endpoint(), None);
        assert_eq!(config.subscription_timeout_seconds(), 10);
        assert_eq!(config.cohort_slug(), "atual");
        assert_eq!(config.phone_prefix(), "+55");
        assert_eq!(config.site_name(), "Python Pro");
        assert!(config.validate().is_ok());
        assert!(SiteConfig::default().validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("PAGES_TEST_BROKER", "https://broker.test");

        let toml_content = r#"
[subscription]
endpoint = "${PAGES_TEST_BROKER}"
"#;

        let config = SiteConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.subscription_endpoint(), Some("https://broker.test"));

        std::env::remove_var("PAGES_TEST_BROKER");
    }

    #[test]
    fn test_example_config_is_valid() {
        // 範例檔不依賴任何環境變數
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/pages.example.toml");
        let config = SiteConfig::from_file(path).unwrap();

        assert_eq!(config.subscription_endpoint(), None);
        assert_eq!(config.cohort_slug(), "atual");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let bad_endpoint = SiteConfig::from_toml_str(
            r#"
[subscription]
endpoint = "invalid-url"
"#,
        )
        .unwrap();
        assert!(bad_endpoint.validate().is_err());

        let bad_slug = SiteConfig::from_toml_str(
            r#"
[cohort]
slug = "  "
"#,
        )
        .unwrap();
        assert!(bad_slug.validate().is_err());

        let bad_prefix = SiteConfig::from_toml_str(
            r#"
[phone]
country_prefix = "55"
"#,
        )
        .unwrap();
        assert!(bad_prefix.validate().is_err());
    }

    #[test]
    fn test_invalid_toml_is_reported() {
        let err = SiteConfig::from_toml_str("[cohort\nslug = 1").unwrap_err();
        assert!(matches!(err, PagesError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[cohort]
slug = "file-cohort"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = SiteConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.cohort_slug(), "file-cohort");
    }
}
