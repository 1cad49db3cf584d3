//! Site configuration.
//!
//! Loads optional `officewise.toml` from the project root. Every key is
//! optional; the defaults are the published OfficeWise endpoints.

use std::path::Path;

use chrono::Datelike;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::SiteError;

/// File name looked up by [`SiteConfig::load`].
pub const CONFIG_FILE: &str = "officewise.toml";

/// Default scheduling page opened by the call-to-action buttons.
pub const DEFAULT_SCHEDULING_URL: &str = "https://calendly.com/ayesha-officewise/30min";

/// Default third-party form-collection endpoint.
pub const DEFAULT_FORM_ACTION: &str = "https://formspree.io/f/xandrnaq";

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// External scheduling page, opened in a new browsing context
    pub scheduling_url: String,
    /// Form-collection endpoint the contact form POSTs to
    pub form_action: String,
    /// Document `<title>`
    pub title: String,
    /// `<meta name="description">` text
    pub description: String,
    /// Document language
    pub lang: String,
    /// Year shown in the footer. Falls back to the current UTC year.
    pub copyright_year: Option<i32>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            scheduling_url: DEFAULT_SCHEDULING_URL.into(),
            form_action: DEFAULT_FORM_ACTION.into(),
            title: "OfficeWise AI | Practical AI automation".into(),
            description: "OfficeWise helps small and mid-size teams deploy practical AI \
                          automations: workflow audits, integrations, and reliable agents."
                .into(),
            lang: "en".into(),
            copyright_year: None,
        }
    }
}

impl SiteConfig {
    /// Load config from `officewise.toml` in the given root directory.
    /// Returns default config if file doesn't exist or is invalid.
    pub fn load(root: &Path) -> Self {
        let config_path = root.join(CONFIG_FILE);
        if !config_path.exists() {
            return Self::default();
        }

        match Self::from_path(&config_path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("{e}; using default config");
                Self::default()
            }
        }
    }

    /// Load config from a specific path.
    ///
    /// Unknown keys are a parse error.
    pub fn from_path(path: &Path) -> Result<Self, SiteError> {
        load_toml(path)
    }

    /// Check that both outbound URLs are absolute http(s) URLs.
    pub fn validate(&self) -> Result<(), SiteError> {
        match self.url_errors().into_iter().next() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Every URL problem, not just the first.
    pub fn url_errors(&self) -> Vec<SiteError> {
        [
            ("scheduling_url", &self.scheduling_url),
            ("form_action", &self.form_action),
        ]
        .into_iter()
        .filter_map(|(field, value)| parse_http_url(field, value).err())
        .collect()
    }

    /// Origin of the form endpoint, used for the CSP `form-action` directive.
    ///
    /// `None` when the endpoint is not a valid http(s) URL.
    pub fn form_origin(&self) -> Option<String> {
        parse_http_url("form_action", &self.form_action)
            .ok()
            .map(|url| url.origin().ascii_serialization())
    }

    /// Footer year.
    pub fn year(&self) -> i32 {
        self.copyright_year
            .unwrap_or_else(|| chrono::Utc::now().year())
    }
}

/// Read and deserialize a TOML file, tagging failures with its path.
pub(crate) fn load_toml<T: DeserializeOwned>(path: &Path) -> Result<T, SiteError> {
    let raw = std::fs::read_to_string(path).map_err(|source| SiteError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&raw).map_err(|source| SiteError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_http_url(field: &'static str, value: &str) -> Result<Url, SiteError> {
    let invalid = |reason: String| SiteError::InvalidUrl {
        field,
        value: value.to_string(),
        reason,
    };
    let url = Url::parse(value).map_err(|e| invalid(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(invalid(format!("unsupported scheme `{other}`"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.scheduling_url, DEFAULT_SCHEDULING_URL);
        assert_eq!(config.form_action, DEFAULT_FORM_ACTION);
        assert_eq!(config.lang, "en");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().expect("temp dir");
        let config = SiteConfig::load(temp.path());
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn test_load_partial_config() {
        let temp = TempDir::new().expect("temp dir");
        let mut file = std::fs::File::create(temp.path().join(CONFIG_FILE)).expect("create config");
        writeln!(
            file,
            r#"
form_action = "https://forms.example.com/f/abc"
copyright_year = 2025
"#
        )
        .expect("write config");

        let config = SiteConfig::load(temp.path());
        assert_eq!(config.form_action, "https://forms.example.com/f/abc");
        assert_eq!(config.copyright_year, Some(2025));
        assert_eq!(config.year(), 2025);
        assert_eq!(config.scheduling_url, DEFAULT_SCHEDULING_URL);
    }

    #[test]
    fn test_load_invalid_toml_falls_back() {
        let temp = TempDir::new().expect("temp dir");
        std::fs::write(temp.path().join(CONFIG_FILE), "form_action = ").expect("write config");

        let config = SiteConfig::load(temp.path());
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn test_from_path_reports_parse_error() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join(CONFIG_FILE);
        std::fs::write(&path, "copyright_year = \"soon\"").expect("write config");

        let err = SiteConfig::from_path(&path).unwrap_err();
        assert!(matches!(err, SiteError::Parse { .. }));
    }

    #[test]
    fn test_from_path_rejects_unknown_key() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join(CONFIG_FILE);
        std::fs::write(&path, "form_acton = \"https://forms.example.com/f/abc\"\n")
            .expect("write config");

        let err = SiteConfig::from_path(&path).unwrap_err();
        assert!(matches!(err, SiteError::Parse { .. }));
        assert!(err.to_string().contains("form_acton"));
    }

    #[test]
    fn test_load_toml_reports_read_error() {
        let temp = TempDir::new().expect("temp dir");
        let err = load_toml::<SiteConfig>(&temp.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, SiteError::Read { .. }));
    }

    #[test]
    fn test_validate_rejects_relative_url() {
        let config = SiteConfig {
            form_action: "/submit".into(),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            SiteError::InvalidUrl {
                field: "form_action",
                ..
            }
        ));
    }

    #[test]
    fn test_validate_rejects_non_http_scheme() {
        let config = SiteConfig {
            scheduling_url: "mailto:hello@officewise.ai".into(),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("unsupported scheme `mailto`"));
    }

    #[test]
    fn test_url_errors_reports_both_fields() {
        let config = SiteConfig {
            scheduling_url: "calendly".into(),
            form_action: "ftp://forms.example.com".into(),
            ..Default::default()
        };
        let errors = config.url_errors();
        assert_eq!(errors.len(), 2);
        assert!(errors[0].to_string().starts_with("invalid scheduling_url"));
        assert!(errors[1].to_string().starts_with("invalid form_action"));
    }

    #[test]
    fn test_form_origin() {
        let config = SiteConfig::default();
        assert_eq!(config.form_origin().as_deref(), Some("https://formspree.io"));

        let broken = SiteConfig {
            form_action: "not a url".into(),
            ..Default::default()
        };
        assert_eq!(broken.form_origin(), None);
    }
}
