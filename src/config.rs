use serde::{Deserialize, Serialize};

const EMBEDDED_CONFIG: &str = include_str!("../assets/shell.json");

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse shell config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid shell config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FooterLink {
    pub label: String,
    pub href: String,
}

/// Branding and footer text for the shell. Missing fields fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    pub brand_name: String,
    pub tagline: String,
    pub footer_blurb: String,
    pub footer_links: Vec<FooterLink>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            brand_name: "BaseDEX".to_string(),
            tagline: "Trade on Base".to_string(),
            footer_blurb: "BaseDEX - Decentralized Trading on Base Network".to_string(),
            footer_links: ["Docs", "Discord", "Twitter"]
                .into_iter()
                .map(|label| FooterLink { label: label.to_string(), href: "#".to_string() })
                .collect(),
        }
    }
}

impl ShellConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: ShellConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Parses the config bundled at compile time, falling back to defaults on error.
    pub fn load() -> Self {
        match Self::from_json(EMBEDDED_CONFIG) {
            Ok(config) => config,
            Err(e) => {
                tracing::error!("{e}; using default shell config");
                Self::default()
            }
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.brand_name.trim().is_empty() {
            return Err(ConfigError::Invalid("brand_name is empty".to_string()));
        }
        if let Some(link) = self.footer_links.iter().find(|l| l.href.is_empty()) {
            return Err(ConfigError::Invalid(format!("footer link {:?} has no href", link.label)));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_parses() {
        let config = ShellConfig::from_json(EMBEDDED_CONFIG).expect("embedded config must parse");
        assert_eq!(config.brand_name, "BaseDEX");
        let labels: Vec<_> = config.footer_links.iter().map(|l| l.label.as_str()).collect();
        assert_eq!(labels, vec!["Docs", "Discord", "Twitter"]);
        assert_eq!(ShellConfig::load(), config);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = ShellConfig::from_json(r#"{ "tagline": "Trade anywhere" }"#).unwrap();
        assert_eq!(config.tagline, "Trade anywhere");
        assert_eq!(config.brand_name, ShellConfig::default().brand_name);
        assert_eq!(config.footer_links.len(), 3);
    }

    #[test]
    fn test_rejects_empty_brand() {
        let err = ShellConfig::from_json(r#"{ "brand_name": "  " }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)), "got {err:?}");
    }

    #[test]
    fn test_rejects_link_without_href() {
        let json = r#"{ "footer_links": [{ "label": "Docs", "href": "" }] }"#;
        assert!(matches!(ShellConfig::from_json(json), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        assert!(matches!(ShellConfig::from_json("{ not json"), Err(ConfigError::Parse(_))));
    }
}
