use crate::shared::api_utils::{api_base, trim_base};

/// Build-time endpoint settings for the contact client.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientConfig {
    /// `CONTACT_API_BASE`
    pub primary: Option<String>,
    /// `CONTACT_API_FALLBACK`
    pub fallback: Option<String>,
}

impl ClientConfig {
    /// Read the compile-time variables. Called once per submission, never cached.
    pub fn from_env() -> Self {
        Self::from_values(option_env!("CONTACT_API_BASE"), option_env!("CONTACT_API_FALLBACK"))
    }

    pub fn from_values(primary: Option<&str>, fallback: Option<&str>) -> Self {
        let clean = |value: Option<&str>| {
            value
                .map(|v| trim_base(v.trim()).to_string())
                .filter(|v| !v.is_empty())
        };
        Self {
            primary: clean(primary),
            fallback: clean(fallback),
        }
    }

    /// Primary base for the current page.
    pub fn primary_base(&self) -> String {
        api_base(self.primary.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_values_are_unset() {
        let config = ClientConfig::from_values(Some("  "), Some(""));
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn test_values_are_trimmed() {
        let config = ClientConfig::from_values(
            Some(" https://api.example.com/ "),
            Some("https://backup.example.com//"),
        );
        assert_eq!(config.primary.as_deref(), Some("https://api.example.com"));
        assert_eq!(config.fallback.as_deref(), Some("https://backup.example.com"));
    }
}
