//! Configuration for the index callbacks.
use serde::de::Error;

/// Settings the host passes in explicitly at construction time.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Validate every incoming cell identifier and reject malformed ones
    /// instead of treating them as unrelated to everything.
    #[serde(default)]
    pub strict: bool,

    /// Largest page the splitter accepts. Seed selection is quadratic in this.
    #[serde(default = "Config::default_max_split_entries")]
    pub max_split_entries: usize,
}

impl Config {
    const fn default_max_split_entries() -> usize {
        4096
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn with_max_split_entries(mut self, max_entries: usize) -> Self {
        assert!(max_entries >= 2, "Max split entries must be at least 2");

        if max_entries > 65_536 {
            log::warn!(
                "Max split entries of {} is very large; seed selection compares every pair \
                of entries in a page.",
                max_entries
            );
        }

        self.max_split_entries = max_entries;
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.max_split_entries < 2 {
            return Err("Max split entries must be at least 2".to_string());
        }

        Ok(())
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let config: Config = serde_json::from_str(json)?;
        if let Err(e) = config.validate() {
            return Err(Error::custom(e));
        }
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    #[cfg(feature = "toml")]
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let config: Config = toml::from_str(toml_str)?;
        if let Err(e) = config.validate() {
            return Err(toml::de::Error::custom(e));
        }
        Ok(config)
    }

    #[cfg(feature = "toml")]
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            strict: false,
            max_split_entries: Self::default_max_split_entries(),
        }
    }
}
