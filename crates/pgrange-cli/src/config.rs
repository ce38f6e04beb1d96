use pgrange::{FormatOptions, RangeType};
use serde::Deserialize;
use std::path::Path;

/// Display cap on fractional digits accepted from the config file.
const MAX_FLOAT_PRECISION: usize = 17;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ConfigFile {
    pub version: String,

    #[serde(default)]
    pub defaults: DefaultsConfig,

    #[serde(default)]
    pub format: FormatConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DefaultsConfig {
    #[serde(rename = "type", default = "default_range_type")]
    pub range_type: RangeType,
}

fn default_range_type() -> RangeType {
    RangeType::Int4Range
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            range_type: default_range_type(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FormatConfig {
    #[serde(default = "default_float_precision")]
    pub float_precision: usize,
}

fn default_float_precision() -> usize {
    pgrange::text::DEFAULT_FLOAT_PRECISION
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            float_precision: default_float_precision(),
        }
    }
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            version: "1".to_string(),
            defaults: DefaultsConfig::default(),
            format: FormatConfig::default(),
        }
    }
}

impl ConfigFile {
    /// Load `path`. A missing file yields defaults unless `explicit` is set.
    pub fn load(path: &Path, explicit: bool) -> anyhow::Result<Self> {
        if !explicit && !path.exists() {
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        Self::from_toml(&raw)
            .map_err(|e| anyhow::anyhow!("failed to parse config file {}: {e:#}", path.display()))
    }

    pub fn from_toml(raw: &str) -> anyhow::Result<Self> {
        let file: ConfigFile = toml::from_str(raw)?;
        file.validate()?;
        Ok(file)
    }

    fn validate(&self) -> anyhow::Result<()> {
        if self.version != "1" {
            anyhow::bail!("unsupported config version: {}", self.version);
        }
        if self.format.float_precision > MAX_FLOAT_PRECISION {
            anyhow::bail!(
                "format.float_precision must be at most {MAX_FLOAT_PRECISION}, got {}",
                self.format.float_precision
            );
        }
        Ok(())
    }

    pub fn format_options(&self) -> FormatOptions {
        FormatOptions::new().with_float_precision(self.format.float_precision)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_config() {
        let cfg = ConfigFile::from_toml(
            r#"
version = "1"

[defaults]
type = "numrange"

[format]
float_precision = 3
"#,
        )
        .unwrap();
        assert_eq!(cfg.defaults.range_type, RangeType::NumRange);
        assert_eq!(cfg.format_options().float_precision, 3);
    }

    #[test]
    fn minimal_config_uses_defaults() {
        let cfg = ConfigFile::from_toml("version = \"1\"\n").unwrap();
        assert_eq!(cfg, ConfigFile::default());
        assert_eq!(cfg.defaults.range_type, RangeType::Int4Range);
        assert_eq!(cfg.format.float_precision, 6);
    }

    #[test]
    fn invalid_configs() {
        assert!(ConfigFile::from_toml("version = \"2\"\n").is_err());
        assert!(ConfigFile::from_toml("[defaults]\ntype = \"numrange\"\n").is_err());
        assert!(ConfigFile::from_toml("version = \"1\"\n[defaults]\ntype = \"tsrange\"\n").is_err());
        assert!(ConfigFile::from_toml("version = \"1\"\n[format]\nfloat_precision = 40\n").is_err());
    }

    #[test]
    fn precision_cap_is_inclusive() {
        let at_cap = format!("version = \"1\"\n[format]\nfloat_precision = {MAX_FLOAT_PRECISION}\n");
        assert!(ConfigFile::from_toml(&at_cap).is_ok());
        let over = format!("version = \"1\"\n[format]\nfloat_precision = {}\n", MAX_FLOAT_PRECISION + 1);
        assert!(ConfigFile::from_toml(&over).is_err());
    }

    #[test]
    fn missing_file() {
        let path = Path::new("definitely/not/here/pgrange.toml");
        assert_eq!(ConfigFile::load(path, false).unwrap(), ConfigFile::default());
        assert!(ConfigFile::load(path, true).is_err());
    }
}
