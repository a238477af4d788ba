use std::fs;
use std::path::Path;

use error::Error;
use serde::{Deserialize, Serialize};

use crate::features::{FeatureConfig, FeatureKind};
use crate::limits::Limits;
use crate::rules::RuleConfig;
use crate::tokens::TokenConfig;

/// The default bundle, baked into the binary so the core can start without
/// any filesystem dependency, in the manner of the teacher's embedded SQL
/// and resource assets (`include_str!`).
const DEFAULT_CONFIG_JSON: &str = include_str!("../assets/default_config.json");

/// The single immutable configuration bundle loaded at startup (§4.6). Never
/// mutated after [`Config::load`] returns; shared read-only across every
/// query for the process lifetime.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    pub features: Vec<FeatureConfig>,
    pub rules: RuleConfig,
    pub tokens: TokenConfig,
    pub limits: Limits,
}

impl Config {
    /// Load the embedded default bundle.
    pub fn load_default() -> Result<Config, Error> {
        let config: Config = serde_json::from_str(DEFAULT_CONFIG_JSON)
            .map_err(|e| Error::InvalidConfiguration(format!("embedded default config: {e}")))?;
        config.validate()?;
        log::info!("loaded embedded default configuration");
        Ok(config)
    }

    /// Load and validate a bundle from a JSON file, wholesale replacing the
    /// embedded default (§4.6: "MAY be overridden wholesale by a file path").
    pub fn load_from_path(path: &Path) -> Result<Config, Error> {
        let raw = fs::read_to_string(path).map_err(|e| {
            Error::InvalidConfiguration(format!("reading config file {}: {e}", path.display()))
        })?;
        let config: Config = serde_json::from_str(&raw).map_err(|e| {
            Error::InvalidConfiguration(format!("parsing config file {}: {e}", path.display()))
        })?;
        config.validate()?;
        log::info!("loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Reject a bundle whose shape can't possibly serve queries correctly.
    /// Runs once at startup, before any query is accepted (§4.4.4, §4.6).
    fn validate(&self) -> Result<(), Error> {
        if self.limits.default_result_cap == 0 {
            return Err(Error::InvalidConfiguration(
                "limits.defaultResultCap must be >= 1".into(),
            ));
        }
        if self.limits.query_length_cap == 0 {
            return Err(Error::InvalidConfiguration(
                "limits.queryLengthCap must be >= 1".into(),
            ));
        }
        if self.limits.kanji_short_max_len == 0 {
            return Err(Error::InvalidConfiguration(
                "limits.kanjiShortMaxLen must be >= 1".into(),
            ));
        }

        for wanted in FeatureKind::ALL {
            if !self.features.iter().any(|f| f.kind == wanted) {
                return Err(Error::InvalidConfiguration(format!(
                    "missing feature configuration for {wanted}"
                )));
            }
        }
        for feature in &self.features {
            let (min, max) = feature.kind.range();
            if feature.min_score != min || feature.max_score != max {
                return Err(Error::InvalidConfiguration(format!(
                    "feature {} declares range [{}, {}], expected [{}, {}]",
                    feature.kind, feature.min_score, feature.max_score, min, max
                )));
            }
            if !feature.weight.is_finite() || feature.weight < 0.0 {
                return Err(Error::InvalidConfiguration(format!(
                    "feature {} has an invalid weight {}",
                    feature.kind, feature.weight
                )));
            }
        }

        if self.rules.enabled.is_empty() {
            return Err(Error::InvalidConfiguration(
                "rules.enabled must list at least one hard rule".into(),
            ));
        }

        Ok(())
    }

    pub fn feature(&self, kind: FeatureKind) -> Option<&FeatureConfig> {
        self.features.iter().find(|f| f.kind == kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_default_loads_and_validates() {
        let config = Config::load_default().expect("embedded config must be valid");
        assert_eq!(config.features.len(), FeatureKind::ALL.len());
        assert!(!config.tokens.english_allowlist.is_empty());
        assert!(config.tokens.is_particle("wa"));
        assert!(config.tokens.is_allowlisted_english("eat"));
    }

    #[test]
    fn rejects_zero_result_cap() {
        let mut config = Config::load_default().unwrap();
        config.limits.default_result_cap = 0;
        let raw = serde_json::to_string(&config).unwrap();
        let reloaded: Config = serde_json::from_str(&raw).unwrap();
        assert!(reloaded.validate().is_err());
    }
}
