pub mod config;
pub mod features;
pub mod limits;
pub mod rules;
pub mod tokens;

pub use config::Config;
pub use features::{FeatureConfig, FeatureKind, FrequencyShape};
pub use limits::Limits;
pub use rules::{HardRuleTag, RuleConfig};
pub use tokens::TokenConfig;
