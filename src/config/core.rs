use serde::{Deserialize, Serialize};
use std::fmt;

use crate::ordering::OrderingRule;

/// How members of type extensions relate to the extended type.
///
/// The value is recorded and reported; reordering never crosses an
/// extension boundary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtensionStrategy {
    #[default]
    Separate,
    Merge,
}

impl ExtensionStrategy {
    pub fn from_identifier(ident: &str) -> Option<Self> {
        match ident.trim().to_ascii_lowercase().as_str() {
            "separate" => Some(ExtensionStrategy::Separate),
            "merge" => Some(ExtensionStrategy::Merge),
            _ => None,
        }
    }
}

impl fmt::Display for ExtensionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtensionStrategy::Separate => write!(f, "separate"),
            ExtensionStrategy::Merge => write!(f, "merge"),
        }
    }
}

/// Root configuration for one invocation or one directory tree.
///
/// Built once, then shared read-only (behind an `Arc`) by every file task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Configuration {
    pub version: u32,
    /// Never empty; see [`Configuration::with_rules`].
    pub ordering_rules: Vec<OrderingRule>,
    pub extension_strategy: ExtensionStrategy,
    pub respect_extension_boundaries: bool,
}

pub const CURRENT_VERSION: u32 = 1;

impl Default for Configuration {
    fn default() -> Self {
        Self {
            version: CURRENT_VERSION,
            ordering_rules: OrderingRule::default_rules(),
            extension_strategy: ExtensionStrategy::default(),
            respect_extension_boundaries: true,
        }
    }
}

impl Configuration {
    /// Replace the rule list. An empty list falls back to the default rules.
    pub fn with_rules(mut self, rules: Vec<OrderingRule>) -> Self {
        self.ordering_rules = if rules.is_empty() {
            OrderingRule::default_rules()
        } else {
            rules
        };
        self
    }

    pub fn rules(&self) -> &[OrderingRule] {
        &self.ordering_rules
    }
}
