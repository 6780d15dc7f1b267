//! Configuration I/O (YAML loading)
//!
//! Defines the YAML schema. Loading/merging lives in instrument_config.rs.

use serde::{Deserialize, Serialize};

use super::instrument_config::ShadowPolicy;
use crate::features::parsing::LanguageId;

/// Schema versions this build understands
pub const SUPPORTED_VERSIONS: &[u32] = &[1];

/// YAML Schema v1. Every field except `version` is optional and falls
/// back to the default configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFileV1 {
    /// Schema version (always 1 for v1). Optional here so a missing value
    /// is reported as `MissingVersion` instead of a serde error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub constructor_names: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow_policy: Option<ShadowPolicy>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier_prefix: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<LanguageId>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub verify_output: Option<bool>,
}
