//! Engine configuration.
//!
//! A flat set of named switches and numbers, read-only once the engine is
//! built. Every field has a default so partial JSON documents load.

use std::collections::HashSet;
use std::path::Path;

use claimguard_core::{Material, WorldId};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

/// Configuration for the Engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Fire may ignite from non-tool sources and spread.
    pub fire_spreads: bool,
    /// Fire may destroy unclaimed blocks.
    pub fire_destroys: bool,
    /// Actors may donate items to claimed chests they cannot open.
    pub add_items_to_claimed_chests: bool,
    /// Radius of the automatic first claim; `-1` disables it.
    pub automatic_claim_radius: i32,
    /// How far below the triggering block claims reach.
    pub claims_extend_into_ground_distance: i32,
    /// Chests below this height are not auto-claimed.
    pub max_claim_depth: i32,
    /// Warn about unprotected chests and refuse too-deep auto-claims.
    pub prevent_theft: bool,
    /// Worlds with claiming enabled; `None` means every world.
    pub claims_enabled_worlds: Option<HashSet<WorldId>>,
    /// Dispensers may not empty water/lava buckets into unclaimed space.
    pub block_wilderness_water_buckets: bool,
    /// Remind claim owners when they build outside their claims.
    pub warn_on_build_outside: bool,
    /// Claim creation with the claim tool needs a separate permission.
    pub creation_requires_permission: bool,
    /// Saplings in unclaimed space need solid ground beneath.
    pub block_sky_trees: bool,
    /// Materials that never trigger the outside-claim warning.
    pub trash_blocks: Vec<Material>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            fire_spreads: false,
            fire_destroys: false,
            add_items_to_claimed_chests: true,
            automatic_claim_radius: 4,
            claims_extend_into_ground_distance: 5,
            max_claim_depth: 0,
            prevent_theft: true,
            claims_enabled_worlds: None,
            block_wilderness_water_buckets: true,
            warn_on_build_outside: true,
            creation_requires_permission: false,
            block_sky_trees: true,
            trash_blocks: Material::default_trash(),
        }
    }
}

/// Largest accepted `automatic_claim_radius`.
pub const MAX_AUTOMATIC_CLAIM_RADIUS: i32 = 1024;

/// Largest accepted `claims_extend_into_ground_distance`.
pub const MAX_GROUND_EXTENSION: i32 = 1024;

impl EngineConfig {
    /// Parse and validate a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Reject values the rules cannot work with.
    pub fn validate(&self) -> Result<()> {
        if !(-1..=MAX_AUTOMATIC_CLAIM_RADIUS).contains(&self.automatic_claim_radius) {
            return Err(EngineError::Config(format!(
                "automatic_claim_radius must be between -1 and {}, got {}",
                MAX_AUTOMATIC_CLAIM_RADIUS, self.automatic_claim_radius
            )));
        }
        if !(0..=MAX_GROUND_EXTENSION).contains(&self.claims_extend_into_ground_distance) {
            return Err(EngineError::Config(format!(
                "claims_extend_into_ground_distance must be between 0 and {}, got {}",
                MAX_GROUND_EXTENSION, self.claims_extend_into_ground_distance
            )));
        }
        Ok(())
    }

    pub fn claims_enabled_for(&self, world: &WorldId) -> bool {
        self.claims_enabled_worlds
            .as_ref()
            .map_or(true, |worlds| worlds.contains(world))
    }

    pub fn is_trash(&self, material: &Material) -> bool {
        self.trash_blocks.contains(material)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_are_restrictive() {
        let config = EngineConfig::default();
        assert!(!config.fire_spreads);
        assert!(!config.fire_destroys);
        assert!(config.block_wilderness_water_buckets);
        assert!(config.is_trash(&Material::Cobblestone));
        assert!(!config.is_trash(&Material::Chest));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config =
            EngineConfig::from_json_str(r#"{ "fire_spreads": true, "automatic_claim_radius": 3 }"#)
                .unwrap();
        assert!(config.fire_spreads);
        assert_eq!(config.automatic_claim_radius, 3);
        assert_eq!(config.claims_extend_into_ground_distance, 5);
    }

    #[test]
    fn test_world_allow_list() {
        let config = EngineConfig::from_json_str(r#"{ "claims_enabled_worlds": ["world"] }"#)
            .unwrap();
        assert!(config.claims_enabled_for(&WorldId::new("world")));
        assert!(!config.claims_enabled_for(&WorldId::new("nether")));
        assert!(EngineConfig::default().claims_enabled_for(&WorldId::new("nether")));
    }

    #[test]
    fn test_out_of_range_values_rejected() {
        let err = EngineConfig::from_json_str(r#"{ "automatic_claim_radius": -2 }"#).unwrap_err();
        assert!(matches!(err, EngineError::Config(_)));

        let err = EngineConfig::from_json_str(r#"{ "claims_extend_into_ground_distance": -1 }"#)
            .unwrap_err();
        assert!(matches!(err, EngineError::Config(_)));
    }

    #[test]
    fn test_oversized_values_rejected() {
        let huge_radius = EngineConfig {
            automatic_claim_radius: i32::MAX,
            ..EngineConfig::default()
        };
        assert!(matches!(huge_radius.validate(), Err(EngineError::Config(_))));

        let huge_depth = EngineConfig {
            claims_extend_into_ground_distance: MAX_GROUND_EXTENSION + 1,
            ..EngineConfig::default()
        };
        assert!(matches!(huge_depth.validate(), Err(EngineError::Config(_))));

        let edge = EngineConfig {
            automatic_claim_radius: MAX_AUTOMATIC_CLAIM_RADIUS,
            claims_extend_into_ground_distance: MAX_GROUND_EXTENSION,
            ..EngineConfig::default()
        };
        assert!(edge.validate().is_ok());
    }

    #[test]
    fn test_malformed_json_rejected() {
        let err = EngineConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, EngineError::ConfigParse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "trash_blocks": ["dirt", {{ "other": "netherrack" }}] }}"#
        )
        .unwrap();

        let config = EngineConfig::from_json_file(file.path()).unwrap();
        assert!(config.is_trash(&Material::Dirt));
        assert!(config.is_trash(&Material::Other("netherrack".into())));
        assert!(!config.is_trash(&Material::Cobblestone));
    }
}
