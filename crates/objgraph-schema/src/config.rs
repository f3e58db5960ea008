// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Registry Configuration - Single Source of Truth
//!
//! Centralizes the wire-space constants of the object-graph format and the
//! runtime knobs of [`Registry`](crate::Registry).
//!
//! # Architecture
//!
//! - **Level 1 (Static)**: Compile-time constants (id ranges, name hashing)
//! - **Level 2 (Dynamic)**: `RegistryConfig`, fixed at registry build time
//!
//! # Example
//!
//! ```
//! use objgraph_schema::{Registry, RegistryConfig};
//!
//! let config = RegistryConfig::new().allow_synthesis(false);
//! let registry = Registry::builder().config(config).build();
//! assert!(!registry.config().synthesis_allowed());
//! ```

// =======================================================================
// Wire Identifier Space
// =======================================================================

/// Highest valid type id magnitude (valid range is `1..=TYPE_ID_MAX`).
pub const TYPE_ID_MAX: u16 = 759;

/// Highest valid member id magnitude (valid range is `1..=MEMBER_ID_MAX`).
pub const MEMBER_ID_MAX: u16 = 270;

/// Number of assembly references the compact table points into.
pub const ASSEMBLY_COUNT: usize = 5;

// =======================================================================
// Name Dispatch
// =======================================================================

/// Owner/type names are hashed over at most this many leading characters.
///
/// Names sharing the prefix land in the same bucket and are told apart by
/// exact comparison.
pub const NAME_HASH_PREFIX: usize = 15;

/// Rolling hash multiplier: `hash = hash * 101 + char`.
pub const NAME_HASH_MULTIPLIER: u32 = 101;

// =======================================================================
// Member Slots
// =======================================================================

/// First field slot handed to reflected (non-compact) members.
///
/// Compact members use their wire id as slot, so reflected slots start
/// above the compact range to keep both on the same instance store.
pub const DYNAMIC_SLOT_BASE: u32 = 0x1_0000;

// =======================================================================
// Runtime Configuration
// =======================================================================

/// Registry behavior knobs, fixed when the registry is built.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "config-loaders", derive(serde::Deserialize))]
#[cfg_attr(feature = "config-loaders", serde(default))]
pub struct RegistryConfig {
    /// Reflect over unknown runtime types when every other stage misses.
    pub allow_synthesis: bool,
    /// Build every compact type descriptor when the registry is built.
    pub eager_known_types: bool,
    /// Build every compact member descriptor when the registry is built.
    pub eager_known_members: bool,
    /// Let `resolve_type_name` fall through to the extension chain.
    pub extension_name_fallback: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            allow_synthesis: true,
            eager_known_types: false,
            eager_known_members: false,
            extension_name_fallback: true,
        }
    }
}

impl RegistryConfig {
    /// Default configuration (lazy population, synthesis enabled).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable reflective synthesis of unknown types.
    #[must_use]
    pub fn allow_synthesis(mut self, enabled: bool) -> Self {
        self.allow_synthesis = enabled;
        self
    }

    /// Pre-populate the type id cache at build time.
    #[must_use]
    pub fn eager_known_types(mut self, enabled: bool) -> Self {
        self.eager_known_types = enabled;
        self
    }

    /// Pre-populate the member id cache at build time.
    #[must_use]
    pub fn eager_known_members(mut self, enabled: bool) -> Self {
        self.eager_known_members = enabled;
        self
    }

    /// Consult extension resolvers for unknown type names.
    #[must_use]
    pub fn extension_name_fallback(mut self, enabled: bool) -> Self {
        self.extension_name_fallback = enabled;
        self
    }

    #[must_use]
    pub fn synthesis_allowed(&self) -> bool {
        self.allow_synthesis
    }
}

// =======================================================================
// YAML Loading (feature `config-loaders`)
// =======================================================================

#[cfg(feature = "config-loaders")]
mod loader {
    use super::RegistryConfig;
    use crate::error::{Error, Result};
    use std::fs;
    use std::path::Path;

    /// Root YAML document: configuration lives under a `registry:` key.
    ///
    /// ```yaml
    /// registry:
    ///   allow_synthesis: false
    ///   eager_known_types: true
    /// ```
    #[derive(Debug, serde::Deserialize)]
    struct YamlRegistryDocument {
        #[serde(default)]
        registry: RegistryConfig,
    }

    impl RegistryConfig {
        /// Parse a configuration from YAML text.
        pub fn from_yaml_str(text: &str) -> Result<Self> {
            let doc: YamlRegistryDocument =
                serde_yaml::from_str(text).map_err(|e| Error::Config(e.to_string()))?;
            Ok(doc.registry)
        }

        /// Read and parse a YAML configuration file.
        pub fn load_yaml(path: impl AsRef<Path>) -> Result<Self> {
            let path = path.as_ref();
            let text = fs::read_to_string(path)
                .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
            Self::from_yaml_str(&text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_lazy_with_synthesis() {
        let cfg = RegistryConfig::default();
        assert!(cfg.allow_synthesis);
        assert!(!cfg.eager_known_types);
        assert!(!cfg.eager_known_members);
        assert!(cfg.extension_name_fallback);
    }

    #[test]
    fn builder_chain_overrides() {
        let cfg = RegistryConfig::new()
            .allow_synthesis(false)
            .eager_known_types(true)
            .extension_name_fallback(false);
        assert!(!cfg.synthesis_allowed());
        assert!(cfg.eager_known_types);
        assert!(!cfg.eager_known_members);
        assert!(!cfg.extension_name_fallback);
    }

    #[test]
    fn dynamic_slots_clear_compact_range() {
        assert!(DYNAMIC_SLOT_BASE > u32::from(MEMBER_ID_MAX));
    }

    #[cfg(feature = "config-loaders")]
    #[test]
    fn yaml_partial_document_keeps_defaults() {
        let cfg = RegistryConfig::from_yaml_str("registry:\n  allow_synthesis: false\n")
            .expect("valid yaml");
        assert!(!cfg.allow_synthesis);
        assert!(cfg.extension_name_fallback);
    }

    #[cfg(feature = "config-loaders")]
    #[test]
    fn yaml_file_roundtrip() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "registry:\n  eager_known_members: true").expect("write yaml");
        let cfg = RegistryConfig::load_yaml(file.path()).expect("load yaml");
        assert!(cfg.eager_known_members);
    }

    #[cfg(feature = "config-loaders")]
    #[test]
    fn yaml_garbage_is_config_error() {
        let err = RegistryConfig::from_yaml_str("registry: [unterminated").unwrap_err();
        assert!(matches!(err, crate::Error::Config(_)));
    }
}
