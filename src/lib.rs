//! plugref - plugin identity resolution for pluggable pipeline components
//!
//! This crate is the config-value layer that decouples "which plugin did the
//! user ask for" (a short registered name) from "which concrete artifact must
//! be loaded" (a fully qualified maven-style coordinate). Deployments can
//! override resolution through a flat property store without touching
//! user-facing configuration files.
//!
//! Everything here is pure and side-effect-free: how the property store is
//! loaded from disk and how a resolved [`PluginType`] is turned into a running
//! plugin are the caller's concern.

pub mod errors;
pub mod override_resolver;
pub mod plugin_type;
pub mod property_store;

// Re-export the public surface for convenience
pub use errors::{ConfigError, OverrideError};
pub use override_resolver::resolve_maven_override;
pub use plugin_type::{DefaultPluginType, MavenPluginType, PluginSource, PluginType};
pub use property_store::PropertyStore;
