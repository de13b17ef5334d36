//! Maven override resolution for name-only plugin types
//!
//! A deployment can redirect a plugin short name to a precise artifact by
//! setting a property like `plugins.input.csv = maven:org.example:csv:1.0.0`.
//! Resolution distinguishes two very different outcomes:
//!
//! - `Ok(None)`: no override configured, or the value belongs to another
//!   override scheme. The caller silently proceeds with the original
//!   [`DefaultPluginType`].
//! - `Err(OverrideError::Malformed)`: a maven-scheme value that does not
//!   split into valid coordinates. The deployment configuration is broken
//!   and the caller must stop and report.

use tracing::debug;

use crate::errors::OverrideError;
use crate::plugin_type::{DefaultPluginType, MavenPluginType};
use crate::property_store::PropertyStore;

const MAVEN_SCHEME: &str = "maven:";

/// Look up and parse a maven artifact override for `base`
///
/// The lookup key is `{key_prefix}{category}.{name}`; `key_prefix` and
/// `category` are supplied by the caller. The override value must match
/// `maven:<group>:<name>:<version>[:<classifier>]`, where no component may
/// itself contain a colon.
///
/// Only name-only plugin types can be overridden, so the input is a
/// [`DefaultPluginType`]; it is never mutated.
pub fn resolve_maven_override(
    key_prefix: &str,
    category: &str,
    base: &DefaultPluginType,
    store: &PropertyStore,
) -> Result<Option<MavenPluginType>, OverrideError> {
    let key = format!("{}{}.{}", key_prefix, category, base.name());

    let Some(value) = store.get(&key) else {
        debug!(%key, "no plugin override configured");
        return Ok(None);
    };

    // A value under another scheme may be claimed by a different override
    // mechanism; it is not ours to reject.
    let Some(coordinates) = value.strip_prefix(MAVEN_SCHEME) else {
        debug!(%key, %value, "override value is not maven-scheme, skipping");
        return Ok(None);
    };

    let maven = match coordinates.split(':').collect::<Vec<_>>().as_slice() {
        [group, name, version] => MavenPluginType::new(*name, *group, *version, None),
        [group, name, version, classifier] => {
            MavenPluginType::new(*name, *group, *version, Some((*classifier).to_string()))
        }
        _ => {
            return Err(OverrideError::Malformed {
                key,
                value: value.to_string(),
            });
        }
    };

    debug!(%key, full_name = %maven.full_name(), "resolved maven override");
    Ok(Some(maven))
}
