//! Layered configuration for the merge policy.
//!
//! Configuration is opt-in: the merge engine never reads the environment. A
//! caller that wants policy configuration builds an [`HtmlAttrsConfig`] from a
//! [`Figment`] and hands out [`HtmlAttrs`] values that carry the configured
//! policy.
//!
//! ```rust
//! use html_attrs::{HtmlAttrsConfig, MergePolicy};
//!
//! let config = HtmlAttrsConfig::from_toml_str(r#"mergeable_attributes = ["class", "id"]"#)?;
//! assert_eq!(config.policy(), &MergePolicy::only(["class", "id"]));
//! # Ok::<_, html_attrs::HtmlAttrsError>(())
//! ```

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{AttrMap, HtmlAttrs, HtmlAttrsResult, MergePolicy};

/// Prefix for environment variables read by [`HtmlAttrsConfig::figment`].
pub const ENV_PREFIX: &str = "HTML_ATTRS_";

/// Settings shared by every [`HtmlAttrs`] built through this configuration.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq, Serialize)]
#[serde(default)]
pub struct HtmlAttrsConfig {
    /// Policy used by [`HtmlAttrs::smart_merge`]. Accepts `"all"`, a
    /// comma-separated list or a sequence of names.
    pub mergeable_attributes: MergePolicy,
}

impl HtmlAttrsConfig {
    /// Defaults layered under `HTML_ATTRS_*` environment variables.
    #[must_use]
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Self::default())).merge(Env::prefixed(ENV_PREFIX))
    }

    /// Extract configuration from `figment`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::HtmlAttrsError::Config`] when extraction fails.
    pub fn from_figment(figment: &Figment) -> HtmlAttrsResult<Self> {
        let config: Self = figment.extract()?;
        debug!(policy = ?config.mergeable_attributes, "loaded html attrs configuration");
        Ok(config)
    }

    /// Extract configuration from a TOML document layered over the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`crate::HtmlAttrsError::Config`] when the document cannot be
    /// parsed or holds an unusable policy.
    pub fn from_toml_str(toml: &str) -> HtmlAttrsResult<Self> {
        let figment =
            Figment::from(Serialized::defaults(Self::default())).merge(Toml::string(toml));
        Self::from_figment(&figment)
    }

    /// Extract configuration from defaults and the environment.
    ///
    /// # Errors
    ///
    /// Returns [`crate::HtmlAttrsError::Config`] when an `HTML_ATTRS_*`
    /// variable holds an unusable value.
    pub fn load() -> HtmlAttrsResult<Self> {
        Self::from_figment(&Self::figment())
    }

    /// Configured merge policy.
    #[must_use]
    pub const fn policy(&self) -> &MergePolicy {
        &self.mergeable_attributes
    }

    /// Wrap `map` with the configured policy.
    #[must_use]
    pub fn attrs(&self, map: AttrMap) -> HtmlAttrs {
        HtmlAttrs::new(map).with_policy(self.mergeable_attributes.clone())
    }
}
