//! Runtime settings of the taxonomy engine.

use serde::Deserialize;

use crate::DEFAULT_ADMIN_NAME;
use crate::domain::path::CategoryPath;
use crate::domain::types::AdminName;
use crate::seed;

/// Configuration options specific to the taxonomy engine.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TaxonomyConfig {
    /// Recorded in audit entries when the admin name is blank.
    pub default_admin_name: String,
    /// Leaf code returned by the default selection, e.g. `GL-MOB-SM-AN`.
    pub default_selection: String,
}

impl Default for TaxonomyConfig {
    fn default() -> Self {
        Self {
            default_admin_name: DEFAULT_ADMIN_NAME.to_string(),
            default_selection: seed::default_selection_path().full_code(),
        }
    }
}

impl TaxonomyConfig {
    pub fn default_admin(&self) -> AdminName {
        AdminName::or_default(&self.default_admin_name, &AdminName::placeholder())
    }

    /// Configured default leaf, or the reference default when the configured
    /// code is malformed.
    pub fn default_selection_path(&self) -> CategoryPath {
        CategoryPath::parse_leaf_code(&self.default_selection).unwrap_or_else(|| {
            log::warn!(
                "Ignoring malformed default selection {:?}",
                self.default_selection
            );
            seed::default_selection_path()
        })
    }
}

/// Loads `default.yaml` and `{app_env}.yaml` from `dir` (both optional), then
/// `APP_*` environment variables.
#[cfg(feature = "cli")]
pub fn load(
    dir: &std::path::Path,
    app_env: &str,
) -> Result<TaxonomyConfig, config::ConfigError> {
    use config::{Config, Environment, File};

    Config::builder()
        .add_source(File::from(dir.join("default.yaml")).required(false))
        .add_source(File::from(dir.join(format!("{app_env}.yaml"))).required(false))
        .add_source(Environment::with_prefix("APP"))
        .build()?
        .try_deserialize()
}
