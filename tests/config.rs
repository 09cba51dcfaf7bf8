#![cfg(feature = "cli")]

use std::fs;

use pushkind_taxonomy::config::{self, TaxonomyConfig};
use pushkind_taxonomy::domain::path::CategoryPath;
use tempfile::TempDir;

#[test]
fn missing_files_yield_defaults() {
    let dir = TempDir::new().expect("temp dir");

    let loaded = config::load(dir.path(), "test").expect("config should load");

    assert_eq!(loaded, TaxonomyConfig::default());
}

#[test]
fn environment_file_overrides_default_file() {
    let dir = TempDir::new().expect("temp dir");
    fs::write(
        dir.path().join("default.yaml"),
        "default_admin_name: Ops\ndefault_selection: GL-ELE-AU-HP\n",
    )
    .expect("write default.yaml");
    fs::write(
        dir.path().join("staging.yaml"),
        "default_selection: GL-HOM-FR-BD\n",
    )
    .expect("write staging.yaml");

    let loaded = config::load(dir.path(), "staging").expect("config should load");

    assert_eq!(loaded.default_admin(), "Ops");
    assert_eq!(
        loaded.default_selection_path(),
        CategoryPath::leaf("GL-HOM", "FR", "BD")
    );
}
