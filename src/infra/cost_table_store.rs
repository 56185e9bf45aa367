//! Loads the destination cost table, letting a JSON file in the platform
//! config directory override the built-in averages for the session.

use std::{
    env, fs, io,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{location::default_profiles, CostTable, CostTableError, LocationProfile};

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "OffsiteCostCalculator";
const APP_NAME: &str = "OffsiteCostCalculator";
const COST_TABLE_FILENAME: &str = "cost_table.json";

/// Points at an alternative cost table file, taking precedence over the
/// config directory.
pub const COST_TABLE_ENV: &str = "OFFSITE_COST_TABLE";

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CostTableFile {
    pub locations: Vec<LocationProfile>,
}

#[derive(Debug, Error)]
pub enum CostTableLoadError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
    #[error(transparent)]
    Invalid(#[from] CostTableError),
    #[error("config directory unavailable")]
    StorageUnavailable,
}

/// Where the override is looked up: `$OFFSITE_COST_TABLE` first, then the
/// platform config directory.
pub fn config_file() -> Option<PathBuf> {
    if let Some(path) = env::var_os(COST_TABLE_ENV).filter(|value| !value.is_empty()) {
        return Some(PathBuf::from(path));
    }
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join(COST_TABLE_FILENAME))
}

/// Never fails: a missing or broken override falls back to the built-in
/// table.
pub fn load_cost_table() -> CostTable {
    let Some(path) = config_file() else {
        info!("[cost-table] No config directory; using built-in averages");
        return CostTable::default();
    };

    if !path.exists() {
        info!(
            "[cost-table] No override at {}; using built-in averages",
            path.display()
        );
        return CostTable::default();
    }

    match load_cost_table_from(&path) {
        Ok(table) => {
            info!(
                "[cost-table] Loaded {} locations from {}",
                table.len(),
                path.display()
            );
            table
        }
        Err(err) => {
            warn!(
                "[cost-table] Ignoring {}: {err}; using built-in averages",
                path.display()
            );
            CostTable::default()
        }
    }
}

pub fn load_cost_table_from(path: &Path) -> Result<CostTable, CostTableLoadError> {
    let content = fs::read_to_string(path)?;
    let file: CostTableFile = serde_json::from_str(&content)?;
    Ok(CostTable::new(file.locations)?)
}

/// Writes the built-in table as an editable template and returns its path.
pub fn write_template(path: Option<&Path>) -> Result<PathBuf, CostTableLoadError> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => config_file().ok_or(CostTableLoadError::StorageUnavailable)?,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = CostTableFile {
        locations: default_profiles(),
    };
    fs::write(&path, serde_json::to_string_pretty(&file)?)?;
    info!("[cost-table] Wrote template to {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use serial_test::serial;

    use super::*;
    use crate::util::generate_id;

    fn scratch_file(name: &str) -> PathBuf {
        env::temp_dir()
            .join(generate_id("offsite-cost-table"))
            .join(name)
    }

    #[test]
    fn template_round_trips_to_the_default_table() {
        let path = scratch_file(COST_TABLE_FILENAME);
        let written = write_template(Some(path.as_path())).unwrap();
        assert_eq!(written, path);

        let table = load_cost_table_from(&path).unwrap();
        assert_eq!(table, CostTable::default());

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn override_replaces_the_location_set() {
        let path = scratch_file("custom.json");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(
            &path,
            r#"{
                "locations": [
                    {
                        "id": "austin",
                        "display_name": "Austin",
                        "flight_cost": 300,
                        "hotel_cost_per_night": 200,
                        "meal_cost_per_day": 60,
                        "ground_transport_cost": 80
                    }
                ]
            }"#,
        )
        .unwrap();

        let table = load_cost_table_from(&path).unwrap();
        let ids: Vec<_> = table.ids().map(|id| id.as_str()).collect();
        assert_eq!(ids, ["austin"]);
        assert_eq!(table.get("austin").unwrap().icon, "");

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn invalid_override_is_reported() {
        let path = scratch_file("broken.json");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, r#"{ "locations": [] }"#).unwrap();
        assert!(matches!(
            load_cost_table_from(&path),
            Err(CostTableLoadError::Invalid(CostTableError::Empty))
        ));

        fs::write(&path, "not json").unwrap();
        assert!(matches!(
            load_cost_table_from(&path),
            Err(CostTableLoadError::Serde(_))
        ));

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let path = scratch_file("absent.json");
        assert!(matches!(
            load_cost_table_from(&path),
            Err(CostTableLoadError::Io(_))
        ));
    }

    fn load_with_override(path: &Path) -> CostTable {
        env::set_var(COST_TABLE_ENV, path);
        let table = load_cost_table();
        env::remove_var(COST_TABLE_ENV);
        table
    }

    #[test]
    #[serial]
    fn env_override_takes_precedence() {
        let path = scratch_file("override.json");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        let mut profiles = default_profiles();
        profiles.truncate(2);
        let file = CostTableFile {
            locations: profiles.clone(),
        };
        fs::write(&path, serde_json::to_string(&file).unwrap()).unwrap();

        env::set_var(COST_TABLE_ENV, &path);
        assert_eq!(config_file(), Some(path.clone()));
        let table = load_cost_table();
        env::remove_var(COST_TABLE_ENV);
        assert_eq!(table, CostTable::new(profiles).unwrap());

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    #[serial]
    fn broken_override_falls_back_to_built_in_table() {
        let path = scratch_file("broken.json");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{ \"locations\": 42 }").unwrap();

        assert_eq!(load_with_override(&path), CostTable::default());

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    #[serial]
    fn absent_override_falls_back_to_built_in_table() {
        let path = scratch_file("absent.json");
        assert!(!path.exists());

        assert_eq!(load_with_override(&path), CostTable::default());
    }
}
