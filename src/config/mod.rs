use crate::errors::{AppError, AppResult};
use crate::models::{FilterOrder, MasterDuplicates, PlannedMatch, TieBreak};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub mod migrate; // use submodule at src/config/migrate.rs

/// Column headers of the work-order extraction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionColumns {
    pub key: String,
    pub status: String,
    pub location: String,
    pub position: String,
    pub client: String,
    pub intervention_type: String,
}

impl Default for ExtractionColumns {
    fn default() -> Self {
        Self {
            key: "OR".to_string(),
            status: "Planifié ?".to_string(),
            location: "Localisation".to_string(),
            position: "Position".to_string(),
            client: "Nom client".to_string(),
            intervention_type: "Type intervention".to_string(),
        }
    }
}

/// Column headers of the raw timesheet ("pointage").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimesheetColumns {
    pub key: String,
    pub employee: String,
    pub team: String,
    pub hours: String,
}

impl Default for TimesheetColumns {
    fn default() -> Self {
        Self {
            key: "OR (Numéro)".to_string(),
            employee: "Salarié - Nom".to_string(),
            team: "Salarié - Équipe(Nom)".to_string(),
            hours: "Heures".to_string(),
        }
    }
}

/// Column headers of the equipment table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EquipmentColumns {
    pub key: String,
    pub manufacturer: String,
}

impl Default for EquipmentColumns {
    fn default() -> Self {
        Self {
            key: "N° OR (Segment)".to_string(),
            manufacturer: "Constructeur de l'équipement".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnConfig {
    pub extraction: ExtractionColumns,
    pub timesheet: TimesheetColumns,
    pub equipment: EquipmentColumns,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub columns: ColumnConfig,
    #[serde(default = "default_planned_label")]
    pub planned_label: String,
    #[serde(default = "default_planned_marker")]
    pub planned_marker: String,
    #[serde(default)]
    pub planned_match: PlannedMatch,
    #[serde(default)]
    pub tie_break: TieBreak,
    #[serde(default)]
    pub filter_order: FilterOrder,
    #[serde(default)]
    pub master_duplicates: MasterDuplicates,
    /// Locations that make a work order a "field" one. Empty = keep all.
    #[serde(default = "default_field_locations")]
    pub field_locations: Vec<String>,
    #[serde(default = "default_missing_label")]
    pub missing_label: String,
    /// Maximum detail rows printed by `report` (0 = all).
    #[serde(default = "default_detail_limit")]
    pub detail_limit: usize,
}

fn default_planned_label() -> String {
    "Planifié".to_string()
}
fn default_planned_marker() -> String {
    "PLANIF".to_string()
}
fn default_field_locations() -> Vec<String> {
    vec!["MO EXTERIEUR".to_string(), "MO CVA".to_string()]
}
fn default_missing_label() -> String {
    "(none)".to_string()
}
fn default_detail_limit() -> usize {
    50
}

impl Default for Config {
    fn default() -> Self {
        Self {
            columns: ColumnConfig::default(),
            planned_label: default_planned_label(),
            planned_marker: default_planned_marker(),
            planned_match: PlannedMatch::default(),
            tie_break: TieBreak::default(),
            filter_order: FilterOrder::default(),
            master_duplicates: MasterDuplicates::default(),
            field_locations: default_field_locations(),
            missing_label: default_missing_label(),
            detail_limit: default_detail_limit(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("orkpi")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".orkpi")
        }
    }

    /// Return the full path of the default config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("orkpi.conf")
    }

    /// Config path in use: explicit override or the platform default.
    pub fn resolve_path(custom: Option<&Path>) -> PathBuf {
        custom
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_file)
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "configuration loaded");
        Ok(cfg)
    }

    pub fn save(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir).map_err(|_| AppError::ConfigSave)?;
        }

        let yaml = serde_yaml::to_string(self)?;
        fs::write(path, yaml).map_err(|_| AppError::ConfigSave)?;
        Ok(())
    }

    /// Write a default configuration file. Existing files are kept unless
    /// `force` is set. Returns `true` when a file was written.
    pub fn init(path: &Path, force: bool) -> AppResult<bool> {
        if path.exists() && !force {
            return Ok(false);
        }
        Self::default().save(path)?;
        Ok(true)
    }
}
