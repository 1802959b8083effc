//! File I/O utilities with atomic writes
//!
//! Provides safe file operations that won't corrupt data on failure, plus
//! reading and writing plan files in JSON or YAML.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::BudgetError;
use crate::models::BudgetInput;

/// On-disk format of a plan file, chosen by extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanFileFormat {
    Json,
    Yaml,
}

impl PlanFileFormat {
    /// `.yaml` / `.yml` are YAML; everything else is JSON
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref()
        {
            Some("yaml") | Some("yml") => Self::Yaml,
            _ => Self::Json,
        }
    }
}

/// Read a whole file as text, returning `None` if it doesn't exist
pub fn read_text<P: AsRef<Path>>(path: P) -> Result<Option<String>, BudgetError> {
    let path = path.as_ref();

    if !path.exists() {
        return Ok(None);
    }

    fs::read_to_string(path)
        .map(Some)
        .map_err(|e| BudgetError::Storage(format!("Failed to read {}: {}", path.display(), e)))
}

/// Write text to a file atomically (write to temp, then rename)
///
/// The file is either completely written or not modified at all.
pub fn write_text_atomic<P: AsRef<Path>>(path: P, contents: &str) -> Result<(), BudgetError> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            BudgetError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Temp file in the same directory so the rename stays on one filesystem
    let mut temp_name = path.as_os_str().to_owned();
    temp_name.push(".tmp");
    let temp_path = std::path::PathBuf::from(temp_name);

    let file = File::create(&temp_path)
        .map_err(|e| BudgetError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    writer
        .write_all(contents.as_bytes())
        .map_err(|e| BudgetError::Storage(format!("Failed to write data: {}", e)))?;

    writer
        .flush()
        .map_err(|e| BudgetError::Storage(format!("Failed to flush data: {}", e)))?;

    writer
        .get_ref()
        .sync_all()
        .map_err(|e| BudgetError::Storage(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        BudgetError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}

/// Write pretty JSON to a file atomically
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), BudgetError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let contents = serde_json::to_string_pretty(data)
        .map_err(|e| BudgetError::Storage(format!("Failed to serialize data: {}", e)))?;
    write_text_atomic(path, &contents)
}

/// Parse a plan or other document from text in the given format
pub fn parse_document<T: DeserializeOwned>(
    contents: &str,
    format: PlanFileFormat,
) -> Result<T, BudgetError> {
    match format {
        PlanFileFormat::Json => Ok(serde_json::from_str(contents)?),
        PlanFileFormat::Yaml => Ok(serde_yaml::from_str(contents)?),
    }
}

/// Render a document as text in the given format
pub fn render_document<T: Serialize>(data: &T, format: PlanFileFormat) -> Result<String, BudgetError> {
    match format {
        PlanFileFormat::Json => Ok(serde_json::to_string_pretty(data)?),
        PlanFileFormat::Yaml => Ok(serde_yaml::to_string(data)?),
    }
}

/// Read a plan file (JSON, or YAML by extension)
pub fn read_plan_file<P: AsRef<Path>>(path: P) -> Result<BudgetInput, BudgetError> {
    let path = path.as_ref();
    let contents = read_text(path)?.ok_or_else(|| {
        BudgetError::Io(format!("Plan file not found: {}", path.display()))
    })?;

    log::debug!("Reading plan file {}", path.display());
    parse_document(&contents, PlanFileFormat::from_path(path))
}

/// Write a plan file atomically (JSON, or YAML by extension)
pub fn write_plan_file<P: AsRef<Path>>(path: P, plan: &BudgetInput) -> Result<(), BudgetError> {
    let path = path.as_ref();
    let contents = render_document(plan, PlanFileFormat::from_path(path))?;

    log::debug!("Writing plan file {}", path.display());
    write_text_atomic(path, &contents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Household, SavingsRule};
    use tempfile::TempDir;

    fn sample() -> BudgetInput {
        BudgetInput::new(Household::couple(24000.0), 28000.0)
            .with_bill("Rent", 15000.0)
            .with_category("Buffer", 2500.0)
            .with_savings(SavingsRule::percent(20.0))
    }

    #[test]
    fn test_read_missing_text_is_none() {
        let temp_dir = TempDir::new().unwrap();
        assert!(read_text(temp_dir.path().join("nope.json")).unwrap().is_none());
    }

    #[test]
    fn test_atomic_write_no_temp_file_left() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("plans.json");

        write_text_atomic(&path, "[]").unwrap();

        assert_eq!(read_text(&path).unwrap().as_deref(), Some("[]"));
        assert!(!temp_dir.path().join("plans.json.tmp").exists());
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("dir").join("x.json");

        write_json_atomic(&path, &vec![1, 2, 3]).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(PlanFileFormat::from_path(Path::new("a.yaml")), PlanFileFormat::Yaml);
        assert_eq!(PlanFileFormat::from_path(Path::new("a.YML")), PlanFileFormat::Yaml);
        assert_eq!(PlanFileFormat::from_path(Path::new("a.json")), PlanFileFormat::Json);
        assert_eq!(PlanFileFormat::from_path(Path::new("plan")), PlanFileFormat::Json);
    }

    #[test]
    fn test_plan_file_json_and_yaml() {
        let temp_dir = TempDir::new().unwrap();
        let plan = sample();

        for name in ["plan.json", "plan.yaml"] {
            let path = temp_dir.path().join(name);
            write_plan_file(&path, &plan).unwrap();
            assert_eq!(read_plan_file(&path).unwrap(), plan);
        }
    }

    #[test]
    fn test_yaml_uses_wire_field_names() {
        let yaml = render_document(&sample(), PlanFileFormat::Yaml).unwrap();
        assert!(yaml.contains("householdType: couple"));
        assert!(yaml.contains("incomeB:"));
    }

    #[test]
    fn test_missing_plan_file_errors() {
        let temp_dir = TempDir::new().unwrap();
        let err = read_plan_file(temp_dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, BudgetError::Io(_)));
    }
}
