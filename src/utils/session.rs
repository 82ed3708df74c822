use crate::models::Course;
use anyhow::{Context, Result};
use serde_json::to_string_pretty;
use std::fs;
use std::path::{Path, PathBuf};

pub const SESSION_FILE_VAR: &str = "YAGC_SESSION_FILE";
const DEFAULT_SESSION_FILE: &str = "courses.json";

// Session persistence adapter: one fixed JSON file holding the serialized course
// sequence, read back verbatim on the next start. No versioning, no migration.
#[derive(Debug, Clone)]
pub struct FileSession {
    path: PathBuf,
}

impl FileSession {
    // Resolves the session file from the environment, falling back to the default path.
    pub fn from_env() -> Self {
        let path =
            std::env::var(SESSION_FILE_VAR).unwrap_or_else(|_| DEFAULT_SESSION_FILE.to_string());
        Self::at(path)
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        FileSession { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    // Loads the saved course sequence, or None when no session has been saved yet.
    pub fn load(&self) -> Result<Option<Vec<Course>>> {
        let file_exists_and_non_empty = Path::new(&self.path).exists()
            && fs::metadata(&self.path).map(|m| m.len() > 0).unwrap_or(false);

        if !file_exists_and_non_empty {
            return Ok(None);
        }

        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read session file {}", self.path.display()))?;
        let courses = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse session file {}", self.path.display()))?;
        Ok(Some(courses))
    }

    // Saves the course sequence under the fixed session path.
    pub fn save(&self, courses: &[Course]) -> Result<()> {
        let payload = to_string_pretty(courses).context("Failed to serialize the course sheet")?;
        fs::write(&self.path, payload)
            .with_context(|| format!("Failed to write session file {}", self.path.display()))?;
        Ok(())
    }
}
