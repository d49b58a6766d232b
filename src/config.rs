//! Project layout and root-directory resolution.

use std::path::{Path, PathBuf};

use crate::error::AppError;

/// Environment variable consulted when `--root` is not given.
pub const ROOT_ENV: &str = "FINOPS_ROOT";

const RAW_DIR: &str = "data/raw";
const PROCESSED_DIR: &str = "data/processed";
const RAW_FILE: &str = "finance_operations.csv";
const PROCESSED_FILE: &str = "finance_operations_processed.csv";

/// Input/output locations derived from a project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectPaths {
    pub root: PathBuf,
    pub raw_csv: PathBuf,
    pub processed_csv: PathBuf,
}

impl ProjectPaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            raw_csv: root.join(RAW_DIR).join(RAW_FILE),
            processed_csv: root.join(PROCESSED_DIR).join(PROCESSED_FILE),
            root,
        }
    }

    /// Resolve the project root: explicit root, then `FINOPS_ROOT`, then the
    /// current working directory.
    ///
    /// On the CLI path clap already folds `FINOPS_ROOT` (and `.env`, loaded in
    /// `app::run`) into `explicit`; the env lookup here serves library callers.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, AppError> {
        if let Some(root) = explicit {
            return Ok(Self::new(root));
        }

        if let Some(root) = std::env::var_os(ROOT_ENV).filter(|v| !v.is_empty()) {
            return Ok(Self::new(PathBuf::from(root)));
        }

        let cwd = std::env::current_dir()
            .map_err(|e| AppError::input(format!("Failed to determine current directory: {e}")))?;
        Ok(Self::new(cwd))
    }
}
