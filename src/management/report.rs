use std::{io::Error, path::PathBuf};

use serde::Serialize;

#[derive(Debug)]
pub enum ReportError {
    IoError(Error),
    SerdeError(serde_json::Error),
}

impl std::fmt::Display for ReportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportError::IoError(e) => write!(f, "io error: {}", e),
            ReportError::SerdeError(e) => write!(f, "serialization error: {}", e),
        }
    }
}

impl std::error::Error for ReportError {}

impl From<Error> for ReportError {
    fn from(err: Error) -> Self {
        ReportError::IoError(err)
    }
}

/// Writes analysis results as pretty-printed JSON files under the local
/// data directory, one file per saved report.
pub struct ReportManager {
    name: String,
}

impl ReportManager {
    pub fn new(name: String) -> Self {
        Self { name }
    }

    pub async fn save<T: Serialize>(&self, report: &T) -> Result<PathBuf, ReportError> {
        let path = self.report_path();
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(ReportError::IoError)?;
        }

        let json = serde_json::to_string_pretty(report).map_err(ReportError::SerdeError)?;
        async_fs::write(&path, json)
            .await
            .map_err(ReportError::IoError)?;
        Ok(path)
    }

    fn report_path(&self) -> PathBuf {
        let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push(format!("spanlcli/reports/{name}.json", name = self.name));
        path
    }
}
