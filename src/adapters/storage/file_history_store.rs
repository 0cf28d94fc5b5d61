//! File-based History Store Adapter
//!
//! Keeps the whole affectation history in one YAML document, a list of flat
//! rows with one column per answer plus the assigned service. The diagnosis
//! column is a YAML sequence so labels containing `;` survive a reload.
//! Rows written as a single `"; "`-joined text are still accepted on read.
//!
//! Every append rewrites the document through a temporary file and a rename,
//! so readers see either the previous or the new history and never a torn
//! write. A mutex serializes appends within the process.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::Mutex;

use crate::domain::affectation::{AffectationRecord, Age, AnswerSet};
use crate::ports::{HistoryStore, HistoryStoreError};

const LEGACY_DIAGNOSIS_SEPARATOR: char = ';';

/// Diagnosis column: a list, or joined text in older history files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
enum DiagnosisColumn {
    List(Vec<String>),
    Joined(String),
}

impl DiagnosisColumn {
    fn into_labels(self) -> Vec<String> {
        match self {
            DiagnosisColumn::List(labels) => labels,
            DiagnosisColumn::Joined(text) => text
                .split(LEGACY_DIAGNOSIS_SEPARATOR)
                .map(str::trim)
                .filter(|d| !d.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }
}

/// One persisted history row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct HistoryRow {
    name: String,
    surname: String,
    age: i64,
    request_reason: String,
    diagnosis: DiagnosisColumn,
    housing_type: String,
    income_bracket: String,
    assigned_service: String,
}

impl From<&AffectationRecord> for HistoryRow {
    fn from(record: &AffectationRecord) -> Self {
        let answers = record.answers();
        HistoryRow {
            name: answers.name().to_string(),
            surname: answers.surname().to_string(),
            age: i64::from(answers.age()),
            request_reason: answers.request_reason().to_string(),
            diagnosis: DiagnosisColumn::List(answers.diagnosis().to_vec()),
            housing_type: answers.housing_type().to_string(),
            income_bracket: answers.income_bracket().to_string(),
            assigned_service: record.assigned_service().to_string(),
        }
    }
}

impl HistoryRow {
    fn into_record(self, row: usize) -> Result<AffectationRecord, HistoryStoreError> {
        let malformed = |e: &dyn std::fmt::Display| {
            HistoryStoreError::Malformed(format!("row {}: {}", row + 1, e))
        };

        let age = Age::new(self.age).map_err(|e| malformed(&e))?;
        let diagnosis = self.diagnosis.into_labels();
        let answers = AnswerSet::new(
            self.name,
            self.surname,
            age,
            self.request_reason,
            diagnosis,
            self.housing_type,
            self.income_bracket,
        )
        .map_err(|e| malformed(&e))?;

        Ok(AffectationRecord::new(answers, self.assigned_service))
    }
}

/// File-based affectation history
#[derive(Debug)]
pub struct FileHistoryStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileHistoryStore {
    /// Create a store backed by the file at `path`
    ///
    /// The file and its parent directory are created on first append.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            write_lock: Mutex::new(()),
        }
    }

    /// Location of the history file
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_rows(&self) -> Result<Vec<HistoryRow>, HistoryStoreError> {
        let yaml = match fs::read_to_string(&self.path).await {
            Ok(yaml) => yaml,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(HistoryStoreError::Unavailable(e.to_string())),
        };

        if yaml.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_yaml::from_str(&yaml).map_err(|e| HistoryStoreError::Malformed(e.to_string()))
    }

    async fn write_rows(&self, rows: &[HistoryRow]) -> Result<(), HistoryStoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| HistoryStoreError::Unavailable(e.to_string()))?;
        }

        let yaml = serde_yaml::to_string(rows)
            .map_err(|e| HistoryStoreError::Unavailable(e.to_string()))?;

        // Write to a sibling temp file, then rename over the history
        let temp_path = self.path.with_extension("yaml.tmp");
        fs::write(&temp_path, yaml)
            .await
            .map_err(|e| HistoryStoreError::Unavailable(e.to_string()))?;
        fs::rename(&temp_path, &self.path)
            .await
            .map_err(|e| HistoryStoreError::Unavailable(e.to_string()))
    }
}

#[async_trait]
impl HistoryStore for FileHistoryStore {
    async fn append(&self, record: &AffectationRecord) -> Result<(), HistoryStoreError> {
        let _guard = self.write_lock.lock().await;

        let mut rows = self.read_rows().await?;
        rows.push(HistoryRow::from(record));
        self.write_rows(&rows).await?;

        tracing::debug!(
            path = %self.path.display(),
            rows = rows.len(),
            service = %record.assigned_service(),
            "Affectation appended to history"
        );
        Ok(())
    }

    async fn read_all(&self) -> Result<Vec<AffectationRecord>, HistoryStoreError> {
        self.read_rows()
            .await?
            .into_iter()
            .enumerate()
            .map(|(idx, row)| row.into_record(idx))
            .collect()
    }
}
