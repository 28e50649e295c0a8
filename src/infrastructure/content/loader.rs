//! Catalog file loading.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info, warn};

use super::builtin_catalog;
use crate::domain::entities::Catalog;

/// Reasons a catalog file is rejected.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse catalog {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("catalog {path} has no lessons, quizzes or exams")]
    Empty { path: PathBuf },
    #[error("duplicate catalog id `{id}`")]
    DuplicateId { id: String },
    #[error("exam `{name}` is listed twice")]
    DuplicateExam { name: String },
}

/// Reads a TOML catalog with `[[lessons]]`, `[[quizzes]]` and `[[exams]]` tables.
///
/// # Errors
/// Returns error if the file is unreadable, malformed, empty, or reuses an id.
pub fn load_catalog(path: &Path) -> Result<Catalog, CatalogError> {
    debug!(path = ?path, "Loading catalog");

    let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let catalog: Catalog = toml::from_str(&content).map_err(|source| CatalogError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    if catalog.is_empty() {
        return Err(CatalogError::Empty {
            path: path.to_path_buf(),
        });
    }

    let mut seen = HashSet::new();
    let ids = catalog
        .lessons
        .iter()
        .map(|lesson| &lesson.id)
        .chain(catalog.quizzes.iter().map(|quiz| &quiz.id));
    for id in ids {
        if !seen.insert(id) {
            return Err(CatalogError::DuplicateId { id: id.clone() });
        }
    }

    let mut exams = HashSet::new();
    for exam in &catalog.exams {
        if !exams.insert((exam.board.to_lowercase(), exam.year)) {
            return Err(CatalogError::DuplicateExam { name: exam.name() });
        }
    }

    for quiz in &catalog.quizzes {
        for question in &quiz.questions {
            if !question.options.contains(&question.answer) {
                warn!(
                    quiz = %quiz.id,
                    question = question.id,
                    "Expected answer is not among the options"
                );
            }
        }
    }

    info!(
        lessons = catalog.lessons.len(),
        quizzes = catalog.quizzes.len(),
        exams = catalog.exams.len(),
        "Catalog loaded"
    );
    Ok(catalog)
}

/// Loads the configured catalog, or the built-in one when none is set.
///
/// # Errors
/// Returns error if a configured file cannot be loaded.
pub fn resolve_catalog(path: Option<&Path>) -> Result<Catalog, CatalogError> {
    match path {
        Some(path) => load_catalog(path),
        None => {
            debug!("Using built-in catalog");
            Ok(builtin_catalog())
        }
    }
}
