use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

use crate::models::{AnswerKey, Form, ToggleControl};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{} must contain at least one question", .path.display())]
    Empty { path: PathBuf },
}

/// Load the answer key from a JSON array of questions.
pub fn load_answer_key_from_json<P: AsRef<Path>>(path: P) -> Result<AnswerKey, LoadError> {
    let path = path.as_ref();
    let answer_key: AnswerKey = read_json(path)?;

    if answer_key.is_empty() {
        return Err(LoadError::Empty {
            path: path.to_path_buf(),
        });
    }

    debug!(path = %path.display(), questions = answer_key.len(), "loaded answer key");
    Ok(answer_key)
}

/// Load a saved form snapshot: a JSON array of toggle controls.
pub fn load_form_from_json<P: AsRef<Path>>(path: P) -> Result<Form, LoadError> {
    let path = path.as_ref();
    let controls: Vec<ToggleControl> = read_json(path)?;

    debug!(path = %path.display(), controls = controls.len(), "loaded form snapshot");
    Ok(Form::from_controls(controls))
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    let json_content = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&json_content).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
