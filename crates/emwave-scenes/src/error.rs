use emwave_core::WaveError;
use std::path::PathBuf;

/// Errors that can occur when loading or rendering a scene
#[derive(thiserror::Error, Debug)]
pub enum SceneError {
    #[error("failed to read scene file {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse scene JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Wave(#[from] WaveError),
}
