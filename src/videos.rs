use serde::Deserialize;
use std::path::PathBuf;

/// Outcome of attempting to download a task's output: either the saved file
/// path, or the reason the download was skipped (reported, not raised).
#[derive(Debug)]
pub enum TaskDownload {
    Saved(PathBuf),
    Skipped(String),
}

#[derive(Debug, Deserialize)]
pub struct VideoTask {
    pub id: String,
    pub status: String,
    #[serde(default)]
    pub output: Option<Vec<String>>,
    #[serde(default)]
    pub progress: Option<f64>,
    #[serde(default)]
    pub error: Option<String>,
}
