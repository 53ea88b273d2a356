//! Task store backed by one JSON file per task.
//!
//! Layout: `<workspace>/.tasks/agentgraph/<task_id>.json`, pretty-printed.
//! Records survive the process, so a later run lists earlier submissions.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use super::health::FRAMEWORK_NAME;
use super::task::{TaskAck, TaskDescriptor, TaskStore, TaskStoreError};

fn storage(e: impl std::fmt::Display) -> TaskStoreError {
    TaskStoreError::Storage(e.to_string())
}

/// File-backed task store.
///
/// `submit` writes to a temporary file and renames it over `<task_id>.json`
/// before acknowledging, so a crash never leaves a half-written record.
/// `list` reads the directory back, sorted by `task_id`.
#[derive(Debug, Clone)]
pub struct FileTaskStore {
    dir: PathBuf,
}

impl FileTaskStore {
    /// Stores records directly under `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Stores records under `<workspace>/.tasks/agentgraph`.
    pub fn in_workspace(workspace: impl AsRef<Path>) -> Self {
        Self::new(workspace.as_ref().join(".tasks").join(FRAMEWORK_NAME))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Record path for `task_id`. Ids that could escape the directory are rejected.
    fn path_for(&self, task_id: &str) -> Result<PathBuf, TaskStoreError> {
        let id = task_id.trim();
        if id.is_empty() {
            return Err(TaskStoreError::InvalidTask("task_id is empty".into()));
        }
        if id.starts_with('.') || id.contains(&['/', '\\'][..]) {
            return Err(TaskStoreError::InvalidTask(format!(
                "task_id cannot be used as a file name: {:?}",
                task_id
            )));
        }
        Ok(self.dir.join(format!("{}.json", task_id)))
    }

    async fn read(path: &Path) -> Result<Option<TaskDescriptor>, TaskStoreError> {
        match tokio::fs::read(path).await {
            Ok(bytes) => serde_json::from_slice(&bytes)
                .map(Some)
                .map_err(|e| storage(format!("{}: {}", path.display(), e))),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(storage(e)),
        }
    }
}

#[async_trait]
impl TaskStore for FileTaskStore {
    async fn submit(&self, task: TaskDescriptor) -> Result<TaskAck, TaskStoreError> {
        let path = self.path_for(&task.task_id)?;
        tokio::fs::create_dir_all(&self.dir).await.map_err(storage)?;

        let body = serde_json::to_vec_pretty(&task).map_err(storage)?;
        let tmp = path.with_extension("json.tmp");
        tokio::fs::write(&tmp, &body).await.map_err(storage)?;
        tokio::fs::rename(&tmp, &path).await.map_err(storage)?;

        tracing::debug!(task_id = %task.task_id, path = %path.display(), "task recorded");
        Ok(TaskAck::accepted(task.task_id))
    }

    async fn get(&self, task_id: &str) -> Result<Option<TaskDescriptor>, TaskStoreError> {
        match self.path_for(task_id) {
            Ok(path) => Self::read(&path).await,
            Err(_) => Ok(None),
        }
    }

    async fn list(&self) -> Result<Vec<TaskDescriptor>, TaskStoreError> {
        let mut entries = match tokio::fs::read_dir(&self.dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(storage(e)),
        };

        let mut tasks = Vec::new();
        while let Some(entry) = entries.next_entry().await.map_err(storage)? {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            if let Some(task) = Self::read(&path).await? {
                tasks.push(task);
            }
        }
        tasks.sort_by(|a, b| a.task_id.cmp(&b.task_id));
        Ok(tasks)
    }
}
