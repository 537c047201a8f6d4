//! Local-filesystem document store
//!
//! Writes go to a `.part` temporary path and are renamed into place, so a
//! failed write never leaves a partial document at the final path.

use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tracing::{debug, warn};
use uuid::Uuid;

use core_kernel::{DomainPort, PortError};
use domain_claims::{DocumentStore, DocumentUpload};

/// Document store backed by a directory on the local filesystem
#[derive(Debug, Clone)]
pub struct LocalDocumentStore {
    root: PathBuf,
}

impl LocalDocumentStore {
    /// Creates a store rooted at the given directory
    ///
    /// The directory is created on first write if it does not exist.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Returns the configured root directory
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl DomainPort for LocalDocumentStore {}

#[async_trait]
impl DocumentStore for LocalDocumentStore {
    async fn store(&self, upload: DocumentUpload) -> Result<String, PortError> {
        fs::create_dir_all(&self.root)
            .await
            .map_err(|e| io_error("creating upload directory", e))?;

        // Unique prefix keeps uploads with the same client-side name apart.
        let file_name = format!("{}_{}", Uuid::new_v4(), sanitize_file_name(&upload.file_name));
        let final_path = self.root.join(&file_name);
        let temp_path = self.root.join(format!(".{file_name}.part"));

        if let Err(e) = fs::write(&temp_path, &upload.content).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(io_error("writing document", e));
        }

        if let Err(e) = fs::rename(&temp_path, &final_path).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(io_error("renaming document into place", e));
        }

        debug!(path = %final_path.display(), bytes = upload.content.len(), "document stored");
        Ok(final_path.to_string_lossy().into_owned())
    }

    async fn remove(&self, path: &str) -> Result<(), PortError> {
        match fs::remove_file(path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                warn!(%path, "document already gone");
                Ok(())
            }
            Err(e) => Err(io_error("removing document", e)),
        }
    }
}

fn io_error(context: &str, error: io::Error) -> PortError {
    PortError::Internal {
        message: format!("{context}: {error}"),
        source: Some(Box::new(error)),
    }
}

/// Reduces a client-supplied file name to a safe final path component
fn sanitize_file_name(name: &str) -> String {
    let base = Path::new(name)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("upload");

    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();

    if cleaned.trim_matches('.').is_empty() {
        "upload".to_string()
    } else {
        cleaned
    }
}
