//! Filesystem behavior tests for LocalDocumentStore

use std::path::PathBuf;

use domain_claims::{DocumentStore, DocumentUpload};
use infra_storage::LocalDocumentStore;
use uuid::Uuid;

fn scratch_root() -> PathBuf {
    std::env::temp_dir().join(format!("claims-docs-{}", Uuid::new_v4()))
}

#[tokio::test]
async fn test_store_writes_file_and_returns_its_path() {
    let root = scratch_root();
    let store = LocalDocumentStore::new(&root);

    let path = store
        .store(DocumentUpload::new("receipt.pdf", b"Dummy file content".to_vec()))
        .await
        .unwrap();

    assert!(path.ends_with("receipt.pdf"));
    let content = tokio::fs::read(&path).await.unwrap();
    assert_eq!(content, b"Dummy file content");

    tokio::fs::remove_dir_all(&root).await.unwrap();
}

#[tokio::test]
async fn test_same_name_uploads_do_not_collide() {
    let root = scratch_root();
    let store = LocalDocumentStore::new(&root);
    let upload = || DocumentUpload::new("receipt.pdf", b"content".to_vec());

    let first = store.store(upload()).await.unwrap();
    let second = store.store(upload()).await.unwrap();

    assert_ne!(first, second);

    tokio::fs::remove_dir_all(&root).await.unwrap();
}

#[tokio::test]
async fn test_stored_path_stays_under_root() {
    let root = scratch_root();
    let store = LocalDocumentStore::new(&root);

    let path = store
        .store(DocumentUpload::new("../../escape.pdf", b"content".to_vec()))
        .await
        .unwrap();

    assert!(PathBuf::from(&path).starts_with(&root));

    tokio::fs::remove_dir_all(&root).await.unwrap();
}

#[tokio::test]
async fn test_no_temp_files_remain_after_store() {
    let root = scratch_root();
    let store = LocalDocumentStore::new(&root);

    store
        .store(DocumentUpload::new("receipt.pdf", b"content".to_vec()))
        .await
        .unwrap();

    let mut entries = tokio::fs::read_dir(&root).await.unwrap();
    while let Some(entry) = entries.next_entry().await.unwrap() {
        let name = entry.file_name();
        let name = name.to_string_lossy();
        assert!(!name.ends_with(".part"), "leftover temp file: {name}");
    }

    tokio::fs::remove_dir_all(&root).await.unwrap();
}

#[tokio::test]
async fn test_remove_deletes_stored_file() {
    let root = scratch_root();
    let store = LocalDocumentStore::new(&root);
    let path = store
        .store(DocumentUpload::new("receipt.pdf", b"content".to_vec()))
        .await
        .unwrap();

    store.remove(&path).await.unwrap();

    assert!(tokio::fs::metadata(&path).await.is_err());

    tokio::fs::remove_dir_all(&root).await.unwrap();
}

#[tokio::test]
async fn test_remove_missing_file_is_ok() {
    let root = scratch_root();
    let store = LocalDocumentStore::new(&root);

    let missing = root.join("nothing-here.pdf");
    store
        .remove(missing.to_string_lossy().as_ref())
        .await
        .unwrap();
}
