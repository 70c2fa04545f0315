use smartops_core::storage::{KeyValueStore, TOKEN_KEY, USER_KEY};
use smartops_infrastructure::FileKeyValueStore;
use tempfile::TempDir;

#[tokio::test]
async fn test_entries_survive_a_new_store_instance() {
    let temp_dir = TempDir::new().unwrap();

    {
        let store = FileKeyValueStore::new(Some(temp_dir.path())).expect("store should resolve path");
        store.set_item(TOKEN_KEY, "T1").await.unwrap();
        store
            .set_item(USER_KEY, r#"{"id":1,"name":"A","email":"a@b.com","role":"user"}"#)
            .await
            .unwrap();
    }

    // Simulates an app restart: nothing shared but the file
    let store = FileKeyValueStore::new(Some(temp_dir.path())).unwrap();
    assert_eq!(store.get_item(TOKEN_KEY).await.unwrap().as_deref(), Some("T1"));
    assert!(store.get_item(USER_KEY).await.unwrap().unwrap().contains("a@b.com"));
    assert!(store.path().ends_with("storage.json"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_writers_do_not_lose_keys() {
    let temp_dir = TempDir::new().unwrap();
    let store = FileKeyValueStore::new(Some(temp_dir.path())).unwrap();

    let mut handles = Vec::new();
    for i in 0..16 {
        let store = store.clone();
        handles.push(tokio::spawn(async move {
            store.set_item(&format!("key-{}", i), &i.to_string()).await
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    for i in 0..16 {
        assert_eq!(
            store.get_item(&format!("key-{}", i)).await.unwrap(),
            Some(i.to_string()),
            "key-{} should be present",
            i
        );
    }
}
