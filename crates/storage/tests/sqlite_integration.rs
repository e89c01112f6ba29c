use storage::repository::KeyValueStore;
use storage::sqlite::SqliteStore;

#[tokio::test]
async fn sqlite_roundtrips_values() {
    let store = SqliteStore::open("sqlite:file:memdb_kv_roundtrip?mode=memory&cache=shared")
        .await
        .expect("open");

    assert_eq!(store.get("vocab_progress").await.unwrap(), None);

    store
        .put("vocab_progress", r#"{"states":{},"currentIndex":0}"#)
        .await
        .unwrap();
    assert_eq!(
        store.get("vocab_progress").await.unwrap().as_deref(),
        Some(r#"{"states":{},"currentIndex":0}"#)
    );
}

#[tokio::test]
async fn sqlite_put_overwrites_whole_value() {
    let store = SqliteStore::open("sqlite:file:memdb_kv_overwrite?mode=memory&cache=shared")
        .await
        .expect("open");

    store.put("vocab_range", "[1,null]").await.unwrap();
    store.put("vocab_range", "[2,9]").await.unwrap();
    assert_eq!(
        store.get("vocab_range").await.unwrap().as_deref(),
        Some("[2,9]")
    );
}

#[tokio::test]
async fn sqlite_keys_are_independent() {
    let store = SqliteStore::open("sqlite:file:memdb_kv_keys?mode=memory&cache=shared")
        .await
        .expect("open");

    store.put("vocab_progress", "{}").await.unwrap();
    assert_eq!(store.get("vocab_range").await.unwrap(), None);
}

#[tokio::test]
async fn migrate_is_idempotent() {
    let store = SqliteStore::connect("sqlite:file:memdb_kv_migrate?mode=memory&cache=shared")
        .await
        .expect("connect");
    store.migrate().await.expect("first migrate");
    store.migrate().await.expect("second migrate");

    store.put("k", "v").await.unwrap();
    assert_eq!(store.get("k").await.unwrap().as_deref(), Some("v"));
}
