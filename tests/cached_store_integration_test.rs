mod helpers;

use std::sync::Arc;
use std::time::Duration;

use todolist::adapters::sqlite::SqliteItemRepository;
use todolist::{CacheConfig, CachedItemStore, Item, ItemRepository, ManualClock, NewItem};

use helpers::database::{setup_test_db, teardown_test_db};

const TTL: Duration = Duration::from_secs(300);

#[tokio::test]
async fn test_add_is_visible_immediately() {
    let pool = setup_test_db().await;
    let store = CachedItemStore::new(Arc::new(SqliteItemRepository::new(pool.clone())));

    assert!(store.get_all().await.unwrap().is_empty());
    let created = store.add(&NewItem::new("Buy milk")).await.unwrap();

    let items = store.get_all().await.unwrap();
    assert_eq!(items, vec![created.clone()]);
    assert_eq!(store.get(created.id).await.unwrap(), Some(created));

    teardown_test_db(pool).await;
}

#[tokio::test]
async fn test_update_and_delete_reflected_on_next_read() {
    let pool = setup_test_db().await;
    let store = CachedItemStore::new(Arc::new(SqliteItemRepository::new(pool.clone())));

    let keep = store.add(&NewItem::new("Keep")).await.unwrap();
    let drop = store.add(&NewItem::new("Drop")).await.unwrap();

    let renamed = Item::new(keep.id, "Kept", true);
    store.update(&renamed).await.unwrap();
    assert_eq!(store.get_all().await.unwrap(), vec![renamed.clone(), drop.clone()]);

    store.delete(drop.id).await.unwrap();
    assert_eq!(store.get_all().await.unwrap(), vec![renamed]);
    assert_eq!(store.get(drop.id).await.unwrap(), None);

    teardown_test_db(pool).await;
}

#[tokio::test]
async fn test_stale_within_ttl_fresh_after() {
    let pool = setup_test_db().await;
    let repo = Arc::new(SqliteItemRepository::new(pool.clone()));
    let clock = Arc::new(ManualClock::new());
    let store = CachedItemStore::with_clock(Arc::clone(&repo), TTL, clock.clone());

    store.add(&NewItem::new("Through cache")).await.unwrap();
    let direct = repo.add(&NewItem::new("Behind cache")).await.unwrap();

    // Snapshot predates the direct write and is still fresh
    assert_eq!(store.get_all().await.unwrap().len(), 1);
    assert!(store.fuzzy_find("behind").await.unwrap().is_empty());

    // Point lookups fall through to the store without refreshing
    assert_eq!(store.get(direct.id).await.unwrap(), Some(direct.clone()));
    assert_eq!(store.get_all().await.unwrap().len(), 1);

    clock.advance(TTL);
    assert_eq!(store.get_all().await.unwrap().len(), 2);
    assert_eq!(store.fuzzy_find("behind").await.unwrap(), vec![direct]);

    teardown_test_db(pool).await;
}

#[tokio::test]
async fn test_fuzzy_find_over_sqlite() {
    let pool = setup_test_db().await;
    let store = CachedItemStore::from_config(
        Arc::new(SqliteItemRepository::new(pool.clone())),
        &CacheConfig::default(),
    );

    let test_item = store.add(&NewItem::new("Test 1")).await.unwrap();
    store.add(&NewItem::new("Shopping")).await.unwrap();
    store.add(&NewItem::new("")).await.unwrap();

    assert_eq!(store.fuzzy_find("test").await.unwrap(), vec![test_item]);
    assert_eq!(store.fuzzy_find("").await.unwrap().len(), 2);
    assert!(store.fuzzy_find("garden").await.unwrap().is_empty());

    teardown_test_db(pool).await;
}

#[tokio::test]
async fn test_store_failure_propagates() {
    let pool = setup_test_db().await;
    let store = CachedItemStore::new(Arc::new(SqliteItemRepository::new(pool.clone())));
    pool.close().await;

    assert!(matches!(
        store.add(&NewItem::new("Unreachable")).await,
        Err(todolist::DomainError::DatabaseError(_))
    ));
    assert!(store.fuzzy_find("x").await.is_err());
}

#[tokio::test]
async fn test_usable_as_trait_object() {
    let pool = setup_test_db().await;
    let repo = Arc::new(SqliteItemRepository::new(pool.clone()));
    let store: Arc<dyn ItemRepository> = Arc::new(CachedItemStore::new(repo));

    let created = store.add(&NewItem::new("Dyn")).await.unwrap();
    assert_eq!(store.get_all().await.unwrap(), vec![created]);

    teardown_test_db(pool).await;
}

#[tokio::test]
async fn test_concurrent_writers_and_readers_converge() {
    let pool = setup_test_db().await;
    let store = Arc::new(CachedItemStore::new(Arc::new(SqliteItemRepository::new(pool.clone()))));

    let writers: Vec<_> = (0..8)
        .map(|i| {
            let store = Arc::clone(&store);
            tokio::spawn(async move { store.add(&NewItem::new(format!("Item {i}"))).await })
        })
        .collect();
    let readers: Vec<_> = (0..8)
        .map(|_| {
            let store = Arc::clone(&store);
            tokio::spawn(async move { store.get_all().await })
        })
        .collect();

    for writer in writers {
        writer.await.unwrap().unwrap();
    }
    for reader in readers {
        assert!(reader.await.unwrap().unwrap().len() <= 8);
    }

    assert_eq!(store.get_all().await.unwrap().len(), 8);
    assert_eq!(store.fuzzy_find("item").await.unwrap().len(), 8);

    teardown_test_db(pool).await;
}
