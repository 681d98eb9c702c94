use scout_core::{ExternalId, PlayerDraft, RecordId};
use scout_runtime::{
    FileRecordStore, FileSnapshotCache, RecordStore, RepositoryError, Session, SnapshotService,
};
use tempfile::TempDir;

fn draft(external: u64, name: &str) -> PlayerDraft {
    PlayerDraft {
        external_id: ExternalId(external),
        name: name.into(),
        team: "Red".into(),
        age: 22,
        market_value: 750_000,
    }
}

#[tokio::test]
async fn missing_file_reads_as_empty_collection() {
    let dir = TempDir::new().expect("temp dir");
    let store = FileRecordStore::new(dir.path().join("players.json"));

    let records = store.list_records().await.expect("list succeeds");
    assert!(records.is_empty());
}

#[tokio::test]
async fn records_survive_reopen_and_ids_are_not_reused() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("nested").join("players.json");

    let store = FileRecordStore::new(&path);
    store.create_record(draft(10, "Ali")).await.expect("create");
    store.create_record(draft(20, "Bea")).await.expect("create");
    store.delete_record(RecordId(2)).await.expect("delete");

    let reopened = FileRecordStore::new(&path);
    reopened.create_record(draft(30, "Cem")).await.expect("create");

    let ids: Vec<u64> = reopened
        .list_records()
        .await
        .expect("list succeeds")
        .iter()
        .map(|record| record.record_id.0)
        .collect();
    assert_eq!(ids, vec![1, 3]);
    assert!(!path.with_extension("json.tmp").exists());
}

#[tokio::test]
async fn deleting_missing_record_reports_not_found() {
    let dir = TempDir::new().expect("temp dir");
    let store = FileRecordStore::new(dir.path().join("players.json"));

    let result = store.delete_record(RecordId(7)).await;
    assert!(matches!(result, Err(RepositoryError::NotFound(RecordId(7)))));
}

#[tokio::test]
async fn corrupt_record_file_is_an_error() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("players.json");
    std::fs::write(&path, b"{ not json").expect("write fixture");

    let result = FileRecordStore::new(&path).list_records().await;
    assert!(matches!(result, Err(RepositoryError::Json(_))));
}

#[tokio::test]
async fn create_fails_once_record_ids_run_out() {
    let dir = TempDir::new().expect("temp dir");
    let store = FileRecordStore::new(dir.path().join("players.json"));
    let fixture = format!(
        r#"{{"records":[{{"record_id":{},"external_id":10,"name":"Ali","team":"Red","age":20,"market_value":1}}]}}"#,
        u64::MAX
    );
    std::fs::write(store.path(), fixture).expect("write fixture");

    let result = store.create_record(draft(20, "Bea")).await;

    assert!(matches!(result, Err(RepositoryError::IdsExhausted)));
    let records = store.list_records().await.expect("list succeeds");
    assert_eq!(records.len(), 1);
}

#[tokio::test]
async fn snapshot_file_answers_every_requested_id() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("snapshots.json");
    std::fs::write(
        &path,
        br#"{ "10": { "team": "Blue", "age": 23, "market_value": 900000 }, "20": null }"#,
    )
    .expect("write fixture");

    let cache = FileSnapshotCache::new(&path);
    let batch = cache
        .get_snapshots(&[ExternalId(10), ExternalId(20), ExternalId(30)])
        .await
        .expect("lookup succeeds");

    assert_eq!(batch.len(), 3);
    assert_eq!(
        batch[&ExternalId(10)].as_ref().map(|live| live.team.as_str()),
        Some("Blue")
    );
    assert!(batch[&ExternalId(20)].is_none());
    assert!(batch[&ExternalId(30)].is_none());
}

#[tokio::test]
async fn session_over_files_flags_transfers() {
    let dir = TempDir::new().expect("temp dir");
    let records = dir.path().join("players.json");
    let snapshots = dir.path().join("snapshots.json");

    let store = FileRecordStore::new(&records);
    store.create_record(draft(10, "Ali")).await.expect("create");
    store.create_record(draft(20, "Bea")).await.expect("create");
    std::fs::write(
        &snapshots,
        br#"{ "10": { "team": "Blue", "age": 22, "market_value": 750000 } }"#,
    )
    .expect("write fixture");

    let mut session = Session::builder()
        .record_store(FileRecordStore::new(&records))
        .snapshot_service(FileSnapshotCache::new(&snapshots))
        .build()
        .expect("session should build");
    session.refresh().await.expect("load");
    session.fetch_snapshots().await.expect("lookup");

    session.dispatch(scout_core::ViewAction::SetOnlyChangedTeam(true));
    let view = session.view();
    assert_eq!(view.filtered_count, 1);
    assert_eq!(view.rows[0].record.name, "Ali");
    assert_eq!(view.rows[0].live.map(|live| live.team.as_str()), Some("Blue"));
}
