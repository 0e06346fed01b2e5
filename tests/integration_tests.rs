//! Integration tests for quotekeep.
//!
//! These tests exercise the store, the interchange round trip, and full sync
//! cycles against a minimal in-process HTTP responder standing in for the
//! remote endpoint.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;
use std::time::Duration;

use pretty_assertions::assert_eq;

use quotekeep::interchange;
use quotekeep::model::QuoteItem;
use quotekeep::remote::{RemoteClient, REMOTE_CATEGORY};
use quotekeep::store::QuoteStore;
use quotekeep::sync::{
    ConflictResolver, PolicyResolver, Resolution, SyncEngine, SyncOutcome, SyncReport,
};

/// Spawn a one-shot HTTP server answering every request with the given body.
///
/// Returns the endpoint URL. The listener thread exits after a handful of
/// requests, which is plenty for a single test.
fn serve_json(body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind test listener");
    let addr = listener.local_addr().expect("listener addr");

    thread::spawn(move || {
        for stream in listener.incoming().take(4) {
            let Ok(mut stream) = stream else { continue };
            let mut buf = [0_u8; 2048];
            let _ = stream.read(&mut buf);
            let response = format!(
                "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                body.len(),
                body
            );
            let _ = stream.write_all(response.as_bytes());
        }
    });

    format!("http://{addr}/posts")
}

fn client_for(endpoint: &str) -> RemoteClient {
    RemoteClient::new(endpoint, Duration::from_secs(2)).expect("build client")
}

fn completed(outcome: SyncOutcome) -> SyncReport {
    match outcome {
        SyncOutcome::Completed(report) => report,
        SyncOutcome::SkippedBusy => panic!("cycle unexpectedly skipped"),
    }
}

/// Resolver that records how often it was consulted.
struct CountingResolver {
    answer: Resolution,
    calls: usize,
}

impl CountingResolver {
    fn new(answer: Resolution) -> Self {
        Self { answer, calls: 0 }
    }
}

impl ConflictResolver for CountingResolver {
    fn resolve(
        &mut self,
        _local: &QuoteItem,
        _remote: &QuoteItem,
    ) -> quotekeep::Result<Resolution> {
        self.calls += 1;
        Ok(self.answer)
    }
}

mod store {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_persisted_list_survives_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quotes.json");

        let mut store = QuoteStore::open(&path);
        store.append(QuoteItem::new("One", "General")).unwrap();
        store.append(QuoteItem::new("Two", "Humor")).unwrap();
        let before: Vec<QuoteItem> = store.items().to_vec();

        let reloaded = QuoteStore::open(&path);
        assert_eq!(reloaded.items(), &before[..]);
    }

    #[test]
    fn test_malformed_file_degrades_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quotes.json");
        std::fs::write(&path, "not json").unwrap();

        let store = QuoteStore::open(&path);
        assert!(store.is_empty());
    }
}

mod interchange_round_trip {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_export_then_import_preserves_mapping_and_order() {
        let items = vec![
            QuoteItem::new("One", "General"),
            QuoteItem::new("Two", "Humor"),
            QuoteItem::new("Three", "General"),
        ];

        let mut buf = Vec::new();
        interchange::export_json(&items, &mut buf).unwrap();
        let imported = interchange::import_json(std::str::from_utf8(&buf).unwrap()).unwrap();

        assert_eq!(imported, items);
    }
}

mod sync_cycles {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_remote_item_appended_to_empty_store() {
        let endpoint = serve_json(r#"[{"userId": 1, "id": 1, "title": "A", "body": "x"}]"#);
        let dir = tempfile::tempdir().unwrap();
        let mut store = QuoteStore::open(dir.path().join("quotes.json"));

        let engine = SyncEngine::new(client_for(&endpoint));
        let mut resolver = CountingResolver::new(Resolution::KeepLocal);
        let report = completed(engine.run(&mut store, &mut resolver).unwrap());

        assert_eq!(store.len(), 1);
        assert_eq!(store.items()[0], QuoteItem::new("A", REMOTE_CATEGORY));
        assert_eq!(report.added, vec!["A"]);
        assert_eq!(resolver.calls, 0, "appending must not prompt");
    }

    #[test]
    fn test_conflict_prompts_once_and_accepting_takes_remote_category() {
        let endpoint = serve_json(r#"[{"id": 1, "title": "A"}]"#);
        let dir = tempfile::tempdir().unwrap();
        let mut store = QuoteStore::open(dir.path().join("quotes.json"));
        store.append(QuoteItem::new("A", "Old")).unwrap();

        let engine = SyncEngine::new(client_for(&endpoint));
        let mut resolver = CountingResolver::new(Resolution::TakeRemote);
        let report = completed(engine.run(&mut store, &mut resolver).unwrap());

        assert_eq!(resolver.calls, 1);
        assert_eq!(store.len(), 1);
        assert_eq!(store.items()[0].category, REMOTE_CATEGORY);
        assert_eq!(report.updated, vec!["A"]);
    }

    #[test]
    fn test_conflict_declined_keeps_local_category() {
        let endpoint = serve_json(r#"[{"id": 1, "title": "A"}]"#);
        let dir = tempfile::tempdir().unwrap();
        let mut store = QuoteStore::open(dir.path().join("quotes.json"));
        store.append(QuoteItem::new("A", "Old")).unwrap();

        let engine = SyncEngine::new(client_for(&endpoint));
        let report = completed(
            engine
                .run(&mut store, &mut PolicyResolver::new(Resolution::KeepLocal))
                .unwrap(),
        );

        assert_eq!(store.items()[0].category, "Old");
        assert_eq!(report.kept, vec!["A"]);
        assert!(!report.changed());
    }

    #[test]
    fn test_mixed_remote_list_appends_and_updates_in_order() {
        let endpoint =
            serve_json(r#"[{"id": 1, "title": "known"}, {"id": 2, "title": "new"}]"#);
        let dir = tempfile::tempdir().unwrap();
        let mut store = QuoteStore::open(dir.path().join("quotes.json"));
        store.append(QuoteItem::new("known", "Old")).unwrap();

        let engine = SyncEngine::new(client_for(&endpoint));
        let report = completed(
            engine
                .run(&mut store, &mut PolicyResolver::new(Resolution::TakeRemote))
                .unwrap(),
        );

        let texts: Vec<_> = store.items().iter().map(|q| q.text.as_str()).collect();
        assert_eq!(texts, vec!["known", "new"]);
        assert_eq!(report.updated, vec!["known"]);
        assert_eq!(report.added, vec!["new"]);
    }

    #[test]
    fn test_failed_fetch_degrades_to_noop() {
        // Nothing listening on this port; fetch degrades to an empty list.
        let dir = tempfile::tempdir().unwrap();
        let mut store = QuoteStore::open(dir.path().join("quotes.json"));
        store.append(QuoteItem::new("A", "Old")).unwrap();

        let client =
            RemoteClient::new("http://127.0.0.1:9/posts", Duration::from_millis(300)).unwrap();
        let engine = SyncEngine::new(client);
        let mut resolver = CountingResolver::new(Resolution::TakeRemote);
        let report = completed(engine.run(&mut store, &mut resolver).unwrap());

        assert!(!report.changed());
        assert_eq!(resolver.calls, 0);
        assert_eq!(store.items()[0].category, "Old");
    }

    #[test]
    fn test_sync_result_is_persisted() {
        let endpoint = serve_json(r#"[{"id": 1, "title": "A"}]"#);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quotes.json");
        let mut store = QuoteStore::open(&path);

        let engine = SyncEngine::new(client_for(&endpoint));
        completed(
            engine
                .run(&mut store, &mut PolicyResolver::new(Resolution::KeepLocal))
                .unwrap(),
        );

        let reloaded = QuoteStore::open(&path);
        assert_eq!(reloaded.items(), store.items());
    }
}
