use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use std::time::{SystemTime, UNIX_EPOCH};

use kanal::{AsyncReceiver, AsyncSender};
use lingo_config::Config;
use lingo_config::ai::AiConfig;
use lingo_config::store::StoreConfig;
use lingo_core::document::Document;
use lingo_types::{AppEvent, DictionaryData, Meaning};
use tokio::time::timeout;

use crate::events::event_loop;
use crate::state::AppState;

fn unique_temp_dir(suffix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time should be after unix epoch")
        .as_nanos();
    std::env::temp_dir().join(format!("lingo-events-{suffix}-{}-{nanos}", std::process::id()))
}

fn test_state(suffix: &str) -> Arc<AppState> {
    let dir = unique_temp_dir(suffix);
    let config = Config {
        ai: AiConfig::default(),
        store: StoreConfig {
            data_path: dir.join("words.json").display().to_string(),
            cache_path: dir.join("cache.json").display().to_string(),
            export_path: dir.join("export.json").display().to_string(),
        },
    };
    Arc::new(AppState::new(config))
}

fn channels() -> (
    AsyncSender<AppEvent>,
    AsyncReceiver<AppEvent>,
    AsyncSender<AppEvent>,
    AsyncReceiver<AppEvent>,
) {
    let (io_tx, io_rx) = kanal::unbounded_async::<AppEvent>();
    let (ui_tx, ui_rx) = kanal::unbounded_async::<AppEvent>();
    (io_tx, io_rx, ui_tx, ui_rx)
}

async fn recv_entries(ui_rx: &AsyncReceiver<AppEvent>) -> (Vec<lingo_types::DisplayEntry>, usize) {
    loop {
        let event = timeout(Duration::from_secs(2), ui_rx.recv())
            .await
            .expect("timed out waiting for a view event")
            .expect("ui channel closed");
        if let AppEvent::ShowEntries { entries, total } = event {
            return (entries, total);
        }
    }
}

#[tokio::test]
async fn event_loop_renders_the_initial_view_and_quits() {
    let (io_tx, io_rx, ui_tx, ui_rx) = channels();
    let state = test_state("initial");
    let document = Document::new(DictionaryData::default());

    let loop_task = tokio::spawn(event_loop(state, document, None, io_rx, ui_tx));

    let (entries, total) = recv_entries(&ui_rx).await;
    assert!(entries.is_empty());
    assert_eq!(total, 0);

    io_tx.send(AppEvent::Quit).await.expect("send failed");
    let result = timeout(Duration::from_secs(2), loop_task)
        .await
        .expect("event loop did not stop");
    assert!(result.expect("event loop panicked").is_ok());
}

#[tokio::test]
async fn draft_flow_appends_a_term_to_the_view() {
    let (io_tx, io_rx, ui_tx, ui_rx) = channels();
    let state = test_state("draft-flow");
    let document = Document::new(DictionaryData::default());

    let loop_task = tokio::spawn(event_loop(state, document, None, io_rx, ui_tx));

    // initial render
    let (entries, _) = recv_entries(&ui_rx).await;
    assert!(entries.is_empty());

    io_tx
        .send(AppEvent::StartDraft("grok".to_string()))
        .await
        .expect("send failed");
    io_tx
        .send(AppEvent::AddMeaning(Meaning {
            part_of_speech: "verb".to_string(),
            definition: "to understand deeply".to_string(),
            example: None,
        }))
        .await
        .expect("send failed");
    io_tx.send(AppEvent::SaveDraft).await.expect("send failed");

    let (entries, total) = recv_entries(&ui_rx).await;
    assert_eq!(total, 1);
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].term, "grok");
    assert!(!entries[0].ai_generated);

    io_tx.send(AppEvent::Quit).await.expect("send failed");
    timeout(Duration::from_secs(2), loop_task)
        .await
        .expect("event loop did not stop")
        .expect("event loop panicked")
        .expect("event loop errored");
}

#[tokio::test]
async fn saving_an_empty_draft_mutates_nothing() {
    let (io_tx, io_rx, ui_tx, ui_rx) = channels();
    let state = test_state("empty-draft");
    let document = Document::new(DictionaryData::default());

    let loop_task = tokio::spawn(event_loop(state, document, None, io_rx, ui_tx));
    let _ = recv_entries(&ui_rx).await;

    io_tx
        .send(AppEvent::StartDraft("hollow".to_string()))
        .await
        .expect("send failed");
    io_tx.send(AppEvent::SaveDraft).await.expect("send failed");
    io_tx.send(AppEvent::ListTerms).await.expect("send failed");

    // the placeholder meaning is still empty, so the save is refused
    let (entries, total) = recv_entries(&ui_rx).await;
    assert!(entries.is_empty());
    assert_eq!(total, 0);

    io_tx.send(AppEvent::Quit).await.expect("send failed");
    timeout(Duration::from_secs(2), loop_task)
        .await
        .expect("event loop did not stop")
        .expect("event loop panicked")
        .expect("event loop errored");
}

#[tokio::test]
async fn importing_a_broken_file_leaves_the_document_alone() {
    let (io_tx, io_rx, ui_tx, ui_rx) = channels();
    let state = test_state("bad-import");
    let document = Document::new(DictionaryData::default());

    let bad_file = unique_temp_dir("bad-import-file");
    std::fs::create_dir_all(&bad_file).expect("mkdir failed");
    let bad_path = bad_file.join("broken.json");
    std::fs::write(&bad_path, r#"{"terms": []}"#).expect("write failed");

    let loop_task = tokio::spawn(event_loop(state, document, None, io_rx, ui_tx));
    let _ = recv_entries(&ui_rx).await;

    io_tx
        .send(AppEvent::ImportFile(bad_path))
        .await
        .expect("send failed");

    let event = timeout(Duration::from_secs(2), ui_rx.recv())
        .await
        .expect("timed out")
        .expect("ui channel closed");
    match event {
        AppEvent::Notice(text) => assert!(text.contains("Invalid JSON")),
        other => panic!("unexpected event: {other:?}"),
    }

    io_tx.send(AppEvent::ListTerms).await.expect("send failed");
    let (_, total) = recv_entries(&ui_rx).await;
    assert_eq!(total, 0);

    io_tx.send(AppEvent::Quit).await.expect("send failed");
    timeout(Duration::from_secs(2), loop_task)
        .await
        .expect("event loop did not stop")
        .expect("event loop panicked")
        .expect("event loop errored");
}
