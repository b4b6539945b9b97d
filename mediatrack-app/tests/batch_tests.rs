use mediatrack_app::{run_batch, BatchSummary, Tracker, TrackerConfig};
use mediatrack_storage::{MemoryBackend, DEFAULT_STORAGE_KEY};
use pretty_assertions::assert_eq;
use serde_json::Value;

fn open_empty() -> Tracker<MemoryBackend> {
    let backend = MemoryBackend::with_blob(DEFAULT_STORAGE_KEY, "[]");
    let (tracker, _) = Tracker::open(backend, &TrackerConfig::default()).unwrap();
    tracker
}

fn run(tracker: &mut Tracker<MemoryBackend>, input: &str) -> (BatchSummary, Vec<Value>) {
    let mut out = Vec::new();
    let summary = run_batch(tracker, input.as_bytes(), &mut out).unwrap();
    let replies = String::from_utf8(out)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    (summary, replies)
}

#[test]
fn add_then_increment_round_trip() {
    let mut tracker = open_empty();
    let (_, replies) = run(
        &mut tracker,
        r#"{"intent":"add","data":{"title":"Short","media_type":"manga","current":"4","total":"5"}}"#,
    );
    let id = replies[0]["data"].as_str().unwrap().to_owned();
    assert_eq!(replies[0]["outcome"], "created");

    let input = format!(
        "{}\n\n{}\n",
        serde_json::json!({ "intent": "increment", "data": id }),
        serde_json::json!({ "intent": "increment", "data": id }),
    );
    let (summary, replies) = run(&mut tracker, &input);
    assert_eq!(summary, BatchSummary { applied: 2, failed: 0 });
    assert_eq!(replies.len(), 2);
    assert_eq!(replies[0]["outcome"], "patch");
    assert_eq!(replies[0]["data"]["progress_text"], "5 / 5");
    assert_eq!(replies[0]["data"]["status"], "completed");
    assert_eq!(replies[1], serde_json::json!({ "outcome": "unchanged" }));
}

#[test]
fn bad_lines_report_errors_and_continue() {
    let mut tracker = open_empty();
    let input = [
        r#"not json"#,
        r#"{"intent":"add","data":{"title":"  ","media_type":"anime"}}"#,
        r#"{"intent":"submit_edit","data":{"title":"X","media_type":"anime"}}"#,
        r#"{"intent":"set_filter","data":"anime"}"#,
    ]
    .join("\n");

    let (summary, replies) = run(&mut tracker, &input);
    assert_eq!(summary, BatchSummary { applied: 1, failed: 3 });
    assert_eq!(replies[0]["line"], 1);
    assert!(replies[0]["error"].as_str().unwrap().starts_with("invalid intent"));
    assert_eq!(replies[1]["error"], "invalid input: title must not be empty");
    assert_eq!(replies[2]["error"], "no edit in progress");
    assert_eq!(replies[3], serde_json::json!({ "outcome": "rerender" }));
    assert!(tracker.store().is_empty());
}

#[test]
fn empty_input_writes_nothing() {
    let mut tracker = open_empty();
    let (summary, replies) = run(&mut tracker, "\n  \n");
    assert_eq!(summary, BatchSummary::default());
    assert!(replies.is_empty());
}
