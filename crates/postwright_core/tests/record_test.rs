use postwright_core::{Batch, Brief, GenerationRecord, GenerationStatus, Settings, SettingsUpdate};

#[test]
fn pending_record_copies_brief() {
    let brief = Brief::indexed(3, "Quarterly results").unwrap();
    let record = GenerationRecord::pending(&brief);

    assert_eq!(record.id(), "brief-3");
    assert_eq!(record.brief(), "Quarterly results");
    assert!(record.content().is_empty());
    assert_eq!(*record.status(), GenerationStatus::Pending);
    assert!(record.error().is_none());
}

#[test]
fn failed_record_carries_error_only() {
    let brief = Brief::indexed(0, "Topic B").unwrap();
    let mut record = GenerationRecord::pending(&brief);

    record.mark_failed("No content generated").unwrap();

    assert_eq!(*record.status(), GenerationStatus::Failed);
    assert_eq!(record.error().as_deref(), Some("No content generated"));
    assert!(record.content().is_empty());
}

#[test]
fn terminal_records_never_revert() {
    let brief = Brief::indexed(0, "Topic A").unwrap();
    let mut record = GenerationRecord::pending(&brief);
    record.mark_failed("boom").unwrap();

    assert!(record.mark_generated("late").is_err());
    assert!(record.mark_failed("again").is_err());
    assert_eq!(*record.status(), GenerationStatus::Failed);
    assert_eq!(record.error().as_deref(), Some("boom"));
}

#[test]
fn batch_mirrors_brief_order() {
    let briefs: Vec<Brief> = ["a", "b", "c"]
        .iter()
        .enumerate()
        .map(|(i, text)| Brief::indexed(i, text).unwrap())
        .collect();
    let mut batch = Batch::from_briefs(&briefs);

    let ids: Vec<&str> = batch.records().iter().map(|r| r.id().as_str()).collect();
    assert_eq!(ids, vec!["brief-0", "brief-1", "brief-2"]);

    batch.get_mut(0).unwrap().mark_generated("A").unwrap();
    batch.get_mut(1).unwrap().mark_failed("x").unwrap();
    let summary = batch.summary();
    assert_eq!((summary.generated, summary.failed, summary.pending), (1, 1, 1));
    assert!(!batch.is_complete());

    batch.get_mut(2).unwrap().mark_generated("C").unwrap();
    assert!(batch.is_complete());
}

#[test]
fn batch_serializes_as_record_list() {
    let mut batch = Batch::from_briefs(&[Brief::new("b1", "Topic A").unwrap()]);
    batch.get_mut(0).unwrap().mark_generated("Hello A").unwrap();

    let json = serde_json::to_value(&batch).unwrap();
    assert_eq!(
        json,
        serde_json::json!([{
            "id": "b1",
            "brief": "Topic A",
            "content": "Hello A",
            "status": "generated"
        }])
    );
}

#[test]
fn blank_briefs_cannot_be_built() {
    assert!(Brief::indexed(0, " \n\t ").is_none());
    assert!(Brief::new("b1", "").is_none());
    assert_eq!(Brief::indexed(0, " hi ").unwrap().content(), "hi");
}

#[test]
fn deserialized_briefs_are_trimmed_and_non_blank() {
    let brief: Brief =
        serde_json::from_value(serde_json::json!({ "id": "b1", "content": "  Topic A " }))
            .unwrap();
    assert_eq!(brief.content(), "Topic A");

    let blank = serde_json::from_value::<Brief>(serde_json::json!({ "id": "b2", "content": "   " }));
    assert!(blank.unwrap_err().to_string().contains("blank content"));
}

#[test]
fn settings_update_merges_only_present_fields() {
    let settings = Settings::new("sk-old", "prompt");
    let merged = settings.merged(SettingsUpdate::default().with_system_prompt("new prompt"));

    assert_eq!(merged.api_key(), "sk-old");
    assert_eq!(merged.system_prompt(), "new prompt");
    assert!(SettingsUpdate::default().is_empty());
}

#[test]
fn blank_api_key_counts_as_missing() {
    assert!(!Settings::new("   ", "prompt").has_api_key());
}
