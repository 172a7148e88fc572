//! Tests for the sequential generation pipeline.

use async_trait::async_trait;
use postwright_core::{Batch, Brief, GenerationStatus, Settings};
use postwright_error::{ProviderError, ProviderErrorKind, ProviderResult};
use postwright_interface::{CompletionProvider, NoopObserver};
use postwright_pipeline::{GenerationPipeline, MISSING_API_KEY_MESSAGE};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Scripted provider: answers by prompt and logs every call into a shared event log.
struct MockProvider {
    replies: HashMap<String, ProviderResult<String>>,
    events: Arc<Mutex<Vec<String>>>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
    seen: Mutex<Vec<(String, String, String)>>,
}

impl MockProvider {
    fn new(events: Arc<Mutex<Vec<String>>>) -> Self {
        Self {
            replies: HashMap::new(),
            events,
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
            seen: Mutex::new(Vec::new()),
        }
    }

    fn reply(mut self, prompt: &str, reply: ProviderResult<String>) -> Self {
        self.replies.insert(prompt.to_string(), reply);
        self
    }

    fn calls(&self) -> usize {
        self.seen.lock().unwrap().len()
    }
}

#[async_trait]
impl CompletionProvider for MockProvider {
    async fn complete(
        &self,
        prompt: &str,
        system_prompt: &str,
        credential: &str,
    ) -> ProviderResult<String> {
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);
        self.events.lock().unwrap().push(format!("call {}", prompt));
        self.seen.lock().unwrap().push((
            prompt.to_string(),
            system_prompt.to_string(),
            credential.to_string(),
        ));

        tokio::task::yield_now().await;

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        self.replies
            .get(prompt)
            .cloned()
            .unwrap_or_else(|| Ok(format!("Post about {}", prompt)))
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }
}

fn briefs(topics: &[&str]) -> Vec<Brief> {
    topics
        .iter()
        .enumerate()
        .map(|(i, topic)| Brief::indexed(i, topic).unwrap())
        .collect()
}

fn settings() -> Settings {
    Settings::new("sk-test", "Write a post.")
}

#[tokio::test]
async fn test_mixed_outcomes_are_isolated() {
    let events = Arc::new(Mutex::new(Vec::new()));
    let provider = MockProvider::new(events.clone())
        .reply("Topic A", Ok("Hello A".to_string()))
        .reply(
            "Topic B",
            Err(ProviderError::status(429, "Rate limit reached")),
        );
    let pipeline = GenerationPipeline::new(provider);

    let batch = pipeline
        .run(&briefs(&["Topic A", "Topic B"]), settings(), &mut NoopObserver)
        .await
        .expect("batch runs");

    let first = batch.get(0).expect("first record");
    assert_eq!(*first.status(), GenerationStatus::Generated);
    assert_eq!(first.content(), "Hello A");
    assert_eq!(first.error(), &None);

    let second = batch.get(1).expect("second record");
    assert_eq!(*second.status(), GenerationStatus::Failed);
    assert_eq!(second.content(), "");
    assert_eq!(second.error().as_deref(), Some("Rate limit reached"));
}

#[tokio::test]
async fn test_every_brief_gets_one_terminal_record_in_order() {
    let events = Arc::new(Mutex::new(Vec::new()));
    let pipeline = GenerationPipeline::new(MockProvider::new(events));
    let input = briefs(&["One", "Two", "Three", "Four"]);

    let batch = pipeline
        .run(&input, settings(), &mut NoopObserver)
        .await
        .expect("batch runs");

    assert_eq!(batch.len(), input.len());
    assert!(batch.is_complete());
    for (record, brief) in batch.records().iter().zip(&input) {
        assert_eq!(record.id(), brief.id());
        assert_eq!(record.brief(), brief.content());
    }
    assert_eq!(pipeline.provider().calls(), 4);
}

#[tokio::test]
async fn test_dispatch_is_strictly_sequential() {
    let events = Arc::new(Mutex::new(Vec::new()));
    let pipeline = GenerationPipeline::new(MockProvider::new(events.clone()));

    let log = events.clone();
    let mut observer = move |batch: &Batch| {
        log.lock().unwrap().push(format!("publish {}", batch.summary()));
    };

    pipeline
        .run(&briefs(&["A", "B"]), settings(), &mut observer)
        .await
        .expect("batch runs");

    let events = events.lock().unwrap().clone();
    assert_eq!(
        events,
        vec![
            "publish 0 generated, 0 failed, 2 pending",
            "call A",
            "publish 1 generated, 0 failed, 1 pending",
            "call B",
            "publish 2 generated, 0 failed, 0 pending",
        ]
    );
    assert_eq!(pipeline.provider().max_in_flight.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_empty_content_fails_record() {
    let events = Arc::new(Mutex::new(Vec::new()));
    let provider = MockProvider::new(events).reply("Blank", Ok("   \n".to_string()));
    let pipeline = GenerationPipeline::new(provider);

    let batch = pipeline
        .run(&briefs(&["Blank"]), settings(), &mut NoopObserver)
        .await
        .expect("batch runs");

    let record = batch.get(0).expect("record");
    assert_eq!(*record.status(), GenerationStatus::Failed);
    assert_eq!(record.error().as_deref(), Some("No content generated"));
}

#[tokio::test]
async fn test_transport_failure_uses_generic_message() {
    let events = Arc::new(Mutex::new(Vec::new()));
    let provider = MockProvider::new(events).reply(
        "Offline",
        Err(ProviderError::new(ProviderErrorKind::Transport(
            "connection reset".to_string(),
        ))),
    );
    let pipeline = GenerationPipeline::new(provider);

    let batch = pipeline
        .run(&briefs(&["Offline", "Online"]), settings(), &mut NoopObserver)
        .await
        .expect("batch runs");

    assert_eq!(
        batch.get(0).and_then(|r| r.error().clone()).as_deref(),
        Some("Failed to generate post")
    );
    assert_eq!(*batch.get(1).expect("second").status(), GenerationStatus::Generated);
}

#[tokio::test]
async fn test_missing_key_makes_no_calls_and_publishes_nothing() {
    let events = Arc::new(Mutex::new(Vec::new()));
    let pipeline = GenerationPipeline::new(MockProvider::new(events));
    let published = Arc::new(Mutex::new(0usize));
    let counter = published.clone();
    let mut observer = move |_: &Batch| *counter.lock().unwrap() += 1;

    let err = pipeline
        .run(&briefs(&["A"]), Settings::new("   ", "Prompt"), &mut observer)
        .await
        .expect_err("blank key is rejected");

    assert_eq!(err.message, MISSING_API_KEY_MESSAGE);
    assert_eq!(pipeline.provider().calls(), 0);
    assert_eq!(*published.lock().unwrap(), 0);
}

#[tokio::test]
async fn test_settings_are_passed_through() {
    let events = Arc::new(Mutex::new(Vec::new()));
    let pipeline = GenerationPipeline::new(MockProvider::new(events));

    pipeline
        .run(
            &briefs(&["Topic"]),
            Settings::new("sk-abc", "Be concise."),
            &mut NoopObserver,
        )
        .await
        .expect("batch runs");

    let seen = pipeline.provider().seen.lock().unwrap().clone();
    assert_eq!(
        seen,
        vec![(
            "Topic".to_string(),
            "Be concise.".to_string(),
            "sk-abc".to_string()
        )]
    );
}

#[tokio::test]
async fn test_empty_batch_completes_immediately() {
    let events = Arc::new(Mutex::new(Vec::new()));
    let pipeline = GenerationPipeline::new(MockProvider::new(events));
    let (mut tx, rx) = tokio::sync::watch::channel(Batch::default());

    let batch = pipeline
        .run(&[], settings(), &mut tx)
        .await
        .expect("empty batch runs");

    assert!(batch.is_empty());
    assert!(batch.is_complete());
    assert!(rx.borrow().is_empty());
}

#[tokio::test]
async fn test_throttled_pipeline_still_completes() {
    let events = Arc::new(Mutex::new(Vec::new()));
    let pipeline =
        GenerationPipeline::new(MockProvider::new(events)).with_requests_per_minute(600);
    let (mut tx, rx) = tokio::sync::watch::channel(Batch::default());

    let batch = pipeline
        .run(&briefs(&["A", "B"]), settings(), &mut tx)
        .await
        .expect("batch runs");

    assert_eq!(batch.summary().generated, 2);
    assert_eq!(*rx.borrow(), batch);
}
