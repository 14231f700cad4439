//! Action Engine
//!
//! Sequences the three user actions over the provider, parser, and
//! canvas layers. Each action builds one immutable [`ActionContext`]
//! up front and threads it explicitly; there is no ambient session
//! state. Only one action runs at a time: a second request while one
//! is in flight is rejected with a busy error rather than queued.
//!
//! ## Batching
//!
//! The documentation action processes screens in selection order, five
//! concurrent requests per batch, with an unconditional 2 second pause
//! between batches. Results are collected per item: one failed screen
//! becomes a per-item error value and never aborts its siblings.

pub mod notify;
pub mod quality;

pub use notify::{ActionKind, Notification, NotificationSink, NullSink, SharedSink};

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use base64::Engine as _;
use chrono::{DateTime, Utc};
use futures::future::join_all;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::ai::parse::{SectionParser, extract_screen_spec, split_flow_response};
use crate::ai::prompt::{
    SectionOptions, build_context_block, documentation_system_prompt, documentation_user_message,
    flow_system_prompt, flow_user_message, regeneration_fallback_note, regeneration_system_prompt,
    regeneration_user_message,
};
use crate::ai::provider::{ChatRequest, ImageAttachment, SharedProvider};
use crate::canvas::{
    Document, build_screen_from_spec, describe_frame, extract_snapshot,
    render_documentation_cards, render_flow_cards, render_missing_screen_cards,
};
use crate::constants::batch::{INTER_BATCH_DELAY_MS, SCREENS_PER_BATCH};
use crate::constants::regen::MAX_PARSE_ATTEMPTS;
use crate::types::{
    DesignSystemSnapshot, ErrorClassifier, FrameDescriptor, FramedocError, MissingScreenItem,
    Result,
};

// =============================================================================
// Action Context
// =============================================================================

/// Everything one action needs, captured once at its start and immutable
/// for the action's duration.
#[derive(Debug, Clone)]
pub struct ActionContext {
    pub snapshot: DesignSystemSnapshot,
    /// Selected screens in selection order
    pub frames: Vec<FrameDescriptor>,
    /// Serialized context block sent with every request of the action
    pub context_block: String,
}

impl ActionContext {
    /// Capture facts from the document. Fails before any network call when
    /// the selection is empty.
    pub fn capture(doc: &Document, selection: &[String], project_context: &str) -> Result<Self> {
        let selected = doc.select(selection)?;
        if selected.is_empty() {
            return Err(FramedocError::NoSelection);
        }
        let snapshot = extract_snapshot(doc);
        let frames = selected.into_iter().map(describe_frame).collect();
        let context_block = build_context_block(project_context, &snapshot);
        Ok(Self {
            snapshot,
            frames,
            context_block,
        })
    }
}

// =============================================================================
// Action Results
// =============================================================================

/// Per-screen result of the documentation action.
#[derive(Debug, Clone)]
pub enum ScreenOutcome {
    /// Parsed sections, keyed by the documentation grammar
    Documented {
        name: String,
        sections: BTreeMap<&'static str, String>,
    },
    /// Classified user-facing message for one failed screen
    Failed { name: String, message: String },
}

impl ScreenOutcome {
    pub fn name(&self) -> &str {
        match self {
            Self::Documented { name, .. } | Self::Failed { name, .. } => name,
        }
    }
}

/// Persisted output of a flow analysis, consumed later by regeneration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlowReport {
    pub generated_at: DateTime<Utc>,
    pub flow_text: String,
    pub missing_screens: Vec<MissingScreenItem>,
}

impl FlowReport {
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            FramedocError::Document(format!("{}: {} (run `framedoc flows` first)", path.display(), e))
        })?;
        Ok(serde_json::from_str(&raw)?)
    }
}

// =============================================================================
// Engine
// =============================================================================

/// Orchestrates one action at a time over a provider and a document.
pub struct Engine {
    provider: SharedProvider,
    sink: SharedSink,
    project_context: String,
    /// Non-reentrant action guard; try_lock failure surfaces as Busy
    guard: Mutex<()>,
}

impl Engine {
    pub fn new(provider: SharedProvider, sink: SharedSink, project_context: String) -> Self {
        Self {
            provider,
            sink,
            project_context,
            guard: Mutex::new(()),
        }
    }

    fn begin(&self) -> Result<tokio::sync::MutexGuard<'_, ()>> {
        self.guard.try_lock().map_err(|_| FramedocError::Busy)
    }

    fn report_error(&self, err: &FramedocError) -> String {
        let message = ErrorClassifier::user_message(err);
        self.sink.notify(Notification::Error {
            message: message.clone(),
        });
        message
    }

    // =========================================================================
    // Documentation
    // =========================================================================

    /// Document each selected screen and render a handoff card below it.
    pub async fn document_screens(
        &self,
        doc: &mut Document,
        selection: &[String],
        options: &SectionOptions,
    ) -> Result<Vec<ScreenOutcome>> {
        let _guard = self.begin()?;
        let ctx = ActionContext::capture(doc, selection, &self.project_context)?;
        let total = ctx.frames.len();
        self.sink
            .notify(Notification::SelectionChanged { count: total });
        info!("Documenting {} screens", total);

        let mut outcomes: Vec<ScreenOutcome> = Vec::with_capacity(total);
        for (batch_index, batch) in ctx.frames.chunks(SCREENS_PER_BATCH).enumerate() {
            if batch_index > 0 {
                debug!("Pausing {}ms between batches", INTER_BATCH_DELAY_MS);
                tokio::time::sleep(Duration::from_millis(INTER_BATCH_DELAY_MS)).await;
            }

            let done = batch_index * SCREENS_PER_BATCH;
            self.sink.notify(Notification::Progress {
                message: format!(
                    "Documenting screens {}-{} of {}",
                    done + 1,
                    done + batch.len(),
                    total
                ),
            });

            let requests = batch
                .iter()
                .map(|frame| self.document_one(&ctx, frame, options));
            let settled = join_all(requests).await;

            for (frame, result) in batch.iter().zip(settled) {
                match result {
                    Ok(sections) => outcomes.push(ScreenOutcome::Documented {
                        name: frame.name.clone(),
                        sections,
                    }),
                    Err(e) => {
                        warn!("Documentation failed for {:?}: {}", frame.name, e);
                        let message = self.report_error(&e);
                        outcomes.push(ScreenOutcome::Failed {
                            name: frame.name.clone(),
                            message,
                        });
                    }
                }
            }
        }

        let mut documented = 0;
        for outcome in &outcomes {
            if let ScreenOutcome::Documented { name, sections } = outcome {
                render_documentation_cards(doc, name, sections)?;
                documented += 1;
            }
        }

        self.sink.notify(Notification::ActionComplete {
            action: ActionKind::Documentation,
            message: format!("Documented {documented} of {total} screens"),
        });
        Ok(outcomes)
    }

    async fn document_one(
        &self,
        ctx: &ActionContext,
        frame: &FrameDescriptor,
        options: &SectionOptions,
    ) -> Result<BTreeMap<&'static str, String>> {
        let request = ChatRequest::text(
            documentation_system_prompt(),
            &ctx.context_block,
            documentation_user_message(frame, options),
        );
        let text = self.provider.complete(&request).await?;
        Ok(SectionParser::documentation().parse(&text))
    }

    // =========================================================================
    // Flow Analysis
    // =========================================================================

    /// Analyze the selected screens as one flow. Always renders the flow
    /// card; renders missing-screen summaries when any were parsed.
    pub async fn analyze_flow(
        &self,
        doc: &mut Document,
        selection: &[String],
    ) -> Result<FlowReport> {
        let _guard = self.begin()?;
        let ctx = ActionContext::capture(doc, selection, &self.project_context)?;
        self.sink.notify(Notification::SelectionChanged {
            count: ctx.frames.len(),
        });
        self.sink.notify(Notification::Progress {
            message: format!("Analyzing flow across {} screens", ctx.frames.len()),
        });

        let request = ChatRequest::text(
            flow_system_prompt(),
            &ctx.context_block,
            flow_user_message(&ctx.frames),
        );
        let text = self.provider.complete(&request).await?;
        let analysis = split_flow_response(&text);
        info!(
            "Flow analysis parsed: {} missing screens",
            analysis.missing_screens.len()
        );

        let selected = doc.select(selection)?;
        // Selection was non-empty above, so a bounding box always exists
        let anchor = Document::bounding_box(&selected).ok_or(FramedocError::NoSelection)?;

        let flow_sections = SectionParser::flow().parse(&analysis.flow_text);
        render_flow_cards(doc, &analysis.flow_text, &flow_sections, anchor);

        if !analysis.missing_screens.is_empty() {
            render_missing_screen_cards(doc, &analysis.missing_screens, anchor);
            self.sink.notify(Notification::EdgeCases {
                missing: analysis.missing_screens.clone(),
            });
        }

        self.sink.notify(Notification::ActionComplete {
            action: ActionKind::FlowAnalysis,
            message: format!(
                "Flow analyzed; {} missing screens identified",
                analysis.missing_screens.len()
            ),
        });

        Ok(FlowReport {
            generated_at: Utc::now(),
            flow_text: analysis.flow_text,
            missing_screens: analysis.missing_screens,
        })
    }

    // =========================================================================
    // Regeneration
    // =========================================================================

    /// Build each missing screen from the saved flow report. A failed item
    /// is logged and skipped; the rest of the batch continues.
    pub async fn regenerate_missing(
        &self,
        doc: &mut Document,
        report: &FlowReport,
        screenshot_dir: Option<&Path>,
    ) -> Result<usize> {
        let _guard = self.begin()?;
        if report.missing_screens.is_empty() {
            self.sink.notify(Notification::ActionComplete {
                action: ActionKind::Regeneration,
                message: "No missing screens to regenerate".to_string(),
            });
            return Ok(0);
        }
        let ctx = ActionContext::capture(doc, &[], &self.project_context)?;

        let mut created = 0;
        for item in &report.missing_screens {
            self.sink.notify(Notification::Progress {
                message: format!("Regenerating {:?}", item.name),
            });
            match self.regenerate_one(doc, &ctx, item, screenshot_dir).await {
                Ok(true) => created += 1,
                Ok(false) => {}
                Err(e) => {
                    warn!("Regeneration failed for {:?}: {}", item.name, e);
                    self.report_error(&e);
                }
            }
        }

        self.sink
            .notify(Notification::ScreensCreated { count: created });
        self.sink.notify(Notification::ActionComplete {
            action: ActionKind::Regeneration,
            message: format!(
                "Created {created} of {} missing screens",
                report.missing_screens.len()
            ),
        });
        Ok(created)
    }

    async fn regenerate_one(
        &self,
        doc: &mut Document,
        ctx: &ActionContext,
        item: &MissingScreenItem,
        screenshot_dir: Option<&Path>,
    ) -> Result<bool> {
        let reference = item
            .reference_screen
            .as_deref()
            .and_then(|name| ctx.frames.iter().find(|f| f.name == name));
        let mut user_message = regeneration_user_message(item, reference);

        let attachments = match self.load_screenshot(screenshot_dir, item) {
            Some(attachment) => vec![attachment],
            None => {
                // Text-only fallback: lean on the design-system summary
                user_message.push_str("\n\n");
                user_message.push_str(&regeneration_fallback_note(&ctx.snapshot));
                Vec::new()
            }
        };

        let request = ChatRequest::text(
            regeneration_system_prompt(),
            &ctx.context_block,
            user_message,
        )
        .with_attachments(attachments);

        // Parse failure retries exactly once; network errors propagate to
        // the caller, which skips the item.
        let mut spec = None;
        for attempt in 1..=MAX_PARSE_ATTEMPTS {
            let text = self.provider.complete(&request).await?;
            match extract_screen_spec(&text) {
                Some(parsed) => {
                    spec = Some(parsed);
                    break;
                }
                None if attempt < MAX_PARSE_ATTEMPTS => {
                    warn!("Spec for {:?} failed to parse, retrying once", item.name);
                }
                None => {
                    warn!(
                        "Spec for {:?} failed to parse after retry, skipping",
                        item.name
                    );
                }
            }
        }
        let Some(spec) = spec else {
            return Ok(false);
        };

        for warning in quality::review(&spec) {
            warn!("Quality review of {:?}: {}", spec.name, warning);
        }

        build_screen_from_spec(doc, &spec, item.reference_screen.as_deref())?;
        Ok(true)
    }

    fn load_screenshot(
        &self,
        dir: Option<&Path>,
        item: &MissingScreenItem,
    ) -> Option<ImageAttachment> {
        let dir = dir?;
        let reference = item.reference_screen.as_deref()?;
        let path = dir.join(format!("{reference}.png"));
        match std::fs::read(&path) {
            Ok(bytes) => Some(ImageAttachment {
                media_type: "image/png".to_string(),
                data: base64::engine::general_purpose::STANDARD.encode(bytes),
            }),
            Err(_) => {
                debug!("No screenshot at {}, using text fallback", path.display());
                None
            }
        }
    }

    // =========================================================================
    // Key Validation
    // =========================================================================

    /// Minimal ping to check the configured key; emits the matching
    /// key-validated / key-invalid notification.
    pub async fn validate_key(&self) -> Result<bool> {
        let _guard = self.begin()?;
        let valid = self.provider.check_key().await?;
        self.sink.notify(if valid {
            Notification::KeyValidated
        } else {
            Notification::KeyInvalid
        });
        Ok(valid)
    }
}

/// Default location of the saved flow report, under the project dir.
pub fn default_report_path() -> PathBuf {
    crate::config::ConfigLoader::flow_report_path()
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::provider::LlmProvider;
    use crate::canvas::Node;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::Arc;
    use std::sync::Mutex as StdMutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Provider that pops scripted responses and tracks concurrency.
    struct ScriptedProvider {
        responses: StdMutex<VecDeque<Result<String>>>,
        fallback: String,
        calls: AtomicUsize,
        in_flight: AtomicUsize,
        max_in_flight: AtomicUsize,
    }

    impl ScriptedProvider {
        fn with_fallback(fallback: &str) -> Self {
            Self {
                responses: StdMutex::new(VecDeque::new()),
                fallback: fallback.to_string(),
                calls: AtomicUsize::new(0),
                in_flight: AtomicUsize::new(0),
                max_in_flight: AtomicUsize::new(0),
            }
        }

        fn push(&self, response: Result<String>) {
            self.responses.lock().unwrap().push_back(response);
        }
    }

    #[async_trait]
    impl LlmProvider for ScriptedProvider {
        async fn complete(&self, _request: &ChatRequest) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            self.max_in_flight.fetch_max(now, Ordering::SeqCst);
            // Let sibling requests of the batch start before resolving
            tokio::task::yield_now().await;
            self.in_flight.fetch_sub(1, Ordering::SeqCst);

            let scripted = self.responses.lock().unwrap().pop_front();
            scripted.unwrap_or_else(|| Ok(self.fallback.clone()))
        }

        fn name(&self) -> &str {
            "scripted"
        }

        fn model(&self) -> &str {
            "test"
        }

        async fn check_key(&self) -> Result<bool> {
            Ok(true)
        }
    }

    struct RecordingSink(StdMutex<Vec<Notification>>);

    impl NotificationSink for RecordingSink {
        fn notify(&self, notification: Notification) {
            self.0.lock().unwrap().push(notification);
        }
    }

    fn doc_with_screens(count: usize) -> Document {
        Document {
            frames: (0..count)
                .map(|i| Node::frame(format!("Screen {i}"), i as f64 * 500.0, 0.0, 375.0, 812.0))
                .collect(),
            ..Document::default()
        }
    }

    fn engine_with(provider: Arc<ScriptedProvider>) -> Engine {
        Engine::new(provider, Arc::new(NullSink), String::new())
    }

    #[tokio::test(start_paused = true)]
    async fn test_seven_screens_two_batches_one_pause_order_preserved() {
        let provider = Arc::new(ScriptedProvider::with_fallback("## Purpose\nDoes X"));
        let engine = engine_with(provider.clone());
        let mut doc = doc_with_screens(7);

        let started = tokio::time::Instant::now();
        let outcomes = engine
            .document_screens(&mut doc, &[], &SectionOptions::default())
            .await
            .unwrap();

        // Exactly one inter-batch pause elapsed (time is paused, so only
        // sleeps advance the clock)
        assert_eq!(
            started.elapsed(),
            Duration::from_millis(INTER_BATCH_DELAY_MS)
        );
        assert_eq!(provider.calls.load(Ordering::SeqCst), 7);
        // Batches of 5 then 2: never more than 5 in flight
        assert!(provider.max_in_flight.load(Ordering::SeqCst) <= 5);

        assert_eq!(outcomes.len(), 7);
        for (i, outcome) in outcomes.iter().enumerate() {
            assert_eq!(outcome.name(), format!("Screen {i}"));
            assert!(matches!(outcome, ScreenOutcome::Documented { .. }));
        }
        // 7 source frames + 7 documentation cards
        assert_eq!(doc.frames.len(), 14);
    }

    #[tokio::test]
    async fn test_one_failed_screen_does_not_abort_batch() {
        let provider = Arc::new(ScriptedProvider::with_fallback("## Purpose\nDoes X"));
        provider.push(Ok("## Purpose\nFirst".to_string()));
        provider.push(Err(FramedocError::Api {
            provider: "anthropic".to_string(),
            status: 500,
            body: "overloaded".to_string(),
        }));
        provider.push(Ok("## Purpose\nThird".to_string()));

        let engine = engine_with(provider.clone());
        let mut doc = doc_with_screens(3);
        let outcomes = engine
            .document_screens(&mut doc, &[], &SectionOptions::default())
            .await
            .unwrap();

        assert_eq!(outcomes.len(), 3);
        assert!(matches!(outcomes[0], ScreenOutcome::Documented { .. }));
        match &outcomes[1] {
            ScreenOutcome::Failed { message, .. } => {
                assert_eq!(
                    message,
                    "The provider is overloaded or unavailable. Try again later."
                );
            }
            other => panic!("expected failure, got {other:?}"),
        }
        assert!(matches!(outcomes[2], ScreenOutcome::Documented { .. }));
        // Cards rendered for the two successes only
        assert_eq!(doc.frames.len(), 5);
    }

    #[tokio::test]
    async fn test_no_selection_fails_before_any_network_call() {
        let provider = Arc::new(ScriptedProvider::with_fallback("## Purpose\nDoes X"));
        let engine = engine_with(provider.clone());
        let mut doc = doc_with_screens(0);

        let result = engine
            .document_screens(&mut doc, &[], &SectionOptions::default())
            .await;
        assert!(matches!(result, Err(FramedocError::NoSelection)));
        assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_second_action_rejected_while_one_in_flight() {
        struct BlockingProvider(Arc<tokio::sync::Notify>);

        #[async_trait]
        impl LlmProvider for BlockingProvider {
            async fn complete(&self, _request: &ChatRequest) -> Result<String> {
                self.0.notified().await;
                Ok("## Purpose\nDone".to_string())
            }
            fn name(&self) -> &str {
                "blocking"
            }
            fn model(&self) -> &str {
                "test"
            }
            async fn check_key(&self) -> Result<bool> {
                Ok(true)
            }
        }

        let release = Arc::new(tokio::sync::Notify::new());
        let engine = Arc::new(Engine::new(
            Arc::new(BlockingProvider(release.clone())),
            Arc::new(NullSink),
            String::new(),
        ));

        let first = {
            let engine = engine.clone();
            tokio::spawn(async move {
                let mut doc = doc_with_screens(1);
                engine
                    .document_screens(&mut doc, &[], &SectionOptions::default())
                    .await
            })
        };
        tokio::task::yield_now().await;

        let mut doc = doc_with_screens(1);
        let second = engine.analyze_flow(&mut doc, &[]).await;
        assert!(matches!(second, Err(FramedocError::Busy)));

        release.notify_waiters();
        assert!(first.await.unwrap().is_ok());
    }

    #[tokio::test]
    async fn test_flow_analysis_renders_cards_and_reports() {
        let provider = Arc::new(ScriptedProvider::with_fallback(""));
        provider.push(Ok(r#"## Flow Overview
Login to home.
---EDGE-CASES---
{"missing_screens":[{"name":"Error State","reason":"No failure path","severity":"high","reference_screen":"Screen 0"}]}"#
            .to_string()));

        let sink = Arc::new(RecordingSink(StdMutex::new(Vec::new())));
        let engine = Engine::new(provider, sink.clone(), String::new());
        let mut doc = doc_with_screens(2);

        let report = engine.analyze_flow(&mut doc, &[]).await.unwrap();
        assert_eq!(report.flow_text, "## Flow Overview\nLogin to home.");
        assert_eq!(report.missing_screens.len(), 1);

        // 2 screens + flow card + 1 missing-screen card
        assert_eq!(doc.frames.len(), 4);
        let notifications = sink.0.lock().unwrap();
        assert!(notifications
            .iter()
            .any(|n| matches!(n, Notification::EdgeCases { missing } if missing.len() == 1)));
    }

    #[tokio::test]
    async fn test_regeneration_retries_parse_failure_exactly_once() {
        let provider = Arc::new(ScriptedProvider::with_fallback(""));
        provider.push(Ok("not json at all".to_string()));
        provider.push(Ok(
            r#"{"name":"Error State","width":375,"height":812,"children":[]}"#.to_string(),
        ));

        let engine = engine_with(provider.clone());
        let mut doc = doc_with_screens(1);
        let report = FlowReport {
            generated_at: Utc::now(),
            flow_text: String::new(),
            missing_screens: vec![MissingScreenItem {
                name: "Error State".to_string(),
                reason: "No failure path".to_string(),
                components_needed: vec![],
                severity: crate::types::Severity::High,
                reference_screen: Some("Screen 0".to_string()),
            }],
        };

        let created = engine
            .regenerate_missing(&mut doc, &report, None)
            .await
            .unwrap();
        assert_eq!(created, 1);
        assert_eq!(provider.calls.load(Ordering::SeqCst), 2);
        assert!(doc.find_frame("Error State").is_some());
    }

    #[tokio::test]
    async fn test_regeneration_skips_item_after_second_parse_failure() {
        let provider = Arc::new(ScriptedProvider::with_fallback("still not json"));

        let engine = engine_with(provider.clone());
        let mut doc = doc_with_screens(1);
        let report = FlowReport {
            generated_at: Utc::now(),
            flow_text: String::new(),
            missing_screens: vec![
                MissingScreenItem {
                    name: "Hopeless".to_string(),
                    reason: "r".to_string(),
                    components_needed: vec![],
                    severity: crate::types::Severity::Low,
                    reference_screen: None,
                },
                MissingScreenItem {
                    name: "Also Hopeless".to_string(),
                    reason: "r".to_string(),
                    components_needed: vec![],
                    severity: crate::types::Severity::Low,
                    reference_screen: None,
                },
            ],
        };

        let created = engine
            .regenerate_missing(&mut doc, &report, None)
            .await
            .unwrap();
        assert_eq!(created, 0);
        // Two attempts per item, both items still processed
        assert_eq!(provider.calls.load(Ordering::SeqCst), 4);
    }

    #[tokio::test]
    async fn test_validate_key_emits_notification() {
        let provider = Arc::new(ScriptedProvider::with_fallback("OK"));
        let sink = Arc::new(RecordingSink(StdMutex::new(Vec::new())));
        let engine = Engine::new(provider, sink.clone(), String::new());

        assert!(engine.validate_key().await.unwrap());
        let notifications = sink.0.lock().unwrap();
        assert!(notifications
            .iter()
            .any(|n| matches!(n, Notification::KeyValidated)));
    }

    #[test]
    fn test_flow_report_round_trip() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("report.json");
        let report = FlowReport {
            generated_at: Utc::now(),
            flow_text: "docs".to_string(),
            missing_screens: vec![],
        };
        report.save(&path).unwrap();
        let loaded = FlowReport::load(&path).unwrap();
        assert_eq!(loaded.flow_text, "docs");
    }
}
