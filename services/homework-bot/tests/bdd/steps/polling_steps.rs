//! BDD step definitions for polling loop feature

use std::collections::VecDeque;
use std::sync::Arc;

use cucumber::gherkin::Step;
use cucumber::{given, then, when};
use serde_json::Value;
use tokio::sync::RwLock;

use homework_bot::api::StatusApi;
use homework_bot::notifier::Notifier;
use homework_bot::poller::{CycleOutcome, Poller};
use homework_bot::translator::VerdictTable;
use homework_bot::{Config, HomeworkBotError};

use crate::steps::translation_steps::parse_status;
use crate::world::HomeworkBotWorld;

// --- Test doubles ---

/// A status API that plays back scripted answers and records each cursor
#[derive(Debug, Default)]
pub struct ScriptedApi {
    script: RwLock<VecDeque<homework_bot::Result<Value>>>,
    pub queried_from: RwLock<Vec<i64>>,
}

impl ScriptedApi {
    fn new(script: VecDeque<homework_bot::Result<Value>>) -> Self {
        Self {
            script: RwLock::new(script),
            queried_from: RwLock::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl StatusApi for ScriptedApi {
    async fn fetch(&self, from_date: i64) -> homework_bot::Result<Value> {
        self.queried_from.write().await.push(from_date);
        self.script
            .write()
            .await
            .pop_front()
            .unwrap_or_else(|| Err(HomeworkBotError::Api("script exhausted".to_string())))
    }
}

/// A notifier that records every message and optionally rejects them
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    reject: bool,
    pub messages: RwLock<Vec<String>>,
}

#[async_trait::async_trait]
impl Notifier for RecordingNotifier {
    fn type_name(&self) -> &str {
        "recording"
    }

    async fn send(&self, message: &str) -> homework_bot::Result<()> {
        self.messages.write().await.push(message.to_string());
        if self.reject {
            Err(HomeworkBotError::Delivery("chat rejected message".to_string()))
        } else {
            Ok(())
        }
    }
}

fn build_poller(world: &mut HomeworkBotWorld) -> &mut Poller {
    if world.poller.is_none() {
        let api = Arc::new(ScriptedApi::new(std::mem::take(&mut world.api_script)));
        let recipient = Arc::new(RecordingNotifier {
            reject: world.chat_rejects,
            ..RecordingNotifier::default()
        });
        let config = Config::new("practicum", "telegram", "42");

        world.poller = Some(Poller::new(
            Arc::clone(&api) as Arc<dyn StatusApi>,
            Arc::clone(&recipient) as Arc<dyn Notifier>,
            &config,
            world.start_cursor,
        ));
        world.api = Some(api);
        world.recipient = Some(recipient);
    }
    world.poller.as_mut().expect("poller not built")
}

async fn recorded_messages(world: &HomeworkBotWorld) -> Vec<String> {
    let recipient = world.recipient.as_ref().expect("poller never ran");
    recipient.messages.read().await.clone()
}

#[given(expr = "the poller starts at cursor {int}")]
fn poller_starts_at(world: &mut HomeworkBotWorld, cursor: i64) {
    world.start_cursor = cursor;
}

#[given("the API reports:")]
fn api_reports(world: &mut HomeworkBotWorld, step: &Step) {
    let json = step.docstring.as_ref().expect("payload docstring missing");
    let payload: Value = serde_json::from_str(json).expect("payload is not JSON");
    world.api_script.push_back(Ok(payload));
}

#[given(expr = "the API fails with {string}")]
fn api_fails(world: &mut HomeworkBotWorld, message: String) {
    world
        .api_script
        .push_back(Err(HomeworkBotError::Api(message)));
}

#[given("the chat rejects every message")]
fn chat_rejects(world: &mut HomeworkBotWorld) {
    world.chat_rejects = true;
}

#[when(regex = r"^(\d+) polling cycles? runs?$")]
async fn cycles_run(world: &mut HomeworkBotWorld, count: usize) {
    for _ in 0..count {
        let outcome = build_poller(world).run_cycle().await;
        world.outcomes.push(outcome);
    }
}

#[then(regex = r"^the recipient received (\d+) messages?$")]
async fn recipient_received(world: &mut HomeworkBotWorld, count: usize) {
    let messages = recorded_messages(world).await;
    assert_eq!(messages.len(), count, "{messages:?}");
}

#[then(expr = "message {int} contains {string}")]
async fn message_contains(world: &mut HomeworkBotWorld, index: usize, expected: String) {
    let messages = recorded_messages(world).await;
    let message = &messages[index - 1];
    assert!(message.contains(&expected), "{message}");
}

#[then(expr = "message {int} ends with the verdict for {string}")]
async fn message_ends_with_verdict(world: &mut HomeworkBotWorld, index: usize, status: String) {
    let messages = recorded_messages(world).await;
    let verdict = VerdictTable::default().verdict(parse_status(&status));
    assert!(messages[index - 1].ends_with(verdict), "{messages:?}");
}

#[then("the last cycle found no new work")]
fn last_cycle_no_new_work(world: &mut HomeworkBotWorld) {
    let outcome = world.outcomes.last().expect("no cycle ran");
    assert!(
        matches!(outcome, CycleOutcome::NoNewWork { .. }),
        "{outcome:?}"
    );
}

#[then(expr = "the cursor is {int}")]
fn cursor_is(world: &mut HomeworkBotWorld, expected: i64) {
    let poller = world.poller.as_ref().expect("poller never ran");
    assert_eq!(poller.cursor(), expected);
}

#[then(regex = r"^the API was queried from (.+)$")]
async fn api_queried_from(world: &mut HomeworkBotWorld, cursors: String) {
    let expected: Vec<i64> = cursors
        .split(", ")
        .map(|c| c.parse().expect("cursor is not an integer"))
        .collect();
    let api = world.api.as_ref().expect("poller never ran");
    assert_eq!(*api.queried_from.read().await, expected);
}
