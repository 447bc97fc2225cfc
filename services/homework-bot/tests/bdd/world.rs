//! BDD test world for the homework bot

use std::collections::VecDeque;
use std::sync::Arc;

use cucumber::World;
use serde_json::Value;
use tokio::sync::RwLock;

use homework_bot::homework::Homework;
use homework_bot::notifier::Notifier;
use homework_bot::poller::{CycleOutcome, Poller};
use homework_bot::translator::Locale;
use homework_bot::ShapeError;

use crate::steps::notification_steps::RecordedPost;
use crate::steps::polling_steps::{RecordingNotifier, ScriptedApi};

#[derive(Debug, Default, World)]
pub struct HomeworkBotWorld {
    // Validation testing
    pub payload: Option<Value>,
    pub response_result: Option<Result<usize, ShapeError>>,
    pub record_result: Option<Result<Homework, ShapeError>>,

    // Translation testing
    pub locale: Locale,
    pub message: Option<String>,

    // Polling testing
    pub start_cursor: i64,
    pub api_script: VecDeque<homework_bot::Result<Value>>,
    pub chat_rejects: bool,
    pub api: Option<Arc<ScriptedApi>>,
    pub recipient: Option<Arc<RecordingNotifier>>,
    pub poller: Option<Poller>,
    pub outcomes: Vec<CycleOutcome>,

    // Notifier testing
    pub notifier: Option<Box<dyn Notifier>>,
    pub posts: Arc<RwLock<Vec<RecordedPost>>>,
    pub delivery_result: Option<homework_bot::Result<()>>,
}
