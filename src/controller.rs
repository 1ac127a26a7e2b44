//! The summarizer form: input text, result, error and the loading gate.
//!
//! All state lives in a [`watch`] channel so a presentation layer can
//! subscribe and redraw after every change. Methods take `&self`; the
//! loading gate is checked and set inside one `send_if_modified` call, so
//! at most one request is ever in flight per form.

use serde::Serialize;
use tokio::sync::watch;
use tracing::{info, warn};

use crate::client::SummarizationService;
use crate::error::AppError;
use crate::messages;

pub const MAX_INPUT_CHARS: usize = 5000;

/// Snapshot of everything the form displays.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct FormState {
    pub text: String,
    pub summary: String,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl FormState {
    pub fn character_count(&self) -> usize {
        self.text.chars().count()
    }

    pub fn counter_label(&self) -> String {
        format!("{} / {}", self.character_count(), MAX_INPUT_CHARS)
    }

    pub fn can_submit(&self) -> bool {
        !self.is_loading && !self.text.trim().is_empty()
    }

    pub fn can_clear(&self) -> bool {
        !self.is_loading
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_loading {
            messages::PROCESSING_LABEL
        } else {
            messages::SUMMARIZE_LABEL
        }
    }
}

/// How a call to [`SummarizerForm::submit`] ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A request was already in flight; nothing changed.
    Busy,
    /// Blank input; no request was made.
    Rejected,
    Completed,
    Failed,
}

enum Begin {
    Busy,
    Rejected,
    Started(String),
}

pub struct SummarizerForm<S> {
    service: S,
    state: watch::Sender<FormState>,
}

impl<S: SummarizationService> SummarizerForm<S> {
    pub fn new(service: S) -> Self {
        let (state, _) = watch::channel(FormState::default());
        Self { service, state }
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    pub fn subscribe(&self) -> watch::Receiver<FormState> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> FormState {
        self.state.borrow().clone()
    }

    pub fn text(&self) -> String {
        self.state.borrow().text.clone()
    }

    pub fn summary(&self) -> String {
        self.state.borrow().summary.clone()
    }

    pub fn error(&self) -> Option<String> {
        self.state.borrow().error.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state.borrow().is_loading
    }

    pub fn character_count(&self) -> usize {
        self.state.borrow().character_count()
    }

    pub fn can_submit(&self) -> bool {
        self.state.borrow().can_submit()
    }

    /// Replaces the input, keeping at most [`MAX_INPUT_CHARS`] characters.
    /// Ignored while a request is in flight.
    pub fn set_text(&self, text: impl Into<String>) -> bool {
        let text = truncate_chars(text.into(), MAX_INPUT_CHARS);
        self.state.send_if_modified(|state| {
            if state.is_loading {
                return false;
            }
            state.text = text;
            true
        })
    }

    /// Adds a line to the end of the input, as pasting into the form would.
    pub fn append_line(&self, line: &str) -> bool {
        let mut text = self.text();
        if !text.is_empty() {
            text.push('\n');
        }
        text.push_str(line);
        self.set_text(text)
    }

    /// Resets input, summary and error. Does nothing while loading.
    pub fn clear(&self) -> bool {
        self.state.send_if_modified(|state| {
            if state.is_loading {
                return false;
            }
            state.text.clear();
            state.summary.clear();
            state.error = None;
            true
        })
    }

    /// Sends the current input to the service and records the summary or
    /// the error. The loading flag is always lowered last, even if this
    /// future is dropped before the service answers.
    pub async fn submit(&self) -> SubmitOutcome {
        let mut begin = Begin::Busy;
        self.state.send_if_modified(|state| {
            if state.is_loading {
                return false;
            }
            if state.text.trim().is_empty() {
                state.error = Some(AppError::Validation.user_message());
                begin = Begin::Rejected;
                return true;
            }
            state.is_loading = true;
            state.error = None;
            state.summary.clear();
            begin = Begin::Started(state.text.clone());
            true
        });

        let text = match begin {
            Begin::Busy => {
                warn!("submit ignored, a summary request is already in flight");
                return SubmitOutcome::Busy;
            }
            Begin::Rejected => {
                info!("submit rejected, input is blank");
                return SubmitOutcome::Rejected;
            }
            Begin::Started(text) => text,
        };

        let loading = LoadingGuard { state: &self.state };
        info!(chars = text.chars().count(), "requesting summary");

        let outcome = match self.service.summarize(&text).await {
            Ok(summary) => {
                info!(chars = summary.chars().count(), "summary received");
                self.state.send_modify(|state| state.summary = summary);
                SubmitOutcome::Completed
            }
            Err(err) => {
                warn!(error = ?err, "summary request failed");
                let message = err.user_message();
                self.state.send_modify(|state| state.error = Some(message));
                SubmitOutcome::Failed
            }
        };

        drop(loading);
        outcome
    }
}

struct LoadingGuard<'a> {
    state: &'a watch::Sender<FormState>,
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.state.send_modify(|state| state.is_loading = false);
    }
}

fn truncate_chars(mut text: String, max: usize) -> String {
    if let Some((idx, _)) = text.char_indices().nth(max) {
        warn!(limit = max, "input truncated");
        text.truncate(idx);
    }
    text
}
