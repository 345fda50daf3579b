//! Conversation session state
//!
//! [`Session`] owns the transcript, the draft, the provider/model selection and
//! the set of requests currently in flight. It never performs I/O itself:
//! [`Session::submit`] hands back a [`GenerateRequest`] for the caller to send,
//! and the caller reports the outcome through [`Session::record_response`] or
//! [`Session::record_failure`].

use std::collections::BTreeSet;

use tracing::{debug, warn};

use crate::api::GenerateQuery;
use crate::core::builtin_providers::{default_provider, find_builtin_provider, BuiltinProvider};
use crate::core::message::Message;

/// One accepted submission, ready to go on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateRequest {
    pub request_id: u64,
    pub input: String,
    pub provider: String,
    pub model: String,
}

impl GenerateRequest {
    pub fn query(&self) -> GenerateQuery<'_> {
        GenerateQuery {
            input: &self.input,
            provider: &self.provider,
            ai_model: &self.model,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    messages: Vec<Message>,
    pending_input: String,
    selected_provider_id: String,
    selected_model: String,
    in_flight: BTreeSet<u64>,
    last_error: Option<String>,
    next_request_id: u64,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Empty transcript with the first provider and its first model selected.
    pub fn new() -> Self {
        let provider = default_provider();
        Self {
            messages: Vec::new(),
            pending_input: String::new(),
            selected_provider_id: provider.id.clone(),
            selected_model: provider.first_model().unwrap_or_default().to_string(),
            in_flight: BTreeSet::new(),
            last_error: None,
            next_request_id: 1,
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn pending_input(&self) -> &str {
        &self.pending_input
    }

    pub fn selected_provider_id(&self) -> &str {
        &self.selected_provider_id
    }

    pub fn selected_provider(&self) -> Option<&'static BuiltinProvider> {
        find_builtin_provider(&self.selected_provider_id)
    }

    pub fn selected_model(&self) -> &str {
        &self.selected_model
    }

    /// True while at least one submitted request has not been resolved.
    pub fn is_loading(&self) -> bool {
        !self.in_flight.is_empty()
    }

    pub fn in_flight_count(&self) -> usize {
        self.in_flight.len()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Switch provider and reset the model to that provider's first model.
    ///
    /// Unknown ids leave the selection untouched. Returns whether the
    /// selection changed hands.
    pub fn select_provider(&mut self, provider_id: &str) -> bool {
        let Some(provider) = find_builtin_provider(provider_id) else {
            warn!(provider = provider_id, "ignoring unknown provider selection");
            return false;
        };

        self.selected_provider_id = provider.id.clone();
        self.selected_model = provider.first_model().unwrap_or_default().to_string();
        debug!(
            provider = %self.selected_provider_id,
            model = %self.selected_model,
            "provider selected"
        );
        true
    }

    /// Set the model as given. It is not checked against the provider's list.
    pub fn select_model(&mut self, model: impl Into<String>) {
        self.selected_model = model.into();
        debug!(model = %self.selected_model, "model selected");
    }

    pub fn update_draft(&mut self, text: impl Into<String>) {
        self.pending_input = text.into();
    }

    /// Accept the current draft as a user turn.
    ///
    /// A blank or whitespace-only draft is ignored and leaves the session
    /// untouched. Otherwise the untrimmed draft is appended as a user message,
    /// the draft is cleared, any previous error is dropped, and the request
    /// to send is returned.
    pub fn submit(&mut self) -> Option<GenerateRequest> {
        if self.pending_input.trim().is_empty() {
            return None;
        }
        let input = std::mem::take(&mut self.pending_input);
        Some(self.accept(input))
    }

    /// Accept text captured from the input field when the user pressed send.
    ///
    /// The draft was already cleared at capture time and may hold text typed
    /// since, so it is left alone. Blank text is ignored like in [`submit`].
    ///
    /// [`submit`]: Session::submit
    pub fn submit_captured(&mut self, input: String) -> Option<GenerateRequest> {
        if input.trim().is_empty() {
            return None;
        }
        Some(self.accept(input))
    }

    fn accept(&mut self, input: String) -> GenerateRequest {
        self.messages.push(Message::user(input.clone()));

        let request_id = self.next_request_id;
        self.next_request_id += 1;
        self.in_flight.insert(request_id);
        self.last_error = None;

        debug!(
            request_id,
            provider = %self.selected_provider_id,
            model = %self.selected_model,
            "submission accepted"
        );

        GenerateRequest {
            request_id,
            input,
            provider: self.selected_provider_id.clone(),
            model: self.selected_model.clone(),
        }
    }

    /// Append the assistant reply for an in-flight request.
    ///
    /// Completions for ids that are not in flight are dropped.
    pub fn record_response(&mut self, request_id: u64, output: impl Into<String>) -> bool {
        if !self.in_flight.remove(&request_id) {
            warn!(request_id, "dropping response for unknown request");
            return false;
        }
        self.messages.push(Message::assistant(output));
        true
    }

    /// Record the failure of an in-flight request. No assistant message is added.
    pub fn record_failure(&mut self, request_id: u64, message: impl Into<String>) -> bool {
        if !self.in_flight.remove(&request_id) {
            warn!(request_id, "dropping failure for unknown request");
            return false;
        }
        self.last_error = Some(message.into());
        true
    }
}
