//! Form submit-button registry and submit dispatch.

use std::collections::{BTreeMap, BTreeSet};

/// A submit button registered against a form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitButton {
    pub id: String,
    pub label: String,
}

/// Per-form widget bookkeeping.
///
/// Buttons register on mount and unregister on unmount. Submissions queue at
/// most once per form until the host consumes them, so repeated clicks
/// between render passes stay idempotent.
#[derive(Debug, Default)]
pub struct FormsData {
    submit_buttons: BTreeMap<String, Vec<SubmitButton>>,
    pending_submits: BTreeSet<String>,
    uploads_in_progress: BTreeMap<String, usize>,
}

impl FormsData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a submit button (widget mount).
    pub fn add_submit_button(&mut self, form_id: &str, button: SubmitButton) {
        self.submit_buttons
            .entry(form_id.to_string())
            .or_default()
            .push(button);
    }

    /// Unregister a submit button by id (widget unmount).
    pub fn remove_submit_button(&mut self, form_id: &str, button_id: &str) {
        if let Some(buttons) = self.submit_buttons.get_mut(form_id) {
            buttons.retain(|button| button.id != button_id);
            if buttons.is_empty() {
                self.submit_buttons.remove(form_id);
            }
        }
    }

    /// Buttons currently mounted for a form.
    pub fn submit_buttons(&self, form_id: &str) -> &[SubmitButton] {
        self.submit_buttons
            .get(form_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Queue a submission for `form_id`.
    ///
    /// Returns `true` when this click queued a new submission, `false` when
    /// one is already pending (the click is absorbed).
    pub fn submit_form(&mut self, form_id: &str) -> bool {
        self.pending_submits.insert(form_id.to_string())
    }

    /// Drain queued submissions for the host to process.
    pub fn take_pending_submits(&mut self) -> Vec<String> {
        std::mem::take(&mut self.pending_submits).into_iter().collect()
    }

    /// Track an upload starting within a form.
    pub fn begin_upload(&mut self, form_id: &str) {
        *self.uploads_in_progress.entry(form_id.to_string()).or_insert(0) += 1;
    }

    /// Track an upload finishing within a form.
    pub fn finish_upload(&mut self, form_id: &str) {
        if let Some(count) = self.uploads_in_progress.get_mut(form_id) {
            *count -= 1;
            if *count == 0 {
                self.uploads_in_progress.remove(form_id);
            }
        }
    }

    /// Submit buttons are disabled while the form has an upload in flight.
    pub fn submit_disabled(&self, form_id: &str) -> bool {
        self.uploads_in_progress.contains_key(form_id)
    }
}
