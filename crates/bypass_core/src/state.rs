use crate::view_model::{AppViewModel, ResultView, SUBMIT_BUSY_LABEL, SUBMIT_LABEL};

/// Where the current submission cycle stands.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Settled(Outcome),
}

/// How a completed exchange ended. Success and failure are mutually
/// exclusive by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success(Resolution),
    Failure(String),
}

/// Resolved destination as reported by the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub original_url: String,
    pub final_url: String,
    pub metadata: Option<PageMetadata>,
    pub warnings: Vec<String>,
}

/// Page metadata scraped by the service. Both fields are independently
/// optional.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageMetadata {
    pub title: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    input: String,
    phase: Phase,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        let loading = self.is_loading();
        let (error, result) = match &self.phase {
            Phase::Settled(Outcome::Failure(message)) => (Some(message.clone()), None),
            Phase::Settled(Outcome::Success(resolution)) => (
                None,
                Some(ResultView {
                    original_url: resolution.original_url.clone(),
                    final_url: resolution.final_url.clone(),
                    title: resolution.metadata.as_ref().and_then(|m| m.title.clone()),
                    description: resolution
                        .metadata
                        .as_ref()
                        .and_then(|m| m.description.clone()),
                    warnings: resolution.warnings.clone(),
                }),
            ),
            Phase::Idle | Phase::Loading => (None, None),
        };

        AppViewModel {
            input: self.input.clone(),
            loading,
            submit_label: if loading {
                SUBMIT_BUSY_LABEL
            } else {
                SUBMIT_LABEL
            },
            error,
            result,
            dirty: self.dirty,
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Loading)
    }

    /// Returns whether a re-render is due and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_input(&mut self, text: String) {
        if self.input != text {
            self.input = text;
            self.mark_dirty();
        }
    }

    /// Discards the previous outcome and locks the form for one exchange.
    pub(crate) fn begin_submission(&mut self) {
        self.phase = Phase::Loading;
        self.mark_dirty();
    }

    pub(crate) fn settle(&mut self, outcome: Outcome) {
        self.phase = Phase::Settled(outcome);
        self.mark_dirty();
    }

    pub(crate) fn settled_success(&self) -> Option<&Resolution> {
        match &self.phase {
            Phase::Settled(Outcome::Success(resolution)) => Some(resolution),
            _ => None,
        }
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}
