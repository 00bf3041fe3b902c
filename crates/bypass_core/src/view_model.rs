/// Submit hint while the form accepts a submission.
pub const SUBMIT_LABEL: &str = "Bypass Link";
/// Submit hint while the exchange is in flight.
pub const SUBMIT_BUSY_LABEL: &str = "Bypassing...";

/// Read-only projection of [`crate::AppState`] for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppViewModel {
    pub input: String,
    pub loading: bool,
    pub submit_label: &'static str,
    /// Set iff the last exchange failed. Mutually exclusive with `result`.
    pub error: Option<String>,
    /// Set iff the last exchange succeeded.
    pub result: Option<ResultView>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultView {
    pub original_url: String,
    pub final_url: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub warnings: Vec<String>,
}
