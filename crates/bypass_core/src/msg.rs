#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the URL input box.
    InputChanged(String),
    /// User submitted the current input for resolution.
    SubmitRequested,
    /// The resolution exchange settled, one way or the other. `Err`
    /// carries the message to display, already reduced from the client
    /// error.
    ResolveCompleted {
        result: Result<crate::Resolution, String>,
    },
    /// User asked to open the bypassed URL in a new browsing context.
    OpenFinalRequested,
    /// User asked to copy the original URL.
    CopyOriginalRequested,
    /// User asked to copy the bypassed URL.
    CopyFinalRequested,
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
