use crate::{AppState, Effect, Msg, Outcome};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::InputChanged(text) => {
            // The input is frozen while a submission is in flight.
            if state.is_loading() {
                return (state, Vec::new());
            }
            state.set_input(text);
            Vec::new()
        }
        Msg::SubmitRequested => {
            // Required field; emptiness is the only client-side check.
            // Malformed URLs are the service's call to reject.
            if state.is_loading() || state.input().trim().is_empty() {
                return (state, Vec::new());
            }
            let url = state.input().to_owned();
            state.begin_submission();
            vec![Effect::Resolve { url }]
        }
        Msg::ResolveCompleted { result } => {
            // The input stays locked until the in-flight exchange settles,
            // so a completion outside Loading is stale and changes nothing.
            if !state.is_loading() {
                return (state, Vec::new());
            }
            let outcome = match result {
                Ok(resolution) => Outcome::Success(resolution),
                Err(message) => Outcome::Failure(message),
            };
            state.settle(outcome);
            Vec::new()
        }
        Msg::OpenFinalRequested => match state.settled_success() {
            Some(resolution) => vec![Effect::OpenInBrowser {
                url: resolution.final_url.clone(),
            }],
            None => Vec::new(),
        },
        Msg::CopyOriginalRequested => match state.settled_success() {
            Some(resolution) => vec![Effect::CopyToClipboard {
                text: resolution.original_url.clone(),
            }],
            None => Vec::new(),
        },
        Msg::CopyFinalRequested => match state.settled_success() {
            Some(resolution) => vec![Effect::CopyToClipboard {
                text: resolution.final_url.clone(),
            }],
            None => Vec::new(),
        },
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
