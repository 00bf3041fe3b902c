use std::sync::Once;

use bypass_core::{update, AppState, Effect, Msg, PageMetadata, Phase, Resolution};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(bypass_logging::initialize_for_tests);
}

fn submit(state: AppState, input: &str) -> (AppState, Vec<Effect>) {
    let (state, _) = update(state, Msg::InputChanged(input.to_string()));
    update(state, Msg::SubmitRequested)
}

fn sample_resolution() -> Resolution {
    Resolution {
        original_url: "http://a".to_string(),
        final_url: "http://b".to_string(),
        metadata: Some(PageMetadata {
            title: Some("T".to_string()),
            description: None,
        }),
        warnings: vec!["w1".to_string(), "w2".to_string()],
    }
}

#[test]
fn submit_locks_form_and_emits_resolve() {
    init_logging();
    let state = AppState::new();

    let (mut next, effects) = submit(state, "https://adlink.example/x");
    let view = next.view();

    assert!(view.loading);
    assert_eq!(view.error, None);
    assert_eq!(view.result, None);
    assert!(next.consume_dirty());
    assert_eq!(
        effects,
        vec![Effect::Resolve {
            url: "https://adlink.example/x".to_string(),
        }]
    );
}

#[test]
fn blank_input_is_not_submitted() {
    init_logging();
    let state = AppState::new();

    let (mut next, effects) = submit(state, "   ");

    assert!(effects.is_empty());
    assert_eq!(next.phase(), &Phase::Idle);
    assert!(!next.view().loading);
    // The input edit itself still re-renders.
    assert!(next.consume_dirty());
}

#[test]
fn submit_while_loading_is_ignored() {
    init_logging();
    let state = AppState::new();
    let (state, _effects) = submit(state, "https://adlink.example/x");

    let (state, effects) = update(state, Msg::SubmitRequested);
    assert!(effects.is_empty());
    assert!(state.view().loading);

    // Edits are frozen too: the disabled input cannot change under the
    // in-flight exchange.
    let (state, effects) = update(state, Msg::InputChanged("other".to_string()));
    assert!(effects.is_empty());
    assert_eq!(state.input(), "https://adlink.example/x");
}

#[test]
fn success_settles_with_result() {
    init_logging();
    let state = AppState::new();
    let (state, _effects) = submit(state, "http://a");

    let (mut next, effects) = update(
        state,
        Msg::ResolveCompleted {
            result: Ok(sample_resolution()),
        },
    );
    let view = next.view();

    assert!(effects.is_empty());
    assert!(!view.loading);
    assert_eq!(view.error, None);
    let result = view.result.expect("success populates the result");
    assert_eq!(result.original_url, "http://a");
    assert_eq!(result.final_url, "http://b");
    assert_eq!(result.title.as_deref(), Some("T"));
    assert_eq!(result.description, None);
    assert_eq!(result.warnings, vec!["w1".to_string(), "w2".to_string()]);
    assert!(next.consume_dirty());
}

#[test]
fn failure_settles_with_message_only() {
    init_logging();
    let state = AppState::new();
    let (state, _effects) = submit(state, "http://a");

    let (mut next, _effects) = update(
        state,
        Msg::ResolveCompleted {
            result: Err("bad url".to_string()),
        },
    );
    let view = next.view();

    assert!(!view.loading);
    assert_eq!(view.error.as_deref(), Some("bad url"));
    assert_eq!(view.result, None);
    assert!(next.consume_dirty());
}

#[test]
fn exactly_one_outcome_after_any_completion() {
    init_logging();
    for result in [Ok(sample_resolution()), Err("boom".to_string())] {
        let state = AppState::new();
        let (state, _effects) = submit(state, "http://a");
        let (state, _effects) = update(state, Msg::ResolveCompleted { result });
        let view = state.view();

        assert!(view.error.is_some() != view.result.is_some());
        assert!(!view.loading);
    }
}

#[test]
fn resubmission_clears_previous_outcome() {
    init_logging();
    let state = AppState::new();
    let (state, _effects) = submit(state, "http://a");
    let (state, _effects) = update(
        state,
        Msg::ResolveCompleted {
            result: Err("bad url".to_string()),
        },
    );

    let (state, effects) = update(state, Msg::SubmitRequested);
    let view = state.view();

    assert_eq!(effects.len(), 1);
    assert!(view.loading);
    assert_eq!(view.error, None);
    assert_eq!(view.result, None);
}

#[test]
fn stale_completion_is_ignored() {
    init_logging();
    let mut state = AppState::new();
    assert!(!state.consume_dirty());

    let (mut next, effects) = update(
        state,
        Msg::ResolveCompleted {
            result: Err("late".to_string()),
        },
    );

    assert!(effects.is_empty());
    assert_eq!(next.phase(), &Phase::Idle);
    assert!(!next.consume_dirty());
}

#[test]
fn copy_and_open_require_a_displayed_result() {
    init_logging();
    let state = AppState::new();

    // Nothing settled yet: all three actions are inert.
    let (state, effects) = update(state, Msg::OpenFinalRequested);
    assert!(effects.is_empty());
    let (state, effects) = update(state, Msg::CopyOriginalRequested);
    assert!(effects.is_empty());
    let (state, effects) = update(state, Msg::CopyFinalRequested);
    assert!(effects.is_empty());

    // A failure outcome offers nothing to copy or open either.
    let (state, _effects) = submit(state, "http://a");
    let (state, _effects) = update(
        state,
        Msg::ResolveCompleted {
            result: Err("bad url".to_string()),
        },
    );
    let (state, effects) = update(state, Msg::OpenFinalRequested);
    assert!(effects.is_empty());

    // A success outcome wires each action to the matching URL.
    let (state, _effects) = submit(state, "http://a");
    let (state, _effects) = update(
        state,
        Msg::ResolveCompleted {
            result: Ok(sample_resolution()),
        },
    );

    let before = state.view();
    let (state, effects) = update(state, Msg::OpenFinalRequested);
    assert_eq!(
        effects,
        vec![Effect::OpenInBrowser {
            url: "http://b".to_string(),
        }]
    );
    let (state, effects) = update(state, Msg::CopyOriginalRequested);
    assert_eq!(
        effects,
        vec![Effect::CopyToClipboard {
            text: "http://a".to_string(),
        }]
    );
    let (state, effects) = update(state, Msg::CopyFinalRequested);
    assert_eq!(
        effects,
        vec![Effect::CopyToClipboard {
            text: "http://b".to_string(),
        }]
    );
    // Side-effect actions never touch the displayed state.
    assert_eq!(state.view(), before);
}
