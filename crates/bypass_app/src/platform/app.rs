use std::io;
use std::sync::mpsc;
use std::time::Duration;

use anyhow::Result;
use bypass_core::{update, AppState, Msg};
use bypass_logging::bypass_info;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use super::config;
use super::effects::EffectRunner;
use super::logging::{self, LogDestination};
use super::ui;

/// Poll timeout doubling as the render-coalescing tick.
const TICK_RATE: Duration = Duration::from_millis(75);

pub fn run_app() -> Result<()> {
    logging::initialize(LogDestination::File);

    let settings = config::load_client_settings();
    bypass_info!("Using endpoint {}", settings.endpoint);

    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let runner = EffectRunner::new(settings, msg_tx);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, &msg_rx, &runner);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    msg_rx: &mpsc::Receiver<Msg>,
    runner: &EffectRunner,
) -> Result<()> {
    let mut state = AppState::new();
    let mut redraw = true;

    loop {
        if redraw {
            let view = state.view();
            terminal.draw(|frame| ui::render::render(frame, &view))?;
            redraw = false;
        }

        // One message per iteration from the terminal; a quiet poll
        // becomes the tick. Client completions drain afterwards so both
        // sources funnel through the same dispatch.
        let msg = if event::poll(TICK_RATE)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    match map_key(&key, &state) {
                        KeyAction::Quit => return Ok(()),
                        KeyAction::Dispatch(msg) => msg,
                        KeyAction::Ignored => Msg::NoOp,
                    }
                }
                Event::Resize(..) => {
                    redraw = true;
                    Msg::NoOp
                }
                _ => Msg::NoOp,
            }
        } else {
            Msg::Tick
        };

        dispatch(&mut state, msg, runner);
        while let Ok(msg) = msg_rx.try_recv() {
            dispatch(&mut state, msg, runner);
        }

        if state.consume_dirty() {
            redraw = true;
        }
    }
}

fn dispatch(state: &mut AppState, msg: Msg, runner: &EffectRunner) {
    let current = std::mem::take(state);
    let (next, effects) = update(current, msg);
    *state = next;
    if !effects.is_empty() {
        runner.enqueue(effects);
    }
}

enum KeyAction {
    Quit,
    Dispatch(Msg),
    Ignored,
}

fn map_key(key: &KeyEvent, state: &AppState) -> KeyAction {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => KeyAction::Quit,
        KeyCode::Char('c') if ctrl => KeyAction::Quit,
        KeyCode::Char('o') if ctrl => KeyAction::Dispatch(Msg::OpenFinalRequested),
        KeyCode::Char('y') if ctrl => KeyAction::Dispatch(Msg::CopyFinalRequested),
        KeyCode::Char('t') if ctrl => KeyAction::Dispatch(Msg::CopyOriginalRequested),
        KeyCode::Enter => KeyAction::Dispatch(Msg::SubmitRequested),
        KeyCode::Backspace => {
            let mut input = state.input().to_string();
            input.pop();
            KeyAction::Dispatch(Msg::InputChanged(input))
        }
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            let mut input = state.input().to_string();
            input.push(c);
            KeyAction::Dispatch(Msg::InputChanged(input))
        }
        _ => KeyAction::Ignored,
    }
}
