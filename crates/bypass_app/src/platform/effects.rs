use std::sync::mpsc;
use std::thread;

use arboard::Clipboard;
use bypass_client::{ClientHandle, ClientSettings, ResolveOutcome};
use bypass_core::{Effect, Msg};
use bypass_logging::{bypass_info, bypass_warn};

/// Executes the effects the state machine asks for and feeds client
/// completions back into the message channel.
pub struct EffectRunner {
    client: ClientHandle,
}

impl EffectRunner {
    pub fn new(settings: ClientSettings, msg_tx: mpsc::Sender<Msg>) -> Self {
        let (client, outcome_rx) = ClientHandle::new(settings);
        spawn_completion_loop(outcome_rx, msg_tx);
        Self { client }
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Resolve { url } => {
                    bypass_info!("Resolve url_len={} url={}", url.len(), url);
                    self.client.submit(url);
                }
                Effect::CopyToClipboard { text } => copy_to_clipboard(&text),
                Effect::OpenInBrowser { url } => open_in_browser(&url),
            }
        }
    }
}

fn spawn_completion_loop(outcome_rx: mpsc::Receiver<ResolveOutcome>, msg_tx: mpsc::Sender<Msg>) {
    thread::spawn(move || {
        while let Ok(outcome) = outcome_rx.recv() {
            let result = match outcome {
                Ok(resolution) => Ok(map_resolution(resolution)),
                Err(err) => {
                    bypass_warn!("Resolve failed: {}", err);
                    Err(err.user_message().to_string())
                }
            };
            if msg_tx.send(Msg::ResolveCompleted { result }).is_err() {
                break;
            }
        }
    });
}

fn map_resolution(resolution: bypass_client::Resolution) -> bypass_core::Resolution {
    bypass_core::Resolution {
        original_url: resolution.original_url,
        final_url: resolution.final_url,
        metadata: resolution.metadata.map(|metadata| bypass_core::PageMetadata {
            title: metadata.title,
            description: metadata.description,
        }),
        warnings: resolution.warnings,
    }
}

fn copy_to_clipboard(text: &str) {
    // Best effort: the UI gives no feedback either way.
    match Clipboard::new() {
        Ok(mut clipboard) => {
            if let Err(err) = clipboard.set_text(text.to_string()) {
                bypass_warn!("Clipboard write failed: {}", err);
            }
        }
        Err(err) => bypass_warn!("Clipboard unavailable: {}", err),
    }
}

fn open_in_browser(url: &str) {
    if let Err(err) = webbrowser::open(url) {
        bypass_warn!("Failed to open {} in a browser: {}", url, err);
    }
}
