use std::sync::{mpsc, Arc};
use std::thread;

use bypass_logging::bypass_debug;

use crate::resolve::{ClientSettings, ReqwestResolver, Resolver};
use crate::{Resolution, ResolveError};

enum ClientCommand {
    Resolve { url: String },
}

/// Completion of one exchange.
pub type ResolveOutcome = Result<Resolution, ResolveError>;

/// Command handle to the background client runtime. Commands go in over
/// a channel; completions come back on the receiver returned by
/// [`ClientHandle::new`]. Exactly one completion is sent per command,
/// success or failure; the state machine relies on that to unlock the
/// form.
pub struct ClientHandle {
    cmd_tx: mpsc::Sender<ClientCommand>,
}

impl ClientHandle {
    /// Spawns the client runtime thread and returns the command handle
    /// paired with the completion stream.
    pub fn new(settings: ClientSettings) -> (Self, mpsc::Receiver<ResolveOutcome>) {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (outcome_tx, outcome_rx) = mpsc::channel::<ResolveOutcome>();
        let resolver = Arc::new(ReqwestResolver::new(settings));

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let resolver = resolver.clone();
                let outcome_tx = outcome_tx.clone();
                runtime.spawn(async move {
                    handle_command(resolver.as_ref(), command, outcome_tx).await;
                });
            }
        });

        (Self { cmd_tx }, outcome_rx)
    }

    pub fn submit(&self, url: impl Into<String>) {
        let _ = self.cmd_tx.send(ClientCommand::Resolve { url: url.into() });
    }
}

async fn handle_command(
    resolver: &dyn Resolver,
    command: ClientCommand,
    outcome_tx: mpsc::Sender<ResolveOutcome>,
) {
    match command {
        ClientCommand::Resolve { url } => {
            bypass_debug!("resolve start url_len={}", url.len());
            let result = resolver.resolve(&url).await;
            let _ = outcome_tx.send(result);
        }
    }
}
