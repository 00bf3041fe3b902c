//! Bypass client: the HTTP exchange with the resolution service.
mod handle;
mod resolve;
mod types;
mod wire;

pub use handle::{ClientHandle, ResolveOutcome};
pub use resolve::{ClientSettings, ReqwestResolver, Resolver, DEFAULT_ENDPOINT};
pub use types::{PageMetadata, Resolution, ResolveError, FALLBACK_MESSAGE};
pub use wire::{BypassRequest, BypassResponse, ErrorBody, MetadataBody};
