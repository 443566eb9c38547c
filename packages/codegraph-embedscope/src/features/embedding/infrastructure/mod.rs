//! Concrete embedding backends

#[cfg(feature = "fastembed")]
mod fastembed_backend;
mod hashing;
mod unloaded;

#[cfg(feature = "fastembed")]
pub use fastembed_backend::{FastEmbedBackend, FastEmbedPreset};
pub use hashing::HashingBackend;
pub use unloaded::UnloadedBackend;
