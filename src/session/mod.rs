//! Session management
//!
//! Handles per-client session lifecycle: the single-slot session gate and
//! the token-keyed registry that binds gates to HTTP clients.

pub mod gate;
pub mod registry;

pub use gate::SessionGate;
pub use registry::SessionRegistry;
