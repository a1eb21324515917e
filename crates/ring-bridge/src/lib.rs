//! Worker boundary for the ring generator.
//!
//! The generator itself is pure and synchronous; this crate is the glue that
//! runs it off the main execution context: JSON messages with correlation
//! ids, a UI-side tracker enforcing at-most-one in-flight request with a
//! bounded wait, and the worker-side dispatch that owns the kernel.

pub mod dispatch;
pub mod messages;
pub mod tracker;
pub mod worker_state;

#[cfg(target_arch = "wasm32")]
pub mod wasm_api;

pub use dispatch::dispatch;
pub use messages::{UiToWorker, WorkerToUi};
pub use tracker::{BridgeError, Delivery, RequestTracker, DEFAULT_TIMEOUT_MS};
pub use worker_state::WorkerState;
