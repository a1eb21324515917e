//! WASM entry points for the web worker.
//!
//! Only compiled for the `wasm32` target. Provides the `#[wasm_bindgen]`
//! functions the JavaScript worker shell calls.

use wasm_bindgen::prelude::*;

use crate::dispatch;
use crate::messages::{UiToWorker, WorkerToUi};
use crate::worker_state::WorkerState;
use ring_kernel::TruckKernel;

// Global worker state — single-threaded inside the web worker.
thread_local! {
    static WORKER: std::cell::RefCell<Option<Worker>> = std::cell::RefCell::new(None);
}

/// Holds the generator state and the kernel session for the worker.
struct Worker {
    state: WorkerState,
    kernel: TruckKernel,
}

/// Initialize the worker. Must be called once before any other function.
///
/// Sets up panic hooks for better error messages and creates the state.
#[wasm_bindgen]
pub fn init() {
    console_error_panic_hook::set_once();

    WORKER.with(|cell| {
        *cell.borrow_mut() = Some(Worker {
            state: WorkerState::new(),
            kernel: TruckKernel::new(),
        });
    });
}

/// Process a JSON message from the UI and return a JSON response.
///
/// The input should be a JSON-serialized `UiToWorker` message; the return
/// value is a JSON-serialized `WorkerToUi` response. Parse failures produce
/// an `Error` response with no correlation id.
#[wasm_bindgen]
pub fn process_message(json_input: &str) -> String {
    let response = WORKER.with(|cell| {
        let mut worker = cell.borrow_mut();
        let worker = worker
            .as_mut()
            .expect("Worker not initialized. Call init() first.");

        let msg: UiToWorker = match serde_json::from_str(json_input) {
            Ok(msg) => msg,
            Err(e) => {
                return WorkerToUi::Error {
                    request_id: None,
                    message: format!("Failed to parse message: {e}"),
                };
            }
        };

        dispatch::dispatch(&mut worker.state, msg, &mut worker.kernel)
    });

    serde_json::to_string(&response).unwrap_or_else(|e| {
        format!(r#"{{"type":"Error","request_id":null,"message":"Serialization failed: {e}"}}"#)
    })
}

/// Tooth count of the last successful generation, or -1 if none exists.
///
/// Lets the UI re-query without resending a command.
#[wasm_bindgen]
pub fn current_tooth_count() -> i32 {
    WORKER.with(|cell| {
        let worker = cell.borrow();
        let worker = worker.as_ref().expect("Worker not initialized.");
        worker
            .state
            .current()
            .map(|ring| ring.tooth_count as i32)
            .unwrap_or(-1)
    })
}
