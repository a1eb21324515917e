use ring_kernel::Kernel;

use crate::messages::{UiToWorker, WorkerToUi};
use crate::worker_state::WorkerState;

/// Dispatch a UI message on the worker side and produce the response.
///
/// This is the single entry point for the worker's message handler. Errors
/// never escape: they are folded into a `WorkerToUi::Error` carrying the
/// request's correlation id, and the worker state is only updated on
/// success.
pub fn dispatch(state: &mut WorkerState, msg: UiToWorker, kernel: &mut dyn Kernel) -> WorkerToUi {
    match msg {
        UiToWorker::Generate { request_id, params } => {
            match ring_gen::generate(kernel, &params) {
                Ok(ring) => {
                    let tooth_count = ring.tooth_count;
                    state.store(ring);
                    WorkerToUi::Complete {
                        request_id,
                        tooth_count,
                    }
                }
                Err(e) => WorkerToUi::Error {
                    request_id: Some(request_id),
                    message: e.to_string(),
                },
            }
        }
    }
}
