use ring_bridge::{
    dispatch, BridgeError, Delivery, RequestTracker, UiToWorker, WorkerState, WorkerToUi,
    DEFAULT_TIMEOUT_MS,
};
use ring_kernel::MockKernel;
use ring_types::RingParams;
use uuid::Uuid;

// ── Dispatch ───────────────────────────────────────────────────────────────

#[test]
fn dispatch_completes_and_stores_the_result() {
    let mut state = WorkerState::new();
    let mut kernel = MockKernel::new();
    let request_id = Uuid::new_v4();

    let response = dispatch(
        &mut state,
        UiToWorker::Generate {
            request_id,
            params: RingParams::default(),
        },
        &mut kernel,
    );

    match response {
        WorkerToUi::Complete {
            request_id: rid,
            tooth_count,
        } => {
            assert_eq!(rid, request_id);
            assert_eq!(tooth_count, 104);
        }
        other => panic!("expected Complete, got {other:?}"),
    }
    assert_eq!(state.current().unwrap().tooth_count, 104);
}

#[test]
fn dispatch_error_echoes_the_id_and_keeps_previous_result() {
    let mut state = WorkerState::new();
    let mut kernel = MockKernel::new();

    let first = Uuid::new_v4();
    dispatch(
        &mut state,
        UiToWorker::Generate {
            request_id: first,
            params: RingParams::default(),
        },
        &mut kernel,
    );
    assert!(state.current().is_some());

    let second = Uuid::new_v4();
    let response = dispatch(
        &mut state,
        UiToWorker::Generate {
            request_id: second,
            params: RingParams {
                gear_modulus: 0.0,
                ..RingParams::default()
            },
        },
        &mut kernel,
    );

    match response {
        WorkerToUi::Error {
            request_id,
            message,
        } => {
            assert_eq!(request_id, Some(second));
            assert!(message.contains("gear_modulus"), "got: {message}");
        }
        other => panic!("expected Error, got {other:?}"),
    }
    // The previous ring is still available for meshing/export.
    assert_eq!(state.current().unwrap().tooth_count, 104);
}

#[test]
fn dispatch_over_json_round_trips() {
    let mut state = WorkerState::new();
    let mut kernel = MockKernel::new();
    let id = Uuid::new_v4();
    let json = format!(r#"{{"type":"Generate","request_id":"{id}","params":{{}}}}"#);

    let msg: UiToWorker = serde_json::from_str(&json).unwrap();
    let response = dispatch(&mut state, msg, &mut kernel);
    let encoded = serde_json::to_string(&response).unwrap();
    assert!(encoded.contains(r#""type":"Complete""#));
    assert!(encoded.contains(&id.to_string()));
}

// ── Request tracker ────────────────────────────────────────────────────────

#[test]
fn only_one_request_may_be_in_flight() {
    let mut tracker = RequestTracker::new();
    let id = tracker.begin(0).unwrap();
    assert_eq!(tracker.in_flight(), Some(id));

    match tracker.begin(1_000) {
        Err(BridgeError::Busy { request_id }) => assert_eq!(request_id, id),
        other => panic!("expected Busy, got {other:?}"),
    }
}

#[test]
fn responses_settle_exactly_once() {
    let mut tracker = RequestTracker::new();
    let id = tracker.begin(0).unwrap();

    assert_eq!(tracker.settle(id, 100), Delivery::Matched);
    assert_eq!(tracker.settle(id, 101), Delivery::Stale, "second delivery");
    assert_eq!(tracker.in_flight(), None);
}

#[test]
fn unknown_ids_are_stale() {
    let mut tracker = RequestTracker::new();
    tracker.begin(0).unwrap();
    assert_eq!(tracker.settle(Uuid::new_v4(), 1), Delivery::Stale);
}

#[test]
fn timeout_is_reported_once_and_frees_the_tracker() {
    let mut tracker = RequestTracker::with_timeout(60_000);
    let id = tracker.begin(0).unwrap();

    assert_eq!(tracker.poll_timeout(59_999), None, "window still open");

    match tracker.poll_timeout(60_000) {
        Some(BridgeError::Timeout {
            request_id,
            timeout_ms,
        }) => {
            assert_eq!(request_id, id);
            assert_eq!(timeout_ms, 60_000);
        }
        other => panic!("expected Timeout, got {other:?}"),
    }
    assert_eq!(tracker.poll_timeout(70_000), None, "reported only once");

    // The tracker accepts new work after the abandonment.
    let next = tracker.begin(70_000).unwrap();
    assert_ne!(next, id, "correlation ids are unique per request");
}

#[test]
fn responses_for_timed_out_requests_are_discarded() {
    let mut tracker = RequestTracker::with_timeout(1_000);
    let id = tracker.begin(0).unwrap();

    // The worker answers after the caller's window has closed.
    assert_eq!(tracker.settle(id, 5_000), Delivery::Stale);
    // And the late response must not resurrect the request.
    assert_eq!(tracker.poll_timeout(5_001), None);
}

#[test]
fn expired_request_does_not_block_new_work() {
    let mut tracker = RequestTracker::with_timeout(1_000);
    let stale = tracker.begin(0).unwrap();

    // Caller skipped poll_timeout and went straight to the next request.
    let fresh = tracker.begin(10_000).unwrap();
    assert_ne!(fresh, stale);
    // A late answer for the abandoned id is still discarded.
    assert_eq!(tracker.settle(stale, 10_001), Delivery::Stale);
    assert_eq!(tracker.settle(fresh, 10_002), Delivery::Matched);
}

#[test]
fn default_timeout_matches_the_documented_bound() {
    assert_eq!(DEFAULT_TIMEOUT_MS, 60_000);
}

// ── Full loop ──────────────────────────────────────────────────────────────

#[test]
fn begin_dispatch_settle_delivers_exactly_once() {
    let mut tracker = RequestTracker::new();
    let mut state = WorkerState::new();
    let mut kernel = MockKernel::new();

    let request_id = tracker.begin(0).unwrap();
    let response = dispatch(
        &mut state,
        UiToWorker::Generate {
            request_id,
            params: RingParams::default(),
        },
        &mut kernel,
    );

    let WorkerToUi::Complete {
        request_id: rid, ..
    } = response
    else {
        panic!("expected Complete, got {response:?}");
    };
    assert_eq!(tracker.settle(rid, 250), Delivery::Matched);
    assert_eq!(tracker.settle(rid, 251), Delivery::Stale);
}
