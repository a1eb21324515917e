use uuid::Uuid;

/// Default bounded wait for an in-flight generation, in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 60_000;

/// Errors from the request boundary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BridgeError {
    /// A generation is already outstanding; the new request is rejected.
    #[error("a generation request is already in flight ({request_id})")]
    Busy { request_id: Uuid },

    /// The in-flight generation exceeded the bounded wait and was abandoned.
    #[error("generation request {request_id} timed out after {timeout_ms} ms")]
    Timeout { request_id: Uuid, timeout_ms: u64 },
}

/// What to do with a worker response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    /// The response matches the in-flight request: deliver it, exactly once.
    Matched,
    /// Unknown, already-settled or timed-out id: discard it.
    Stale,
}

/// UI-side correlation state for the worker boundary.
///
/// Enforces the boundary contract: at most one generation in flight, each
/// request carrying a unique id, a bounded wait after which the request is
/// abandoned, and exactly-once settlement. Late responses for abandoned ids
/// are reported as [`Delivery::Stale`] and must be dropped.
///
/// Time is injected as `now_ms` rather than read from a clock, so the
/// tracker behaves identically on native and wasm hosts and in tests.
#[derive(Debug)]
pub struct RequestTracker {
    timeout_ms: u64,
    in_flight: Option<InFlight>,
}

#[derive(Debug, Clone, Copy)]
struct InFlight {
    request_id: Uuid,
    issued_at_ms: u64,
}

impl InFlight {
    fn expired(&self, now_ms: u64, timeout_ms: u64) -> bool {
        now_ms.saturating_sub(self.issued_at_ms) >= timeout_ms
    }
}

impl Default for RequestTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::with_timeout(DEFAULT_TIMEOUT_MS)
    }

    pub fn with_timeout(timeout_ms: u64) -> Self {
        Self {
            timeout_ms,
            in_flight: None,
        }
    }

    /// The id of the outstanding request, if one exists.
    pub fn in_flight(&self) -> Option<Uuid> {
        self.in_flight.map(|f| f.request_id)
    }

    /// Issue a fresh correlation id for a new request.
    ///
    /// Rejects with [`BridgeError::Busy`] while a request is outstanding and
    /// still within its window. An expired request no longer blocks; it is
    /// silently dropped here, so call [`poll_timeout`](Self::poll_timeout)
    /// first if the timeout should be surfaced to the caller.
    pub fn begin(&mut self, now_ms: u64) -> Result<Uuid, BridgeError> {
        if let Some(flight) = self.in_flight {
            if !flight.expired(now_ms, self.timeout_ms) {
                return Err(BridgeError::Busy {
                    request_id: flight.request_id,
                });
            }
            self.in_flight = None;
        }
        let request_id = Uuid::new_v4();
        self.in_flight = Some(InFlight {
            request_id,
            issued_at_ms: now_ms,
        });
        Ok(request_id)
    }

    /// Settle a worker response against the in-flight request.
    ///
    /// Returns [`Delivery::Matched`] exactly once per issued id. Everything
    /// else (an unknown id, a second response for a settled id, a response
    /// arriving after the window closed) is [`Delivery::Stale`].
    pub fn settle(&mut self, request_id: Uuid, now_ms: u64) -> Delivery {
        match self.in_flight {
            Some(flight) if flight.request_id == request_id => {
                self.in_flight = None;
                if flight.expired(now_ms, self.timeout_ms) {
                    Delivery::Stale
                } else {
                    Delivery::Matched
                }
            }
            _ => Delivery::Stale,
        }
    }

    /// Report and clear a timed-out request.
    ///
    /// Returns `None` while no request is outstanding or the window is
    /// still open.
    pub fn poll_timeout(&mut self, now_ms: u64) -> Option<BridgeError> {
        let flight = self.in_flight?;
        if !flight.expired(now_ms, self.timeout_ms) {
            return None;
        }
        self.in_flight = None;
        Some(BridgeError::Timeout {
            request_id: flight.request_id,
            timeout_ms: self.timeout_ms,
        })
    }
}
