use serde::{Deserialize, Serialize};
use uuid::Uuid;

use ring_types::RingParams;

/// Messages from the UI main thread to the generator worker.
/// Serialized as JSON for postMessage transfer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum UiToWorker {
    /// Run one generation. `request_id` correlates the eventual response.
    Generate {
        request_id: Uuid,
        #[serde(default)]
        params: RingParams,
    },
}

/// Messages from the generator worker back to the UI main thread.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum WorkerToUi {
    /// Generation finished. The solid stays with the worker for the
    /// meshing/export collaborators; the UI gets the tooth count.
    Complete { request_id: Uuid, tooth_count: u32 },

    /// Generation failed. Previously generated geometry remains valid.
    /// `request_id` is None only when the incoming message could not be
    /// parsed at all.
    Error {
        request_id: Option<Uuid>,
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_message_round_trips_through_json() {
        let msg = UiToWorker::Generate {
            request_id: Uuid::new_v4(),
            params: RingParams::default(),
        };
        let json = serde_json::to_string(&msg).unwrap();
        let back: UiToWorker = serde_json::from_str(&json).unwrap();
        let UiToWorker::Generate { request_id, params } = msg;
        let UiToWorker::Generate {
            request_id: rid,
            params: p,
        } = back;
        assert_eq!(request_id, rid);
        assert_eq!(params, p);
    }

    #[test]
    fn generate_message_accepts_partial_params() {
        let id = Uuid::new_v4();
        let json = format!(
            r#"{{"type":"Generate","request_id":"{id}","params":{{"thickness":12.0}}}}"#
        );
        let msg: UiToWorker = serde_json::from_str(&json).unwrap();
        let UiToWorker::Generate { request_id, params } = msg;
        assert_eq!(request_id, id);
        assert_eq!(params.thickness, 12.0);
        assert_eq!(params.inner_diameter, RingParams::default().inner_diameter);
    }

    #[test]
    fn responses_are_tagged_by_type() {
        let done = WorkerToUi::Complete {
            request_id: Uuid::new_v4(),
            tooth_count: 104,
        };
        let json = serde_json::to_string(&done).unwrap();
        assert!(json.contains(r#""type":"Complete""#));
        assert!(json.contains(r#""tooth_count":104"#));
    }
}
