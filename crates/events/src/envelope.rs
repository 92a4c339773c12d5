use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storefront_core::SessionId;

/// Envelope for an event, carrying session + stream metadata.
///
/// This is the unit published on an [`EventBus`](crate::EventBus).
///
/// - `session_id` scopes the event to the session that produced it.
/// - `sequence_number` increases monotonically per aggregate stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventEnvelope<E> {
    event_id: Uuid,
    session_id: SessionId,

    aggregate_id: Uuid,
    aggregate_type: String,

    /// Monotonically increasing position in the aggregate stream.
    sequence_number: u64,

    payload: E,
}

impl<E> EventEnvelope<E> {
    pub fn new(
        session_id: SessionId,
        aggregate_id: impl Into<Uuid>,
        aggregate_type: impl Into<String>,
        sequence_number: u64,
        payload: E,
    ) -> Self {
        Self {
            event_id: Uuid::now_v7(),
            session_id,
            aggregate_id: aggregate_id.into(),
            aggregate_type: aggregate_type.into(),
            sequence_number,
            payload,
        }
    }

    pub fn session_id(&self) -> SessionId {
        self.session_id
    }

    pub fn aggregate_id(&self) -> Uuid {
        self.aggregate_id
    }

    pub fn aggregate_type(&self) -> &str {
        &self.aggregate_type
    }

    pub fn sequence_number(&self) -> u64 {
        self.sequence_number
    }

    pub fn payload(&self) -> &E {
        &self.payload
    }

    pub fn into_payload(self) -> E {
        self.payload
    }
}
