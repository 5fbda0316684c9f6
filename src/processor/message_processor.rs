use crate::models::journey::JourneyPayload;
use crate::processor::registrar::{ActivityRegistrar, Registration};
use tracing::{debug, warn};

/// Decodes a feed payload and queues each journey it carries, in payload order.
///
/// Returns the pending registrations; an undecodable payload yields none.
pub fn process_message(registrar: &ActivityRegistrar, payload: &[u8]) -> Vec<Registration> {
    let journeys = match serde_json::from_slice::<JourneyPayload>(payload) {
        Ok(p) => p.into_journeys(),
        Err(e) => {
            warn!("Failed to parse journey payload: {}", e);
            return Vec::new();
        }
    };

    debug!(count = journeys.len(), "Decoded vehicle journeys");

    journeys
        .into_iter()
        .map(|journey| registrar.register_activity(journey))
        .collect()
}
