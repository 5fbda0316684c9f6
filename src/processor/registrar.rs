use crate::error::RegistrationError;
use crate::models::journey::VehicleJourney;
use crate::processor::gate::SerializationGate;
use crate::processor::identity::IdentityResolver;
use crate::processor::merger::{merge_activity, MergeOutcome};
use crate::processor::normalizer::{normalize, ActivityObservation};
use crate::processor::store::ActivityStore;
use chrono::Utc;
use futures::future::BoxFuture;
use futures::FutureExt;
use std::sync::Arc;
use tracing::{debug, info};

pub type Registration = BoxFuture<'static, Result<(), RegistrationError>>;

/// Entry point for turning journey updates into line activity spans.
///
/// Every registration that carries a vehicle and a line goes through one shared
/// [`SerializationGate`], so lookups and writes against the store never interleave.
#[derive(Clone)]
pub struct ActivityRegistrar {
    gate: SerializationGate,
    resolver: Arc<dyn IdentityResolver>,
    store: Arc<dyn ActivityStore>,
}

impl ActivityRegistrar {
    pub fn new(
        gate: SerializationGate,
        resolver: Arc<dyn IdentityResolver>,
        store: Arc<dyn ActivityStore>,
    ) -> Self {
        Self {
            gate,
            resolver,
            store,
        }
    }

    /// Queues the journey for registration and returns a future for its outcome.
    ///
    /// The journey takes its place in the queue immediately; awaiting the returned
    /// future only waits for it to be processed. Journeys without a line or vehicle
    /// complete immediately without touching the queue.
    pub fn register_activity(&self, journey: VehicleJourney) -> Registration {
        let journey_id = journey.id.clone();
        let Some(observation) = normalize(journey) else {
            debug!(journey_id = %journey_id, "Journey has no line or vehicle assignment, skipping");
            return futures::future::ready(Ok(())).boxed();
        };

        let resolver = self.resolver.clone();
        let store = self.store.clone();
        let pending = self
            .gate
            .submit(async move { register(resolver.as_ref(), store.as_ref(), observation).await });

        async move { pending.await? }.boxed()
    }
}

async fn register(
    resolver: &dyn IdentityResolver,
    store: &dyn ActivityStore,
    observation: ActivityObservation,
) -> Result<(), RegistrationError> {
    let vehicle_id = resolver
        .resolve_vehicle(
            &observation.network_ref,
            &observation.vehicle_ref,
            observation.operator_ref.as_deref(),
        )
        .await
        .map_err(RegistrationError::Resolution)?;

    let line_id = resolver
        .resolve_line(
            &observation.network_ref,
            &observation.line,
            observation.recorded_at.with_timezone(&Utc),
        )
        .await
        .map_err(RegistrationError::Resolution)?;

    let outcome = merge_activity(
        store,
        vehicle_id,
        line_id,
        observation.recorded_at,
        observation.effective_service_date(),
    )
    .await
    .map_err(RegistrationError::Store)?;

    match outcome {
        MergeOutcome::Created { activity_id } => info!(
            activity_id,
            vehicle_ref = %observation.vehicle_ref,
            line_ref = %observation.line.line_ref,
            network_ref = %observation.network_ref,
            started_at = %observation.recorded_at,
            "New line activity for vehicle"
        ),
        MergeOutcome::Extended { activity_id } => debug!(
            activity_id,
            vehicle_ref = %observation.vehicle_ref,
            line_ref = %observation.line.line_ref,
            "Vehicle still active on line"
        ),
    }

    Ok(())
}
