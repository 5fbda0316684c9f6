//! In-memory collaborators for exercising the registration path without Postgres.
//!
//! Every operation yields to the scheduler first, so unserialized callers would
//! interleave between a lookup and the write that follows it.

use crate::models::journey::JourneyLine;
use crate::models::line_activity::{LineActivity, NewLineActivity};
use crate::processor::identity::IdentityResolver;
use crate::processor::store::ActivityStore;
use anyhow::anyhow;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use uuid::Uuid;

#[derive(Default)]
pub struct InMemoryActivityStore {
    rows: Mutex<Vec<LineActivity>>,
    calls: AtomicUsize,
}

impl InMemoryActivityStore {
    pub fn rows(&self) -> Vec<LineActivity> {
        self.rows.lock().unwrap().clone()
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ActivityStore for InMemoryActivityStore {
    async fn find_open_span(
        &self,
        vehicle_id: Uuid,
        line_id: Uuid,
        floor: DateTime<Utc>,
    ) -> anyhow::Result<Option<LineActivity>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::task::yield_now().await;
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .filter(|row| {
                row.vehicle_id == vehicle_id && row.line_id == line_id && row.updated_at >= floor
            })
            .max_by_key(|row| row.updated_at)
            .cloned())
    }

    async fn touch(&self, activity_id: i64, updated_at: DateTime<Utc>) -> anyhow::Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::task::yield_now().await;
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|row| row.id == activity_id)
            .ok_or_else(|| anyhow!("no activity with id {activity_id}"))?;
        row.updated_at = updated_at;
        Ok(())
    }

    async fn create(&self, activity: NewLineActivity) -> anyhow::Result<LineActivity> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::task::yield_now().await;
        let mut rows = self.rows.lock().unwrap();
        let row = LineActivity {
            id: rows.len() as i64 + 1,
            vehicle_id: activity.vehicle_id,
            line_id: activity.line_id,
            service_date: activity.service_date,
            started_at: activity.started_at,
            updated_at: activity.updated_at,
        };
        rows.push(row.clone());
        Ok(row)
    }
}

/// Hands out one stable id per `(network, ref)` and fails for refs marked broken.
#[derive(Default)]
pub struct FakeIdentityResolver {
    vehicles: Mutex<HashMap<(String, String), Uuid>>,
    lines: Mutex<HashMap<(String, String), Uuid>>,
    broken_vehicles: Mutex<HashSet<String>>,
    calls: AtomicUsize,
}

impl FakeIdentityResolver {
    pub fn break_vehicle(&self, vehicle_ref: &str) {
        self.broken_vehicles
            .lock()
            .unwrap()
            .insert(vehicle_ref.to_string());
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl IdentityResolver for FakeIdentityResolver {
    async fn resolve_vehicle(
        &self,
        network_ref: &str,
        vehicle_ref: &str,
        _operator_ref: Option<&str>,
    ) -> anyhow::Result<Uuid> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::task::yield_now().await;
        if self.broken_vehicles.lock().unwrap().contains(vehicle_ref) {
            return Err(anyhow!("vehicle import failed for {vehicle_ref}"));
        }
        let mut vehicles = self.vehicles.lock().unwrap();
        Ok(*vehicles
            .entry((network_ref.to_string(), vehicle_ref.to_string()))
            .or_insert_with(Uuid::new_v4))
    }

    async fn resolve_line(
        &self,
        network_ref: &str,
        line: &JourneyLine,
        _as_of: DateTime<Utc>,
    ) -> anyhow::Result<Uuid> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::task::yield_now().await;
        let mut lines = self.lines.lock().unwrap();
        Ok(*lines
            .entry((network_ref.to_string(), line.line_ref.clone()))
            .or_insert_with(Uuid::new_v4))
    }
}
