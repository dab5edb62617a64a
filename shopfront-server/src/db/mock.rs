//! In-memory store for tests
//!
//! Holds fixed rows and can be told to fail individual operations with a
//! driver-style error naming the failing query.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;

use super::{DbError, Store};
use crate::models::{Location, LocationHours, Service, Testimonial};

/// Store operations, used to inject failures and record calls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreOp {
    Services,
    Location,
    Locations,
    LocationHours,
    Testimonials,
}

/// Mock store for testing
#[derive(Default)]
pub struct MockStore {
    services: Vec<Service>,
    locations: Vec<Location>,
    hours: HashMap<i64, Vec<LocationHours>>,
    testimonials: Vec<Testimonial>,
    failing: HashSet<StoreOp>,
    calls: Mutex<Vec<(StoreOp, Option<i64>)>>,
}

impl MockStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_service(mut self, service: Service) -> Self {
        self.services.push(service);
        self
    }

    /// Add a location and its hours rows (may be empty)
    pub fn with_location(mut self, location: Location, hours: Vec<LocationHours>) -> Self {
        if !hours.is_empty() {
            self.hours.insert(location.id, hours);
        }
        self.locations.push(location);
        self
    }

    pub fn with_testimonial(mut self, testimonial: Testimonial) -> Self {
        self.testimonials.push(testimonial);
        self
    }

    /// Make every call to `op` fail
    pub fn failing(mut self, op: StoreOp) -> Self {
        self.failing.insert(op);
        self
    }

    /// Operations invoked so far, with the id argument where there is one
    pub fn calls(&self) -> Vec<(StoreOp, Option<i64>)> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, op: StoreOp, id: Option<i64>) -> Result<(), DbError> {
        self.calls.lock().unwrap().push((op, id));
        if self.failing.contains(&op) {
            return Err(DbError::Sqlx(sqlx::Error::Protocol(format!(
                "{:?} query failed",
                op
            ))));
        }
        Ok(())
    }
}

#[async_trait]
impl Store for MockStore {
    async fn services(&self) -> Result<Vec<Service>, DbError> {
        self.record(StoreOp::Services, None)?;
        Ok(self.services.clone())
    }

    async fn location(&self, id: i64) -> Result<Option<Location>, DbError> {
        self.record(StoreOp::Location, Some(id))?;
        Ok(self.locations.iter().find(|l| l.id == id).cloned())
    }

    async fn locations(&self) -> Result<Vec<Location>, DbError> {
        self.record(StoreOp::Locations, None)?;
        Ok(self.locations.clone())
    }

    async fn location_hours(&self, location_id: i64) -> Result<Vec<LocationHours>, DbError> {
        self.record(StoreOp::LocationHours, Some(location_id))?;
        Ok(self.hours.get(&location_id).cloned().unwrap_or_default())
    }

    async fn testimonials(&self) -> Result<Vec<Testimonial>, DbError> {
        self.record(StoreOp::Testimonials, None)?;
        Ok(self.testimonials.clone())
    }
}
