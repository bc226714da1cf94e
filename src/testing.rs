//! In-process stand-ins for MongoDB and the geocoding provider.

use crate::core::{Geocoder, Persister};
use crate::error::{GeocodeError, StoreError};
use crate::models::{Coordinate, GeocodeResult, Location, LocationCommand};
use mongodb::bson::oid::ObjectId;
use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Mutex;

#[derive(Default)]
pub(crate) struct MemoryPersister {
    docs: Mutex<HashMap<ObjectId, LocationCommand>>,
}

impl MemoryPersister {
    pub fn len(&self) -> usize {
        self.docs.lock().unwrap().len()
    }
}

fn parse_id(id: &str) -> Result<ObjectId, StoreError> {
    ObjectId::parse_str(id).map_err(|_| StoreError::InvalidId(id.to_owned()))
}

impl Persister for MemoryPersister {
    fn insert<'a>(&'a self, loc: LocationCommand) -> Pin<Box<dyn Future<Output = Result<String, StoreError>> + 'a>> {
        Box::pin(async move {
            // give concurrent callers a chance to interleave
            tokio::task::yield_now().await;
            let id = ObjectId::new();
            self.docs.lock().unwrap().insert(id, loc);
            Ok(id.to_hex())
        })
    }

    fn find<'a>(&'a self, id: &'a str) -> Pin<Box<dyn Future<Output = Result<Location, StoreError>> + 'a>> {
        Box::pin(async move {
            let oid = parse_id(id)?;
            let docs = self.docs.lock().unwrap();
            let cmd = docs.get(&oid).cloned().ok_or(StoreError::NotFound)?;
            Ok(Location::new(oid.to_hex(), cmd))
        })
    }

    fn update<'a>(&'a self, id: &'a str, loc: LocationCommand) -> Pin<Box<dyn Future<Output = Result<(), StoreError>> + 'a>> {
        Box::pin(async move {
            let oid = parse_id(id)?;
            let mut docs = self.docs.lock().unwrap();
            let doc = docs.get_mut(&oid).ok_or(StoreError::NotFound)?;
            *doc = loc;
            Ok(())
        })
    }

    fn delete<'a>(&'a self, id: &'a str) -> Pin<Box<dyn Future<Output = Result<(), StoreError>> + 'a>> {
        Box::pin(async move {
            let oid = parse_id(id)?;
            self.docs.lock().unwrap().remove(&oid).map(|_| ()).ok_or(StoreError::NotFound)
        })
    }
}

enum Outcome {
    Found(Coordinate),
    Failing(fn() -> GeocodeError),
}

/// Answers every lookup with the configured outcome and records the
/// address lines it was asked for.
pub(crate) struct StubGeocoder {
    outcome: Mutex<Outcome>,
    calls: Mutex<Vec<String>>,
}

impl StubGeocoder {
    fn with(outcome: Outcome) -> Self {
        Self {
            outcome: Mutex::new(outcome),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn found(lat: f64, lng: f64) -> Self {
        Self::with(Outcome::Found(Coordinate { lat, lng }))
    }

    pub fn failing(err: fn() -> GeocodeError) -> Self {
        Self::with(Outcome::Failing(err))
    }

    pub fn set_found(&self, lat: f64, lng: f64) {
        *self.outcome.lock().unwrap() = Outcome::Found(Coordinate { lat, lng });
    }

    pub fn set_failing(&self, err: fn() -> GeocodeError) {
        *self.outcome.lock().unwrap() = Outcome::Failing(err);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl Geocoder for StubGeocoder {
    fn geocode<'a>(&'a self, address: &'a str) -> Pin<Box<dyn Future<Output = Result<GeocodeResult, GeocodeError>> + 'a>> {
        Box::pin(async move {
            self.calls.lock().unwrap().push(address.to_owned());
            match &*self.outcome.lock().unwrap() {
                Outcome::Found(coordinate) => Ok(GeocodeResult {
                    coordinate: *coordinate,
                    formatted_address: address.to_owned(),
                    place_id: "stub".to_owned(),
                }),
                Outcome::Failing(err) => Err(err()),
            }
        })
    }
}
