use crate::error::{Error, GeocodeError, StoreError};
use crate::models::{GeocodeResult, Location, LocationCommand, LocationPatch, LocationRequest};
use log::{debug, warn};
use std::future::Future;
use std::pin::Pin;

pub(crate) trait Geocoder {
    fn geocode<'a>(&'a self, address: &'a str) -> Pin<Box<dyn Future<Output = Result<GeocodeResult, GeocodeError>> + 'a>>;
}

pub(crate) trait Persister {
    fn insert<'a>(&'a self, loc: LocationCommand) -> Pin<Box<dyn Future<Output = Result<String, StoreError>> + 'a>>;
    fn find<'a>(&'a self, id: &'a str) -> Pin<Box<dyn Future<Output = Result<Location, StoreError>> + 'a>>;
    // replaces the whole document
    fn update<'a>(&'a self, id: &'a str, loc: LocationCommand) -> Pin<Box<dyn Future<Output = Result<(), StoreError>> + 'a>>;
    fn delete<'a>(&'a self, id: &'a str) -> Pin<Box<dyn Future<Output = Result<(), StoreError>> + 'a>>;
}

/// The string sent to the geocoding provider: `address city state zip`,
/// single-space separated, in that order. Empty fields leave empty segments.
pub(crate) fn address_line(address: &str, city: &str, state: &str, zip: &str) -> String {
    [address, city, state, zip].join(" ")
}

async fn geocode<G: Geocoder>(geocoder: &G, line: String) -> Result<GeocodeResult, GeocodeError> {
    match geocoder.geocode(&line).await {
        Ok(res) => {
            debug!("geocoded {:?} to {:?} ({}, place {})", line, res.coordinate, res.formatted_address, res.place_id);
            Ok(res)
        }
        Err(e) => {
            warn!("failed to geocode {:?}: {}", line, e);
            Err(e)
        }
    }
}

pub(crate) async fn create_location<G, P>(geocoder: &G, persister: &P, req: LocationRequest) -> Result<Location, Error>
where
    G: Geocoder,
    P: Persister,
{
    let res = geocode(geocoder, address_line(&req.address, &req.city, &req.state, &req.zip)).await?;
    let cmd = LocationCommand {
        name: req.name,
        address: req.address,
        city: req.city,
        state: req.state,
        zip: req.zip,
        coordinate: res.coordinate,
    };
    let id = persister.insert(cmd).await?;
    debug!("inserted location {}", id);
    Ok(persister.find(&id).await?)
}

pub(crate) async fn get_location<P: Persister>(persister: &P, id: &str) -> Result<Location, Error> {
    Ok(persister.find(id).await?)
}

pub(crate) async fn update_location<G, P>(geocoder: &G, persister: &P, id: &str, patch: LocationPatch) -> Result<Location, Error>
where
    G: Geocoder,
    P: Persister,
{
    let current = persister.find(id).await?.into_command();
    let mut merged = current.clone();
    if let Some(name) = patch.name {
        merged.name = name;
    }
    if let Some(address) = patch.address {
        merged.address = address;
    }
    if let Some(city) = patch.city {
        merged.city = city;
    }
    if let Some(state) = patch.state {
        merged.state = state;
    }
    if let Some(zip) = patch.zip {
        merged.zip = zip;
    }
    // the stored coordinate only stays valid while the address is unchanged
    if !merged.same_address(&current) {
        let line = address_line(&merged.address, &merged.city, &merged.state, &merged.zip);
        merged.coordinate = geocode(geocoder, line).await?.coordinate;
    }
    persister.update(id, merged).await?;
    debug!("updated location {}", id);
    Ok(persister.find(id).await?)
}

pub(crate) async fn delete_location<P: Persister>(persister: &P, id: &str) -> Result<(), Error> {
    persister.delete(id).await?;
    debug!("deleted location {}", id);
    Ok(())
}
