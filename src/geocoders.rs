use crate::core::Geocoder;
use crate::error::GeocodeError;
use crate::models::{Coordinate, GeocodeResult};
use serde::Deserialize;
use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

/// Response body of a Google-style geocoding endpoint.
#[derive(Debug, Deserialize)]
pub(crate) struct GeocodeResponse {
    #[serde(default)]
    results: Vec<Candidate>,
    status: String,
    #[serde(default)]
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    formatted_address: String,
    #[serde(default)]
    place_id: String,
    geometry: Geometry,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    location: Coordinate,
}

impl GeocodeResponse {
    pub fn first_match(self) -> Result<GeocodeResult, GeocodeError> {
        if self.status == "ZERO_RESULTS" {
            return Err(GeocodeError::NoMatch);
        }
        if self.status != "OK" {
            let msg = match self.error_message {
                Some(m) => format!("{}: {}", self.status, m),
                None => self.status,
            };
            return Err(GeocodeError::Rejected(msg));
        }
        let first = self.results.into_iter().next().ok_or(GeocodeError::NoMatch)?;
        Ok(GeocodeResult {
            coordinate: first.geometry.location,
            formatted_address: first.formatted_address,
            place_id: first.place_id,
        })
    }
}

#[derive(Clone)]
pub(crate) struct GoogleGeocoder {
    client: reqwest::Client,
    url: String,
    api_key: Option<String>,
}

impl GoogleGeocoder {
    pub fn new(url: String, api_key: Option<String>, timeout: Duration) -> Result<Self, GeocodeError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, url, api_key })
    }

    fn request(&self, address: &str) -> reqwest::RequestBuilder {
        let req = self.client.get(&self.url).query(&[("address", address)]);
        match &self.api_key {
            Some(key) => req.query(&[("key", key)]),
            None => req,
        }
    }

    async fn lookup(&self, address: &str) -> Result<GeocodeResult, GeocodeError> {
        let resp = self.request(address).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(GeocodeError::Rejected(format!("http status {}", status)));
        }
        let body = resp.bytes().await?;
        let decoded: GeocodeResponse = serde_json::from_slice(&body).map_err(|e| GeocodeError::Decode(e.to_string()))?;
        decoded.first_match()
    }
}

impl Geocoder for GoogleGeocoder {
    fn geocode<'a>(&'a self, address: &'a str) -> Pin<Box<dyn Future<Output = Result<GeocodeResult, GeocodeError>> + 'a>> {
        Box::pin(self.lookup(address))
    }
}
