use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub(crate) struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

/// Body of a create request. Missing fields decode as empty strings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(crate) struct LocationRequest {
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
}

/// Body of an update request. Only the fields present are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(crate) struct LocationPatch {
    pub name: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
}

/// Everything the store keeps about a location except its id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct LocationCommand {
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub coordinate: Coordinate,
}

impl LocationCommand {
    pub fn same_address(&self, other: &LocationCommand) -> bool {
        self.address == other.address && self.city == other.city && self.state == other.state && self.zip == other.zip
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct Location {
    pub id: String,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub coordinate: Coordinate,
}

impl Location {
    pub fn new(id: String, cmd: LocationCommand) -> Self {
        Self {
            id,
            name: cmd.name,
            address: cmd.address,
            city: cmd.city,
            state: cmd.state,
            zip: cmd.zip,
            coordinate: cmd.coordinate,
        }
    }

    pub fn into_command(self) -> LocationCommand {
        LocationCommand {
            name: self.name,
            address: self.address,
            city: self.city,
            state: self.state,
            zip: self.zip,
            coordinate: self.coordinate,
        }
    }
}

/// First candidate returned by the geocoding provider.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct GeocodeResult {
    pub coordinate: Coordinate,
    pub formatted_address: String,
    pub place_id: String,
}
