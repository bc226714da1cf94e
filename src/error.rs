use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use actix_web::ResponseError;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum GeocodeError {
    #[error("geocoding request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("geocoding provider rejected the request: {0}")]
    Rejected(String),
    #[error("no geocoding match for the given address")]
    NoMatch,
    #[error("malformed geocoding response: {0}")]
    Decode(String),
}

// the request url carries the provider api key
impl From<reqwest::Error> for GeocodeError {
    fn from(e: reqwest::Error) -> Self {
        Self::Transport(e.without_url())
    }
}

#[derive(Debug, Error)]
pub(crate) enum StoreError {
    #[error("location not found")]
    NotFound,
    #[error("invalid location id: {0}")]
    InvalidId(String),
    #[error("storage failure: {0}")]
    Write(#[source] anyhow::Error),
}

impl From<mongodb::error::Error> for StoreError {
    fn from(e: mongodb::error::Error) -> Self {
        Self::Write(e.into())
    }
}

#[derive(Debug, Error)]
pub(crate) enum Error {
    #[error("malformed request body: {0}")]
    BadRequest(String),
    #[error(transparent)]
    Geocode(#[from] GeocodeError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Error::BadRequest(_) => StatusCode::BAD_REQUEST,
            Error::Geocode(_) => StatusCode::BAD_GATEWAY,
            Error::Store(StoreError::NotFound | StoreError::InvalidId(_)) => StatusCode::NOT_FOUND,
            Error::Store(StoreError::Write(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse<actix_web::body::BoxBody> {
        let error = match self {
            Error::Store(StoreError::Write(e)) => {
                log::error!("storage failure: {:#}", e);
                "storage failure".to_owned()
            }
            _ => self.to_string(),
        };
        HttpResponse::build(self.status_code()).json(ErrorBody { error })
    }
}
