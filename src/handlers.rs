use crate::core::{self, Geocoder, Persister};
use crate::error::Error;
use crate::models::{Location, LocationPatch, LocationRequest};
use actix_web::web::{delete, get, post, put, Data, Json, JsonConfig, Path, ServiceConfig};
use actix_web::HttpResponse;

/// Malformed bodies answer with the same JSON error shape as every other failure.
fn json_config() -> JsonConfig {
    JsonConfig::default().error_handler(|err, _req| Error::BadRequest(err.to_string()).into())
}

pub(crate) fn routes<G, P>(cfg: &mut ServiceConfig)
where
    G: Geocoder + 'static,
    P: Persister + 'static,
{
    cfg.app_data(json_config())
        .route("/locations", post().to(create_location::<G, P>))
        .route("/locations/{id}", get().to(get_location::<P>))
        .route("/locations/{id}", put().to(update_location::<G, P>))
        .route("/locations/{id}", delete().to(delete_location::<P>));
}

pub(crate) async fn create_location<G, P>(Json(req): Json<LocationRequest>, geocoder: Data<G>, persister: Data<P>) -> Result<HttpResponse, Error>
where
    G: Geocoder + 'static,
    P: Persister + 'static,
{
    let loc = core::create_location(geocoder.as_ref(), persister.as_ref(), req).await?;
    Ok(HttpResponse::Created().json(loc))
}

pub(crate) async fn get_location<P>(id: Path<String>, persister: Data<P>) -> Result<Json<Location>, Error>
where
    P: Persister + 'static,
{
    let loc = core::get_location(persister.as_ref(), &id).await?;
    Ok(Json(loc))
}

pub(crate) async fn update_location<G, P>(id: Path<String>, Json(patch): Json<LocationPatch>, geocoder: Data<G>, persister: Data<P>) -> Result<Json<Location>, Error>
where
    G: Geocoder + 'static,
    P: Persister + 'static,
{
    let loc = core::update_location(geocoder.as_ref(), persister.as_ref(), &id, patch).await?;
    Ok(Json(loc))
}

pub(crate) async fn delete_location<P>(id: Path<String>, persister: Data<P>) -> Result<HttpResponse, Error>
where
    P: Persister + 'static,
{
    core::delete_location(persister.as_ref(), &id).await?;
    Ok(HttpResponse::NoContent().finish())
}
