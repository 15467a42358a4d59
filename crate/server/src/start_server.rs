//! Server assembly: builds the actix `App`, wires the authentication gate
//! around the record scopes and starts the HTTP server.

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{
    App, HttpServer,
    dev::Server,
    web::{self, Data, JsonConfig},
};
use tracing::info;

use crate::{
    Medbase,
    config::ServerParams,
    middlewares::{JwksManager, JwtAuth, JwtConfig},
    result::MResult,
    routes,
};

/// Build the JWT gate from the resolved identity provider parameters.
///
/// The key-set manager is created here, once per process, so that every
/// worker shares the same lazily-populated cache.
fn build_jwt_config(params: &ServerParams) -> Option<Arc<JwtConfig>> {
    params.idp.as_ref().map(|idp| {
        Arc::new(JwtConfig {
            jwt_issuer_uri: idp.issuer_uri.clone(),
            jwt_audience: idp.client_id.clone(),
            jwks: Arc::new(JwksManager::new(idp.jwks_uri.clone())),
        })
    })
}

/// A factory to configure the server
///
/// # Errors
///
/// Returns an error if the listen address cannot be bound.
pub fn prepare_server(medbase: Arc<Medbase>) -> MResult<Server> {
    let params = medbase.params.clone();
    let jwt_config = build_jwt_config(&params);
    let address = format!("{}:{}", params.hostname, params.port);

    let server = HttpServer::new(move || {
        let auth = JwtAuth::new(jwt_config.clone(), params.default_username.clone());
        App::new()
            .wrap(Cors::permissive())
            .app_data(Data::new(medbase.clone()))
            .app_data(JsonConfig::default().limit(1_000_000))
            .service(routes::health::root)
            .service(routes::health::health)
            .service(routes::auth::login_for_access_token)
            .service(
                web::scope("/hospitals")
                    .wrap(auth.clone())
                    .service(routes::hospitals::create_hospital)
                    .service(routes::hospitals::get_hospitals)
                    .service(routes::hospitals::get_hospital)
                    .service(routes::hospitals::update_hospital)
                    .service(routes::hospitals::delete_hospital)
                    .service(routes::hospitals::get_hospital_patients)
                    .service(routes::hospitals::create_hospital_patient)
                    .service(routes::hospitals::add_patient_to_hospital),
            )
            .service(
                web::scope("/patients")
                    .wrap(auth)
                    .service(routes::patients::create_patient)
                    .service(routes::patients::get_patients)
                    .service(routes::patients::get_patient)
                    .service(routes::patients::update_patient)
                    .service(routes::patients::delete_patient),
            )
    })
    .bind(address)?;

    Ok(server.run())
}

/// Instantiate the service and run the HTTP server until it stops.
///
/// # Errors
///
/// Returns an error if the store cannot be reached or the server fails.
pub async fn start_api_server(server_params: ServerParams) -> MResult<()> {
    let params = Arc::new(server_params);
    let medbase = Arc::new(Medbase::instantiate(params.clone()).await?);

    info!(
        "Medbase server listening on http://{}:{}",
        params.hostname, params.port
    );
    prepare_server(medbase)?.await.map_err(Into::into)
}
