#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use actix_http::Request;
use actix_web::{
    App,
    body::MessageBody,
    dev::{Service, ServiceResponse},
    http::{Method, StatusCode},
    test,
    web::{self, Data},
};
use serde_json::Value;
use tempfile::TempDir;

use crate::{
    Medbase,
    config::{ClapConfig, MainDbConfig, ServerParams},
    middlewares::JwtAuth,
    routes,
};

/// A scratch SQLite location that lives as long as the returned guard.
pub(crate) fn tmp_sqlite() -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("cannot create a temporary directory");
    let path = dir.path().join("medbase.sqlite");
    (dir, path)
}

pub(crate) fn sqlite_clap_config(sqlite_path: &Path) -> ClapConfig {
    ClapConfig {
        db: MainDbConfig {
            database_type: Some("sqlite".to_owned()),
            sqlite_path: sqlite_path.to_path_buf(),
            ..MainDbConfig::default()
        },
        ..ClapConfig::default()
    }
}

pub(crate) async fn instantiate_medbase(sqlite_path: &Path) -> Arc<Medbase> {
    let server_params = Arc::new(
        ServerParams::try_from(sqlite_clap_config(sqlite_path))
            .expect("cannot create server params"),
    );
    Arc::new(
        Medbase::instantiate(server_params)
            .await
            .expect("cannot instantiate the Medbase server"),
    )
}

/// Creates a test application instance over a scratch SQLite store.
///
/// No identity provider is configured, so the authentication gate runs in
/// its default-username mode and the record routes are reachable without a
/// token.
pub(crate) async fn test_app(
    sqlite_path: &Path,
) -> impl Service<Request, Response = ServiceResponse<impl MessageBody>, Error = actix_web::Error>
{
    let medbase = instantiate_medbase(sqlite_path).await;
    let default_username = medbase.params.default_username.clone();
    let auth = JwtAuth::new(None, default_username);

    test::init_service(
        App::new()
            .app_data(Data::new(medbase))
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
            ),
    )
    .await
}

pub(crate) async fn call_json<S, B>(
    app: &S,
    method: Method,
    uri: &str,
    body: Option<&Value>,
) -> (StatusCode, Value)
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let mut request = test::TestRequest::with_uri(uri).method(method);
    if let Some(body) = body {
        request = request.set_json(body);
    }
    let response = test::call_service(app, request.to_request()).await;
    let status = response.status();
    let bytes = test::read_body(response).await;
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

pub(crate) async fn get_json<S, B>(app: &S, uri: &str) -> (StatusCode, Value)
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    call_json(app, Method::GET, uri, None).await
}

pub(crate) async fn post_json<S, B>(app: &S, uri: &str, body: &Value) -> (StatusCode, Value)
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    call_json(app, Method::POST, uri, Some(body)).await
}

pub(crate) async fn post_empty<S, B>(app: &S, uri: &str) -> (StatusCode, Value)
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    call_json(app, Method::POST, uri, None).await
}

pub(crate) async fn put_json<S, B>(app: &S, uri: &str, body: &Value) -> (StatusCode, Value)
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    call_json(app, Method::PUT, uri, Some(body)).await
}

pub(crate) async fn delete_json<S, B>(app: &S, uri: &str) -> (StatusCode, Value)
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    call_json(app, Method::DELETE, uri, None).await
}
