//! JWT Authentication Middleware
//!
//! In Actix web, middlewares consist of two parts:
//! 1. A transformer (`JwtAuth`), which is used during service configuration
//! 2. A middleware service (`JwtAuthMiddleware`) that processes each request

use std::{
    pin::Pin,
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};

use actix_web::{
    Error, HttpMessage,
    body::{BoxBody, EitherBody},
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    error::ResponseError,
};
use futures::{
    Future,
    future::{Ready, ok},
};
use tracing::warn;

use crate::middlewares::{AuthenticatedUser, JwtConfig, jwt::jwt_token_auth::handle_jwt};

/// `JwtAuth` gates a service behind bearer-token authentication.
///
/// When no identity provider is configured (`jwt_config` is `None`), every
/// request is authenticated as the configured default username instead; this
/// is the mode the test suite runs in.
#[derive(Clone)]
pub(crate) struct JwtAuth {
    jwt_config: Option<Arc<JwtConfig>>,
    default_username: String,
}

impl JwtAuth {
    #[must_use]
    pub(crate) const fn new(jwt_config: Option<Arc<JwtConfig>>, default_username: String) -> Self {
        Self {
            jwt_config,
            default_username,
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
{
    type Error = Error;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;
    type InitError = ();
    type Response = ServiceResponse<EitherBody<B, BoxBody>>;
    type Transform = JwtAuthMiddleware<S>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(JwtAuthMiddleware {
            service: Rc::new(service),
            jwt_config: self.jwt_config.clone(),
            default_username: self.default_username.clone(),
        })
    }
}

pub(crate) struct JwtAuthMiddleware<S> {
    service: Rc<S>,
    jwt_config: Option<Arc<JwtConfig>>,
    default_username: String,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
{
    type Error = Error;
    #[allow(clippy::type_complexity)]
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;
    type Response = ServiceResponse<EitherBody<B, BoxBody>>;

    fn poll_ready(&self, ctx: &mut Context) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();

        let Some(jwt_config) = self.jwt_config.clone() else {
            let default_username = self.default_username.clone();
            return Box::pin(async move {
                req.extensions_mut().insert(AuthenticatedUser {
                    username: default_username,
                });
                let res = service.call(req).await?;
                Ok(res.map_into_left_body())
            });
        };

        Box::pin(async move {
            match handle_jwt(jwt_config, &req).await {
                Ok(user) => {
                    req.extensions_mut().insert(user);
                    let res = service.call(req).await?;
                    Ok(res.map_into_left_body())
                }
                Err(e) => {
                    warn!(
                        "{:?} {} {} unauthorized: {e}",
                        req.method(),
                        req.path(),
                        e.status_code(),
                    );
                    Ok(req.into_response(e.error_response()).map_into_right_body())
                }
            }
        })
    }
}
