use std::{
    future::{ready, Ready},
    rc::Rc,
};

use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::header::AUTHORIZATION,
    web::Data,
    Error, HttpMessage,
};
use common::{
    auth::tokens::{verify_token, TokenPurpose},
    settings::types::Settings,
};
use db_adapters::user_adapter::{UserAdapter, UserQuery};
use entities::user;
use futures::future::LocalBoxFuture;
use sea_orm::DbConn;

const BEARER_PREFIX: &str = "Bearer ";

/// Resolves `Authorization: Bearer <token>` into a `user::Model` request extension.
/// Requests without a valid token pass through unauthenticated; handlers answer 401.
pub struct AuthenticateUser;

impl<S: 'static, B> Transform<S, ServiceRequest> for AuthenticateUser
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = AuthenticateUserMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthenticateUserMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct AuthenticateUserMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for AuthenticateUserMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let svc = self.service.clone();
        Box::pin(async move {
            if let Some(user) = authenticated_user(&req).await {
                req.extensions_mut().insert(user);
            }

            svc.call(req).await
        })
    }
}

async fn authenticated_user(req: &ServiceRequest) -> Option<user::Model> {
    let token = bearer_token(req)?;
    let (db, settings) = match (
        req.app_data::<Data<DbConn>>(),
        req.app_data::<Data<Settings>>(),
    ) {
        (Some(db), Some(settings)) => (db, settings),
        _ => {
            tracing::event!(target: "backend", tracing::Level::ERROR, "DbConn or Settings is not registered as app data.");
            return None;
        }
    };

    let user_id = match verify_token(&token, TokenPurpose::Access, settings) {
        Ok(user_id) => user_id,
        Err(e) => {
            tracing::event!(target: "backend", tracing::Level::INFO, "Rejected bearer token: {}", e);
            return None;
        }
    };

    match UserAdapter::init(db).get_by_user_id(user_id).await {
        Ok(user) => user,
        Err(e) => {
            tracing::event!(target: "backend", tracing::Level::ERROR, "Failed to load the authenticated user: {:?}", e);
            None
        }
    }
}

fn bearer_token(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix(BEARER_PREFIX)
        .map(|token| token.trim().to_string())
        .filter(|token| !token.is_empty())
}
