//! Actor identity middleware.
//!
//! Authentication itself is owned by the upstream gateway, which validates
//! the session and injects the actor's id as the `x-user-id` header. This
//! middleware parses that header and adds `UserId` to request extensions.

use actix_web::{
    dev::{forward_ready, Payload, Service, ServiceRequest, ServiceResponse, Transform},
    Error, FromRequest, HttpMessage, HttpRequest,
};
use futures::future::{ready, LocalBoxFuture, Ready};
use std::rc::Rc;
use uuid::Uuid;

use crate::error::AppError;

pub const IDENTITY_HEADER: &str = "x-user-id";

/// Authenticated actor id injected by the gateway
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserId(pub Uuid);

/// Identity middleware factory
pub struct IdentityMiddleware;

impl<S, B> Transform<S, ServiceRequest> for IdentityMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = IdentityMiddlewareService<S>;
    type Future = std::future::Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        std::future::ready(Ok(IdentityMiddlewareService {
            service: Rc::new(service),
        }))
    }
}

pub struct IdentityMiddlewareService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for IdentityMiddlewareService<S>
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
        let service = self.service.clone();

        Box::pin(async move {
            // Read headers before any mutable access to request extensions.
            let raw = match req.headers().get(IDENTITY_HEADER) {
                Some(value) => match value.to_str() {
                    Ok(v) => v.to_string(),
                    Err(_) => {
                        return Err(AppError::Unauthorized(
                            "Invalid identity header".into(),
                        )
                        .into());
                    }
                },
                None => {
                    return Err(
                        AppError::Unauthorized("Missing identity header".into()).into()
                    );
                }
            };

            let user_id = match Uuid::parse_str(raw.trim()) {
                Ok(id) => id,
                Err(_) => {
                    return Err(
                        AppError::Unauthorized("Invalid identity header".into()).into()
                    );
                }
            };

            req.extensions_mut().insert(UserId(user_id));

            let res = service.call(req).await?;
            Ok(res)
        })
    }
}

impl FromRequest for UserId {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        match req.extensions().get::<UserId>().copied() {
            Some(user_id) => ready(Ok(user_id)),
            None => ready(Err(AppError::Unauthorized(
                "User identity missing in request".into(),
            )
            .into())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, web, App, HttpResponse};

    async fn whoami(user: UserId) -> HttpResponse {
        HttpResponse::Ok().body(user.0.to_string())
    }

    fn app() -> App<
        impl actix_web::dev::ServiceFactory<
            ServiceRequest,
            Config = (),
            Response = ServiceResponse,
            Error = Error,
            InitError = (),
        >,
    > {
        App::new().service(
            web::scope("")
                .wrap(IdentityMiddleware)
                .route("/whoami", web::get().to(whoami)),
        )
    }

    #[actix_rt::test]
    async fn header_identity_reaches_the_handler() {
        let app = test::init_service(app()).await;
        let id = Uuid::new_v4();

        let req = test::TestRequest::get()
            .uri("/whoami")
            .insert_header((IDENTITY_HEADER, id.to_string()))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let body = test::read_body(resp).await;
        assert_eq!(body, id.to_string().as_bytes());
    }

    #[actix_rt::test]
    async fn missing_header_is_unauthorized() {
        let app = test::init_service(app()).await;
        let req = test::TestRequest::get().uri("/whoami").to_request();
        let err = test::try_call_service(&app, req).await.unwrap_err();
        assert_eq!(
            err.as_response_error().status_code(),
            actix_web::http::StatusCode::UNAUTHORIZED
        );
    }

    #[actix_rt::test]
    async fn malformed_header_is_unauthorized() {
        let app = test::init_service(app()).await;
        let req = test::TestRequest::get()
            .uri("/whoami")
            .insert_header((IDENTITY_HEADER, "not-a-uuid"))
            .to_request();
        let err = test::try_call_service(&app, req).await.unwrap_err();
        assert_eq!(
            err.as_response_error().status_code(),
            actix_web::http::StatusCode::UNAUTHORIZED
        );
    }
}
