//! Tracing middleware attaching a request-scoped identifier.
//!
//! Each incoming request is wrapped in a tracing span carrying the method,
//! path, and a generated `request_id`; the identifier is echoed back on the
//! response as `x-request-id` so clients can quote it in reports.

use actix_web::Error;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready};
use actix_web::http::header::{HeaderName, HeaderValue};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use tracing::Instrument;
use uuid::Uuid;

/// Transform factory registering [`RequestSpanMiddleware`].
pub struct RequestSpan;

impl<S, B> Transform<S, ServiceRequest> for RequestSpan
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = RequestSpanMiddleware<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequestSpanMiddleware { service }))
    }
}

/// Middleware wrapping every handler call in a request span.
pub struct RequestSpanMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for RequestSpanMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let request_id = Uuid::new_v4();
        let span = tracing::info_span!(
            "http_request",
            method = %req.method(),
            path = %req.path(),
            %request_id,
        );
        let fut = self.service.call(req);

        Box::pin(async move {
            let mut res = fut.instrument(span).await?;
            if let Ok(value) = HeaderValue::from_str(&request_id.to_string()) {
                res.headers_mut()
                    .insert(HeaderName::from_static("x-request-id"), value);
            }
            Ok(res)
        })
    }
}

#[cfg(test)]
mod tests {
    use actix_web::{App, HttpResponse, test as actix_test, web};

    use super::*;

    #[actix_web::test]
    async fn responses_carry_a_request_id() {
        let app = actix_test::init_service(
            App::new()
                .wrap(RequestSpan)
                .route("/ping", web::get().to(HttpResponse::Ok)),
        )
        .await;

        let response =
            actix_test::call_service(&app, actix_test::TestRequest::get().uri("/ping").to_request())
                .await;
        let header = response
            .headers()
            .get("x-request-id")
            .expect("request id header present");
        let raw = header.to_str().expect("header is ASCII");
        Uuid::parse_str(raw).expect("header is a UUID");
    }
}
