// app/src/web/cors.rs

//! Permissive CORS for the browser frontend.
//!
//! Every response gets the same allow-all headers, and any `OPTIONS` request
//! is answered with `204 No Content` before it reaches routing.

use actix_web::{
  body::EitherBody,
  dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
  http::{
    header::{
      HeaderMap, HeaderValue, ACCESS_CONTROL_ALLOW_CREDENTIALS, ACCESS_CONTROL_ALLOW_HEADERS,
      ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
    },
    Method,
  },
  Error, HttpResponse,
};
use futures_util::future::{ok, LocalBoxFuture, Ready};
use std::rc::Rc;

pub const ALLOWED_HEADERS: &str = "Content-Type, Content-Length, Accept-Encoding, X-CSRF-Token, Authorization, accept, origin, Cache-Control, X-Requested-With, token";
pub const ALLOWED_METHODS: &str = "POST, OPTIONS, GET, PUT";

fn apply_cors_headers(headers: &mut HeaderMap) {
  headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
  headers.insert(ACCESS_CONTROL_ALLOW_CREDENTIALS, HeaderValue::from_static("true"));
  headers.insert(ACCESS_CONTROL_ALLOW_HEADERS, HeaderValue::from_static(ALLOWED_HEADERS));
  headers.insert(ACCESS_CONTROL_ALLOW_METHODS, HeaderValue::from_static(ALLOWED_METHODS));
}

pub struct Cors;

impl<S, B> Transform<S, ServiceRequest> for Cors
where
  S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
  B: 'static,
{
  type Response = ServiceResponse<EitherBody<B>>;
  type Error = Error;
  type Transform = CorsMiddleware<S>;
  type InitError = ();
  type Future = Ready<Result<Self::Transform, Self::InitError>>;

  fn new_transform(&self, service: S) -> Self::Future {
    ok(CorsMiddleware {
      service: Rc::new(service),
    })
  }
}

pub struct CorsMiddleware<S> {
  service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for CorsMiddleware<S>
where
  S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
  B: 'static,
{
  type Response = ServiceResponse<EitherBody<B>>;
  type Error = Error;
  type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

  forward_ready!(service);

  fn call(&self, req: ServiceRequest) -> Self::Future {
    if req.method() == Method::OPTIONS {
      let (http_req, _payload) = req.into_parts();
      let mut res = ServiceResponse::new(http_req, HttpResponse::NoContent().finish()).map_into_right_body();
      apply_cors_headers(res.headers_mut());
      return Box::pin(async move { Ok(res) });
    }

    let service = Rc::clone(&self.service);
    Box::pin(async move {
      let mut res = service.call(req).await?;
      apply_cors_headers(res.headers_mut());
      Ok(res.map_into_left_body())
    })
  }
}
