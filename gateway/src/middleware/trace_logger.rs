use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    Error,
};
use futures_util::future::LocalBoxFuture;
use std::future::{ready, Ready};

/// Access log: one line per request with status and latency.
pub struct TraceLogger;

impl<S, B> Transform<S, ServiceRequest> for TraceLogger
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = TraceLoggerMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(TraceLoggerMiddleware { service }))
    }
}

pub struct TraceLoggerMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for TraceLoggerMiddleware<S>
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
        let start_time = std::time::Instant::now();
        let request_line = format!("{} {} {:?}", req.method(), req.uri(), req.version());
        let peer = req
            .connection_info()
            .realip_remote_addr()
            .unwrap_or("-")
            .to_string();

        let fut = self.service.call(req);

        Box::pin(async move {
            let res = fut.await?;
            let elapsed = start_time.elapsed().as_millis();
            let status = res.status().as_u16();

            if status >= 400 {
                tracing::error!(
                    target: "answer_judge::http",
                    "{peer} \"{request_line}\" {status} {elapsed}ms"
                );
            } else {
                tracing::info!(
                    target: "answer_judge::http",
                    "{peer} \"{request_line}\" {status} {elapsed}ms"
                );
            }

            Ok(res)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test as actix_test, web, App, HttpResponse};

    #[actix_web::test]
    async fn test_passes_responses_through() {
        let app = actix_test::init_service(
            App::new()
                .wrap(TraceLogger)
                .route("/ok", web::get().to(HttpResponse::Ok))
                .route("/teapot", web::get().to(HttpResponse::ImATeapot)),
        )
        .await;

        let req = actix_test::TestRequest::get().uri("/ok").to_request();
        let ok = actix_test::call_service(&app, req).await;
        assert_eq!(ok.status().as_u16(), 200);

        let req = actix_test::TestRequest::get().uri("/teapot").to_request();
        let teapot = actix_test::call_service(&app, req).await;
        assert_eq!(teapot.status().as_u16(), 418);
    }
}
