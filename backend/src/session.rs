use actix_web::http::header::{HeaderName, HeaderValue};
use actix_web::{
    Error, HttpMessage,
    dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready},
};
use actix_web::{FromRequest, HttpRequest};
use futures::future::{Ready, ok};
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use uuid::Uuid;

pub const CLIENT_ID_HEADER: &str = "x-client-id";

/// Tags every request with a client id taken from `X-Client-Id`, or a fresh
/// one when the header is missing or not a UUID. The id is echoed on the
/// response so the caller can reuse it.
#[derive(Clone, Default)]
pub struct ClientIdMiddleware;

impl<S, B> Transform<S, ServiceRequest> for ClientIdMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = ClientIdMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(ClientIdMiddlewareService {
            service: Rc::new(service),
        })
    }
}

pub struct ClientIdMiddlewareService<S> {
    service: Rc<S>,
}

fn client_id_from_header(req: &ServiceRequest) -> Option<Uuid> {
    let raw = req.headers().get(CLIENT_ID_HEADER)?.to_str().ok()?;
    Uuid::parse_str(raw.trim()).ok()
}

impl<S, B> Service<ServiceRequest> for ClientIdMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();

        Box::pin(async move {
            let client_id = match client_id_from_header(&req) {
                Some(id) => ClientId::provided(id),
                None => {
                    let client_id = ClientId::assigned();
                    log::debug!("Assigned client id {} for {}", client_id.id, req.path());
                    client_id
                }
            };
            req.extensions_mut().insert(client_id);

            let mut res = service.call(req).await?;
            if let Ok(value) = HeaderValue::from_str(&client_id.id.to_string()) {
                res.headers_mut()
                    .insert(HeaderName::from_static(CLIENT_ID_HEADER), value);
            }
            Ok(res)
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClientId {
    pub id: Uuid,
    /// Minted by the server because the request carried no usable id.
    pub assigned: bool,
}

impl ClientId {
    pub fn provided(id: Uuid) -> Self {
        Self {
            id,
            assigned: false,
        }
    }

    pub fn assigned() -> Self {
        Self {
            id: Uuid::new_v4(),
            assigned: true,
        }
    }
}

impl FromRequest for ClientId {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<ClientId>() {
            Some(client_id) => ok(*client_id),
            None => {
                log::warn!("No client id on request for path: {}", req.path());
                ok(ClientId::assigned())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, HttpResponse, test, web};

    async fn echo(client: ClientId) -> HttpResponse {
        HttpResponse::Ok().body(format!("{} {}", client.id, client.assigned))
    }

    #[actix_web::test]
    async fn keeps_a_valid_client_id() {
        let app = test::init_service(
            App::new()
                .wrap(ClientIdMiddleware)
                .route("/", web::get().to(echo)),
        )
        .await;
        let id = Uuid::new_v4();
        let req = test::TestRequest::get()
            .uri("/")
            .insert_header((CLIENT_ID_HEADER, id.to_string()))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(
            res.headers().get(CLIENT_ID_HEADER).unwrap().to_str().unwrap(),
            id.to_string()
        );
        let body = test::read_body(res).await;
        assert_eq!(body, format!("{id} false").as_bytes());
    }

    #[actix_web::test]
    async fn assigns_an_id_when_missing_or_malformed() {
        let app = test::init_service(
            App::new()
                .wrap(ClientIdMiddleware)
                .route("/", web::get().to(echo)),
        )
        .await;
        let req = test::TestRequest::get()
            .uri("/")
            .insert_header((CLIENT_ID_HEADER, "not-a-uuid"))
            .to_request();
        let res = test::call_service(&app, req).await;
        let assigned = res.headers().get(CLIENT_ID_HEADER).unwrap().to_str().unwrap().to_string();
        let parsed = Uuid::parse_str(&assigned).unwrap();
        assert!(!parsed.is_nil());
        let body = test::read_body(res).await;
        assert_eq!(body, format!("{parsed} true").as_bytes());
    }
}
