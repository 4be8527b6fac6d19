pub mod default_index;
pub mod web_security;

use crate::cdn_config::Config;
use crate::cdn_event::{EdgeRequest, EdgeResponse, Event, EventError};

use serde::Serialize;
use tracing::info;

/// The object handed back to the platform: whichever of the request
/// or response the event was about.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Handled {
    Request(EdgeRequest),
    Response(EdgeResponse),
}

/// Handle an event from either phase.
///
/// Origin-response events carry the request too, so the presence of
/// a response decides the phase.
pub fn handle(settings: &Config, event: Event) -> Result<Handled, EventError> {
    let cf = event.into_cf()?;
    match (cf.request, cf.response) {
        (_, Some(resp)) => Ok(Handled::Response(transform_response(settings, resp))),
        (Some(req), None) => Ok(Handled::Request(transform_request(settings, req)?)),
        (None, None) => Err(EventError::MissingPayload),
    }
}

/// Handle an origin-request event.
pub fn origin_request(settings: &Config, event: Event) -> Result<EdgeRequest, EventError> {
    let req = event.into_cf()?.request.ok_or(EventError::MissingRequest)?;
    transform_request(settings, req)
}

/// Handle an origin-response event.
pub fn origin_response(settings: &Config, event: Event) -> Result<EdgeResponse, EventError> {
    let resp = event.into_cf()?.response.ok_or(EventError::MissingResponse)?;
    Ok(transform_response(settings, resp))
}

fn transform_request(settings: &Config, mut req: EdgeRequest) -> Result<EdgeRequest, EventError> {
    if req.uri.is_empty() {
        return Err(EventError::EmptyUri);
    }

    info!(uri = %req.uri, "origin request");
    if settings.default_index {
        default_index::normalize(&mut req);
    }

    info!(uri = %req.uri, "forwarding to origin");
    Ok(req)
}

fn transform_response(settings: &Config, mut resp: EdgeResponse) -> EdgeResponse {
    if settings.web_security {
        web_security::inject(&mut resp);
    }

    info!(headers = resp.headers.len(), "origin response");
    resp
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cdn_event::HeaderEntry;
    use serde_json::json;

    fn event(value: serde_json::Value) -> Event {
        serde_json::from_value(value).unwrap()
    }

    fn request_event(uri: &str) -> Event {
        event(json!({ "Records": [{ "cf": { "request": { "uri": uri } } }] }))
    }

    #[test]
    fn origin_request_rewrites_directories() {
        let req = origin_request(&Config::default(), request_event("/test/")).unwrap();
        assert_eq!(req.uri, "/index.html");
    }

    #[test]
    fn origin_request_respects_switch() {
        let settings = Config {
            default_index: false,
            ..Config::default()
        };
        let req = origin_request(&settings, request_event("/test/")).unwrap();
        assert_eq!(req.uri, "/test/");
    }

    #[test]
    fn origin_request_rejects_empty_uri() {
        assert!(matches!(
            origin_request(&Config::default(), request_event("")),
            Err(EventError::EmptyUri)
        ));
    }

    #[test]
    fn origin_request_needs_a_request() {
        let event = event(json!({ "Records": [{ "cf": { "response": {} } }] }));
        assert!(matches!(
            origin_request(&Config::default(), event),
            Err(EventError::MissingRequest)
        ));
    }

    #[test]
    fn origin_response_sets_headers() {
        let event = event(json!({ "Records": [{ "cf": { "response": { "headers": {} } } }] }));
        let resp = origin_response(&Config::default(), event).unwrap();
        assert_eq!(resp.headers.len(), web_security::SECURITY_HEADERS.len());
    }

    #[test]
    fn origin_response_respects_switch() {
        let settings = Config {
            web_security: false,
            ..Config::default()
        };
        let event = event(json!({ "Records": [{ "cf": { "response": { "headers": {} } } }] }));
        let resp = origin_response(&settings, event).unwrap();
        assert!(resp.headers.is_empty());
    }

    #[test]
    fn origin_response_needs_a_response() {
        assert!(matches!(
            origin_response(&Config::default(), request_event("/")),
            Err(EventError::MissingResponse)
        ));
    }

    #[test]
    fn handle_prefers_the_response() {
        let event = event(json!({
            "Records": [{
                "cf": {
                    "request": { "uri": "/test/" },
                    "response": { "status": "200" }
                }
            }]
        }));

        match handle(&Config::default(), event).unwrap() {
            Handled::Response(resp) => {
                assert_eq!(
                    resp.headers["X-Content-Type-Options"],
                    vec![HeaderEntry::new("X-Content-Type-Options", "nosniff")]
                );
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn handle_needs_a_payload() {
        let event = event(json!({ "Records": [{ "cf": { "config": {} } }] }));
        assert!(matches!(
            handle(&Config::default(), event),
            Err(EventError::MissingPayload)
        ));
    }

    #[test]
    fn handled_serialises_as_the_bare_object() {
        let handled = handle(&Config::default(), request_event("/test")).unwrap();
        assert_eq!(
            serde_json::to_value(&handled).unwrap(),
            json!({ "uri": "/index.html" })
        );
    }
}
