use static_site_edge::cdn_config;
use static_site_edge::cdn_rules::default_index;
use static_site_edge::cdn_rules::web_security::SECURITY_HEADERS;
use static_site_edge::logging;

use fastly::{Error, Request, Response};
use tracing::info;

#[fastly::main]
fn main(mut req: Request) -> Result<Response, Error> {
    let settings = cdn_config::load()?;
    logging::init(&settings.log_level);

    if settings.default_index {
        if let Some(index) = default_index::rewrite_path(req.get_path()) {
            req.set_path(index);
        }
    }

    let beresp = fetch_beresp(&settings.backend, req)?;
    let resp = if settings.web_security {
        transform_beresp(beresp)
    } else {
        beresp
    };

    info!(status = resp.get_status().as_u16(), "served");
    Ok(resp)
}

fn fetch_beresp(backend: &str, bereq: Request) -> Result<Response, Error> {
    Ok(bereq.send(backend)?)
}

/// Set the security headers, replacing any the origin sent.
fn transform_beresp(mut resp: Response) -> Response {
    for (name, value) in SECURITY_HEADERS {
        resp.set_header(*name, *value);
    }
    resp
}
