use crate::cdn_event::EdgeResponse;

use tracing::debug;

/// Headers set on every response, overriding whatever the origin sent.
pub const SECURITY_HEADERS: &[(&str, &str)] = &[
    (
        "Strict-Transport-Security",
        "max-age=63072000; includeSubDomains; preload",
    ),
    ("X-XSS-Protection", "1; mode=block"),
    ("X-Content-Type-Options", "nosniff"),
    ("X-Frame-Options", "SAMEORIGIN"),
    ("Referrer-Policy", "no-referrer-when-downgrade"),
    ("Content-Security-Policy", "upgrade-insecure-requests;"),
    (
        "Feature-Policy",
        "geolocation none; midi none; notifications none; push none; sync-xhr none; microphone none; camera none; magnetometer none; gyroscope none; speaker self; vibrate none; fullscreen self; payment none;",
    ),
    // opt out of FLoC
    ("Permissions-Policy", "interest-cohort=()"),
];

/// Set the security headers on a response.
pub fn inject(resp: &mut EdgeResponse) -> &mut EdgeResponse {
    for (name, value) in SECURITY_HEADERS {
        resp.set_header(name, value);
    }
    debug!(count = SECURITY_HEADERS.len(), "set security headers");
    resp
}
