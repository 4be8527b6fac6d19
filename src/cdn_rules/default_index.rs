use crate::cdn_event::EdgeRequest;

use tracing::debug;

/// Document served for any path which does not name a file.
pub const INDEX_DOCUMENT: &str = "/index.html";

/// Re-route the request to the index document if its URI does not
/// have a file extension.
pub fn normalize(req: &mut EdgeRequest) -> &mut EdgeRequest {
    if let Some(index) = rewrite_path(&req.uri) {
        req.uri = index.to_string();
    }
    req
}

/// The path a request for `path` should be sent to instead, if any.
pub fn rewrite_path(path: &str) -> Option<&'static str> {
    if has_extension(path) {
        None
    } else {
        debug!(path, rewritten = INDEX_DOCUMENT, "no file extension, serving index");
        Some(INDEX_DOCUMENT)
    }
}

/// Check if the last segment of a path has a file extension: some
/// text after its last `.`.
///
/// A leading `.` names a hidden file, not an extension, so `/.env`
/// has none while `/.env.local` has `.local`.
pub fn has_extension(path: &str) -> bool {
    let segment = path.rsplit('/').next().unwrap_or(path);
    let start = segment.chars().next().map_or(0, char::len_utf8);
    match segment[start..].rfind('.') {
        Some(dot) => start + dot + 1 < segment.len(),
        None => false,
    }
}
