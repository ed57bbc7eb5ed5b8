//! HTTP span helpers.

use boutique_app::bson::oid::ObjectId;

#[derive(Debug, Clone)]
pub(super) struct RequestSpanName {
    pub(super) route: String,
    pub(super) span_name: String,
}

pub(super) fn request_span_name(method: &str, path: &str) -> RequestSpanName {
    let route = normalise_path(path);
    let span_name = format!("{method} {route}");

    RequestSpanName { route, span_name }
}

/// Collapse ObjectId path segments so metrics and span names stay low-cardinality.
fn normalise_path(path: &str) -> String {
    if path == "/" {
        return "/".to_owned();
    }

    let mut normalised = String::from("/");

    for (index, segment) in path.trim_start_matches('/').split('/').enumerate() {
        if index > 0 {
            normalised.push('/');
        }

        if ObjectId::parse_str(segment).is_ok() {
            normalised.push_str("{id}");
        } else {
            normalised.push_str(segment);
        }
    }

    normalised
}
