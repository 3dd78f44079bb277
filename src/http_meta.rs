//! Recovery of HTTP request metadata embedded in free-text log messages.
//!
//! Producers often log requests as plain text in the shape
//! `GET /api/v1/users | Status: 200 | Duration: 45ms | IP: 1.2.3.4 |
//! User-Agent: Mozilla/5.0`. This module turns that convention back into
//! structured fields without touching the JSON decode step.

const HTTP_METHODS: [&str; 7] = ["GET", "POST", "PUT", "DELETE", "PATCH", "HEAD", "OPTIONS"];

/// Metadata recovered from a message. Every piece is independent; `None`
/// means the segment was missing or unusable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HttpMetadata {
    pub method: Option<String>,
    pub path: Option<String>,
    pub status: Option<u16>,
    pub duration: Option<String>,
    pub ip: Option<String>,
    pub user_agent: Option<String>,
}

/// Parse the pipe-delimited request convention out of a free-text message.
///
/// Any subset of the pieces may be present; a message with none of them
/// yields the default (all-`None`) metadata. Never fails.
pub fn parse_http_metadata(message: &str) -> HttpMetadata {
    let mut meta = HttpMetadata::default();

    for (i, segment) in message.split(" | ").enumerate() {
        let segment = segment.trim();
        if i == 0 {
            if let Some((method, path)) = split_method_path(segment) {
                meta.method = Some(method);
                meta.path = Some(path);
            }
            continue;
        }
        let Some((key, value)) = segment.split_once(": ") else {
            continue;
        };
        let value = value.trim();
        if value.is_empty() {
            continue;
        }
        match key {
            // Non-numeric status means absent, not a failed entry; it also
            // must not erase a status recovered from an earlier segment.
            "Status" => {
                if let Ok(status) = value.parse::<u16>() {
                    meta.status = Some(status);
                }
            }
            "Duration" => meta.duration = Some(value.to_string()),
            "IP" => meta.ip = Some(value.to_string()),
            "User-Agent" => meta.user_agent = Some(value.to_string()),
            _ => {}
        }
    }

    meta
}

fn split_method_path(segment: &str) -> Option<(String, String)> {
    let (method, path) = segment.split_once(' ')?;
    if !HTTP_METHODS.contains(&method) {
        return None;
    }
    let path = path.trim();
    if path.is_empty() {
        return None;
    }
    Some((method.to_string(), path.to_string()))
}
