//! Tolerant per-line decoding.
//!
//! A raw line either yields exactly one valid `LogEntry` or nothing; no
//! error ever crosses this boundary. Callers fold over their lines and keep
//! the `Some` values.

use crate::http_meta::parse_http_metadata;
use crate::types::LogEntry;

/// Decode one raw text line into a `LogEntry`, or skip it.
///
/// Structural decode first: the line must be a valid JSON object in the
/// `LogEntry` shape (unrecognized keys are ignored; producer context belongs
/// in the explicit `extra` map). Then HTTP metadata recovery fills in
/// whatever `message` carries for fields the structured record left empty.
pub fn parse_line(raw: &str) -> Option<LogEntry> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    let mut entry: LogEntry = serde_json::from_str(raw).ok()?;
    recover_http_fields(&mut entry);
    Some(entry)
}

fn recover_http_fields(entry: &mut LogEntry) {
    if !needs_recovery(entry) {
        return;
    }
    let meta = parse_http_metadata(&entry.message);
    if entry.method.is_empty() {
        if let Some(method) = meta.method {
            entry.method = method;
        }
    }
    if entry.path.is_empty() {
        if let Some(path) = meta.path {
            entry.path = path;
        }
    }
    if entry.status == 0 {
        if let Some(status) = meta.status {
            entry.status = status;
        }
    }
    if entry.duration.is_empty() {
        if let Some(duration) = meta.duration {
            entry.duration = duration;
        }
    }
    if entry.ip.is_empty() {
        if let Some(ip) = meta.ip {
            entry.ip = ip;
        }
    }
    if entry.user_agent.is_empty() {
        if let Some(user_agent) = meta.user_agent {
            entry.user_agent = user_agent;
        }
    }
}

fn needs_recovery(entry: &LogEntry) -> bool {
    entry.method.is_empty()
        || entry.path.is_empty()
        || entry.status == 0
        || entry.duration.is_empty()
        || entry.ip.is_empty()
        || entry.user_agent.is_empty()
}
