//! JSON serialization of analysis reports.

use crate::report::Report;

/// Serialize a report as compact JSON.
///
/// Missing comparison cells serialize as `null`; every other value in a
/// report is finite by construction.
pub fn to_json(report: &Report) -> serde_json::Result<String> {
    serde_json::to_string(report)
}

/// Serialize a report as pretty-printed JSON.
pub fn to_json_pretty(report: &Report) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}
