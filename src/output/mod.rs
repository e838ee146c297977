//! Renderer seam and bundled renderers.
//!
//! The scheduler hands each [`Report`](crate::Report) to a [`Render`]
//! implementation and moves on; it never depends on renderer success or
//! failure beyond timing its own call. Plotting belongs to external
//! consumers — the bundled renderers cover terminal summaries and JSON.

mod json;
mod terminal;

pub use json::{to_json, to_json_pretty};
pub use terminal::TerminalRender;

use crate::report::Report;

/// Consumer of analysis results.
pub trait Render {
    /// Present one analysis pass. Called from the measurement loop; keep it
    /// cheap or the efficiency governor will throttle analysis.
    fn update(&mut self, report: &Report);
}

/// Renderer that discards every report.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRender;

impl Render for NullRender {
    fn update(&mut self, _report: &Report) {}
}
