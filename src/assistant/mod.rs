//! Assistant integration layer: hosted model client and reply plumbing.

pub mod credentials;
pub mod dispatcher;
pub mod gemini;
mod wire;

/// Returns the assistant module name for smoke checks.
pub fn module_name() -> &'static str {
    "assistant"
}
