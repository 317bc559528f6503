//! Decoding tests
//!
//! Markdown is rendered with the preview renderer, decorated, and inspected.

mod decorate;
mod roundtrip;
