//! Markdown generation tests
//!
//! Snapshots of generated documents, and checks that the output really parses as the
//! nested block quotes the host turns into callouts.

mod generate;
mod structure;
