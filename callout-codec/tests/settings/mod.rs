//! Settings tests: import/export merging and persistence

mod import_export;
mod persistence;
