//! Tests for store setup and the `pipeline` entry point.
//!
//! Unlike the other tests, tables here come from the migrators rather than from the
//! entities, and `run_pipeline` opens real SQLite files in a temporary directory.
