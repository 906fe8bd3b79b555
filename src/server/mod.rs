//! Server application core modules.
//!
//! Everything behind the two subcommands: the MDA and Places HTTP clients, the two SQLite
//! stores, the ingestion services and the read-only HTTP API.

pub mod client;
pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
