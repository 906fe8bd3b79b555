//! Utility functions shared by the pipeline and the API layer: address normalization
//! and date parsing.

pub mod address;
pub mod time;
