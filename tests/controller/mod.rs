//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with extractors built by hand, the way axum would invoke
//! them, against in-memory databases.


use donation_map_test_utils::prelude::*;

use crate::util::response_json;
