use std::{
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
    time::Duration,
};

use donation_map_test_utils::{
    constant::{TEST_GOOGLE_API_KEY, TEST_USER_AGENT},
    prelude::*,
};
use tokio::net::TcpListener;

use crate::server::{
    client::{build_http_client, places::PlacesClient},
    data::geocache::GeocacheRepository,
    error::{geocode::GeocodeError, Error},
    service::{
        geocode::{build_queries, GeocodeService},
        tests::{listing, places_client, retry},
    },
    util::address::AddressKey,
};

mod resolve;
