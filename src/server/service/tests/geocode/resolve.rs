//! Tests for GeocodeService::resolve method.

use super::*;

/// Expect an exact street-level result to be returned and cached on a cache miss
#[tokio::test]
async fn geocodes_and_caches_on_miss() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_geocache_tables()
        .with_places_result("Herzl 1, Tel Aviv", PlaceResult::exact(32.08, 34.78), 1)
        .build()
        .await?;
    let places = places_client(&test);
    let service = GeocodeService::new(&test.geocache_db, &places, retry());

    let result = service.resolve(&listing("Tel Aviv", "Herzl", "1", "")).await;

    assert!(result.is_ok(), "Error: {:?}", result);
    let coordinates = result.unwrap();
    assert_eq!(coordinates.latitude, 32.08);
    assert_eq!(coordinates.longitude, 34.78);
    assert!(coordinates.is_exact);

    let key = AddressKey::new("tel aviv, herzl, 1").unwrap();
    let cached = GeocacheRepository::new(&test.geocache_db).lookup(&key).await?;
    assert!(cached.is_some());

    test.assert_mocks();

    Ok(())
}

/// Expect resolving the same address twice to issue a single outbound request
#[tokio::test]
async fn second_resolve_uses_cache() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_geocache_tables()
        .with_places_result("Herzl 1, Tel Aviv", PlaceResult::exact(32.08, 34.78), 1)
        .build()
        .await?;
    let places = places_client(&test);
    let service = GeocodeService::new(&test.geocache_db, &places, retry());

    let first = service
        .resolve(&listing("Tel Aviv", "Herzl", "1", ""))
        .await
        .unwrap();
    let second = service
        .resolve(&listing(" tel aviv ", "HERZL", "1", "Other venue"))
        .await
        .unwrap();

    assert_eq!(first, second);
    test.assert_mocks();

    Ok(())
}

/// Expect a cached address to be served without any outbound request
#[tokio::test]
async fn cache_hit_makes_no_request() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_geocache_tables()
        .with_cached_address("haifa, herzl, 5", 32.81, 34.99, false)
        .build()
        .await?;
    let no_requests = test.places().create_any_query_endpoint(0);
    let places = places_client(&test);
    let service = GeocodeService::new(&test.geocache_db, &places, retry());

    let coordinates = service
        .resolve(&listing("Haifa", "Herzl", "5", ""))
        .await
        .unwrap();

    assert_eq!(coordinates.latitude, 32.81);
    assert!(!coordinates.is_exact);
    no_requests.assert();

    Ok(())
}

/// Expect the chain to fall through to the venue query, flagged as approximate
#[tokio::test]
async fn falls_back_to_venue_query() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_geocache_tables()
        .with_places_zero_results("Herzl 1, Haifa", 1)
        .with_places_zero_results("Herzl, Haifa", 1)
        .with_places_result(
            "Rambam Hospital, Haifa",
            PlaceResult {
                latitude: 32.83,
                longitude: 34.99,
                types: vec!["hospital".to_string(), "establishment".to_string()],
            },
            1,
        )
        .build()
        .await?;
    let places = places_client(&test);
    let service = GeocodeService::new(&test.geocache_db, &places, retry());

    let coordinates = service
        .resolve(&listing("Haifa", "Herzl", "1", "Rambam Hospital"))
        .await
        .unwrap();

    assert_eq!(coordinates.latitude, 32.83);
    assert!(!coordinates.is_exact);
    test.assert_mocks();

    Ok(())
}

/// Expect a city-level fallback to be flagged as approximate
#[tokio::test]
async fn city_fallback_is_approximate() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_geocache_tables()
        .with_places_zero_results("Nowhere 3, Ashdod", 1)
        .with_places_zero_results("Nowhere, Ashdod", 1)
        .with_places_result("Ashdod", PlaceResult::locality(31.8, 34.65), 1)
        .build()
        .await?;
    let places = places_client(&test);
    let service = GeocodeService::new(&test.geocache_db, &places, retry());

    let coordinates = service
        .resolve(&listing("Ashdod", "Nowhere", "3", ""))
        .await
        .unwrap();

    assert_eq!(coordinates.latitude, 31.8);
    assert!(!coordinates.is_exact);
    test.assert_mocks();

    Ok(())
}

/// Expect a miss when no query yields a candidate, and nothing to be cached
#[tokio::test]
async fn miss_when_every_query_is_empty() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_geocache_tables()
        .with_places_zero_results("Herzl, Atlantis", 1)
        .with_places_zero_results("Atlantis", 1)
        .build()
        .await?;
    let places = places_client(&test);
    let service = GeocodeService::new(&test.geocache_db, &places, retry());

    let result = service.resolve(&listing("Atlantis", "Herzl", "", "")).await;

    assert!(matches!(
        result,
        Err(Error::GeocodeError(GeocodeError::Miss { ref address })) if address == "atlantis, herzl"
    ));

    let key = AddressKey::new("atlantis, herzl").unwrap();
    let cached = GeocacheRepository::new(&test.geocache_db).lookup(&key).await?;
    assert!(cached.is_none());
    test.assert_mocks();

    Ok(())
}

/// Expect an empty address to be rejected before the cache or the network is consulted
#[tokio::test]
async fn rejects_empty_address_without_lookup() -> Result<(), TestError> {
    // No geocache table: a lookup would fail with a database error
    let mut test = TestBuilder::new().build().await?;
    let no_requests = test.places().create_any_query_endpoint(0);
    let places = places_client(&test);
    let service = GeocodeService::new(&test.geocache_db, &places, retry());

    let result = service.resolve(&listing(" ", "", "", "Some venue")).await;

    assert!(matches!(
        result,
        Err(Error::GeocodeError(GeocodeError::EmptyAddress))
    ));
    no_requests.assert();

    Ok(())
}

/// Expect quota exhaustion to fail immediately without retrying
#[tokio::test]
async fn quota_error_is_not_retried() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_geocache_tables()
        .with_places_status("Herzl 1, Tel Aviv", "OVER_QUERY_LIMIT", 1)
        .build()
        .await?;
    let places = places_client(&test);
    let service = GeocodeService::new(&test.geocache_db, &places, retry());

    let result = service.resolve(&listing("Tel Aviv", "Herzl", "1", "")).await;

    assert!(matches!(
        result,
        Err(Error::GeocodeError(GeocodeError::Status { ref status, .. })) if status == "OVER_QUERY_LIMIT"
    ));
    test.assert_mocks();

    Ok(())
}

/// Expect a server error to be retried and the next attempt's result to be used
#[tokio::test]
async fn server_error_is_retried() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_geocache_tables()
        .with_places_http_error("Herzl 1, Tel Aviv", 503, 1)
        .with_places_result("Herzl 1, Tel Aviv", PlaceResult::exact(32.08, 34.78), 1)
        .build()
        .await?;
    let places = places_client(&test);
    let service = GeocodeService::new(&test.geocache_db, &places, retry());

    let result = service.resolve(&listing("Tel Aviv", "Herzl", "1", "")).await;

    assert!(result.is_ok(), "Error: {:?}", result);
    test.assert_mocks();

    Ok(())
}

/// Expect a persistent server error to surface once the attempts are exhausted
#[tokio::test]
async fn persistent_server_error_fails_after_max_attempts() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_geocache_tables()
        .with_places_http_error("Herzl 1, Tel Aviv", 500, 3)
        .build()
        .await?;
    let places = places_client(&test);
    let service = GeocodeService::new(&test.geocache_db, &places, retry());

    let result = service.resolve(&listing("Tel Aviv", "Herzl", "1", "")).await;

    assert!(matches!(
        result,
        Err(Error::GeocodeError(GeocodeError::Request(_)))
    ));
    test.assert_mocks();

    Ok(())
}

/// Expect the transliterated chain to be tried once every native-script query misses
#[tokio::test]
async fn falls_back_to_latin_query() -> Result<(), TestError> {
    let hebrew = listing("חיפה", "הרצל", "1", "");
    let queries = build_queries(&hebrew);
    assert_eq!(queries.len(), 6);

    let mut builder = TestBuilder::new().with_geocache_tables();
    for query in &queries[..3] {
        builder = builder.with_places_zero_results(&query.text, 1);
    }
    let test = builder
        .with_places_result(&queries[3].text, PlaceResult::exact(32.81, 34.99), 1)
        .build()
        .await?;
    let places = places_client(&test);
    let service = GeocodeService::new(&test.geocache_db, &places, retry());

    let coordinates = service.resolve(&hebrew).await.unwrap();

    assert_eq!(coordinates.latitude, 32.81);
    assert!(coordinates.is_exact);
    test.assert_mocks();

    let key = AddressKey::from_parts("חיפה", "הרצל", "1").unwrap();
    let cached = GeocacheRepository::new(&test.geocache_db).lookup(&key).await?;
    assert!(cached.is_some());

    Ok(())
}

/// Expect a geocoder that never answers to time out on every attempt and cache nothing
#[tokio::test]
async fn timeout_fails_after_max_attempts() -> Result<(), TestError> {
    let test = TestBuilder::new().with_geocache_tables().build().await?;

    // Accepts connections and holds them open without ever responding
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let accepted = Arc::new(AtomicUsize::new(0));
    let counter = accepted.clone();
    tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((stream, _)) = listener.accept().await {
            counter.fetch_add(1, Ordering::SeqCst);
            held.push(stream);
        }
    });

    let http = build_http_client(TEST_USER_AGENT, Duration::from_millis(200), false).unwrap();
    let places = PlacesClient::new(
        http,
        format!("http://{addr}/maps/api/place/textsearch/json"),
        TEST_GOOGLE_API_KEY,
        Duration::ZERO,
    );
    let service = GeocodeService::new(&test.geocache_db, &places, retry());

    let result = service.resolve(&listing("Tel Aviv", "Herzl", "1", "")).await;

    assert!(matches!(
        result,
        Err(Error::GeocodeError(GeocodeError::Request(ref e))) if e.is_timeout()
    ));
    assert_eq!(accepted.load(Ordering::SeqCst), 3);

    let key = AddressKey::new("tel aviv, herzl, 1").unwrap();
    let cached = GeocacheRepository::new(&test.geocache_db).lookup(&key).await?;
    assert!(cached.is_none());

    Ok(())
}
