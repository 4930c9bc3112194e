use fixture_oracle::{
    AppError, Config, FixtureQuery, StaticSecrets,
    data_fetcher::api::{create_http_client_with_timeout, fetch_fixture_lists, fetch_timezones},
    encoding::decode_u32_arrays,
    run_fixture_pipeline, run_timezone_pipeline,
    testing_utils::TestDataBuilder,
};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{any, header, method, path, query_param},
};

fn config_for(server: &MockServer) -> Config {
    Config {
        api_domain: server.uri(),
        ..Config::default()
    }
}

fn fixture_secrets() -> StaticSecrets {
    StaticSecrets::new().with("soccerApiKey", "integration-key")
}

/// Two fixtures in, two aligned lists and a decodable payload out
#[tokio::test]
async fn test_fixture_scenario_end_to_end() {
    let server = MockServer::start().await;
    let config = config_for(&server);
    let client = create_http_client_with_timeout(config.http_timeout_seconds).unwrap();

    Mock::given(method("GET"))
        .and(path("/v3/fixtures"))
        .and(query_param("date", "2024-03-02"))
        .and(query_param("league", "39"))
        .and(query_param("season", "2023"))
        .and(header("X-RapidAPI-Key", "integration-key"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"response": [
                {"fixture": {"id": 101, "timestamp": 1700000000}},
                {"fixture": {"id": 102, "timestamp": 1700003600}}
            ]}"#,
        ))
        .expect(2)
        .mount(&server)
        .await;

    let lists = fetch_fixture_lists(&client, &config, &FixtureQuery::default(), &fixture_secrets())
        .await
        .unwrap();
    assert_eq!(lists.fixture_ids(), &[101, 102]);
    assert_eq!(lists.timestamps(), &[1_700_000_000, 1_700_003_600]);

    let payload =
        run_fixture_pipeline(&client, &config, &FixtureQuery::default(), &fixture_secrets())
            .await
            .unwrap();
    assert_eq!(payload, lists.encode());

    let (ids, timestamps) = decode_u32_arrays(&payload).unwrap();
    assert_eq!(ids, vec![101, 102]);
    assert_eq!(timestamps, vec![1_700_000_000, 1_700_003_600]);
}

#[tokio::test]
async fn test_missing_fixture_secret_issues_no_request() {
    let server = MockServer::start().await;
    let config = config_for(&server);
    let client = create_http_client_with_timeout(config.http_timeout_seconds).unwrap();

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    // A timezone key does not satisfy the fixture pipeline
    let secrets = StaticSecrets::new().with("RAPIDAPI_KEY", "other-key");
    let error = run_fixture_pipeline(&client, &config, &FixtureQuery::default(), &secrets)
        .await
        .unwrap_err();

    assert!(error.is_configuration());
    assert!(error.to_string().contains("API key required"));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_empty_fixture_day() {
    let server = MockServer::start().await;
    let config = config_for(&server);
    let client = create_http_client_with_timeout(config.http_timeout_seconds).unwrap();

    Mock::given(method("GET"))
        .and(path("/v3/fixtures"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"response": []}"#))
        .mount(&server)
        .await;

    let payload =
        run_fixture_pipeline(&client, &config, &FixtureQuery::default(), &fixture_secrets())
            .await
            .unwrap();

    let (ids, timestamps) = decode_u32_arrays(&payload).unwrap();
    assert!(ids.is_empty());
    assert!(timestamps.is_empty());
}

#[tokio::test]
async fn test_order_is_preserved_for_realistic_matchday() {
    let server = MockServer::start().await;
    let config = config_for(&server);
    let client = create_http_client_with_timeout(config.http_timeout_seconds).unwrap();

    // Deliberately not sorted by id or kickoff
    let fixtures: [(u32, u32); 4] = [
        (1_035_040, 1_709_391_600),
        (1_035_037, 1_709_382_600),
        (1_035_044, 1_709_400_600),
        (1_035_039, 1_709_391_600),
    ];

    Mock::given(method("GET"))
        .and(path("/v3/fixtures"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(TestDataBuilder::fixtures_body(&fixtures)),
        )
        .mount(&server)
        .await;

    let payload =
        run_fixture_pipeline(&client, &config, &FixtureQuery::default(), &fixture_secrets())
            .await
            .unwrap();
    let (ids, timestamps) = decode_u32_arrays(&payload).unwrap();

    let expected_ids: Vec<u32> = fixtures.iter().map(|(id, _)| *id).collect();
    let expected_timestamps: Vec<u32> = fixtures.iter().map(|(_, ts)| *ts).collect();
    assert_eq!(ids, expected_ids);
    assert_eq!(timestamps, expected_timestamps);
}

#[tokio::test]
async fn test_transport_failure_propagates() {
    let server = MockServer::start().await;
    let config = config_for(&server);
    let client = create_http_client_with_timeout(config.http_timeout_seconds).unwrap();

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let error = run_fixture_pipeline(&client, &config, &FixtureQuery::default(), &fixture_secrets())
        .await
        .unwrap_err();

    assert!(matches!(error, AppError::ApiClientError { status: 403, .. }));
    assert!(error.is_transport());
}

#[tokio::test]
async fn test_timezone_scenario() {
    let server = MockServer::start().await;
    let config = config_for(&server);
    let client = create_http_client_with_timeout(config.http_timeout_seconds).unwrap();
    let secrets = StaticSecrets::new().with("RAPIDAPI_KEY", "rapid-key");

    Mock::given(method("GET"))
        .and(path("/v3/timezone"))
        .and(header("X-RapidAPI-Key", "rapid-key"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(TestDataBuilder::timezone_body(&["UTC", "CET"])),
        )
        .expect(2)
        .mount(&server)
        .await;

    let timezones = fetch_timezones(&client, &config, Some("rapid-key")).await.unwrap();
    assert_eq!(
        fixture_oracle::data_fetcher::api::format_timezone_list(&timezones),
        r#"["UTC", "CET"]"#
    );

    let outcome: Result<(), AppError> = run_timezone_pipeline(&client, &config, &secrets).await;
    assert!(outcome.is_ok());
}
