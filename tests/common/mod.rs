use discounts_client::DiscountsClient;

/// Set up a test client pointed at a mock server.
#[allow(dead_code)]
pub fn setup_test_client(mock_server_uri: &str) -> DiscountsClient {
    let _ = env_logger::builder().is_test(true).try_init();

    DiscountsClient::builder()
        .base_url(mock_server_uri)
        .build()
        .expect("Failed to build DiscountsClient")
}
