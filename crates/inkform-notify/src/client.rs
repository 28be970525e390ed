use aws_sdk_sesv2::Client;

/// Build an SES client from the default credential chain.
pub async fn build_client() -> Client {
    let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    Client::new(&config)
}
