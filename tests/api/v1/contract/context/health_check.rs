use downlog_api_test_helpers::configuration;
use serde_json::{json, Value};

use crate::api::client::Client;
use crate::api::connection_info::connection_with_no_token;
use crate::api::test_environment::running_test_environment;

#[tokio::test]
async fn should_be_reachable_without_authentication() {
    let test_env = running_test_environment(configuration::ephemeral()).await;

    let response = Client::new(connection_with_no_token(test_env.get_connection_info().bind_address.as_str()))
        .health_check()
        .await;

    assert_eq!(response.status(), 200);
    assert_eq!(response.json::<Value>().await.unwrap(), json!({ "status": "Ok" }));

    test_env.stop().await;
}
