use downlog_api::servers::apis::v1::context::download_ips::resources::DownloadIp;
use downlog_api_test_helpers::configuration;
use serde_json::{json, Value};

use crate::api::asserts::{
    assert_download_ips, assert_invalid_context, assert_invalid_request, assert_store_unavailable, assert_token_not_valid,
    assert_unauthorized,
};
use crate::api::client::Client;
use crate::api::connection_info::{connection_with_invalid_token, connection_with_no_token};
use crate::api::force_database_error;
use crate::api::test_environment::running_test_environment;
use crate::common::http::{Query, QueryParam};

#[tokio::test]
async fn should_return_the_distinct_ips_matching_the_prefix() {
    let test_env = running_test_environment(configuration::ephemeral()).await;

    // Two downloads from the same IP must produce one record
    test_env.add_download(1, 1, "203.0.113.5");
    test_env.add_download(2, 1, "203.0.113.5");
    test_env.add_download(3, 2, "203.0.113.17");
    test_env.add_download(4, 3, "198.51.100.9");

    let response = Client::new(test_env.get_connection_info())
        .get_download_ips_matching("203.0.113")
        .await;

    assert_download_ips(response, &["203.0.113.5", "203.0.113.17"]).await;

    test_env.stop().await;
}

#[tokio::test]
async fn should_cap_the_results_at_ten_ips() {
    let test_env = running_test_environment(configuration::ephemeral()).await;

    for i in 0..15 {
        test_env.add_download(i, i, &format!("10.0.0.{i}"));
    }

    let response = Client::new(test_env.get_connection_info()).get_download_ips_matching("10.0.0").await;

    assert_eq!(response.status(), 200);
    let ips = response.json::<Vec<DownloadIp>>().await.unwrap();
    assert_eq!(ips.len(), 10);

    test_env.stop().await;
}

#[tokio::test]
async fn should_reject_requests_without_the_match_parameter() {
    let test_env = running_test_environment(configuration::ephemeral()).await;

    let response = Client::new(test_env.get_connection_info())
        .get_download_ips(Query::default())
        .await;

    assert_invalid_request(response).await;

    test_env.stop().await;
}

#[tokio::test]
async fn should_reject_requests_with_an_empty_match_parameter() {
    let test_env = running_test_environment(configuration::ephemeral()).await;

    test_env.add_download(1, 1, "203.0.113.5");

    let response = Client::new(test_env.get_connection_info()).get_download_ips_matching("").await;

    assert_invalid_request(response).await;

    test_env.stop().await;
}

#[tokio::test]
async fn should_report_the_missing_match_parameter_before_an_unknown_context() {
    let test_env = running_test_environment(configuration::ephemeral()).await;

    let response = Client::new(test_env.get_connection_info())
        .get_download_ips(Query::params([QueryParam::new("context", "edit")].to_vec()))
        .await;

    assert_invalid_request(response).await;

    test_env.stop().await;
}

#[tokio::test]
async fn should_match_the_prefix_literally() {
    let test_env = running_test_environment(configuration::ephemeral()).await;

    // The stored values are opaque text; a `%` or `_` in the prefix must not
    // act as a wildcard.
    test_env.add_download(1, 1, "192.%.1.1");
    test_env.add_download(2, 2, "192.8.1.1");
    test_env.add_download(3, 3, "10._.0.1");
    test_env.add_download(4, 4, "10.A.0.1");

    let client = Client::new(test_env.get_connection_info());

    let response = client.get_download_ips_matching("192.%").await;
    assert_download_ips(response, &["192.%.1.1"]).await;

    let response = client.get_download_ips_matching("10._").await;
    assert_download_ips(response, &["10._.0.1"]).await;

    test_env.stop().await;
}

#[tokio::test]
async fn should_return_an_empty_array_when_no_ips_match() {
    let test_env = running_test_environment(configuration::ephemeral()).await;

    test_env.add_download(1, 1, "198.51.100.9");

    let response = Client::new(test_env.get_connection_info())
        .get_download_ips_matching("203.0.113")
        .await;

    assert_download_ips(response, &[]).await;

    test_env.stop().await;
}

#[tokio::test]
async fn should_be_idempotent() {
    let test_env = running_test_environment(configuration::ephemeral()).await;

    test_env.add_download(1, 1, "203.0.113.5");

    let client = Client::new(test_env.get_connection_info());

    let response = client.get_download_ips_matching("203.0.113").await;
    assert_download_ips(response, &["203.0.113.5"]).await;

    let response = client.get_download_ips_matching("203.0.113").await;
    assert_download_ips(response, &["203.0.113.5"]).await;

    test_env.stop().await;
}

#[tokio::test]
async fn should_not_mask_store_errors_as_empty_results() {
    let test_env = running_test_environment(configuration::ephemeral()).await;

    force_database_error(&test_env.download_log);

    let response = Client::new(test_env.get_connection_info())
        .get_download_ips_matching("203.0.113")
        .await;

    assert_store_unavailable(response).await;

    test_env.stop().await;
}

#[tokio::test]
async fn should_accept_the_view_context() {
    let test_env = running_test_environment(configuration::ephemeral()).await;

    test_env.add_download(1, 1, "203.0.113.5");

    let response = Client::new(test_env.get_connection_info())
        .get_download_ips(Query::params(
            [QueryParam::new("match", "203.0.113"), QueryParam::new("context", "view")].to_vec(),
        ))
        .await;

    assert_download_ips(response, &["203.0.113.5"]).await;

    test_env.stop().await;
}

#[tokio::test]
async fn should_reject_an_unknown_context() {
    let test_env = running_test_environment(configuration::ephemeral()).await;

    let response = Client::new(test_env.get_connection_info())
        .get_download_ips(Query::params(
            [QueryParam::new("match", "203.0.113"), QueryParam::new("context", "edit")].to_vec(),
        ))
        .await;

    assert_invalid_context(response).await;

    test_env.stop().await;
}

#[tokio::test]
async fn should_not_allow_searching_for_unauthenticated_users() {
    let test_env = running_test_environment(configuration::ephemeral()).await;

    let response = Client::new(connection_with_invalid_token(
        test_env.get_connection_info().bind_address.as_str(),
    ))
    .get_download_ips_matching("203.0.113")
    .await;

    assert_token_not_valid(response).await;

    let response = Client::new(connection_with_no_token(test_env.get_connection_info().bind_address.as_str()))
        .get_download_ips_matching("203.0.113")
        .await;

    assert_unauthorized(response).await;

    test_env.stop().await;
}

#[tokio::test]
async fn should_declare_the_schema_on_options() {
    let test_env = running_test_environment(configuration::ephemeral()).await;

    let response = Client::new(test_env.get_connection_info()).discover_download_ips_schema().await;

    assert_eq!(response.status(), 200);

    let document = response.json::<Value>().await.unwrap();

    assert_eq!(document["methods"], json!(["GET"]));
    assert_eq!(document["schema"]["title"], json!("download_ip"));
    assert_eq!(document["schema"]["properties"]["ip_address"]["type"], json!("string"));
    assert_eq!(document["schema"]["properties"]["ip_address"]["readonly"], json!(true));
    assert_eq!(document["args"]["match"]["required"], json!(false));
    assert_eq!(document["args"]["context"]["default"], json!("view"));

    test_env.stop().await;
}
