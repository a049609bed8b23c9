use downlog_api::servers::apis::v1::context::download_ips::resources::DownloadIp;
use reqwest::Response;
use serde_json::Value;

// Resource responses

/// It asserts a `200` response with exactly the expected IP addresses,
/// ignoring order since the endpoint applies no explicit sort.
pub async fn assert_download_ips(response: Response, expected: &[&str]) {
    assert_eq!(response.status(), 200);
    assert_eq!(response.headers().get("content-type").unwrap(), "application/json");
    assert_collection_link(&response);

    let mut ips: Vec<String> = response
        .json::<Vec<DownloadIp>>()
        .await
        .unwrap()
        .into_iter()
        .map(|download_ip| download_ip.ip_address)
        .collect();
    ips.sort();

    let mut expected: Vec<String> = expected.iter().map(std::string::ToString::to_string).collect();
    expected.sort();

    assert_eq!(ips, expected);
}

pub fn assert_collection_link(response: &Response) {
    assert_eq!(
        response.headers().get("link").unwrap(),
        "</api/v1/data/download-ips>; rel=\"collection\""
    );
}

// Error responses

async fn assert_error(response: Response, status: u16, code: &str, message: &str) {
    assert_eq!(response.status(), status);
    assert_eq!(response.headers().get("content-type").unwrap(), "application/json");

    let body = response.json::<Value>().await.unwrap();

    assert_eq!(body["code"], code);
    assert_eq!(body["message"], message);
    assert_eq!(body["status"], status);
}

pub async fn assert_invalid_request(response: Response) {
    assert_error(
        response,
        400,
        "data_download_ips_invalid_request",
        "Invalid request. Please pass the match parameter.",
    )
    .await;
}

pub async fn assert_invalid_context(response: Response) {
    assert_error(
        response,
        400,
        "data_download_ips_invalid_context",
        "Invalid context parameter. Allowed values: view.",
    )
    .await;
}

pub async fn assert_store_unavailable(response: Response) {
    assert_error(
        response,
        500,
        "data_download_ips_store_unavailable",
        "The download log store is unavailable.",
    )
    .await;
}

pub async fn assert_unauthorized(response: Response) {
    assert_error(response, 401, "unauthorized", "Missing token for authentication.").await;
}

pub async fn assert_token_not_valid(response: Response) {
    assert_error(response, 401, "token_not_valid", "Token not valid.").await;
}
