use reqwest::Response;

use super::connection_info::ConnectionInfo;
use crate::common::http::{Query, QueryParam, ReqwestQuery};

/// API Client
pub struct Client {
    connection_info: ConnectionInfo,
    base_path: String,
}

impl Client {
    pub fn new(connection_info: ConnectionInfo) -> Self {
        Self {
            connection_info,
            base_path: "/api/".to_string(),
        }
    }

    pub async fn get_download_ips(&self, params: Query) -> Response {
        self.get("v1/data/download-ips", params).await
    }

    pub async fn get_download_ips_matching(&self, prefix: &str) -> Response {
        self.get_download_ips(Query::params([QueryParam::new("match", prefix)].to_vec()))
            .await
    }

    pub async fn discover_download_ips_schema(&self) -> Response {
        self.options("v1/data/download-ips").await
    }

    pub async fn health_check(&self) -> Response {
        self.get_request("health_check").await
    }

    pub async fn get(&self, path: &str, params: Query) -> Response {
        let mut query: Query = params;

        if let Some(token) = &self.connection_info.api_token {
            query.add_param(QueryParam::new("token", token));
        };

        self.get_request_with_query(path, query).await
    }

    async fn options(&self, path: &str) -> Response {
        reqwest::Client::new()
            .request(reqwest::Method::OPTIONS, self.base_url(path))
            .query(&ReqwestQuery::from(self.query_with_token()))
            .send()
            .await
            .unwrap()
    }

    pub async fn get_request_with_query(&self, path: &str, params: Query) -> Response {
        get(&self.base_url(path), Some(params)).await
    }

    pub async fn get_request(&self, path: &str) -> Response {
        get(&self.base_url(path), None).await
    }

    fn query_with_token(&self) -> Query {
        match &self.connection_info.api_token {
            Some(token) => Query::params([QueryParam::new("token", token)].to_vec()),
            None => Query::default(),
        }
    }

    fn base_url(&self, path: &str) -> String {
        format!("http://{}{}{path}", &self.connection_info.bind_address, &self.base_path)
    }
}

async fn get(path: &str, query: Option<Query>) -> Response {
    match query {
        Some(params) => reqwest::Client::builder()
            .build()
            .unwrap()
            .get(path)
            .query(&ReqwestQuery::from(params))
            .send()
            .await
            .unwrap(),
        None => reqwest::Client::builder().build().unwrap().get(path).send().await.unwrap(),
    }
}
