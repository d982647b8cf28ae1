use event_notifier_api_structs::APIErrorResponse;
use reqwest::{header::HeaderMap, Client, Method, StatusCode};
use serde::de::DeserializeOwned;

#[derive(Debug)]
pub enum APIErrorVariant {
    Network,
    MalformedResponse,
    UnexpectedStatusCode(StatusCode),
}

#[derive(Debug)]
pub struct APIError {
    pub variant: APIErrorVariant,
    /// The `error` of the response body when the server provided one
    pub message: String,
}

pub type APIResponse<T> = Result<T, APIError>;

pub(crate) struct BaseClient {
    client: Client,
    address: String,
}

impl BaseClient {
    pub fn new(address: String) -> Self {
        Self {
            client: Client::new(),
            address,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/v1/{}", self.address.trim_end_matches('/'), path)
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        expected_status_code: StatusCode,
    ) -> APIResponse<reqwest::Response> {
        let res = self
            .client
            .request(method, &self.url(path))
            .send()
            .await
            .map_err(|e| APIError {
                variant: APIErrorVariant::Network,
                message: e.to_string(),
            })?;

        let status = res.status();
        if status != expected_status_code {
            let message = match res.json::<APIErrorResponse>().await {
                Ok(body) => body.error,
                Err(_) => String::new(),
            };
            return Err(APIError {
                variant: APIErrorVariant::UnexpectedStatusCode(status),
                message,
            });
        }
        Ok(res)
    }

    async fn parse<T: DeserializeOwned>(res: reqwest::Response) -> APIResponse<T> {
        res.json::<T>().await.map_err(|e| APIError {
            variant: APIErrorVariant::MalformedResponse,
            message: e.to_string(),
        })
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        let res = self.send(Method::GET, path, expected_status_code).await?;
        Self::parse(res).await
    }

    pub async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        let res = self.send(Method::POST, path, expected_status_code).await?;
        Self::parse(res).await
    }

    /// Returns the response headers as there is no meaningful body
    pub async fn options(
        &self,
        path: &str,
        expected_status_code: StatusCode,
    ) -> APIResponse<HeaderMap> {
        let res = self
            .send(Method::OPTIONS, path, expected_status_code)
            .await?;
        Ok(res.headers().clone())
    }
}
