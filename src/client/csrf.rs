use super::{read_json, ApiClient};
use crate::error::ApiError;
use serde::Deserialize;

#[derive(Deserialize)]
struct CsrfTokenResponse {
    #[serde(rename = "csrfToken")]
    csrf_token: Option<String>,
}

impl ApiClient {
    /// Ask the backend for a fresh CSRF token. Never cached.
    pub async fn fetch_csrf_token(&self) -> Result<String, ApiError> {
        let response = self.http.get(self.url(&["csrf", ""])).send().await?;
        let body: CsrfTokenResponse = read_json(response).await?;

        body.csrf_token
            .filter(|token| !token.is_empty())
            .ok_or(ApiError::MissingCsrfToken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use mockito::Server;

    #[tokio::test]
    async fn every_call_hits_the_backend() {
        let mut server = Server::new_async().await;
        let api = ApiClient::new(&Config::new(&server.url()).unwrap());
        let mock = server
            .mock("GET", "/csrf/")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"csrfToken":"t0k3n"}"#)
            .expect(2)
            .create_async()
            .await;

        assert_eq!(api.fetch_csrf_token().await.unwrap(), "t0k3n");
        assert_eq!(api.fetch_csrf_token().await.unwrap(), "t0k3n");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn empty_token_is_an_error() {
        let mut server = Server::new_async().await;
        let api = ApiClient::new(&Config::new(&server.url()).unwrap());
        server
            .mock("GET", "/csrf/")
            .with_status(200)
            .with_body(r#"{"csrfToken":""}"#)
            .create_async()
            .await;

        let err = api.fetch_csrf_token().await.unwrap_err();

        assert!(matches!(err, ApiError::MissingCsrfToken));
    }
}
