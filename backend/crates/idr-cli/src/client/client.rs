use crate::{CliClientResult, ClientError};

use reqwest::{Client as ReqwestClient, Method, Url};
use serde::Serialize;
use serde_json::Value;

/// Header carrying the caller's local account name
const CALLER_USER_HEADER: &str = "X-Caller-User";

/// HTTP client for the idr-server REST API
pub struct Client {
    pub base_url: String,
    pub caller_user: Option<String>,
    client: ReqwestClient,
}

impl Client {
    /// # Arguments
    /// * `base_url` - Server URL (e.g., "http://127.0.0.1:1099")
    /// * `caller_user` - Local account name sent as `X-Caller-User`
    pub fn new(base_url: &str, caller_user: Option<&str>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            caller_user: caller_user.map(String::from),
            client: ReqwestClient::new(),
        }
    }

    /// Build a request. Each segment is percent-encoded on its own, so
    /// login names may contain `/`, `?` or `#`.
    fn request(
        &self,
        method: Method,
        segments: &[&str],
    ) -> CliClientResult<reqwest::RequestBuilder> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| ClientError::url(&self.base_url, e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| ClientError::url(&self.base_url, "cannot be a base URL"))?
            .pop_if_empty()
            .extend(segments);

        let mut req = self.client.request(method, url);

        if let Some(ref user) = self.caller_user {
            req = req.header(CALLER_USER_HEADER, user);
        }

        Ok(req)
    }

    /// Send the request and turn error bodies into [`ClientError::Api`]
    async fn execute(&self, req: reqwest::RequestBuilder) -> CliClientResult<Value> {
        let response = req.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if status.is_success() {
            return Ok(serde_json::from_slice(&bytes)?);
        }

        let body: Value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        match body.get("error") {
            Some(error) => {
                let code = error
                    .get("code")
                    .and_then(|v| v.as_str())
                    .unwrap_or("UNKNOWN");
                let message = error
                    .get("message")
                    .and_then(|v| v.as_str())
                    .unwrap_or("Unknown error");
                Err(ClientError::api_error(code, message))
            }
            None => Err(ClientError::api_error(
                status.as_str(),
                String::from_utf8_lossy(&bytes).trim().to_string(),
            )),
        }
    }

    // =========================================================================
    // Directory Operations
    // =========================================================================

    pub async fn create_login(
        &self,
        login_name: &str,
        real_name: Option<&str>,
        password: Option<&str>,
    ) -> CliClientResult<Value> {
        #[derive(Serialize)]
        struct CreateRequest<'a> {
            login_name: &'a str,
            #[serde(skip_serializing_if = "Option::is_none")]
            real_name: Option<&'a str>,
            #[serde(skip_serializing_if = "Option::is_none")]
            password: Option<&'a str>,
        }

        let body = CreateRequest {
            login_name,
            real_name,
            password,
        };
        let req = self
            .request(Method::POST, &["api", "v1", "logins"])?
            .json(&body);
        self.execute(req).await
    }

    pub async fn lookup(&self, login_name: &str) -> CliClientResult<Value> {
        let req = self.request(Method::GET, &["api", "v1", "logins", login_name])?;
        self.execute(req).await
    }

    pub async fn reverse_lookup(&self, id: &str) -> CliClientResult<Value> {
        let req = self.request(Method::GET, &["api", "v1", "ids", id])?;
        self.execute(req).await
    }

    pub async fn modify(
        &self,
        old_name: &str,
        new_name: &str,
        password: Option<&str>,
    ) -> CliClientResult<Value> {
        #[derive(Serialize)]
        struct RenameRequest<'a> {
            new_login_name: &'a str,
            #[serde(skip_serializing_if = "Option::is_none")]
            password: Option<&'a str>,
        }

        let body = RenameRequest {
            new_login_name: new_name,
            password,
        };
        let req = self
            .request(Method::PUT, &["api", "v1", "logins", old_name])?
            .json(&body);
        self.execute(req).await
    }

    pub async fn delete(
        &self,
        login_name: &str,
        password: Option<&str>,
    ) -> CliClientResult<Value> {
        #[derive(Serialize)]
        struct DeleteRequest<'a> {
            #[serde(skip_serializing_if = "Option::is_none")]
            password: Option<&'a str>,
        }

        let req = self
            .request(Method::DELETE, &["api", "v1", "logins", login_name])?
            .json(&DeleteRequest { password });
        self.execute(req).await
    }

    /// `kind` is sent as given; the server accepts users, ids, uuids and all
    pub async fn get_info(&self, kind: &str) -> CliClientResult<Value> {
        let req = self.request(Method::GET, &["api", "v1", "info", kind])?;
        self.execute(req).await
    }
}
