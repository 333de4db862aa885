use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use yansi::Paint;

use crate::error::AppError;

static VERBOSE: AtomicBool = AtomicBool::new(false);

pub fn set_verbose(verbose: bool) {
    VERBOSE.store(verbose, Ordering::Relaxed);
}

fn log_output(msg: String) {
    if VERBOSE.load(Ordering::Relaxed) {
        println!("{}", msg);
    }
}

/// Credential-authenticated client for the provider's v2 REST API.
#[derive(Clone, Debug)]
pub struct DoClient {
    http: reqwest::Client,
    base_url: String,
    per_page: u32,
}

impl DoClient {
    pub fn new(base_url: &str, api_token: &str) -> Result<Self, AppError> {
        let mut headers = HeaderMap::new();
        let bearer = HeaderValue::from_str(&format!("Bearer {}", api_token.trim()))
            .map_err(|_| AppError::Validation("API token contains invalid characters".into()))?;
        headers.insert(AUTHORIZATION, bearer);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .user_agent(format!("gumdrop/{}", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .connect_timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| AppError::Network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: crate::config::sanitize_base_url(base_url),
            per_page: crate::config::DEFAULT_PER_PAGE,
        })
    }

    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page.max(1);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Query parameters for one page of a listing.
    pub fn page_params(&self, page: u32) -> Vec<(String, String)> {
        vec![
            ("page".to_string(), page.to_string()),
            ("per_page".to_string(), self.per_page.to_string()),
        ]
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: Vec<(String, String)>,
    ) -> Result<T, AppError> {
        self.send(Method::GET, endpoint, None, params).await
    }

    pub async fn post<T: DeserializeOwned>(&self, endpoint: &str, body: Value) -> Result<T, AppError> {
        self.send(Method::POST, endpoint, Some(body), Vec::new()).await
    }

    async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<Value>,
        params: Vec<(String, String)>,
    ) -> Result<T, AppError> {
        let url = format!("{}{}", self.base_url, endpoint);
        self.log_request(&method, &url, &params, body.as_ref());
        tracing::debug!(%method, %url, "provider request");

        let mut req = self.http.request(method, &url);
        if !params.is_empty() {
            req = req.query(&params);
        }
        if let Some(ref b) = body {
            req = req.json(b);
        }

        let resp = req.send().await?;
        let status = resp.status();
        let text = resp.text().await?;
        log_output(format!("Response:\n{}", Paint::new(format!("HTTP {}: {}", status, text)).rgb(100, 100, 100)));

        if !status.is_success() {
            return Err(AppError::Api {
                status: status.as_u16(),
                message: error_message(&text),
            });
        }
        serde_json::from_str(&text).map_err(|e| AppError::Decode(e.to_string()))
    }

    fn log_request(&self, method: &Method, url: &str, params: &[(String, String)], body: Option<&Value>) {
        if !VERBOSE.load(Ordering::Relaxed) {
            return;
        }
        let mut url_for_log = url.to_string();
        if !params.is_empty() {
            let query_string = params
                .iter()
                .map(|(k, v)| format!("{}={}", k, v))
                .collect::<Vec<String>>()
                .join("&");
            url_for_log = format!("{}?{}", url_for_log, query_string);
        }

        let mut parts = Vec::new();
        parts.push(Paint::new("curl").fg(yansi::Color::Green).bold().to_string());
        parts.push(format!("-X {}", Paint::new(method.as_str()).fg(yansi::Color::Yellow).bold()));
        parts.push(format!("'{}'", Paint::new(&url_for_log).fg(yansi::Color::Cyan)));
        parts.push(format!(
            "{} {}",
            Paint::new("-H").fg(yansi::Color::Magenta),
            Paint::new("'Authorization: Bearer ****'").fg(yansi::Color::Magenta)
        ));
        if let Some(d) = body {
            let json_str = serde_json::to_string(d).unwrap_or_default();
            let escaped_json = json_str.replace('\'', "'\\''");
            parts.push(format!(
                "{} {}",
                Paint::new("-d").fg(yansi::Color::Blue),
                Paint::new(format!("'{}'", escaped_json)).fg(yansi::Color::White)
            ));
        }
        log_output(format!("Request:\n{}", parts.join(" ")));
    }
}

/// Pull the human-readable message out of an error body such as
/// `{"id": "unauthorized", "message": "Unable to authenticate you"}`.
fn error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_string))
        .unwrap_or_else(|| {
            let trimmed = body.trim();
            if trimmed.is_empty() {
                "empty response".to_string()
            } else {
                trimmed.to_string()
            }
        })
}
