// src/notify.rs

use crate::config::Config;
use crate::request::NotificationRequest;

use anyhow::{Context, Result};
use reqwest::header::{HeaderValue, CONTENT_TYPE};
use std::future::Future;

/// Outbound HTTP seam.
///
/// Returns the response status code; callers only log it.
pub trait Transport {
    fn post_form(&self, url: &str, body: String) -> impl Future<Output = Result<u16>>;
}

/// `reqwest` backed transport with the client's default timeouts.
#[derive(Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Transport for HttpTransport {
    async fn post_form(&self, url: &str, body: String) -> Result<u16> {
        let resp = self
            .client
            .post(url)
            .header(
                CONTENT_TYPE,
                HeaderValue::from_static("application/x-www-form-urlencoded"),
            )
            .body(body)
            .send()
            .await
            .with_context(|| format!("Failed to POST notification to {}", url))?;

        Ok(resp.status().as_u16())
    }
}

/// Result of the single POST. Never used for control flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    Posted { status: u16 },
    Failed { reason: String },
}

/// Build `key=..&phone=..&message=..`.
///
/// Values are concatenated as-is: an `&` or `=` inside the message is sent
/// unescaped.
pub fn form_body(cfg: &Config, req: &NotificationRequest) -> String {
    let mut body = String::with_capacity(
        "key=&phone=&message=".len() + cfg.key.len() + req.recipient().len() + req.message().len(),
    );
    body.push_str("key=");
    body.push_str(&cfg.key);
    body.push_str("&phone=");
    body.push_str(req.recipient());
    body.push_str("&message=");
    body.push_str(req.message());
    body
}

/// POST one notification. Exactly one attempt, no retry.
pub async fn send<T: Transport>(transport: &T, cfg: &Config, req: &NotificationRequest) -> Delivery {
    let body = form_body(cfg, req);

    tracing::debug!(
        config = %cfg.path.display(),
        url = %cfg.url,
        recipient = req.recipient(),
        bytes = body.len(),
        "posting notification"
    );

    match transport.post_form(&cfg.url, body).await {
        Ok(status) => {
            tracing::info!(status, url = %cfg.url, "notification posted");
            Delivery::Posted { status }
        }
        Err(e) => {
            let reason = format!("{:#}", e);
            tracing::warn!(url = %cfg.url, error = %reason, "notification not delivered");
            Delivery::Failed { reason }
        }
    }
}


#[cfg(test)]
mod tests {
    use super::testing::RecordingTransport;
    use super::*;
    use std::path::Path;

    fn request(recipient: &str, message: &str) -> NotificationRequest {
        NotificationRequest::new(recipient.into(), message.into()).unwrap()
    }

    #[test]
    fn default_config_body() {
        let cfg = Config::defaults(Path::new(".vmrc"));
        assert_eq!(
            form_body(&cfg, &request("5551234567", "hello")),
            "key=textbelt&phone=5551234567&message=hello"
        );
    }

    #[test]
    fn body_is_not_percent_encoded() {
        let cfg = Config::defaults(Path::new(".vmrc"));
        assert_eq!(
            form_body(&cfg, &request("555", "a&b=c d")),
            "key=textbelt&phone=555&message=a&b=c d"
        );
    }

    #[tokio::test]
    async fn posts_once_to_configured_url() {
        let transport = RecordingTransport::default();
        let cfg = Config::defaults(Path::new(".vmrc"));

        let delivery = send(&transport, &cfg, &request("5551234567", "hello")).await;

        assert_eq!(delivery, Delivery::Posted { status: 200 });
        let calls = transport.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "https://textbelt.com/text");
        assert_eq!(calls[0].1, "key=textbelt&phone=5551234567&message=hello");
    }

    #[tokio::test]
    async fn transport_error_is_reported_not_retried() {
        let transport = RecordingTransport::failing();
        let cfg = Config::defaults(Path::new(".vmrc"));

        let delivery = send(&transport, &cfg, &request("5551234567", "hello")).await;

        assert!(matches!(delivery, Delivery::Failed { .. }));
        assert_eq!(transport.calls.borrow().len(), 1);
    }
}
