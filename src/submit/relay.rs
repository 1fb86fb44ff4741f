use async_trait::async_trait;
use gloo_net::http::Request;
use serde::Serialize;
use serde_json::Value;

const SEND_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("relay request failed: {0}")]
    Transport(#[from] gloo_net::Error),
    #[error("relay rejected the submission: {status} {body}")]
    Rejected { status: u16, body: String },
}

/// Outbound delivery channel for a serialized form. One attempt per
/// submission, no retries.
#[async_trait(?Send)]
pub trait Relay {
    async fn send(&self, template_id: &str, params: &Value) -> Result<(), RelayError>;
}

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a Value,
}

/// EmailJS REST client. The public key doubles as the account identity,
/// so there is no secret to hold on the client side.
pub struct EmailJs {
    service_id: &'static str,
    public_key: &'static str,
}

impl EmailJs {
    pub fn new(service_id: &'static str, public_key: &'static str) -> Self {
        Self {
            service_id,
            public_key,
        }
    }
}

#[async_trait(?Send)]
impl Relay for EmailJs {
    async fn send(&self, template_id: &str, params: &Value) -> Result<(), RelayError> {
        let response = Request::post(SEND_ENDPOINT)
            .json(&SendRequest {
                service_id: self.service_id,
                template_id,
                user_id: self.public_key,
                template_params: params,
            })?
            .send()
            .await?;

        if response.ok() {
            Ok(())
        } else {
            Err(RelayError::Rejected {
                status: response.status(),
                body: response.text().await.unwrap_or_default(),
            })
        }
    }
}
