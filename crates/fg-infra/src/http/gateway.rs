//! HTTP registration gateway.
//!
//! Adapter for the registration backend's wire contract. Transport,
//! timeouts, and response decoding all live here; the session only ever
//! sees [`GatewayError`] values.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use fg_core::ports::{GatewayError, OtpRequestAck, RegistrationGatewayPort};
use fg_core::registration::{RegisteredAccount, RegistrationDraft};

use crate::settings::GatewaySettings;

pub struct HttpRegistrationGateway {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Serialize)]
struct SendOtpRequest<'a> {
    email: &'a str,
    first_name: &'a str,
}

#[derive(Debug, Deserialize)]
struct SendOtpResponse {
    #[serde(default)]
    #[allow(dead_code)]
    success: bool,
    #[serde(default)]
    message: String,
}

#[derive(Debug, Serialize)]
struct VerifyRegisterRequest<'a> {
    first_name: &'a str,
    last_name: &'a str,
    email: &'a str,
    password: &'a str,
    /// Base64 payload without a data-URL prefix.
    image: &'a str,
    otp: &'a str,
}

#[derive(Debug, Deserialize)]
struct VerifyRegisterError {
    #[serde(default)]
    error: String,
}

impl HttpRegistrationGateway {
    pub fn new(settings: &GatewaySettings) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(settings.timeout())
            .build()?;
        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}

fn network_error(error: reqwest::Error) -> GatewayError {
    GatewayError::Network {
        message: error.to_string(),
    }
}

/// The backend reports a failed verification as free text; anything naming
/// the code or OTP is treated as a mismatch, everything else as a business
/// rejection.
fn classify_verify_error(error_text: &str) -> GatewayError {
    let lowered = error_text.to_lowercase();
    if lowered.contains("otp") || lowered.contains("code") {
        GatewayError::InvalidOtp
    } else {
        GatewayError::ServerRejection {
            message: error_text.to_string(),
        }
    }
}

#[async_trait]
impl RegistrationGatewayPort for HttpRegistrationGateway {
    async fn request_otp(
        &self,
        email: &str,
        first_name: &str,
    ) -> Result<OtpRequestAck, GatewayError> {
        let response = self
            .client
            .post(self.endpoint("send_otp"))
            .json(&SendOtpRequest { email, first_name })
            .send()
            .await
            .map_err(network_error)?;

        let status = response.status();
        let body: SendOtpResponse = response.json().await.map_err(network_error)?;
        if status.is_success() {
            debug!(%email, "otp request accepted");
            Ok(OtpRequestAck {
                message: body.message,
            })
        } else {
            debug!(%email, status = %status, "otp request rejected");
            Err(GatewayError::ServerRejection {
                message: body.message,
            })
        }
    }

    async fn verify_and_register(
        &self,
        draft: &RegistrationDraft,
        otp: &str,
    ) -> Result<RegisteredAccount, GatewayError> {
        let request = VerifyRegisterRequest {
            first_name: &draft.first_name,
            last_name: &draft.last_name,
            email: &draft.email,
            password: draft.password.expose(),
            image: draft.image_payload(),
            otp,
        };
        let response = self
            .client
            .post(self.endpoint("verify_Register"))
            .json(&request)
            .send()
            .await
            .map_err(network_error)?;

        let status = response.status();
        if status.is_success() {
            debug!(email = %draft.email, "registration committed");
            Ok(RegisteredAccount::new(draft.email.clone()))
        } else {
            let body: VerifyRegisterError = response.json().await.map_err(network_error)?;
            debug!(email = %draft.email, status = %status, error = %body.error, "registration rejected");
            Err(classify_verify_error(&body.error))
        }
    }
}
