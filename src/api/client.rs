use reqwest::StatusCode;

use super::address::DeviceAddress;
use crate::error::AppError;
use crate::models::light_state::LightState;

/// Reads and writes the state of a single light.
#[allow(async_fn_in_trait)]
pub trait LightTransport {
    async fn fetch_state(&self, address: &DeviceAddress) -> Result<LightState, AppError>;

    async fn push_state(&self, address: &DeviceAddress, state: &LightState)
        -> Result<(), AppError>;
}

/// HTTP client for the Key Light control API.
pub struct KeyLightClient {
    client: reqwest::Client,
    verbose: bool,
}

impl KeyLightClient {
    pub fn new(verbose: bool) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("keylightctl/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client, verbose })
    }
}

impl LightTransport for KeyLightClient {
    async fn fetch_state(&self, address: &DeviceAddress) -> Result<LightState, AppError> {
        let url = address.lights_url();

        if self.verbose {
            eprintln!("GET {}", url);
        }

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::transport(address, format!("fetching light state: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AppError::transport(address, format!("reading light state: {}", e)))?;

        if self.verbose {
            eprintln!("Response: {} {}", status, body);
        }

        if !status.is_success() {
            return Err(AppError::transport(
                address,
                format!("fetching light state: {}", status),
            ));
        }

        serde_json::from_str(&body)
            .map_err(|e| AppError::transport(address, format!("decoding light state: {}", e)))
    }

    async fn push_state(
        &self,
        address: &DeviceAddress,
        state: &LightState,
    ) -> Result<(), AppError> {
        let url = address.lights_url();

        if self.verbose {
            eprintln!("PUT {}", url);
            eprintln!("Body: {}", serde_json::to_string(state)?);
        }

        let response = self
            .client
            .put(&url)
            .json(state)
            .send()
            .await
            .map_err(|e| AppError::transport(address, format!("updating light state: {}", e)))?;

        let status = response.status();

        if self.verbose {
            eprintln!("Response: {}", status);
        }

        // Devices answer a successful update with exactly 200.
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::transport(
                address,
                format!("updating light state: {} {}", status, body)
                    .trim_end()
                    .to_string(),
            ));
        }

        Ok(())
    }
}
