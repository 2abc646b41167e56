use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use super::{ApiErrorBody, BackendError};
use crate::config::BackendConfig;
use crate::workflows::employee::{Employee, EmployeeRepository, NewEmployee};
use crate::workflows::vendor::{NewVendor, Vendor, VendorId, VendorNotifier, VendorRepository};

const EMPLOYEES: &str = "/employees";
const VENDORS: &str = "/vendors";
const SEND_EMAIL: &str = "/vendors/send-email";
const SENT_EMAILS: &str = "/vendors/sent-emails";

/// `reqwest` client for the dashboard REST API. Cheap to clone.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(config: &BackendConfig) -> Result<Self, BackendError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(transport)?;
        Ok(Self::with_client(client, &config.base_url))
    }

    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, BackendError> {
        let response = self
            .client
            .get(self.url(path))
            .send()
            .await
            .map_err(transport)?;
        let response = check_status(response).await?;
        response
            .json::<T>()
            .await
            .map_err(|err| BackendError::Decode(err.to_string()))
    }

    async fn post_json<B>(&self, path: &str, body: &B) -> Result<Response, BackendError>
    where
        B: Serialize + ?Sized + Sync,
    {
        let response = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(transport)?;
        check_status(response).await
    }
}

fn transport(err: reqwest::Error) -> BackendError {
    BackendError::Transport(err.to_string())
}

/// Turn any non-2xx into [`BackendError::Rejected`], keeping the body's `message`.
async fn check_status(response: Response) -> Result<Response, BackendError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ApiErrorBody>(&body)
        .ok()
        .and_then(|body| body.message);
    Err(BackendError::Rejected {
        status: status.as_u16(),
        message,
    })
}

impl EmployeeRepository for HttpBackend {
    async fn list(&self) -> Result<Vec<Employee>, BackendError> {
        self.get_json(EMPLOYEES).await
    }

    async fn create(&self, employee: &NewEmployee) -> Result<(), BackendError> {
        let response = self.post_json(EMPLOYEES, employee).await?;
        if let Ok(created) = response.json::<Employee>().await {
            debug!(id = %created.id, "employee created");
        }
        Ok(())
    }
}

impl VendorRepository for HttpBackend {
    async fn list(&self) -> Result<Vec<Vendor>, BackendError> {
        self.get_json(VENDORS).await
    }

    async fn create(&self, vendor: &NewVendor) -> Result<(), BackendError> {
        let response = self.post_json(VENDORS, vendor).await?;
        if let Ok(created) = response.json::<Vendor>().await {
            debug!(id = %created.id, "vendor created");
        }
        Ok(())
    }
}

impl VendorNotifier for HttpBackend {
    async fn send_email(&self, vendor_ids: &[VendorId]) -> Result<(), BackendError> {
        self.post_json(SEND_EMAIL, vendor_ids).await?;
        Ok(())
    }

    async fn sent_emails(&self) -> Result<Vec<String>, BackendError> {
        self.get_json(SENT_EMAILS).await
    }
}
