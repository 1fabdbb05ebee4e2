use std::time::Duration;

use async_trait::async_trait;
use reqwest::{RequestBuilder, Response};
use tracing::debug;

use crate::error::ClientError;
use crate::models::{
    Appointment, AppointmentUpdateRequest, AppointmentsResponse, CenterResponse, DiagnosticCenter,
    ErrorResponse, StatusUpdateRequest,
};

/// The REST operations the pages consume. Protected calls take the bearer
/// token explicitly; the caller decides where it comes from.
#[async_trait]
pub trait BookingApi: Send + Sync {
    async fn get_center(&self, center_id: &str) -> Result<DiagnosticCenter, ClientError>;

    async fn center_appointments(
        &self,
        center_id: &str,
        token: &str,
    ) -> Result<Vec<Appointment>, ClientError>;

    async fn update_status(
        &self,
        appointment_id: &str,
        body: &StatusUpdateRequest,
        token: &str,
    ) -> Result<(), ClientError>;

    async fn my_appointments(&self, token: &str) -> Result<Vec<Appointment>, ClientError>;

    async fn update_appointment(
        &self,
        appointment_id: &str,
        body: &AppointmentUpdateRequest,
        token: &str,
    ) -> Result<(), ClientError>;

    async fn delete_appointment(&self, appointment_id: &str, token: &str)
    -> Result<(), ClientError>;
}

#[derive(Clone, Debug)]
pub struct HttpBookingApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBookingApi {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, base_url))
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send(&self, path: &str, request: RequestBuilder) -> Result<Response, ClientError> {
        debug!(path, "request");
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        // Backend errors carry { "error": { "code", "message" } }; anything
        // else is reported by status alone.
        let message = response
            .json::<ErrorResponse>()
            .await
            .ok()
            .map(|e| e.error.message);
        Err(ClientError::Status {
            path: path.to_string(),
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl BookingApi for HttpBookingApi {
    async fn get_center(&self, center_id: &str) -> Result<DiagnosticCenter, ClientError> {
        let path = format!("/api/diagnostic-centers/{center_id}");
        let response = self.send(&path, self.client.get(self.url(&path))).await?;
        let body: CenterResponse = response.json().await?;
        Ok(body.center)
    }

    async fn center_appointments(
        &self,
        center_id: &str,
        token: &str,
    ) -> Result<Vec<Appointment>, ClientError> {
        let path = format!("/api/appointments/center/{center_id}");
        let request = self.client.get(self.url(&path)).bearer_auth(token);
        let body: AppointmentsResponse = self.send(&path, request).await?.json().await?;
        Ok(body.appointments)
    }

    async fn update_status(
        &self,
        appointment_id: &str,
        body: &StatusUpdateRequest,
        token: &str,
    ) -> Result<(), ClientError> {
        let path = format!("/api/appointments/{appointment_id}/status");
        let request = self.client.put(self.url(&path)).bearer_auth(token).json(body);
        self.send(&path, request).await?;
        Ok(())
    }

    async fn my_appointments(&self, token: &str) -> Result<Vec<Appointment>, ClientError> {
        let path = "/api/appointments/my-appointments";
        let request = self.client.get(self.url(path)).bearer_auth(token);
        let body: AppointmentsResponse = self.send(path, request).await?.json().await?;
        Ok(body.appointments)
    }

    async fn update_appointment(
        &self,
        appointment_id: &str,
        body: &AppointmentUpdateRequest,
        token: &str,
    ) -> Result<(), ClientError> {
        let path = format!("/api/appointments/{appointment_id}");
        let request = self.client.put(self.url(&path)).bearer_auth(token).json(body);
        self.send(&path, request).await?;
        Ok(())
    }

    async fn delete_appointment(
        &self,
        appointment_id: &str,
        token: &str,
    ) -> Result<(), ClientError> {
        let path = format!("/api/appointments/{appointment_id}");
        let request = self.client.delete(self.url(&path)).bearer_auth(token);
        self.send(&path, request).await?;
        Ok(())
    }
}
