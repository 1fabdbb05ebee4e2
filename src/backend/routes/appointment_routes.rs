// src/backend/routes/appointment_routes.rs

use axum::{
    extract::{Path, State},
    routing::{get, put},
    Json, Router,
};
use chrono::NaiveDate;
use serde::Serialize;

use crate::{
    backend::{error::ApiError, middleware::auth_context::AuthContext, state::AppState},
    models::{
        AppointmentMutationResponse, AppointmentUpdateRequest, AppointmentsResponse,
        StatusUpdateRequest,
    },
    status::AppointmentStatus,
};

/// Recorded when a patient cancels from their dashboard without a reason.
pub const PATIENT_CANCELLATION_REASON: &str = "Cancelled by patient";

fn ensure_manage(auth: &AuthContext) -> Result<(), ApiError> {
    if auth.is_admin() {
        Ok(())
    } else {
        Err(ApiError::Forbidden(
            "FORBIDDEN",
            "Only center administrators can manage center appointments".into(),
        ))
    }
}

fn ensure_known(status: AppointmentStatus) -> Result<(), ApiError> {
    if status == AppointmentStatus::Unknown {
        Err(ApiError::validation("invalid status"))
    } else {
        Ok(())
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/appointments/my-appointments", get(my_appointments))
        .route("/appointments/center/{center_id}", get(center_appointments))
        .route("/appointments/{appointment_id}/status", put(update_status))
        .route(
            "/appointments/{appointment_id}",
            put(update_appointment).delete(delete_appointment),
        )
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/* ============================================================
   GET /appointments/center/{center_id}
   ============================================================ */

pub async fn center_appointments(
    State(state): State<AppState>,
    auth: AuthContext,
    Path(center_id): Path<String>,
) -> Result<Json<AppointmentsResponse>, ApiError> {
    ensure_manage(&auth)?;

    let store = state.store.read().await;
    if !store.centers.contains_key(&center_id) {
        return Err(ApiError::NotFound("NOT_FOUND", "center not found".into()));
    }

    let appointments = store
        .appointments
        .iter()
        .filter(|a| a.center_id == center_id)
        .map(|a| a.record.clone())
        .collect();

    Ok(Json(AppointmentsResponse { appointments }))
}

/* ============================================================
   GET /appointments/my-appointments
   ============================================================ */

pub async fn my_appointments(
    State(state): State<AppState>,
    auth: AuthContext,
) -> Result<Json<AppointmentsResponse>, ApiError> {
    let store = state.store.read().await;
    let appointments = store
        .appointments
        .iter()
        .filter(|a| a.patient_id == auth.user_id)
        .map(|a| a.record.clone())
        .collect();

    Ok(Json(AppointmentsResponse { appointments }))
}

/* ============================================================
   PUT /appointments/{appointment_id}/status
   ============================================================ */

pub async fn update_status(
    State(state): State<AppState>,
    auth: AuthContext,
    Path(appointment_id): Path<String>,
    Json(req): Json<StatusUpdateRequest>,
) -> Result<Json<AppointmentMutationResponse>, ApiError> {
    ensure_manage(&auth)?;
    ensure_known(req.status)?;

    let reason = non_blank(req.cancellation_reason);
    if req.status.requires_reason() && reason.is_none() {
        return Err(ApiError::validation(
            "cancellationReason is required when cancelling",
        ));
    }

    let mut store = state.store.write().await;
    let stored = store
        .appointment_mut(&appointment_id)
        .ok_or_else(ApiError::appointment_not_found)?;

    stored.record.status = req.status;
    if let Some(notes) = req.notes {
        stored.record.notes = non_blank(Some(notes));
    }
    stored.record.cancellation_reason = if req.status.requires_reason() {
        reason
    } else {
        None
    };

    tracing::info!(%appointment_id, status = %req.status, by = %auth.user_id, "appointment status updated");

    Ok(Json(AppointmentMutationResponse {
        message: "Appointment status updated".into(),
        appointment: Some(stored.record.clone()),
    }))
}

/* ============================================================
   PUT /appointments/{appointment_id}
   ============================================================ */

pub async fn update_appointment(
    State(state): State<AppState>,
    auth: AuthContext,
    Path(appointment_id): Path<String>,
    Json(req): Json<AppointmentUpdateRequest>,
) -> Result<Json<AppointmentMutationResponse>, ApiError> {
    ensure_known(req.status)?;
    let date = NaiveDate::parse_from_str(req.appointment_date.trim(), "%Y-%m-%d")
        .map_err(|_| ApiError::validation("appointmentDate must be YYYY-MM-DD"))?;

    let mut store = state.store.write().await;
    let stored = store
        .appointment_mut(&appointment_id)
        .ok_or_else(ApiError::appointment_not_found)?;

    if stored.patient_id != auth.user_id {
        return Err(ApiError::Forbidden(
            "FORBIDDEN",
            "You can only change your own appointments".into(),
        ));
    }
    if stored.record.status == AppointmentStatus::Completed {
        return Err(ApiError::Conflict(
            "APPOINTMENT_LOCKED",
            "Completed appointments cannot be changed".into(),
        ));
    }

    stored.record.status = req.status;
    stored.record.appointment_date = format!("{}T00:00:00.000Z", date.format("%Y-%m-%d"));
    if req.status.requires_reason() {
        if stored.record.cancellation_reason.is_none() {
            stored.record.cancellation_reason = Some(PATIENT_CANCELLATION_REASON.into());
        }
    } else {
        stored.record.cancellation_reason = None;
    }

    tracing::info!(%appointment_id, status = %req.status, %date, "appointment updated");

    Ok(Json(AppointmentMutationResponse {
        message: "Appointment updated".into(),
        appointment: Some(stored.record.clone()),
    }))
}

/* ============================================================
   DELETE /appointments/{appointment_id}
   ============================================================ */

pub async fn delete_appointment(
    State(state): State<AppState>,
    auth: AuthContext,
    Path(appointment_id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let mut store = state.store.write().await;
    let idx = store
        .appointments
        .iter()
        .position(|a| a.record.id == appointment_id)
        .ok_or_else(ApiError::appointment_not_found)?;

    if store.appointments[idx].patient_id != auth.user_id {
        return Err(ApiError::Forbidden(
            "FORBIDDEN",
            "You can only delete your own appointments".into(),
        ));
    }
    store.appointments.remove(idx);

    tracing::info!(%appointment_id, by = %auth.user_id, "appointment deleted");

    Ok(Json(MessageResponse {
        message: "Appointment deleted".into(),
    }))
}
