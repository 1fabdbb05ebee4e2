//! Fake API and fixtures shared by the view tests.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use tokio::sync::Notify;

use crate::api::BookingApi;
use crate::error::ClientError;
use crate::models::{
    Address, Appointment, AppointmentUpdateRequest, CenterRef, DiagnosticCenter, OperatingHours,
    PatientRef, SessionUser, StatusUpdateRequest, TestRef, WeeklyHours,
};
use crate::navigation::History;
use crate::session::SessionContext;
use crate::status::AppointmentStatus;
use crate::toast::ToastLog;
use crate::views::ViewContext;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    GetCenter(String),
    CenterAppointments { center_id: String, token: String },
    UpdateStatus { appointment_id: String, body: StatusUpdateRequest, token: String },
    MyAppointments { token: String },
    UpdateAppointment { appointment_id: String, body: AppointmentUpdateRequest, token: String },
    DeleteAppointment { appointment_id: String, token: String },
}

#[derive(Default)]
pub struct FakeApi {
    pub center: Mutex<Option<DiagnosticCenter>>,
    pub appointments: Mutex<Vec<Appointment>>,
    pub fail_reads: AtomicBool,
    pub fail_writes: AtomicBool,
    /// When set, `get_center` waits for a notification before answering.
    pub hold_center: Mutex<Option<Arc<Notify>>>,
    /// Same for `my_appointments`.
    pub hold_appointments: Mutex<Option<Arc<Notify>>>,
    calls: Mutex<Vec<Call>>,
}

fn lock<T>(m: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    m.lock().unwrap_or_else(PoisonError::into_inner)
}

fn server_error(path: &str) -> ClientError {
    ClientError::Status {
        path: path.to_string(),
        status: 500,
        message: None,
    }
}

impl FakeApi {
    pub fn new(center: Option<DiagnosticCenter>, appointments: Vec<Appointment>) -> Self {
        Self {
            center: Mutex::new(center),
            appointments: Mutex::new(appointments),
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        lock(&self.calls).clone()
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    fn record(&self, call: Call) {
        lock(&self.calls).push(call);
    }

    fn read_guard(&self, path: &str) -> Result<(), ClientError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            Err(server_error(path))
        } else {
            Ok(())
        }
    }

    fn write_guard(&self, path: &str) -> Result<(), ClientError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            Err(server_error(path))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl BookingApi for FakeApi {
    async fn get_center(&self, center_id: &str) -> Result<DiagnosticCenter, ClientError> {
        self.record(Call::GetCenter(center_id.to_string()));
        let hold = lock(&self.hold_center).clone();
        if let Some(gate) = hold {
            gate.notified().await;
        }
        self.read_guard("/api/diagnostic-centers")?;
        lock(&self.center).clone().ok_or(ClientError::Status {
            path: format!("/api/diagnostic-centers/{center_id}"),
            status: 404,
            message: Some("center not found".into()),
        })
    }

    async fn center_appointments(
        &self,
        center_id: &str,
        token: &str,
    ) -> Result<Vec<Appointment>, ClientError> {
        self.record(Call::CenterAppointments {
            center_id: center_id.to_string(),
            token: token.to_string(),
        });
        self.read_guard("/api/appointments/center")?;
        Ok(lock(&self.appointments).clone())
    }

    async fn update_status(
        &self,
        appointment_id: &str,
        body: &StatusUpdateRequest,
        token: &str,
    ) -> Result<(), ClientError> {
        self.record(Call::UpdateStatus {
            appointment_id: appointment_id.to_string(),
            body: body.clone(),
            token: token.to_string(),
        });
        self.write_guard("/api/appointments/status")?;
        if let Some(a) = lock(&self.appointments)
            .iter_mut()
            .find(|a| a.id == appointment_id)
        {
            a.status = body.status;
            if body.notes.is_some() {
                a.notes = body.notes.clone();
            }
            a.cancellation_reason = body.cancellation_reason.clone();
        }
        Ok(())
    }

    async fn my_appointments(&self, token: &str) -> Result<Vec<Appointment>, ClientError> {
        self.record(Call::MyAppointments {
            token: token.to_string(),
        });
        let hold = lock(&self.hold_appointments).clone();
        if let Some(gate) = hold {
            gate.notified().await;
        }
        self.read_guard("/api/appointments/my-appointments")?;
        Ok(lock(&self.appointments).clone())
    }

    async fn update_appointment(
        &self,
        appointment_id: &str,
        body: &AppointmentUpdateRequest,
        token: &str,
    ) -> Result<(), ClientError> {
        self.record(Call::UpdateAppointment {
            appointment_id: appointment_id.to_string(),
            body: body.clone(),
            token: token.to_string(),
        });
        self.write_guard("/api/appointments")?;
        if let Some(a) = lock(&self.appointments)
            .iter_mut()
            .find(|a| a.id == appointment_id)
        {
            a.status = body.status;
            a.appointment_date = format!("{}T00:00:00.000Z", body.appointment_date);
        }
        Ok(())
    }

    async fn delete_appointment(
        &self,
        appointment_id: &str,
        token: &str,
    ) -> Result<(), ClientError> {
        self.record(Call::DeleteAppointment {
            appointment_id: appointment_id.to_string(),
            token: token.to_string(),
        });
        self.write_guard("/api/appointments")?;
        lock(&self.appointments).retain(|a| a.id != appointment_id);
        Ok(())
    }
}

/// Fake API plus the recorders a test inspects.
pub struct Harness {
    pub api: Arc<FakeApi>,
    pub toasts: Arc<ToastLog>,
    pub history: Arc<History>,
    pub session: SessionContext,
}

impl Harness {
    pub fn new(api: FakeApi) -> Self {
        Self {
            api: Arc::new(api),
            toasts: Arc::new(ToastLog::new()),
            history: Arc::new(History::new()),
            session: SessionContext::in_memory(),
        }
    }

    pub fn signed_in(self) -> Self {
        self.session.establish("tok-test", &patient()).unwrap();
        self
    }

    pub fn context(&self) -> ViewContext {
        ViewContext {
            api: self.api.clone(),
            session: self.session.clone(),
            toaster: self.toasts.clone(),
            navigator: self.history.clone(),
        }
    }
}

pub fn patient() -> SessionUser {
    SessionUser {
        id: "u-ravi".into(),
        name: "Ravi Kumar".into(),
        email: "ravi@example.test".into(),
        role: "patient".into(),
    }
}

pub fn center() -> DiagnosticCenter {
    DiagnosticCenter {
        id: "c1".into(),
        name: "Sunrise Diagnostics".into(),
        description: Some("Pathology and imaging".into()),
        address: Address {
            street: "14 MG Road".into(),
            city: "Pune".into(),
            state: "Maharashtra".into(),
            zip_code: "411001".into(),
            country: "India".into(),
        },
        phone: "+91 20 4000 1200".into(),
        email: "care@sunrise.example".into(),
        operating_hours: WeeklyHours {
            monday: OperatingHours::new("08:00", "20:00"),
            ..Default::default()
        },
        services: Some(vec!["MRI".into(), "X-Ray".into()]),
        is_active: true,
        rating: Some(4.6),
        total_reviews: Some(128),
        admin: None,
    }
}

pub fn appointment(id: &str, status: AppointmentStatus) -> Appointment {
    Appointment {
        id: id.into(),
        patient: Some(PatientRef {
            id: "u-ravi".into(),
            name: "Ravi Kumar".into(),
            email: "ravi@example.test".into(),
            phone: "+91 90000 00000".into(),
        }),
        test: Some(TestRef {
            id: "t-cbc".into(),
            name: "Complete Blood Count".into(),
            category: Some("Pathology".into()),
            price: Some(350.0),
            duration: Some(15),
        }),
        center: Some(CenterRef {
            id: "c1".into(),
            name: "Sunrise Diagnostics".into(),
            address: None,
        }),
        appointment_date: "2031-01-05T00:00:00.000Z".into(),
        appointment_time: Some("09:30".into()),
        status,
        total_amount: Some(350.0),
        notes: Some("Fasting".into()),
        cancellation_reason: None,
    }
}
