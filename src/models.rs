use chrono::Weekday;
use serde::{Deserialize, Deserializer, Serialize};

use crate::status::AppointmentStatus;

/* -------------------------
   Diagnostic centers
--------------------------*/

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticCenter {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub address: Address,
    pub phone: String,
    pub email: String,
    #[serde(default)]
    pub operating_hours: WeeklyHours,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub services: Option<Vec<String>>,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_reviews: Option<u32>,
    #[serde(rename = "adminId", default, skip_serializing_if = "Option::is_none")]
    pub admin: Option<ContactPerson>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(default)]
    pub street: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub zip_code: String,
    #[serde(default)]
    pub country: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactPerson {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatingHours {
    #[serde(default)]
    pub open: String,
    #[serde(default)]
    pub close: String,
}

impl OperatingHours {
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            open: open.into(),
            close: close.into(),
        }
    }

    pub fn is_closed(&self) -> bool {
        self.open.trim().is_empty() || self.close.trim().is_empty()
    }

    pub fn display(&self) -> String {
        if self.is_closed() {
            "Closed".to_string()
        } else {
            format!("{} - {}", self.open, self.close)
        }
    }
}

/// Open/close pair per weekday; days missing from the payload are closed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyHours {
    #[serde(default)]
    pub monday: OperatingHours,
    #[serde(default)]
    pub tuesday: OperatingHours,
    #[serde(default)]
    pub wednesday: OperatingHours,
    #[serde(default)]
    pub thursday: OperatingHours,
    #[serde(default)]
    pub friday: OperatingHours,
    #[serde(default)]
    pub saturday: OperatingHours,
    #[serde(default)]
    pub sunday: OperatingHours,
}

pub const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

pub fn weekday_label(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

impl WeeklyHours {
    pub fn get(&self, day: Weekday) -> &OperatingHours {
        match day {
            Weekday::Mon => &self.monday,
            Weekday::Tue => &self.tuesday,
            Weekday::Wed => &self.wednesday,
            Weekday::Thu => &self.thursday,
            Weekday::Fri => &self.friday,
            Weekday::Sat => &self.saturday,
            Weekday::Sun => &self.sunday,
        }
    }

    /// Monday through Sunday, label and display text.
    pub fn table(&self) -> Vec<(&'static str, String)> {
        WEEK.iter()
            .map(|d| (weekday_label(*d), self.get(*d).display()))
            .collect()
    }
}

/* -------------------------
   Appointments
--------------------------*/

/// An appointment as returned by either list endpoint. The center listing
/// populates patient/test details, the personal listing populates the
/// center reference, so every reference is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(
        rename = "patientId",
        default,
        deserialize_with = "populated_or_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub patient: Option<PatientRef>,
    #[serde(
        rename = "testId",
        default,
        deserialize_with = "populated_or_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub test: Option<TestRef>,
    #[serde(
        rename = "diagnosticCenterId",
        default,
        deserialize_with = "populated_or_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub center: Option<CenterRef>,
    #[serde(default)]
    pub appointment_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appointment_time: Option<String>,
    pub status: AppointmentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cancellation_reason: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PatientRef {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TestRef {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    /// Minutes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CenterRef {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
}

/// A reference the backend did not populate arrives as the bare id.
trait FromId: Default {
    fn from_id(id: String) -> Self;
}

impl FromId for PatientRef {
    fn from_id(id: String) -> Self {
        Self { id, ..Default::default() }
    }
}

impl FromId for TestRef {
    fn from_id(id: String) -> Self {
        Self { id, ..Default::default() }
    }
}

impl FromId for CenterRef {
    fn from_id(id: String) -> Self {
        Self { id, ..Default::default() }
    }
}

fn populated_or_id<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromId + Deserialize<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Reference<T> {
        Populated(T),
        Id(String),
    }

    Ok(match Option::<Reference<T>>::deserialize(deserializer)? {
        Some(Reference::Populated(record)) => Some(record),
        Some(Reference::Id(id)) => Some(T::from_id(id)),
        None => None,
    })
}

/* -------------------------
   Session
--------------------------*/

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
}

/* -------------------------
   API DTOs
--------------------------*/

#[derive(Debug, Serialize, Deserialize)]
pub struct CenterResponse {
    pub center: DiagnosticCenter,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct AppointmentsResponse {
    #[serde(default)]
    pub appointments: Vec<Appointment>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AppointmentMutationResponse {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appointment: Option<Appointment>,
}

/// Body of `PUT /api/appointments/{id}/status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusUpdateRequest {
    pub status: AppointmentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cancellation_reason: Option<String>,
}

/// Body of `PUT /api/appointments/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentUpdateRequest {
    pub status: AppointmentStatus,
    /// `YYYY-MM-DD`
    pub appointment_date: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorObject,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorObject {
    pub code: String,
    pub message: String,
}
