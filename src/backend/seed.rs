//! Demo data for the development backend.

use crate::backend::state::{AppState, Store, StoredAppointment};
use crate::models::{
    Address, Appointment, CenterRef, ContactPerson, DiagnosticCenter, OperatingHours, PatientRef,
    SessionUser, TestRef, WeeklyHours,
};
use crate::status::AppointmentStatus;

pub const DEMO_CENTER_ID: &str = "sunrise-diagnostics";
pub const DEMO_IDLE_CENTER_ID: &str = "lakeside-imaging";
pub const DEMO_PENDING_ID: &str = "appt-1001";
pub const DEMO_COMPLETED_ID: &str = "appt-1003";

/// A seeded user with a live bearer token.
#[derive(Debug, Clone)]
pub struct DemoSession {
    pub token: String,
    pub user: SessionUser,
}

#[derive(Debug, Clone)]
pub struct DemoAccounts {
    pub patient: DemoSession,
    pub admin: DemoSession,
}

fn user(id: &str, name: &str, email: &str, role: &str) -> SessionUser {
    SessionUser {
        id: id.into(),
        name: name.into(),
        email: email.into(),
        role: role.into(),
    }
}

fn test(id: &str, name: &str, category: &str, price: f64, duration: u32) -> TestRef {
    TestRef {
        id: id.into(),
        name: name.into(),
        category: Some(category.into()),
        price: Some(price),
        duration: Some(duration),
    }
}

fn sunrise() -> DiagnosticCenter {
    let weekday = OperatingHours::new("08:00", "20:00");
    DiagnosticCenter {
        id: DEMO_CENTER_ID.into(),
        name: "Sunrise Diagnostics".into(),
        description: Some("Full-service pathology and imaging lab.".into()),
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
            monday: weekday.clone(),
            tuesday: weekday.clone(),
            wednesday: weekday.clone(),
            thursday: weekday.clone(),
            friday: weekday,
            saturday: OperatingHours::new("09:00", "14:00"),
            sunday: OperatingHours::default(),
        },
        services: Some(vec![
            "Blood Tests".into(),
            "MRI".into(),
            "CT Scan".into(),
            "X-Ray".into(),
        ]),
        is_active: true,
        rating: Some(4.6),
        total_reviews: Some(128),
        admin: Some(ContactPerson {
            name: "Asha Menon".into(),
            email: "asha@sunrise.example".into(),
            phone: "+91 98220 11223".into(),
        }),
    }
}

fn lakeside() -> DiagnosticCenter {
    DiagnosticCenter {
        id: DEMO_IDLE_CENTER_ID.into(),
        name: "Lakeside Imaging".into(),
        description: None,
        address: Address {
            street: "2 Lake View".into(),
            city: "Nashik".into(),
            state: "Maharashtra".into(),
            zip_code: "422001".into(),
            country: "India".into(),
        },
        phone: "+91 253 222 0000".into(),
        email: "front@lakeside.example".into(),
        operating_hours: WeeklyHours::default(),
        services: None,
        is_active: false,
        rating: None,
        total_reviews: None,
        admin: None,
    }
}

/// Seeded store: two centers, an administrator, two patients and seven
/// appointments at Sunrise in every status.
pub fn demo_store() -> (Store, DemoAccounts) {
    let mut store = Store::default();

    let center = sunrise();
    let center_ref = CenterRef {
        id: center.id.clone(),
        name: center.name.clone(),
        address: Some(center.address.clone()),
    };
    store.insert_center(center);
    store.insert_center(lakeside());

    let ravi = user("u-ravi", "Ravi Kumar", "ravi@example.test", "patient");
    let meera = user("u-meera", "Meera Shah", "meera@example.test", "patient");
    let asha = user("u-asha", "Asha Menon", "asha@sunrise.example", "admin");
    for u in [&ravi, &meera, &asha] {
        store.insert_user(u.clone());
    }

    let cbc = test("t-cbc", "Complete Blood Count", "Pathology", 350.0, 15);
    let mri = test("t-mri", "MRI Brain", "Radiology", 6500.0, 45);
    let lipid = test("t-lipid", "Lipid Profile", "Pathology", 600.0, 15);
    let xray = test("t-xray", "Chest X-Ray", "Radiology", 450.0, 10);
    let thyroid = test("t-thyroid", "Thyroid Panel", "Pathology", 799.5, 15);

    let rows = [
        (DEMO_PENDING_ID, &ravi, &cbc, "2031-01-05", "09:30", AppointmentStatus::Pending, None, None),
        ("appt-1002", &ravi, &mri, "2031-01-07", "11:00", AppointmentStatus::Confirmed, Some("Bring previous scans"), None),
        (DEMO_COMPLETED_ID, &ravi, &lipid, "2030-12-12", "08:15", AppointmentStatus::Completed, Some("Fasting confirmed"), None),
        ("appt-1004", &ravi, &xray, "2030-12-20", "16:00", AppointmentStatus::Cancelled, None, Some("Travelling")),
        ("appt-1005", &ravi, &thyroid, "2031-02-01", "10:00", AppointmentStatus::Scheduled, None, None),
        ("appt-1006", &meera, &mri, "2031-01-08", "13:30", AppointmentStatus::Pending, None, None),
        ("appt-1007", &meera, &cbc, "2031-01-09", "09:00", AppointmentStatus::Confirmed, None, None),
    ];

    for (id, patient, test, date, time, status, notes, reason) in rows {
        store.insert_appointment(StoredAppointment {
            center_id: DEMO_CENTER_ID.into(),
            patient_id: patient.id.clone(),
            record: Appointment {
                id: id.into(),
                patient: Some(PatientRef {
                    id: patient.id.clone(),
                    name: patient.name.clone(),
                    email: patient.email.clone(),
                    phone: "+91 90000 00000".into(),
                }),
                test: Some(test.clone()),
                center: Some(center_ref.clone()),
                appointment_date: format!("{date}T00:00:00.000Z"),
                appointment_time: Some(time.into()),
                status,
                total_amount: test.price,
                notes: notes.map(str::to_string),
                cancellation_reason: reason.map(str::to_string),
            },
        });
    }

    let patient = DemoSession {
        token: store.issue_token(&ravi.id),
        user: ravi,
    };
    let admin = DemoSession {
        token: store.issue_token(&asha.id),
        user: asha,
    };

    (store, DemoAccounts { patient, admin })
}

pub fn demo_state() -> (AppState, DemoAccounts) {
    let (store, accounts) = demo_store();
    (AppState::new(store), accounts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_store_shape() {
        let (store, accounts) = demo_store();
        assert_eq!(store.centers.len(), 2);
        assert!(store.appointments.len() > 5);
        assert_eq!(accounts.admin.user.role, "admin");
        assert_ne!(accounts.patient.token, accounts.admin.token);

        let ravi_owns = store
            .appointments
            .iter()
            .filter(|a| a.patient_id == accounts.patient.user.id)
            .count();
        assert_eq!(ravi_owns, 5);
    }
}
