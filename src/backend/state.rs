use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::backend::auth::{generate_access_token, hash_access_token};
use crate::models::{Appointment, DiagnosticCenter, SessionUser};

#[derive(Clone, Default)]
pub struct AppState {
    pub store: Arc<RwLock<Store>>,
}

impl AppState {
    pub fn new(store: Store) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }
}

/// An appointment plus the keys the listings filter on.
#[derive(Debug, Clone)]
pub struct StoredAppointment {
    pub center_id: String,
    pub patient_id: String,
    pub record: Appointment,
}

#[derive(Debug, Default)]
pub struct Store {
    pub centers: HashMap<String, DiagnosticCenter>,
    pub users: HashMap<String, SessionUser>,
    /// token hash -> user id
    pub sessions: HashMap<String, String>,
    /// Insertion order is listing order.
    pub appointments: Vec<StoredAppointment>,
}

impl Store {
    pub fn insert_center(&mut self, center: DiagnosticCenter) {
        self.centers.insert(center.id.clone(), center);
    }

    pub fn insert_user(&mut self, user: SessionUser) {
        self.users.insert(user.id.clone(), user);
    }

    pub fn insert_appointment(&mut self, appointment: StoredAppointment) {
        self.appointments.push(appointment);
    }

    /// Issues a fresh bearer token for `user_id` and returns it in clear.
    pub fn issue_token(&mut self, user_id: &str) -> String {
        let token = generate_access_token();
        self.sessions
            .insert(hash_access_token(&token), user_id.to_string());
        token
    }

    pub fn user_for_token_hash(&self, token_hash: &str) -> Option<&SessionUser> {
        let user_id = self.sessions.get(token_hash)?;
        self.users.get(user_id)
    }

    pub fn appointment_mut(&mut self, appointment_id: &str) -> Option<&mut StoredAppointment> {
        self.appointments
            .iter_mut()
            .find(|a| a.record.id == appointment_id)
    }
}
