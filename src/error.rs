use thiserror::Error;

/// Failures surfaced by the API client and the session store.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Connection, timeout or body decoding failure.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("{path} returned {status}{}", suffix(.message))]
    Status {
        path: String,
        status: u16,
        message: Option<String>,
    },

    #[error("no session token")]
    MissingSession,

    #[error("session storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("session encoding error: {0}")]
    Encoding(#[from] serde_json::Error),
}

fn suffix(message: &Option<String>) -> String {
    message.as_deref().map(|m| format!(": {m}")).unwrap_or_default()
}

impl ClientError {
    pub fn is_transport(&self) -> bool {
        matches!(self, ClientError::Transport(_))
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display_with_and_without_message() {
        let e = ClientError::Status {
            path: "/api/appointments/a1".into(),
            status: 404,
            message: Some("appointment not found".into()),
        };
        assert_eq!(e.to_string(), "/api/appointments/a1 returned 404: appointment not found");
        assert_eq!(e.status(), Some(404));

        let e = ClientError::Status {
            path: "/api/x".into(),
            status: 500,
            message: None,
        };
        assert_eq!(e.to_string(), "/api/x returned 500");
        assert!(!e.is_transport());
    }
}
