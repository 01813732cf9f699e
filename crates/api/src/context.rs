/// Per-request authentication context.
///
/// Inserted by the auth middleware for every `/api/v1` request, whether or
/// not a usable token was presented. Endpoints that require a subject check
/// for one and answer 401 themselves; read endpoints just ignore it.
#[derive(Debug, Clone)]
pub struct AuthContext {
    subject: Option<String>,
}

impl AuthContext {
    pub fn anonymous() -> Self {
        Self { subject: None }
    }

    pub fn authenticated(subject: String) -> Self {
        Self {
            subject: Some(subject),
        }
    }

    /// The verified token subject (a user id), if any.
    pub fn subject(&self) -> Option<&str> {
        self.subject.as_deref()
    }
}
