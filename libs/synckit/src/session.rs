use serde::{Deserialize, Serialize};

/// Role tag carried by a stored credential.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Customer,
}

/// A stored credential: opaque token plus role tag. Read-only to this
/// layer; expiry and refresh are the issuer's concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    pub token: String,
    pub role: Role,
}

/// Injected read-only capability over the process-wide persisted
/// session state, so the guard is testable without a real store.
pub trait SessionProvider: Send + Sync {
    fn current(&self) -> Option<Credential>;
}

/// Outcome of the access check gating a privileged view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Access {
    Granted(Credential),
    /// Missing or wrong-role credential. Not an error: the caller
    /// redirects to the public entry point and renders nothing further.
    Redirect,
}

/// Check the stored credential once, synchronously, before any data
/// fetch is issued. No retry, nothing surfaced to the user.
pub fn guard(provider: &dyn SessionProvider, required: Role) -> Access {
    match provider.current() {
        Some(cred) if !cred.token.is_empty() && cred.role == required => Access::Granted(cred),
        _ => Access::Redirect,
    }
}

/// Fixed in-memory provider, for tests and headless tools.
pub struct StaticSession(Option<Credential>);

impl StaticSession {
    pub fn new(credential: Option<Credential>) -> Self {
        Self(credential)
    }

    pub fn anonymous() -> Self {
        Self(None)
    }

    pub fn with_role(token: impl Into<String>, role: Role) -> Self {
        Self(Some(Credential {
            token: token.into(),
            role,
        }))
    }
}

impl SessionProvider for StaticSession {
    fn current(&self) -> Option<Credential> {
        self.0.clone()
    }
}
