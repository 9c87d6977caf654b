/// Origin recorded when the transport cannot name the peer
pub const UNKNOWN_ORIGIN: &str = "unknown";

/// Who is calling, as far as the transport can tell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallerContext {
    /// Network origin of the request, stored on created records
    pub client_origin: String,
    /// The caller's local account name, if it sent one
    pub local_user: Option<String>,
}

impl CallerContext {
    pub fn new(client_origin: impl Into<String>, local_user: Option<String>) -> Self {
        let client_origin = client_origin.into();
        Self {
            client_origin: if client_origin.trim().is_empty() {
                String::from(UNKNOWN_ORIGIN)
            } else {
                client_origin
            },
            local_user: local_user
                .map(|user| user.trim().to_string())
                .filter(|user| !user.is_empty()),
        }
    }

    pub fn unknown() -> Self {
        Self::new(UNKNOWN_ORIGIN, None)
    }
}

impl Default for CallerContext {
    fn default() -> Self {
        Self::unknown()
    }
}
