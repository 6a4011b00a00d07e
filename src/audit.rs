use chrono::Local;

/// Placeholder author when no user name can be found in the environment.
pub const UNKNOWN_USER: &str = "unknown_user";

/// Value of the `_audit_creation_method` CIF field.
pub const CREATION_METHOD: &str = "RASPA-1.0";

/// Who wrote a file, and when.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditInfo {
    /// Creation date as `YYYY-MM-DD`
    pub date: String,
    pub author: String,
}

impl AuditInfo {
    pub fn new(date: &str, author: &str) -> Self {
        AuditInfo {
            date: date.to_string(),
            author: author.to_string(),
        }
    }

    /// Today's local date and the current user.
    pub fn current() -> Self {
        AuditInfo {
            date: Local::now().format("%Y-%m-%d").to_string(),
            author: current_user(),
        }
    }
}

/// Looks up `USER`, then `USERNAME` (Windows), then falls back to
/// [`UNKNOWN_USER`].
pub fn current_user() -> String {
    std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| UNKNOWN_USER.to_string())
}
