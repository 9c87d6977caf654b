use crate::{Result as ServiceErrorResult, ServiceError};

/// Login names are single tokens: non-empty, no whitespace or control
/// characters, at most `max_len` characters. `.` and `..` are refused since
/// they cannot travel as a URL path segment.
#[track_caller]
pub fn validate_login_name(name: &str, field: &str, max_len: usize) -> ServiceErrorResult<()> {
    if name.trim().is_empty() {
        return Err(ServiceError::validation(
            format!("{field} cannot be empty"),
            Some(field),
        ));
    }

    if name.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(ServiceError::validation(
            format!("{field} must not contain whitespace or control characters"),
            Some(field),
        ));
    }

    if name == "." || name == ".." {
        return Err(ServiceError::validation(
            format!("{field} must not be '.' or '..'"),
            Some(field),
        ));
    }

    let len = name.chars().count();
    if len > max_len {
        return Err(ServiceError::validation(
            format!("{field} must not exceed {max_len} characters (got {len})"),
            Some(field),
        ));
    }

    Ok(())
}

#[track_caller]
pub fn validate_real_name(name: &str, max_len: usize) -> ServiceErrorResult<()> {
    let len = name.chars().count();
    if len > max_len {
        return Err(ServiceError::validation(
            format!("real_name must not exceed {max_len} characters (got {len})"),
            Some("real_name"),
        ));
    }

    if name.chars().any(char::is_control) {
        return Err(ServiceError::validation(
            "real_name must not contain control characters",
            Some("real_name"),
        ));
    }

    Ok(())
}

/// A supplied password must be non-empty. Omit it instead.
#[track_caller]
pub fn validate_password(password: Option<&str>) -> ServiceErrorResult<()> {
    match password {
        Some("") => Err(ServiceError::validation(
            "password cannot be empty",
            Some("password"),
        )),
        _ => Ok(()),
    }
}
