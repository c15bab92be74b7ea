use crate::server::error::AppError;

/// Checks that a trimmed field is non-empty and at most `max` characters.
///
/// # Returns
/// - `Ok(())` - Field is within bounds
/// - `Err(AppError::BadRequest)` - Field is empty or too long, naming the field
pub fn require_length(field: &str, value: &str, max: usize) -> Result<(), AppError> {
    let len = value.trim().chars().count();
    if len == 0 {
        return Err(AppError::BadRequest(format!("{} is required", field)));
    }
    if len > max {
        return Err(AppError::BadRequest(format!(
            "{} must be at most {} characters",
            field, max
        )));
    }
    Ok(())
}

/// Checks an optional field against a maximum length; `None` always passes.
pub fn optional_length(field: &str, value: Option<&str>, max: usize) -> Result<(), AppError> {
    match value {
        Some(value) if value.chars().count() > max => Err(AppError::BadRequest(format!(
            "{} must be at most {} characters",
            field, max
        ))),
        _ => Ok(()),
    }
}

/// Loose `local@domain.tld` shape check.
///
/// Requires exactly one `@`, no whitespace, a non-empty local part, and a domain
/// containing a dot with non-empty labels on both sides of the last dot.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };

    if local.is_empty() {
        return false;
    }

    match domain.rsplit_once('.') {
        Some((name, tld)) => !name.is_empty() && !tld.is_empty() && !name.ends_with('.'),
        None => false,
    }
}

/// Site content keys are 1 to 100 characters of `[a-z0-9_.-]`.
pub fn is_valid_content_key(key: &str) -> bool {
    !key.is_empty()
        && key.len() <= 100
        && key
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '_' | '.' | '-'))
}
