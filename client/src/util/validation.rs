//! Input validation caught before any request is dispatched.
//!
//! ERROR HANDLING
//! ==============
//! Validation failures never reach the network layer; each helper returns a
//! user-presentable message so forms surface them inline.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

/// Maximum post body length accepted client-side.
pub const MAX_POST_LEN: usize = 2000;

/// Maximum direct-message body length accepted client-side.
pub const MAX_MESSAGE_LEN: usize = 1000;

const MIN_PASSWORD_LEN: usize = 8;

/// Loose structural email check: a non-empty local part and a dotted domain.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

/// Validate login form input, trimming the email.
///
/// # Errors
///
/// Returns a user-presentable message when a field is missing or malformed.
pub fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() {
        return Err("Enter an email first.");
    }
    if !is_valid_email(email) {
        return Err("That doesn't look like an email address.");
    }
    if password.is_empty() {
        return Err("Enter your password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// Validate registration form input, trimming name and email.
///
/// # Errors
///
/// Returns a user-presentable message when a field is missing, malformed, or
/// the password is too weak.
pub fn validate_register_input(
    name: &str,
    email: &str,
    password: &str,
) -> Result<(String, String, String), &'static str> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Enter a display name.");
    }
    let email = email.trim();
    if !is_valid_email(email) {
        return Err("That doesn't look like an email address.");
    }
    if password.len() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 8 characters.");
    }
    Ok((name.to_owned(), email.to_owned(), password.to_owned()))
}

/// Validate a post body before submission.
///
/// # Errors
///
/// Returns a user-presentable message for empty or oversized bodies.
pub fn validate_post_input(body: &str) -> Result<String, &'static str> {
    let body = body.trim();
    if body.is_empty() {
        return Err("Write something first.");
    }
    if body.chars().count() > MAX_POST_LEN {
        return Err("Posts are limited to 2000 characters.");
    }
    Ok(body.to_owned())
}

/// Validate a direct-message body before submission.
///
/// # Errors
///
/// Returns a user-presentable message for empty or oversized bodies.
pub fn validate_message_input(body: &str) -> Result<String, &'static str> {
    let body = body.trim();
    if body.is_empty() {
        return Err("Write a message first.");
    }
    if body.chars().count() > MAX_MESSAGE_LEN {
        return Err("Messages are limited to 1000 characters.");
    }
    Ok(body.to_owned())
}
