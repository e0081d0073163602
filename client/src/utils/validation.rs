/// Validation utilities for user input

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(message.into()),
        }
    }

    /// Convert into a `Result` for `?` propagation.
    pub fn into_result(self) -> crate::core::Result<()> {
        match self.error {
            Some(message) => Err(crate::core::AppError::Validation(message)),
            None => Ok(()),
        }
    }
}

/// Validate the login form. Only presence is checked; the backend decides
/// whether the credentials are right.
pub fn validate_login(username: &str, password: &str) -> ValidationResult {
    if username.trim().is_empty() {
        return ValidationResult::err("ID is required");
    }

    if password.is_empty() {
        return ValidationResult::err("Password is required");
    }

    ValidationResult::ok()
}

/// Validate email format
pub fn validate_email(email: &str) -> ValidationResult {
    if email.is_empty() {
        return ValidationResult::err("Email is required");
    }

    let parts: Vec<&str> = email.split('@').collect();
    if parts.len() != 2 {
        return ValidationResult::err("Invalid email format");
    }

    if parts[0].is_empty() {
        return ValidationResult::err("Email username cannot be empty");
    }

    if parts[1].is_empty() || !parts[1].contains('.') || parts[1].ends_with('.') {
        return ValidationResult::err("Invalid email domain");
    }

    ValidationResult::ok()
}

/// Validate a (possibly formatted) phone number: at least ten digits.
pub fn validate_phone_number(phone: &str) -> ValidationResult {
    let digits = phone.chars().filter(|c| c.is_ascii_digit()).count();
    let only_digits_and_dashes = phone.chars().all(|c| c.is_ascii_digit() || c == '-');

    if !only_digits_and_dashes || digits < 10 {
        return ValidationResult::err("Enter a valid phone number");
    }

    ValidationResult::ok()
}
