//! Forms module - input validation for the authentication pages.

pub mod validation;

pub use validation::{
    validate_email, validate_family_code, validate_name, validate_password, FieldErrors,
    ForgotPasswordForm, LoginForm, RegisterForm,
};
