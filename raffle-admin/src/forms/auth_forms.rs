use super::{validators, FormErrors};
use crate::dto::output::{ForgotPasswordRequest, LoginRequest, ResetPasswordRequest};

#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub const FIELDS: &'static [&'static str] = &["email", "password"];

    pub fn validate(&self) -> Result<LoginRequest, FormErrors> {
        let mut errors = FormErrors::new();
        validators::required_email(&mut errors, "email", &self.email);
        validators::required(&mut errors, "password", &self.password);
        errors.into_result()?;

        Ok(LoginRequest {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct ForgotPasswordForm {
    pub email: String,
}

impl ForgotPasswordForm {
    pub fn validate(&self) -> Result<ForgotPasswordRequest, FormErrors> {
        let mut errors = FormErrors::new();
        validators::required_email(&mut errors, "email", &self.email);
        errors.into_result()?;

        Ok(ForgotPasswordRequest {
            email: self.email.trim().to_string(),
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct ResetPasswordForm {
    ///
    /// Token received in the reset link, never typed by the user
    ///
    pub token: String,
    pub password: String,
    pub confirm_password: String,
}

impl ResetPasswordForm {
    pub const FIELDS: &'static [&'static str] = &["password", "confirmPassword"];

    pub fn validate(&self) -> Result<ResetPasswordRequest, FormErrors> {
        let mut errors = FormErrors::new();
        if validators::is_blank(&self.token) {
            errors.set_global("The password reset link is invalid.");
        }
        validators::new_password(
            &mut errors,
            "password",
            "confirmPassword",
            &self.password,
            &self.confirm_password,
        );
        errors.into_result()?;

        Ok(ResetPasswordRequest {
            token: self.token.clone(),
            password: self.password.clone(),
            confirm_password: self.confirm_password.clone(),
        })
    }
}
