use super::{validators, FormErrors};
use crate::dto::{
    input::User,
    output::{ChangePasswordRequest, UpdateProfileRequest},
};

#[derive(Debug, Clone, Default)]
pub struct ProfileForm {
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
}

impl ProfileForm {
    pub const FIELDS: &'static [&'static str] = &["firstName", "lastName", "phoneNumber"];

    pub fn from_user(user: &User) -> Self {
        Self {
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            phone_number: user.phone_number.clone().unwrap_or_default(),
        }
    }

    pub fn validate(&self) -> Result<UpdateProfileRequest, FormErrors> {
        let mut errors = FormErrors::new();
        validators::required_text(&mut errors, "firstName", &self.first_name, 50);
        validators::required_text(&mut errors, "lastName", &self.last_name, 50);
        validators::optional_phone(&mut errors, "phoneNumber", &self.phone_number);
        errors.into_result()?;

        Ok(UpdateProfileRequest {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            phone_number: validators::optional(&self.phone_number),
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct PasswordChangeForm {
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

impl PasswordChangeForm {
    pub const FIELDS: &'static [&'static str] =
        &["currentPassword", "newPassword", "confirmPassword"];

    pub fn validate(&self) -> Result<ChangePasswordRequest, FormErrors> {
        let mut errors = FormErrors::new();
        validators::required(&mut errors, "currentPassword", &self.current_password);
        validators::new_password(
            &mut errors,
            "newPassword",
            "confirmPassword",
            &self.new_password,
            &self.confirm_password,
        );
        errors.into_result()?;

        Ok(ChangePasswordRequest {
            current_password: self.current_password.clone(),
            new_password: self.new_password.clone(),
            confirm_password: self.confirm_password.clone(),
        })
    }
}
