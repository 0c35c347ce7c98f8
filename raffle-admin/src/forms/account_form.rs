use super::{validators, FieldError, FormErrors};
use crate::dto::{
    input::User,
    output::{CreateUserRequest, UpdateUserRequest},
    Role,
};

///
/// Account managed by an administrator
///
#[derive(Debug, Clone, Default)]
pub struct AccountForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub role: Option<Role>,
}

impl AccountForm {
    pub const FIELDS: &'static [&'static str] =
        &["firstName", "lastName", "email", "phoneNumber", "role"];

    pub fn from_user(user: &User) -> Self {
        Self {
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
            phone_number: user.phone_number.clone().unwrap_or_default(),
            role: Some(user.role),
        }
    }

    fn validate_common(&self) -> FormErrors {
        let mut errors = FormErrors::new();
        validators::required_text(&mut errors, "firstName", &self.first_name, 50);
        validators::required_text(&mut errors, "lastName", &self.last_name, 50);
        validators::required_email(&mut errors, "email", &self.email);
        validators::optional_phone(&mut errors, "phoneNumber", &self.phone_number);

        errors
    }

    pub fn validate_create(&self) -> Result<CreateUserRequest, FormErrors> {
        let mut errors = self.validate_common();
        if self.role.is_none() {
            errors.add("role", FieldError::Required);
        }
        errors.into_result()?;

        Ok(CreateUserRequest {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            role: self.role.unwrap_or(Role::Member),
            phone_number: validators::optional(&self.phone_number),
        })
    }

    pub fn validate_update(&self) -> Result<UpdateUserRequest, FormErrors> {
        self.validate_common().into_result()?;

        Ok(UpdateUserRequest {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone_number: validators::optional(&self.phone_number),
        })
    }
}
