use super::{validators, FormErrors};
use crate::dto::output::{RegisterAssociationData, RegisterRequest, RegisterUserData};
use std::collections::BTreeMap;

const USER_PREFIX: &str = "userData.";
const ASSOCIATION_PREFIX: &str = "associationData.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegistrationStep {
    #[default]
    User,
    Association,
}

#[derive(Debug, Clone, Default)]
pub struct RegistrationUserFields {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub phone_number: String,
}

impl RegistrationUserFields {
    pub const FIELDS: &'static [&'static str] = &[
        "firstName",
        "lastName",
        "email",
        "password",
        "confirmPassword",
        "phoneNumber",
    ];

    fn validate(&self) -> FormErrors {
        let mut errors = FormErrors::new();
        validators::required_text(&mut errors, "firstName", &self.first_name, 50);
        validators::required_text(&mut errors, "lastName", &self.last_name, 50);
        validators::required_email(&mut errors, "email", &self.email);
        validators::new_password(
            &mut errors,
            "password",
            "confirmPassword",
            &self.password,
            &self.confirm_password,
        );
        validators::optional_phone(&mut errors, "phoneNumber", &self.phone_number);

        errors
    }
}

#[derive(Debug, Clone, Default)]
pub struct RegistrationAssociationFields {
    pub name: String,
    pub description: String,
    pub email: String,
    pub phone_number: String,
    pub address: String,
}

impl RegistrationAssociationFields {
    pub const FIELDS: &'static [&'static str] =
        &["name", "description", "email", "phoneNumber", "address"];

    fn validate(&self) -> FormErrors {
        let mut errors = FormErrors::new();
        validators::required_text(&mut errors, "name", &self.name, 100);
        validators::optional_email(&mut errors, "email", &self.email);
        validators::optional_phone(&mut errors, "phoneNumber", &self.phone_number);

        errors
    }
}

///
/// Two step registration wizard: user account first, then the association
///
#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    pub user: RegistrationUserFields,
    pub association: RegistrationAssociationFields,
    step: RegistrationStep,
    user_errors: FormErrors,
    association_errors: FormErrors,
}

impl RegistrationForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> RegistrationStep {
        self.step
    }

    pub fn user_errors(&self) -> &FormErrors {
        &self.user_errors
    }

    pub fn association_errors(&self) -> &FormErrors {
        &self.association_errors
    }

    ///
    /// Moves to association step when user step is valid
    ///
    pub fn next_step(&mut self) -> Result<(), FormErrors> {
        if self.step == RegistrationStep::Association {
            return Ok(());
        }

        self.user_errors = self.user.validate();
        self.user_errors.clone().into_result()?;
        self.step = RegistrationStep::Association;

        Ok(())
    }

    pub fn previous_step(&mut self) {
        self.step = RegistrationStep::User;
    }

    ///
    /// Validates both steps. When user step is invalid the wizard
    /// goes back to it.
    ///
    pub fn submit(&mut self) -> Result<RegisterRequest, FormErrors> {
        self.user_errors = self.user.validate();
        self.association_errors = self.association.validate();

        if !self.user_errors.is_empty() {
            self.step = RegistrationStep::User;
            return Err(self.user_errors.clone());
        }
        self.association_errors.clone().into_result()?;

        Ok(RegisterRequest {
            user_data: RegisterUserData {
                first_name: self.user.first_name.trim().to_string(),
                last_name: self.user.last_name.trim().to_string(),
                email: self.user.email.trim().to_string(),
                password: self.user.password.clone(),
                confirm_password: self.user.confirm_password.clone(),
                phone_number: validators::optional(&self.user.phone_number),
            },
            association_data: RegisterAssociationData {
                name: self.association.name.trim().to_string(),
                description: validators::optional(&self.association.description),
                email: validators::optional(&self.association.email),
                phone_number: validators::optional(&self.association.phone_number),
                address: validators::optional(&self.association.address),
            },
        })
    }

    ///
    /// Splits server errors between the steps by their field path prefix.
    /// Unprefixed paths belong to the user step. When user step received
    /// any error the wizard goes back to it.
    ///
    pub fn apply_server_errors(&mut self, errors: &BTreeMap<String, String>) {
        let (association, user): (BTreeMap<_, _>, BTreeMap<_, _>) = errors
            .iter()
            .map(|(path, message)| (path.clone(), message.clone()))
            .partition(|(path, _)| path.starts_with(ASSOCIATION_PREFIX));

        let applied = self.user_errors.apply_server_errors(
            &user,
            &[USER_PREFIX],
            RegistrationUserFields::FIELDS,
        );
        self.association_errors.apply_server_errors(
            &association,
            &[ASSOCIATION_PREFIX],
            RegistrationAssociationFields::FIELDS,
        );

        let user_step_failed = !applied.is_empty() || self.user_errors.global().is_some();
        if user_step_failed {
            self.step = RegistrationStep::User;
        }
        tracing::debug!(user_fields = ?applied, user_step_failed, "applied server errors");
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::forms::FieldError;

    fn filled_form() -> RegistrationForm {
        let mut form = RegistrationForm::new();
        form.user = RegistrationUserFields {
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            email: "john@example.com".to_string(),
            password: "Password123!".to_string(),
            confirm_password: "Password123!".to_string(),
            phone_number: String::new(),
        };
        form.association = RegistrationAssociationFields {
            name: "Friends of the Library".to_string(),
            ..Default::default()
        };

        form
    }

    #[test]
    fn next_step_blocked_by_invalid_user() {
        let mut form = RegistrationForm::new();

        let result = form.next_step();

        assert!(result.is_err());
        assert_eq!(form.step(), RegistrationStep::User);
        assert!(form.user_errors().has_field("email"));
    }

    #[test]
    fn next_step_valid_user() {
        let mut form = filled_form();

        form.next_step().unwrap();

        assert_eq!(form.step(), RegistrationStep::Association);
    }

    #[test]
    fn submit_builds_request() {
        let mut form = filled_form();
        form.next_step().unwrap();

        let request = form.submit().unwrap();

        assert_eq!(request.user_data.email, "john@example.com");
        assert_eq!(request.association_data.name, "Friends of the Library");
        assert_eq!(request.association_data.email, None);
    }

    #[test]
    fn server_user_error_returns_to_user_step() {
        let mut form = filled_form();
        form.next_step().unwrap();

        let errors = BTreeMap::from([
            (
                "userData.email".to_string(),
                "This email is already registered.".to_string(),
            ),
            (
                "associationData.name".to_string(),
                "Name already taken.".to_string(),
            ),
        ]);
        form.apply_server_errors(&errors);

        assert_eq!(form.step(), RegistrationStep::User);
        assert_eq!(
            form.user_errors().field("email"),
            &[FieldError::Server(
                "This email is already registered.".to_string()
            )]
        );
        assert!(form.association_errors().has_field("name"));
    }

    #[test]
    fn server_association_error_keeps_step() {
        let mut form = filled_form();
        form.next_step().unwrap();

        let errors = BTreeMap::from([(
            "associationData.name".to_string(),
            "Name already taken.".to_string(),
        )]);
        form.apply_server_errors(&errors);

        assert_eq!(form.step(), RegistrationStep::Association);
    }
}
