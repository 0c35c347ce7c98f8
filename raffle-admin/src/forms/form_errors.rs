use std::{collections::BTreeMap, fmt};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    Required,
    InvalidEmail,
    InvalidPhone,
    MinLength(usize),
    MaxLength(usize),
    PasswordMismatch,
    OutOfRange { min: String, max: String },
    InvalidDate,
    DateOrder,
    Server(String),
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::Required => write!(f, "This field is required."),
            FieldError::InvalidEmail => write!(f, "Please enter a valid email address."),
            FieldError::InvalidPhone => write!(f, "Please enter a valid phone number."),
            FieldError::MinLength(min) => write!(f, "Must be at least {min} characters long."),
            FieldError::MaxLength(max) => write!(f, "Must be at most {max} characters long."),
            FieldError::PasswordMismatch => write!(f, "Passwords do not match."),
            FieldError::OutOfRange { min, max } => write!(f, "Must be between {min} and {max}."),
            FieldError::InvalidDate => write!(f, "Please enter a valid date."),
            FieldError::DateOrder => write!(f, "End date must be after start date."),
            FieldError::Server(message) => write!(f, "{message}"),
        }
    }
}

///
/// Errors of a single form: per control errors and one global error
/// rendered as a banner.
///
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    fields: BTreeMap<String, Vec<FieldError>>,
    global: Option<String>,
}

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.global.is_none()
    }

    pub fn add(&mut self, field: &str, error: FieldError) {
        self.fields.entry(field.to_string()).or_default().push(error);
    }

    pub fn field(&self, field: &str) -> &[FieldError] {
        self.fields.get(field).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &[FieldError])> {
        self.fields
            .iter()
            .map(|(field, errors)| (field.as_str(), errors.as_slice()))
    }

    pub fn global(&self) -> Option<&str> {
        self.global.as_deref()
    }

    pub fn set_global(&mut self, message: impl Into<String>) {
        self.global = Some(message.into());
    }

    ///
    /// Drops server errors of a control, called when user edits it
    ///
    pub fn clear_server_errors(&mut self, field: &str) {
        if let Some(errors) = self.fields.get_mut(field) {
            errors.retain(|error| !matches!(error, FieldError::Server(_)));
            if errors.is_empty() {
                self.fields.remove(field);
            }
        }
    }

    ///
    /// Attaches server errors to known controls.
    ///
    /// Field paths returned by the server are stripped of the first
    /// matching prefix (e.g. `userData.`). Errors of fields the form
    /// does not know are joined into the global error.
    ///
    /// ### Returns
    /// Names of controls that received an error
    ///
    pub fn apply_server_errors(
        &mut self,
        errors: &BTreeMap<String, String>,
        prefixes: &[&str],
        known_fields: &[&str],
    ) -> Vec<String> {
        let mut applied = Vec::new();
        let mut unmatched = Vec::new();

        for (path, message) in errors {
            let field = strip_field_prefix(path, prefixes);
            if known_fields.contains(&field) {
                self.add(field, FieldError::Server(message.clone()));
                applied.push(field.to_string());
            } else {
                unmatched.push(message.as_str());
            }
        }

        if !unmatched.is_empty() {
            let mut global = self.global.take().into_iter().collect::<Vec<_>>();
            global.extend(unmatched.into_iter().map(str::to_string));
            self.global = Some(global.join(" "));
        }

        applied
    }

    pub fn into_result(self) -> Result<(), FormErrors> {
        match self.is_empty() {
            true => Ok(()),
            false => Err(self),
        }
    }
}

pub fn strip_field_prefix<'a>(path: &'a str, prefixes: &[&str]) -> &'a str {
    prefixes
        .iter()
        .find_map(|prefix| path.strip_prefix(prefix))
        .unwrap_or(path)
}
