//! Signup form state, UI excluded.
//!
//! The shell renders inputs and error texts; this module tracks values,
//! per-field validity, and whether validation results are visible yet.
//! Validation rules themselves are boolean predicates the caller supplies.

/// The form element names used across the signup screen.
pub const EMAIL: &str = "email";
pub const NAME: &str = "name";
pub const PASSWORD: &str = "password";

/// A validation rule over a field's current value.
pub type Validator = Box<dyn Fn(&str) -> bool + Send + Sync>;

/// One form element: its value, its validity, and its rule.
pub struct FormField {
    name: String,
    value: String,
    valid: bool,
    validator: Validator,
}

impl FormField {
    /// Create a field with an empty value, validated by the given rule.
    pub fn new(name: impl Into<String>, validator: Validator) -> Self {
        let valid = validator("");
        Self {
            name: name.into(),
            value: String::new(),
            valid,
            validator,
        }
    }

    /// Field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Whether the current value passes the rule (or was forced invalid).
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    fn set_value(&mut self, value: String) {
        self.valid = (self.validator)(&value);
        self.value = value;
    }
}

impl std::fmt::Debug for FormField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormField")
            .field("name", &self.name)
            .field("value", &self.value)
            .field("valid", &self.valid)
            .finish()
    }
}

/// The signup form: ordered fields plus a visibility flag for validation
/// results. Errors stay hidden until the first submit attempt.
#[derive(Debug)]
pub struct SignupForm {
    fields: Vec<FormField>,
    validation_visible: bool,
}

impl SignupForm {
    /// Create a form from explicit fields.
    pub fn new(fields: Vec<FormField>) -> Self {
        Self {
            fields,
            validation_visible: false,
        }
    }

    /// The standard signup form: email, name, password.
    pub fn standard(email_rule: Validator, name_rule: Validator, password_rule: Validator) -> Self {
        Self::new(vec![
            FormField::new(EMAIL, email_rule),
            FormField::new(NAME, name_rule),
            FormField::new(PASSWORD, password_rule),
        ])
    }

    fn field(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.name == name)
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut FormField> {
        self.fields.iter_mut().find(|f| f.name == name)
    }

    /// Set a field's value and re-run its rule. Unknown names are ignored.
    pub fn set_value(&mut self, name: &str, value: impl Into<String>) {
        if let Some(field) = self.field_mut(name) {
            field.set_value(value.into());
        }
    }

    /// A field's current value, empty for unknown names.
    pub fn value(&self, name: &str) -> &str {
        self.field(name).map(|f| f.value()).unwrap_or("")
    }

    /// Whether a field currently passes its rule.
    pub fn is_valid(&self, name: &str) -> bool {
        self.field(name).map(|f| f.is_valid()).unwrap_or(false)
    }

    /// Whether every field passes its rule.
    pub fn is_form_valid(&self) -> bool {
        self.fields.iter().all(|f| f.valid)
    }

    /// Force a field invalid until its value changes again. Used when the
    /// service rejects a value the local rule accepted.
    pub fn invalidate(&mut self, name: &str) {
        if let Some(field) = self.field_mut(name) {
            field.valid = false;
        }
    }

    /// Make validation results visible.
    pub fn show_validation(&mut self) {
        self.validation_visible = true;
    }

    /// Whether validation results should be rendered.
    pub fn validation_visible(&self) -> bool {
        self.validation_visible
    }
}
