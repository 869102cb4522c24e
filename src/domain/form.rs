use super::role::Role;

/// Raw values of the registration form, as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub name: String,
    pub role: String,
}

/// Per-field validation messages. `None` means the field is fine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub name: Option<&'static str>,
    pub role: Option<&'static str>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.role.is_none()
    }
}

impl RegistrationForm {
    /// Creates a form filled with the given raw values.
    pub fn new(name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role: role.into(),
        }
    }

    /// Validates each field. Only empty fields count as missing.
    pub fn errors(&self) -> FormErrors {
        let name = self.name.is_empty().then_some("Name is required");
        let role = if self.role.is_empty() {
            Some("Role is required")
        } else if Role::from_label(&self.role).is_none() {
            Some("Invalid role selected")
        } else {
            None
        };
        FormErrors { name, role }
    }

    pub fn is_valid(&self) -> bool {
        self.errors().is_empty()
    }

    /// Whether the user has changed anything from the initial empty form.
    pub fn is_dirty(&self) -> bool {
        *self != Self::default()
    }

    /// The submit button is live for a touched, valid form with nothing in flight.
    pub fn submit_enabled(&self, in_flight: bool) -> bool {
        self.is_dirty() && self.is_valid() && !in_flight
    }
}
