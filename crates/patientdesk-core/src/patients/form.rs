use std::fmt;
use std::str::FromStr;

use super::errors::FormError;

/// Values offered by the gender selector, in cycle order.
/// The empty string is the "Select Gender" placeholder.
pub const GENDER_OPTIONS: [&str; 3] = ["", "Male", "Female"];

/// One field of the add-patient form.
///
/// The set is closed: names coming from outside are parsed with
/// [`FormField::from_str`], which rejects anything not listed here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FormField {
    #[default]
    FirstName,
    LastName,
    Email,
    Age,
    Address,
    EmergencyContact,
    MedicalHistory,
    Gender,
}

impl FormField {
    /// All fields in the order the add form displays them.
    pub const ALL: [FormField; 8] = [
        FormField::FirstName,
        FormField::LastName,
        FormField::Email,
        FormField::Age,
        FormField::Address,
        FormField::EmergencyContact,
        FormField::MedicalHistory,
        FormField::Gender,
    ];

    /// Boundary name of the field (camelCase).
    pub fn name(self) -> &'static str {
        match self {
            FormField::FirstName => "firstName",
            FormField::LastName => "lastName",
            FormField::Email => "email",
            FormField::Age => "age",
            FormField::Address => "address",
            FormField::EmergencyContact => "emergencyContact",
            FormField::MedicalHistory => "medicalHistory",
            FormField::Gender => "gender",
        }
    }

    /// Human-readable label, also used as the input placeholder.
    pub fn label(self) -> &'static str {
        match self {
            FormField::FirstName => "First Name",
            FormField::LastName => "Last Name",
            FormField::Email => "Email",
            FormField::Age => "Age",
            FormField::Address => "Address",
            FormField::EmergencyContact => "Emergency Contact",
            FormField::MedicalHistory => "Medical History",
            FormField::Gender => "Gender",
        }
    }

    /// Next field in display order, wrapping around.
    pub fn next(self) -> FormField {
        let index = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    /// True for the gender selector, which cycles through fixed options
    /// instead of accepting typed text.
    pub fn is_selector(self) -> bool {
        self == FormField::Gender
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FormField {
    type Err = FormError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        FormField::ALL
            .into_iter()
            .find(|field| field.name() == name)
            .ok_or_else(|| FormError::UnknownField {
                name: name.to_string(),
            })
    }
}

/// Add-patient form state. Every field is free text; age is never parsed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatientForm {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub age: String,
    pub gender: String,
    pub address: String,
    pub emergency_contact: String,
    pub medical_history: String,
}

impl PatientForm {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::FirstName => &self.first_name,
            FormField::LastName => &self.last_name,
            FormField::Email => &self.email,
            FormField::Age => &self.age,
            FormField::Address => &self.address,
            FormField::EmergencyContact => &self.emergency_contact,
            FormField::MedicalHistory => &self.medical_history,
            FormField::Gender => &self.gender,
        }
    }

    /// Replace one field, leaving the others untouched.
    pub fn set(&mut self, field: FormField, value: String) {
        let slot = match field {
            FormField::FirstName => &mut self.first_name,
            FormField::LastName => &mut self.last_name,
            FormField::Email => &mut self.email,
            FormField::Age => &mut self.age,
            FormField::Address => &mut self.address,
            FormField::EmergencyContact => &mut self.emergency_contact,
            FormField::MedicalHistory => &mut self.medical_history,
            FormField::Gender => &mut self.gender,
        };
        *slot = value;
    }

    /// True when every field is the empty string.
    pub fn is_empty(&self) -> bool {
        FormField::ALL.iter().all(|f| self.get(*f).is_empty())
    }

    /// Gender option following the current one in [`GENDER_OPTIONS`].
    ///
    /// A value outside the option list restarts the cycle at the placeholder.
    pub fn next_gender(&self) -> &'static str {
        let next = GENDER_OPTIONS
            .iter()
            .position(|g| *g == self.gender)
            .map(|i| (i + 1) % GENDER_OPTIONS.len())
            .unwrap_or(0);
        GENDER_OPTIONS[next]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_then_get_touches_only_that_field() {
        for field in FormField::ALL {
            let mut form = PatientForm::default();
            form.set(field, "value".to_string());

            assert_eq!(form.get(field), "value");
            for other in FormField::ALL.into_iter().filter(|f| *f != field) {
                assert_eq!(form.get(other), "", "{other} should be untouched");
            }
        }
    }

    #[test]
    fn test_parse_boundary_names() {
        assert_eq!("firstName".parse::<FormField>().unwrap(), FormField::FirstName);
        assert_eq!(
            "emergencyContact".parse::<FormField>().unwrap(),
            FormField::EmergencyContact
        );
        for field in FormField::ALL {
            assert_eq!(field.name().parse::<FormField>().unwrap(), field);
        }
    }

    #[test]
    fn test_parse_rejects_unknown_and_snake_case() {
        for name in ["first_name", "FirstName", "phone", ""] {
            let err = name.parse::<FormField>().unwrap_err();
            assert_eq!(
                err,
                FormError::UnknownField {
                    name: name.to_string()
                }
            );
        }
    }

    #[test]
    fn test_next_cycles_through_all_fields() {
        let mut field = FormField::FirstName;
        for expected in FormField::ALL.iter().skip(1) {
            field = field.next();
            assert_eq!(field, *expected);
        }
        assert_eq!(field.next(), FormField::FirstName);
    }

    #[test]
    fn test_gender_cycle() {
        let mut form = PatientForm::default();
        assert_eq!(form.next_gender(), "Male");
        form.gender = "Male".to_string();
        assert_eq!(form.next_gender(), "Female");
        form.gender = "Female".to_string();
        assert_eq!(form.next_gender(), "");
        form.gender = "Other".to_string();
        assert_eq!(form.next_gender(), "");
    }

    #[test]
    fn test_age_is_not_parsed() {
        let mut form = PatientForm::default();
        form.set(FormField::Age, "thirty".to_string());
        assert_eq!(form.age, "thirty");
    }

    #[test]
    fn test_is_empty() {
        let mut form = PatientForm::default();
        assert!(form.is_empty());
        form.set(FormField::Address, " ".to_string());
        assert!(!form.is_empty());
    }
}
