use std::fmt;

use serde::{Deserialize, Serialize};

use super::form::PatientForm;

/// JSON body of `POST /api/patients/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationPayload {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub age: String,
    pub gender: String,
    pub address: String,
    pub emergency_contact: String,
    pub medical_history: String,
}

impl From<&PatientForm> for RegistrationPayload {
    fn from(form: &PatientForm) -> Self {
        Self {
            first_name: form.first_name.clone(),
            last_name: form.last_name.clone(),
            email: form.email.clone(),
            age: form.age.clone(),
            gender: form.gender.clone(),
            address: form.address.clone(),
            emergency_contact: form.emergency_contact.clone(),
            medical_history: form.medical_history.clone(),
        }
    }
}

/// Credentials the backend generated for a newly registered patient.
#[derive(Clone, PartialEq, Deserialize)]
pub struct RegisteredPatient {
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub message: Option<String>,
    /// Serialized patient record, passed through untouched.
    #[serde(default)]
    pub patient: Option<serde_json::Value>,
}

// Password stays out of Debug so it never reaches the logs.
impl fmt::Debug for RegisteredPatient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisteredPatient")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_payload_maps_camel_case_form_to_snake_case() {
        let form = PatientForm {
            first_name: "Ann".to_string(),
            last_name: "Lee".to_string(),
            email: "a@x.com".to_string(),
            age: "30".to_string(),
            gender: "Female".to_string(),
            address: "1 Rd".to_string(),
            emergency_contact: "Bob".to_string(),
            medical_history: "None".to_string(),
        };

        let payload = serde_json::to_value(RegistrationPayload::from(&form)).unwrap();
        assert_eq!(
            payload,
            json!({
                "first_name": "Ann",
                "last_name": "Lee",
                "email": "a@x.com",
                "age": "30",
                "gender": "Female",
                "address": "1 Rd",
                "emergency_contact": "Bob",
                "medical_history": "None",
            })
        );
    }

    #[test]
    fn test_registered_patient_ignores_extra_fields() {
        let body = json!({
            "message": "Patient created successfully",
            "username": "pat_1a2b3c",
            "password": "s3cretpw",
            "patient": {"age": "30"},
            "unexpected": true,
        });
        let patient: RegisteredPatient = serde_json::from_value(body).unwrap();
        assert_eq!(patient.username, "pat_1a2b3c");
        assert_eq!(patient.password, "s3cretpw");
        assert_eq!(
            patient.message.as_deref(),
            Some("Patient created successfully")
        );
    }

    #[test]
    fn test_registered_patient_debug_redacts_password() {
        let patient = RegisteredPatient {
            username: "u1".to_string(),
            password: "p1-secret".to_string(),
            message: None,
            patient: None,
        };
        let debug = format!("{patient:?}");
        assert!(debug.contains("u1"));
        assert!(!debug.contains("p1-secret"));
    }
}
