use crate::credentials::{self, CredentialStore};
use crate::navigation::{Navigator, Route};
use crate::patients::{
    ApiError, FormError, FormField, PatientApi, PatientForm, RegisteredPatient,
    RegistrationPayload,
};

use super::modal::ActiveModal;
use super::notice::Notice;

/// Landing-page state: open modal, add form, search query.
///
/// All fields are private; every mutation goes through the methods below.
#[derive(Debug, Default)]
pub struct Launcher {
    active_modal: ActiveModal,
    form: PatientForm,
    username_query: String,
}

impl Launcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_modal(&self) -> ActiveModal {
        self.active_modal
    }

    pub fn form(&self) -> &PatientForm {
        &self.form
    }

    pub fn username_query(&self) -> &str {
        &self.username_query
    }

    /// Show a modal. Replaces whatever was open; modals do not stack.
    pub fn open_modal(&mut self, modal: ActiveModal) {
        tracing::debug!(
            event = "core.launcher.modal_opened",
            modal = %modal,
            previous = %self.active_modal
        );
        self.active_modal = modal;
    }

    /// Hide the modal and reset the form and the search query.
    pub fn close_modal(&mut self) {
        tracing::debug!(event = "core.launcher.modal_closed", modal = %self.active_modal);
        self.active_modal = ActiveModal::None;
        self.form = PatientForm::default();
        self.username_query.clear();
    }

    pub fn update_field(&mut self, field: FormField, value: String) {
        self.form.set(field, value);
    }

    /// [`update_field`](Self::update_field) keyed by the camelCase field name.
    pub fn update_field_by_name(&mut self, name: &str, value: String) -> Result<(), FormError> {
        let field = name.parse::<FormField>().inspect_err(|e| {
            tracing::warn!(event = "core.launcher.unknown_field", error = %e);
        })?;
        self.update_field(field, value);
        Ok(())
    }

    pub fn set_username_query(&mut self, query: String) {
        self.username_query = query;
    }

    /// Snapshot of the form as the registration request body.
    pub fn registration_payload(&self) -> RegistrationPayload {
        RegistrationPayload::from(&self.form)
    }

    /// Register the patient in the form and report the outcome.
    ///
    /// The access token is read from `credentials` right before the request.
    /// Blocks for the duration of the request.
    pub fn submit_add(
        &mut self,
        api: &dyn PatientApi,
        credentials: &dyn CredentialStore,
    ) -> Notice {
        let payload = self.registration_payload();
        let token = credentials::access_token(credentials);
        let result = api.register_patient(&payload, token.as_deref());
        self.complete_add(result)
    }

    /// Apply the result of a registration request.
    ///
    /// Success closes the modal. Failure leaves modal and form untouched so
    /// the user can retry without re-entering data.
    pub fn complete_add(&mut self, result: Result<RegisteredPatient, ApiError>) -> Notice {
        match result {
            Ok(patient) => {
                tracing::info!(
                    event = "core.launcher.patient_registered",
                    username = %patient.username
                );
                self.close_modal();
                Notice::from(patient)
            }
            Err(error) => {
                tracing::warn!(
                    event = "core.launcher.add_failed",
                    status = ?error.status,
                    detail = %error
                );
                Notice::AddFailed(error)
            }
        }
    }

    /// Navigate to the profile of the queried username.
    ///
    /// The query is trimmed. An empty query yields
    /// [`Notice::MissingUsername`] and changes nothing.
    pub fn submit_search(&mut self, navigator: &mut dyn Navigator) -> Result<Route, Notice> {
        let username = self.username_query.trim();
        if username.is_empty() {
            tracing::info!(event = "core.launcher.search_rejected", reason = "empty username");
            return Err(Notice::MissingUsername);
        }

        let route = Route::patient_profile(username);
        navigator.navigate(route.clone());
        self.close_modal();
        Ok(route)
    }
}
