use patientdesk_core::{
    ActiveModal, ApiError, FormField, Launcher, Notice, RegisteredPatient, RegistrationPayload,
    Route, Router,
};

/// Main application state.
///
/// All fields are private - access state through the facade methods below.
pub struct AppState {
    /// Modal, form and search query.
    launcher: Launcher,

    /// Current route and back history.
    router: Router,

    /// Add-form field receiving keyboard input.
    add_focus: FormField,

    /// Blocking message awaiting acknowledgement.
    notice: Option<Notice>,

    /// True while a registration request is in flight.
    submitting: bool,

    /// Startup errors shown in the banner (config load failures).
    startup_errors: Vec<String>,
}

impl AppState {
    pub fn new(startup_errors: Vec<String>) -> Self {
        Self {
            launcher: Launcher::new(),
            router: Router::new(),
            add_focus: FormField::default(),
            notice: None,
            submitting: false,
            startup_errors,
        }
    }

    pub fn launcher(&self) -> &Launcher {
        &self.launcher
    }

    pub fn active_modal(&self) -> ActiveModal {
        self.launcher.active_modal()
    }

    /// Open a modal and put keyboard focus on its first input.
    pub fn open_modal(&mut self, modal: ActiveModal) {
        self.launcher.open_modal(modal);
        self.add_focus = FormField::default();
    }

    pub fn close_modal(&mut self) {
        self.launcher.close_modal();
        self.add_focus = FormField::default();
    }

    pub fn add_focus(&self) -> FormField {
        self.add_focus
    }

    pub fn focus_field(&mut self, field: FormField) {
        self.add_focus = field;
    }

    pub fn focus_next_field(&mut self) {
        self.add_focus = self.add_focus.next();
    }

    /// Append typed text to the input of the open modal.
    ///
    /// Control characters are dropped. The gender selector ignores typing.
    pub fn type_text(&mut self, text: &str) {
        let text: String = text.chars().filter(|c| !c.is_control()).collect();
        if text.is_empty() {
            return;
        }

        match self.launcher.active_modal() {
            ActiveModal::Add if !self.add_focus.is_selector() => {
                let mut value = self.launcher.form().get(self.add_focus).to_string();
                value.push_str(&text);
                self.launcher.update_field(self.add_focus, value);
            }
            ActiveModal::Search => {
                let mut query = self.launcher.username_query().to_string();
                query.push_str(&text);
                self.launcher.set_username_query(query);
            }
            _ => {}
        }
    }

    /// Delete the last character of the input of the open modal.
    pub fn backspace(&mut self) {
        match self.launcher.active_modal() {
            ActiveModal::Add if !self.add_focus.is_selector() => {
                let mut value = self.launcher.form().get(self.add_focus).to_string();
                if value.pop().is_some() {
                    self.launcher.update_field(self.add_focus, value);
                }
            }
            ActiveModal::Search => {
                let mut query = self.launcher.username_query().to_string();
                if query.pop().is_some() {
                    self.launcher.set_username_query(query);
                }
            }
            _ => {}
        }
    }

    /// Advance the gender selector to its next option.
    pub fn cycle_gender(&mut self) {
        let next = self.launcher.form().next_gender();
        self.launcher
            .update_field(FormField::Gender, next.to_string());
        self.add_focus = FormField::Gender;
    }

    pub fn registration_payload(&self) -> RegistrationPayload {
        self.launcher.registration_payload()
    }

    /// Apply a finished registration and show its notice.
    pub fn complete_add(&mut self, result: Result<RegisteredPatient, ApiError>) {
        let notice = self.launcher.complete_add(result);
        if self.launcher.active_modal() == ActiveModal::None {
            self.add_focus = FormField::default();
        }
        self.notice = Some(notice);
    }

    /// Navigate to the queried profile, or show why not.
    pub fn submit_search(&mut self) {
        if let Err(notice) = self.launcher.submit_search(&mut self.router) {
            self.notice = Some(notice);
        }
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn set_submitting(&mut self) {
        self.submitting = true;
    }

    pub fn clear_submitting(&mut self) {
        self.submitting = false;
    }

    pub fn route(&self) -> &Route {
        self.router.current()
    }

    /// Go back one route. Returns false if already at the start.
    pub fn navigate_back(&mut self) -> bool {
        self.router.back()
    }

    pub fn has_banner_errors(&self) -> bool {
        !self.startup_errors.is_empty()
    }

    pub fn banner_errors(&self) -> &[String] {
        &self.startup_errors
    }

    pub fn dismiss_errors(&mut self) {
        self.startup_errors.clear();
    }
}
