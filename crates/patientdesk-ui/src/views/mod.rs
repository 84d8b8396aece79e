//! View components for patientdesk-ui.
//!
//! This module contains the view layer of the application:
//! - `main_view` - Root view that composes header, tiles, modals and notices
//! - `launcher_tiles` - The Add/Search/Update/Remove action tiles
//! - `modal` - Generic overlay that hosts the forms
//! - `add_patient_form` - Registration form shown in the Add modal
//! - `search_form` - Username lookup shown in the Search modal
//! - `notice_dialog` - Blocking alert with an OK button
//! - `profile_view` - Placeholder for the patient profile route

pub mod add_patient_form;
pub mod launcher_tiles;
pub mod main_view;
pub mod modal;
pub mod notice_dialog;
pub mod profile_view;
pub mod search_form;

pub use main_view::MainView;
