//! Landing-page state machine.
//!
//! [`Launcher`] owns which modal is open, the add-patient form and the
//! search query. It is GPUI-independent: views read it and call its
//! operations, side effects are injected through [`PatientApi`],
//! [`CredentialStore`] and [`Navigator`].
//!
//! [`PatientApi`]: crate::patients::PatientApi
//! [`CredentialStore`]: crate::credentials::CredentialStore
//! [`Navigator`]: crate::navigation::Navigator

pub mod modal;
pub mod notice;
pub mod state;

pub use modal::ActiveModal;
pub use notice::{Notice, NoticeKind};
pub use state::Launcher;
