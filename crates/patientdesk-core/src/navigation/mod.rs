//! Client-side routes reachable from the landing page.

use std::fmt;

/// A navigation target.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    /// The landing page with the action tiles.
    #[default]
    Home,
    /// Profile page of one patient, keyed by username.
    PatientProfile { username: String },
}

impl Route {
    pub fn patient_profile(username: impl Into<String>) -> Self {
        Route::PatientProfile {
            username: username.into(),
        }
    }

    /// Path form of the route. The username is inserted as-is, unescaped.
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::PatientProfile { username } => format!("/patient-profile/{username}"),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Capability to move the application to another route.
pub trait Navigator {
    fn navigate(&mut self, route: Route);
}

/// In-process router with back history.
#[derive(Debug, Default)]
pub struct Router {
    current: Route,
    history: Vec<Route>,
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> &Route {
        &self.current
    }

    /// Return to the previous route. Returns false if there is no history.
    pub fn back(&mut self) -> bool {
        match self.history.pop() {
            Some(previous) => {
                tracing::info!(
                    event = "core.router.back",
                    from = %self.current,
                    to = %previous
                );
                self.current = previous;
                true
            }
            None => false,
        }
    }
}

impl Navigator for Router {
    fn navigate(&mut self, route: Route) {
        tracing::info!(event = "core.router.navigate", path = %route);
        let previous = std::mem::replace(&mut self.current, route);
        self.history.push(previous);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_path() {
        assert_eq!(
            Route::patient_profile("bob").path(),
            "/patient-profile/bob"
        );
        assert_eq!(Route::Home.to_string(), "/");
    }

    #[test]
    fn test_profile_path_is_unescaped() {
        assert_eq!(
            Route::patient_profile("a b/c").path(),
            "/patient-profile/a b/c"
        );
    }

    #[test]
    fn test_router_navigate_and_back() {
        let mut router = Router::new();
        assert_eq!(router.current(), &Route::Home);
        assert!(!router.back());

        router.navigate(Route::patient_profile("pat_1"));
        assert_eq!(router.current(), &Route::patient_profile("pat_1"));

        assert!(router.back());
        assert_eq!(router.current(), &Route::Home);
        assert!(!router.back());
    }
}
