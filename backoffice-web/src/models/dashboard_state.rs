use yewdux::{Dispatch, Store};

/// Layout-wide UI flags. Reset when the session ends.
#[derive(Debug, Default, Clone, PartialEq, Eq, Store)]
pub struct DashboardState {
    pub notifications_open: bool,
    /// Path seen by the last [`DashboardState::navigated`] call.
    pub last_path: Option<String>,
}

impl DashboardState {
    pub fn toggled(&self) -> Self {
        Self {
            notifications_open: !self.notifications_open,
            ..self.clone()
        }
    }

    /// Record the current location. Moving to a different path closes the
    /// slideover; re-rendering the same path leaves it alone.
    pub fn navigated(&mut self, path: &str) {
        if self.last_path.as_deref() != Some(path) {
            self.notifications_open = false;
            self.last_path = Some(path.to_string());
        }
    }

    /// Drop everything tied to the ended session.
    pub fn reset(dispatch: &Dispatch<Self>) {
        dispatch.set(Self::default());
    }
}
