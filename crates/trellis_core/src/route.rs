//! Navigation surface: path to route mapping.
//!
//! Rendering and navigation stay outside this crate; unknown paths
//! map to the generic error route.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Dashboard,
    Projects,
    Tasks,
    TeamManagement,
    Login,
    /// Generic error view for unknown paths.
    Error,
}

impl Route {
    pub fn from_path(path: &str) -> Self {
        match path {
            "/" => Self::Dashboard,
            "/projects" => Self::Projects,
            "/tasks" => Self::Tasks,
            "/team/management" => Self::TeamManagement,
            "/login" => Self::Login,
            _ => Self::Error,
        }
    }

    /// Canonical path for the route; `None` for the error route.
    pub fn path(self) -> Option<&'static str> {
        match self {
            Self::Dashboard => Some("/"),
            Self::Projects => Some("/projects"),
            Self::Tasks => Some("/tasks"),
            Self::TeamManagement => Some("/team/management"),
            Self::Login => Some("/login"),
            Self::Error => None,
        }
    }
}
