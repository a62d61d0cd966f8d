//! Session: who is looking at the page.
//!
//! DESIGN
//! ======
//! The page has no accounts. Picking a role on the login form moves the
//! session out of `LoggedOut`; logging out resets it. A role token that is
//! neither `student` nor `teacher` is kept as `Unrecognized` so the
//! "navbar shown, no dashboard" state is explicit rather than a gap.

/// Display name shown for the student role.
pub const STUDENT_DISPLAY_NAME: &str = "นศ. สมชาย ใจดี";

/// Display name shown for every non-student login.
pub const TEACHER_DISPLAY_NAME: &str = "อ. วิชาญ รักเรียน";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Student,
    Teacher,
}

impl Role {
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "student" => Some(Self::Student),
            "teacher" => Some(Self::Teacher),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Teacher => "teacher",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Session {
    #[default]
    LoggedOut,
    LoggedIn(Role),
    /// Logged in with a role token that matches no dashboard.
    Unrecognized(String),
}

impl Session {
    /// Resolve the session produced by submitting `token` on the login form.
    #[must_use]
    pub fn select_role(token: &str) -> Self {
        Role::parse(token).map_or_else(|| Self::Unrecognized(token.to_owned()), Self::LoggedIn)
    }

    #[must_use]
    pub fn role(&self) -> Option<Role> {
        match self {
            Self::LoggedIn(role) => Some(*role),
            Self::LoggedOut | Self::Unrecognized(_) => None,
        }
    }

    /// Name for the navbar label. Only the student role gets the student
    /// name; any other login, recognized or not, shows the teacher name.
    #[must_use]
    pub fn display_name(&self) -> Option<&'static str> {
        match self {
            Self::LoggedOut => None,
            Self::LoggedIn(Role::Student) => Some(STUDENT_DISPLAY_NAME),
            Self::LoggedIn(Role::Teacher) | Self::Unrecognized(_) => Some(TEACHER_DISPLAY_NAME),
        }
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
