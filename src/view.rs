//! Page view model: the display tree the controller mutates.
//!
//! ARCHITECTURE
//! ============
//! `PageView` mirrors the page's regions: visibility of the four toggled
//! sections, the user-name label, and the contents of the two list regions.
//! Login and logout are the only entry points that change it. HTML output is
//! produced separately by `render`.
//!
//! Regions are a closed enum, so a handler can never address one that does
//! not exist.

use crate::catalog::{Announcement, Catalog, TrainingStatus};
use crate::session::{Role, Session};

/// Page sections whose visibility is toggled by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    LoginView,
    NavigationBar,
    StudentDashboard,
    TeacherDashboard,
}

impl Region {
    /// Element id of the region in the rendered document.
    #[must_use]
    pub fn element_id(self) -> &'static str {
        match self {
            Self::LoginView => "login-page",
            Self::NavigationBar => "main-navbar",
            Self::StudentDashboard => "student-dashboard",
            Self::TeacherDashboard => "teacher-dashboard",
        }
    }
}

/// One row of the training history table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainingRow {
    pub topic: String,
    pub hours: u32,
    pub label: &'static str,
    pub badge_class: &'static str,
}

impl TrainingRow {
    fn new(topic: &str, hours: u32, status: TrainingStatus) -> Self {
        Self { topic: topic.to_owned(), hours, label: status.label(), badge_class: status.badge_class() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    pub session: Session,
    pub login_visible: bool,
    pub navbar_visible: bool,
    pub student_dashboard_visible: bool,
    pub teacher_dashboard_visible: bool,
    pub user_name: String,
    pub news_list: Vec<Announcement>,
    pub training_rows: Vec<TrainingRow>,
}

impl Default for PageView {
    fn default() -> Self {
        Self::initial()
    }
}

impl PageView {
    /// The pre-login page: only the login region is visible.
    #[must_use]
    pub fn initial() -> Self {
        Self {
            session: Session::LoggedOut,
            login_visible: true,
            navbar_visible: false,
            student_dashboard_visible: false,
            teacher_dashboard_visible: false,
            user_name: String::new(),
            news_list: Vec::new(),
            training_rows: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_visible(&self, region: Region) -> bool {
        match region {
            Region::LoginView => self.login_visible,
            Region::NavigationBar => self.navbar_visible,
            Region::StudentDashboard => self.student_dashboard_visible,
            Region::TeacherDashboard => self.teacher_dashboard_visible,
        }
    }

    /// Apply a login with the given role token.
    ///
    /// Unrecognized tokens hide the login view and show the navbar but
    /// reveal no dashboard.
    pub fn select_role(&mut self, token: &str, catalog: &Catalog) {
        let session = Session::select_role(token);

        self.login_visible = false;
        self.navbar_visible = true;

        match session.role() {
            Some(Role::Student) => {
                self.student_dashboard_visible = true;
                self.render_announcements(catalog);
                self.render_training_history(catalog);
            }
            Some(Role::Teacher) => self.teacher_dashboard_visible = true,
            None => {}
        }

        self.user_name = session.display_name().unwrap_or_default().to_owned();
        self.session = session;
    }

    /// Discard all view state and return to the pre-login page.
    pub fn end_session(&mut self) {
        *self = Self::initial();
    }

    /// Replace the announcements region with the catalog's announcements.
    pub fn render_announcements(&mut self, catalog: &Catalog) {
        self.news_list.clear();
        self.news_list.extend(catalog.announcements.iter().cloned());
    }

    /// Replace the training table body with one row per catalog record.
    pub fn render_training_history(&mut self, catalog: &Catalog) {
        self.training_rows.clear();
        self.training_rows
            .extend(catalog.training.iter().map(|t| TrainingRow::new(&t.topic, t.hours, t.status)));
    }
}

#[cfg(test)]
#[path = "view_test.rs"]
mod tests;
