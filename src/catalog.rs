//! Catalog: the constant announcement and training data shown to students.
//!
//! DESIGN
//! ======
//! Both record sets are fixed at startup and never mutated. Declaration order
//! is display order; nothing sorts or filters them. `AppState` shares a single
//! `Catalog` behind an `Arc`.

use serde::{Deserialize, Serialize};

// =============================================================================
// ANNOUNCEMENTS
// =============================================================================

/// A news item on the student dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Announcement {
    pub title: String,
    /// Calendar date kept as display text (`YYYY-MM-DD`).
    pub date: String,
}

impl Announcement {
    #[must_use]
    pub fn new(title: &str, date: &str) -> Self {
        Self { title: title.to_owned(), date: date.to_owned() }
    }
}

// =============================================================================
// TRAINING
// =============================================================================

/// Approval state of a training record.
///
/// Only `APPROVED` is recognized explicitly; every other code parses as
/// `Pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum TrainingStatus {
    Approved,
    Pending,
}

impl TrainingStatus {
    #[must_use]
    pub fn parse(code: &str) -> Self {
        if code == "APPROVED" { Self::Approved } else { Self::Pending }
    }

    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Approved => "APPROVED",
            Self::Pending => "PENDING",
        }
    }

    /// Thai display label for the status badge.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Approved => "อนุมัติแล้ว",
            Self::Pending => "รอตรวจสอบ",
        }
    }

    /// CSS modifier class for the status badge.
    #[must_use]
    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Approved => "badge-approved",
            Self::Pending => "badge-pending",
        }
    }
}

impl From<String> for TrainingStatus {
    fn from(code: String) -> Self {
        Self::parse(&code)
    }
}

impl From<TrainingStatus> for &'static str {
    fn from(status: TrainingStatus) -> Self {
        status.code()
    }
}

/// A logged training activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrainingRecord {
    pub topic: String,
    pub hours: u32,
    pub status: TrainingStatus,
}

impl TrainingRecord {
    #[must_use]
    pub fn new(topic: &str, hours: u32, status: &str) -> Self {
        Self { topic: topic.to_owned(), hours, status: TrainingStatus::parse(status) }
    }
}

/// Hour totals across a training history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrainingSummary {
    pub total_hours: u32,
    pub approved_hours: u32,
}

// =============================================================================
// CATALOG
// =============================================================================

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub announcements: Vec<Announcement>,
    pub training: Vec<TrainingRecord>,
}

impl Catalog {
    /// The demo data set shipped with the page.
    #[must_use]
    pub fn demo() -> Self {
        Self {
            announcements: vec![
                Announcement::new("แจ้งกำหนดการส่งเอกสารสหกิจ", "2023-10-01"),
                Announcement::new("บริษัท ABC เปิดรับสมัครนักศึกษาฝึกงาน", "2023-10-05"),
            ],
            training: vec![
                TrainingRecord::new("การเขียนเรซูเม่", 3, "APPROVED"),
                TrainingRecord::new("ทักษะการสัมภาษณ์งาน", 3, "PENDING"),
            ],
        }
    }

    #[must_use]
    pub fn training_summary(&self) -> TrainingSummary {
        let total_hours = self.training.iter().map(|t| t.hours).sum();
        let approved_hours = self
            .training
            .iter()
            .filter(|t| t.status == TrainingStatus::Approved)
            .map(|t| t.hours)
            .sum();
        TrainingSummary { total_hours, approved_hours }
    }
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
