//! Status verdicts and message rendering
//!
//! The verdict table is built once from the configured locale and handed to the
//! poller by reference. Everything here is pure.

use serde::{Deserialize, Serialize};

use crate::homework::{Homework, HomeworkStatus};

/// Language of outgoing messages
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Locale {
    #[default]
    En,
    Ru,
}

/// Fixed verdict texts and message templates for one locale
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerdictTable {
    locale: Locale,
    approved: &'static str,
    reviewing: &'static str,
    rejected: &'static str,
}

impl VerdictTable {
    pub fn new(locale: Locale) -> Self {
        match locale {
            Locale::En => Self {
                locale,
                approved: "The work has been reviewed: the reviewer liked everything. Hooray!",
                reviewing: "The work has been taken for review.",
                rejected: "The work has been reviewed: the reviewer has remarks.",
            },
            Locale::Ru => Self {
                locale,
                approved: "Работа проверена: ревьюеру всё понравилось. Ура!",
                reviewing: "Работа взята на проверку ревьюером.",
                rejected: "Работа проверена: у ревьюера есть замечания.",
            },
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Verdict text for a status
    pub fn verdict(&self, status: HomeworkStatus) -> &'static str {
        match status {
            HomeworkStatus::Approved => self.approved,
            HomeworkStatus::Reviewing => self.reviewing,
            HomeworkStatus::Rejected => self.rejected,
        }
    }

    /// Render the status-change message for a validated record
    pub fn translate(&self, homework: &Homework) -> String {
        let verdict = self.verdict(homework.status);
        match self.locale {
            Locale::En => format!("Status for \"{}\" changed. {}", homework.name, verdict),
            Locale::Ru => format!(
                "Изменился статус проверки работы \"{}\". {}",
                homework.name, verdict
            ),
        }
    }

    /// Render the diagnostic sent when a cycle fails
    pub fn diagnostic(&self, details: &str) -> String {
        match self.locale {
            Locale::En => format!("Error: {}", details),
            Locale::Ru => format!("Ошибка: {}", details),
        }
    }
}

impl Default for VerdictTable {
    fn default() -> Self {
        Self::new(Locale::default())
    }
}
