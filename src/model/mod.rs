mod blog;
mod project;
mod service;
mod team;

pub use blog::{sample_posts, BlogPost};
pub use project::{sample_projects, Project, ProjectStatus};
pub use service::{sample_services, Service};
pub use team::{sample_team, TeamMember};

use chrono::{Datelike, NaiveDate};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("service record {0} is incomplete")]
    InvalidService(u32),
    #[error("team member record {0} is incomplete")]
    InvalidMember(u32),
    #[error("project record {0} is incomplete")]
    InvalidProject(u32),
    #[error("blog post record {0} is incomplete")]
    InvalidPost(u32),
}

const MONTHS_ES: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

pub(crate) fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Long-form Spanish date, e.g. "15 de febrero de 2026".
pub fn format_date_es(date: NaiveDate) -> String {
    format!(
        "{} de {} de {}",
        date.day(),
        MONTHS_ES[date.month0() as usize],
        date.year()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spanish_long_date() {
        let date = parse_date("2026-02-15").unwrap();
        assert_eq!(format_date_es(date), "15 de febrero de 2026");
    }

    #[test]
    fn all_sample_sets_validate() {
        assert!(sample_services().is_ok());
        assert!(sample_team().is_ok());
        assert!(sample_projects().is_ok());
        assert!(sample_posts().is_ok());
    }
}
