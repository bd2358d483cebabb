//! Dashboard DTOs

use serde::Serialize;

use crate::domain::course::Course;
use crate::domain::services::trim_words;
use crate::error::CatalogError;

/// Word limit for card descriptions
const DESCRIPTION_WORD_LIMIT: usize = 20;

/// Fallback title for unnamed courses
const UNTITLED_COURSE: &str = "Untitled Course";

/// Dashboard page body, composed into the page shell by the host
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardBody {
    /// Greeting line for the signed-in visitor
    pub welcome: String,
    /// Inline notice replacing the card grid, when the catalog call did
    /// not produce anything renderable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<NoticeBody>,
    pub courses: Vec<CourseCard>,
}

/// One of the three disjoint catalog notices
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NoticeBody {
    pub heading: String,
    pub message: String,
}

/// One course card
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseCard {
    pub title: String,
    /// Truncated description; absent when the record carries none
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Minutes; absent when missing or zero
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    /// Price; absent when missing or zero
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

impl NoticeBody {
    fn fetch_error(reason: String) -> Self {
        Self {
            heading: "Error fetching courses".to_string(),
            message: reason,
        }
    }

    fn parse_error() -> Self {
        Self {
            heading: "Error parsing course data".to_string(),
            message: "The API returned invalid data. Please try again later.".to_string(),
        }
    }

    fn empty_catalog() -> Self {
        Self {
            heading: "No courses available".to_string(),
            message: "There are currently no courses available. Please check back later."
                .to_string(),
        }
    }
}

impl CourseCard {
    pub fn from_course(course: &Course) -> Self {
        let title = course
            .name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(UNTITLED_COURSE)
            .to_string();

        let description = course
            .description
            .as_deref()
            .filter(|text| !text.is_empty())
            .map(|text| trim_words(text, DESCRIPTION_WORD_LIMIT, "..."));

        Self {
            title,
            description,
            duration: course.duration.filter(|minutes| *minutes != 0.0),
            price: course.rrp.filter(|price| *price != 0.0),
        }
    }
}

impl DashboardBody {
    /// Build the page body from the catalog result: cards on success,
    /// exactly one notice otherwise (including the valid-but-empty case).
    pub fn from_catalog(display_name: &str, result: Result<Vec<Course>, CatalogError>) -> Self {
        let welcome = format!("Welcome, {display_name}!");

        match result {
            Err(CatalogError::Transport(reason)) => Self {
                welcome,
                notice: Some(NoticeBody::fetch_error(reason)),
                courses: Vec::new(),
            },
            Err(CatalogError::Malformed) => Self {
                welcome,
                notice: Some(NoticeBody::parse_error()),
                courses: Vec::new(),
            },
            Ok(courses) if courses.is_empty() => Self {
                welcome,
                notice: Some(NoticeBody::empty_catalog()),
                courses: Vec::new(),
            },
            Ok(courses) => Self {
                welcome,
                notice: None,
                courses: courses.iter().map(CourseCard::from_course).collect(),
            },
        }
    }
}
