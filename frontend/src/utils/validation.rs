use chrono::NaiveDate;
use regex::Regex;
use std::sync::OnceLock;

const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$";

fn email_regex() -> Option<&'static Regex> {
    static EMAIL: OnceLock<Option<Regex>> = OnceLock::new();
    EMAIL
        .get_or_init(|| match Regex::new(EMAIL_PATTERN) {
            Ok(re) => Some(re),
            Err(err) => {
                log::error!("email pattern failed to compile: {}", err);
                None
            }
        })
        .as_ref()
}

pub fn is_valid_email(value: &str) -> bool {
    email_regex().is_some_and(|re| re.is_match(value.trim()))
}

/// Validation messages keyed by field, in field order. Empty means valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldErrors<F> {
    entries: Vec<(F, String)>,
}

impl<F> Default for FieldErrors<F> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<F: Copy + PartialEq> FieldErrors<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces any message already recorded for `field`.
    pub fn insert(&mut self, field: F, message: impl Into<String>) {
        let message = message.into();
        match self.entries.iter_mut().find(|(f, _)| *f == field) {
            Some(entry) => entry.1 = message,
            None => self.entries.push((field, message)),
        }
    }

    pub fn remove(&mut self, field: F) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(f, _)| *f != field);
        before != self.entries.len()
    }

    pub fn get(&self, field: F) -> Option<&str> {
        self.entries
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, msg)| msg.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (F, &str)> {
        self.entries.iter().map(|(f, msg)| (*f, msg.as_str()))
    }
}

/// Parses an `<input type="date">` value; blank input is `Ok(None)`.
pub fn parse_date_input(value: &str) -> Result<Option<NaiveDate>, chrono::ParseError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map(Some)
}
