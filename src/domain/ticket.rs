use std::sync::LazyLock;

use regex::Regex;

/// Matches a run of digits within a raw ticket value.
static RE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").expect("hard-coded pattern is valid"));

/// An external issue-tracker reference attached to a requirement.
///
/// Raw ticket values that begin with a digit are interpreted as one or more
/// ticket numbers: every run of digits is extracted and expanded to a
/// canonical URL. Anything else is carried verbatim as free text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ticket {
    /// Canonical ticket URLs, one per ticket number, in source order.
    Links(Vec<String>),
    /// A ticket reference that is not a plain number, kept verbatim.
    FreeText(String),
}

impl Ticket {
    /// Parses a raw ticket value, expanding numeric references against
    /// `base_url`.
    ///
    /// The numeric interpretation is anchored at the start of the value:
    /// `12 and 34` yields two links, while `see ticket 12` is free text.
    #[must_use]
    pub fn parse(raw: &str, base_url: &str) -> Self {
        let raw = raw.trim_end();
        if raw.starts_with(|c: char| c.is_ascii_digit()) {
            let links = RE_NUMBER
                .find_iter(raw)
                .map(|number| format!("{}/{}", base_url.trim_end_matches('/'), number.as_str()))
                .collect();
            Self::Links(links)
        } else {
            Self::FreeText(raw.to_string())
        }
    }

    /// The canonical URLs, if this reference is numeric.
    #[must_use]
    pub fn urls(&self) -> Option<&[String]> {
        match self {
            Self::Links(urls) => Some(urls),
            Self::FreeText(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Ticket;

    const BASE: &str = "https://vminfo.casl.gov/trac/casl_phi_kanban/ticket";

    #[test]
    fn single_number_expands_to_one_url() {
        let ticket = Ticket::parse("4521", BASE);
        assert_eq!(
            ticket,
            Ticket::Links(vec![format!("{BASE}/4521")]),
        );
    }

    #[test]
    fn multiple_digit_runs_expand_in_order() {
        let ticket = Ticket::parse("12 and 34", BASE);
        assert_eq!(
            ticket,
            Ticket::Links(vec![format!("{BASE}/12"), format!("{BASE}/34")]),
        );
    }

    #[test]
    fn free_text_passes_through() {
        let ticket = Ticket::parse("see design doc", BASE);
        assert_eq!(ticket, Ticket::FreeText("see design doc".to_string()));
        assert_eq!(ticket.urls(), None);
    }

    #[test]
    fn numeric_detection_is_anchored_at_start() {
        // A value that merely contains digits is not a ticket number.
        let ticket = Ticket::parse("see ticket 12", BASE);
        assert_eq!(ticket, Ticket::FreeText("see ticket 12".to_string()));
    }

    #[test]
    fn trailing_whitespace_is_stripped() {
        let ticket = Ticket::parse("4521   ", BASE);
        assert_eq!(ticket, Ticket::Links(vec![format!("{BASE}/4521")]));
    }

    #[test]
    fn base_url_trailing_slash_is_normalised() {
        let ticket = Ticket::parse("7", "https://tracker.example.com/ticket/");
        assert_eq!(
            ticket,
            Ticket::Links(vec!["https://tracker.example.com/ticket/7".to_string()]),
        );
    }
}
