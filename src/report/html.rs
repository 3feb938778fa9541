//! HTML rendering for the report table.
//!
//! The styling follows the established report format: alternating row
//! colours, a yellow hover highlight, a blue header, and a red highlight on
//! missing cells.

use std::fmt::Write;

use crate::{
    domain::{Record, Ticket},
    report::ReportTable,
};

/// Stylesheet for the report table.
const STYLE: &str = "\
table { border-collapse: collapse; }
tr:nth-child(odd) { background: #E9EDF4; }
tr:nth-child(even) { background: #D0D8E8; }
tr:hover { background-color: yellow; }
th { font-size: 14pt; text-align: center; font-weight: bold; color: white; background-color: #4F81BD; }
td { font-size: 12pt; padding: 5px; }
td.missing { background-color: red; }
";

/// Renders the table as a complete HTML document.
#[must_use]
pub fn render(table: &ReportTable) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\"/>\n");
    html.push_str("<title>Requirements</title>\n<style>\n");
    html.push_str(STYLE);
    html.push_str("</style>\n</head>\n<body>\n<table>\n<thead>\n<tr>");
    for column in ReportTable::COLUMNS {
        write!(html, "<th>{}</th>", escape(column)).expect("writing to a String cannot fail");
    }
    html.push_str("</tr>\n</thead>\n<tbody>\n");

    for record in table.records() {
        html.push_str("<tr>");
        push_row(&mut html, record);
        html.push_str("</tr>\n");
    }

    html.push_str("</tbody>\n</table>\n</body>\n</html>\n");
    html
}

fn push_row(html: &mut String, record: &Record) {
    match record.id() {
        Some(id) => push_cell(html, &id.to_string()),
        None => push_missing_cell(html),
    }

    match record {
        Record::Requirement(requirement) => {
            push_cell(html, &escape(requirement.description()));
            push_cell(html, &escape(&requirement.source_file().display().to_string()));
            match requirement.ticket() {
                Some(ticket) => push_cell(html, &ticket_cell(ticket)),
                None => push_missing_cell(html),
            }
        }
        Record::NoRequirements { source_file } => {
            push_missing_cell(html);
            push_cell(html, &escape(&source_file.display().to_string()));
            push_missing_cell(html);
        }
    }
}

fn push_cell(html: &mut String, content: &str) {
    html.push_str("<td>");
    html.push_str(content);
    html.push_str("</td>");
}

fn push_missing_cell(html: &mut String) {
    html.push_str("<td class=\"missing\"></td>");
}

/// Renders a ticket reference: one anchor per canonical URL, labelled with
/// `#` plus the ticket number (the URL's last path segment); free text passes
/// through escaped but otherwise unmodified.
fn ticket_cell(ticket: &Ticket) -> String {
    match ticket {
        Ticket::Links(urls) => {
            let mut cell = String::new();
            for url in urls {
                let number = url.rsplit('/').next().unwrap_or(url);
                write!(cell, "<a href=\"{}\">&#35;{}</a><br/>", escape(url), escape(number))
                    .expect("writing to a String cannot fail");
            }
            cell
        }
        Ticket::FreeText(text) => escape(text),
    }
}

/// Escapes text for inclusion in HTML element or attribute content.
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use regex::Regex;

    use super::render;
    use crate::{
        domain::{Record, Requirement, Ticket},
        report::ReportTable,
    };

    const BASE: &str = "https://vminfo.casl.gov/trac/casl_phi_kanban/ticket";

    fn requirement(id: u64, description: &str, ticket: Option<Ticket>) -> Record {
        Record::Requirement(Requirement {
            id,
            description: description.to_string(),
            ticket,
            source_file: PathBuf::from("tests/widget.f90"),
        })
    }

    #[test]
    fn numeric_ticket_renders_as_anchor() {
        let ticket = Ticket::parse("4521", BASE);
        let table = ReportTable::new(vec![requirement(1, "Widget must rotate", Some(ticket))]);

        let html = render(&table);
        assert!(html.contains(&format!("<a href=\"{BASE}/4521\">&#35;4521</a>")));
    }

    #[test]
    fn free_text_ticket_passes_through() {
        let ticket = Ticket::FreeText("see design doc".to_string());
        let table = ReportTable::new(vec![requirement(1, "Widget", Some(ticket))]);

        let html = render(&table);
        assert!(html.contains("see design doc"));
        assert!(!html.contains("<a href"));
    }

    #[test]
    fn missing_values_are_highlighted() {
        let table = ReportTable::new(vec![Record::NoRequirements {
            source_file: PathBuf::from("tests/empty.f90"),
        }]);

        let html = render(&table);
        // id, description, and ticket cells are all flagged
        assert_eq!(html.matches("<td class=\"missing\">").count(), 3);
        assert!(html.contains("tests/empty.f90"));
    }

    #[test]
    fn dynamic_text_is_escaped() {
        let table = ReportTable::new(vec![requirement(1, "speed < 10 & > 5", None)]);

        let html = render(&table);
        assert!(html.contains("speed &lt; 10 &amp; &gt; 5"));
    }

    #[test]
    fn header_contains_all_columns_in_order() {
        let table = ReportTable::new(Vec::new());
        let html = render(&table);

        let id = html.find("Requirement ID").unwrap();
        let description = html.find("Requirement Description").unwrap();
        let file = html.find("Test File").unwrap();
        let info = html.find("Additional Information").unwrap();
        assert!(id < description && description < file && file < info);
    }

    #[test]
    fn anchor_numbers_round_trip() {
        let ticket = Ticket::parse("12 and 34", BASE);
        let table = ReportTable::new(vec![requirement(1, "Widget", Some(ticket))]);
        let html = render(&table);

        let re = Regex::new(r#"<a href="[^"]*/([0-9]+)">"#).unwrap();
        let scraped: Vec<_> = re
            .captures_iter(&html)
            .map(|c| c[1].to_string())
            .collect();
        assert_eq!(scraped, vec!["12".to_string(), "34".to_string()]);
    }
}
