//! HTML rendering for the lookup form and its result panels.

use crate::dataset::LoadError;
use crate::lookup::{DefenseRecord, DefenseSchedule, LookupError};

const TITLE: &str = "Thesis Defense Lookup";
const INPUT_EXAMPLE: &str = "0987654321";

/// Escapes text for use in HTML element content and quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn page(query: &str, banner: Option<&LoadError>, panel: &str) -> String {
    let banner = banner
        .map(|e| {
            format!(
                r#"<div class="alert error">Error loading data: {}</div>"#,
                escape(&e.to_string())
            )
        })
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{TITLE}</title>
</head>
<body>
<h1>{TITLE}</h1>
{banner}
<p>Enter your identity number to see your defense details:</p>
<form method="get" action="/consulta">
<label for="cedula">Identity number:</label>
<input id="cedula" name="cedula" type="text" placeholder="Example: {INPUT_EXAMPLE}" value="{query}">
<button type="submit">Search</button>
</form>
{panel}
<hr>
<footer>Thesis defense lookup</footer>
</body>
</html>
"#,
        query = escape(query),
    )
}

/// The empty form.
pub fn index_page(load_error: Option<&LoadError>) -> String {
    page("", load_error, "")
}

/// The form followed by the outcome of a lookup.
pub fn result_page(
    query: &str,
    outcome: &Result<DefenseRecord, LookupError>,
    load_error: Option<&LoadError>,
) -> String {
    let panel = match outcome {
        Ok(record) => success_panel(record),
        Err(e) => error_panel(e),
    };
    page(query, load_error, &panel)
}

fn error_panel(err: &LookupError) -> String {
    let message = match err {
        LookupError::InvalidInput => "Please enter a valid identity number (digits only).",
        LookupError::DataUnavailable { .. } => "Data not available.",
        LookupError::NotFound { .. } => "No student was found with that identity number.",
    };
    let class = match err {
        LookupError::InvalidInput => "warning",
        _ => "error",
    };
    format!(r#"<div class="alert {class}">{}</div>"#, escape(message))
}

fn success_panel(record: &DefenseRecord) -> String {
    let mut html = format!(
        concat!(
            r#"<div class="alert success">Information found for: <strong>{}</strong></div>"#,
            "\n",
            r#"<p><strong>Thesis option:</strong> {}</p>"#,
            "\n",
        ),
        escape(&record.name),
        escape(&record.option),
    );

    match record.schedule {
        DefenseSchedule::Today => {
            html.push_str(r#"<div class="alert warning today">You have a defense TODAY!</div>"#);
            html.push_str(&format!(
                "\n<p><strong>Date:</strong> {}</p>\n<p><strong>Time:</strong> {}</p>\n",
                escape(&record.date),
                escape(&record.time),
            ));
            if record.has_link() {
                html.push_str(&format!(
                    r#"<p><a href="{}">Join the meeting</a></p>"#,
                    escape(&record.link)
                ));
            } else {
                html.push_str("<p>No meeting link has been published yet.</p>");
            }
        }
        DefenseSchedule::Scheduled => {
            html.push_str(&format!(
                r#"<div class="alert info">Next event: {} - {}</div>"#,
                escape(&record.date),
                escape(&record.time),
            ));
        }
        DefenseSchedule::NotScheduled => {
            html.push_str(
                r#"<div class="alert info">Your defense has not been scheduled yet.</div>"#,
            );
        }
    }

    html
}
