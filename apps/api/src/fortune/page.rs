//! Server-rendered HTML for the fortune form. Errors render inline on the same page.

use std::fmt::Write;

use crate::fortune::service::{FortuneOutcome, MIN_BIRTH_YEAR};
use crate::numerology::LifePathNumber;

/// Values echoed back into the form inputs.
#[derive(Debug, Default)]
pub struct FormValues<'a> {
    pub birthdate: &'a str,
    pub reference_date: &'a str,
    pub session_id: &'a str,
}

#[derive(Debug)]
pub enum PageContent<'a> {
    Blank,
    Outcome(&'a FortuneOutcome),
    Error {
        life_path: Option<LifePathNumber>,
        message: &'a str,
    },
}

pub fn render_page(values: &FormValues<'_>, content: PageContent<'_>) -> String {
    let min_birthdate = format!("{MIN_BIRTH_YEAR}-01-01");
    let min_reference = if values.birthdate.is_empty() {
        min_birthdate.as_str()
    } else {
        values.birthdate
    };

    let mut html = String::with_capacity(4096);
    html.push_str(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>Numerology Fortune</title>\n</head>\n<body>\n\
         <h1>🔮 Numerology Fortune Reading</h1>\n\
         <p>Get a numerology reading and six lucky numbers from your birthdate and a date of your choice.</p>\n\
         <p>⚠️ Please enter your birthdate in the solar (Gregorian) calendar.</p>\n",
    );

    // Writing to a String cannot fail.
    let _ = write!(
        html,
        "<form method=\"post\" action=\"/\">\n\
         <input type=\"hidden\" name=\"session_id\" value=\"{session}\">\n\
         <label>Birthdate <input type=\"date\" name=\"birthdate\" min=\"{min_birthdate}\" value=\"{birthdate}\" required></label>\n\
         <label>Date to read <input type=\"date\" name=\"reference_date\" min=\"{min_reference}\" value=\"{reference}\" required></label>\n\
         <button type=\"submit\">🔮 View fortune</button>\n\
         </form>\n",
        session = escape_html(values.session_id),
        birthdate = escape_html(values.birthdate),
        min_reference = escape_html(min_reference),
        reference = escape_html(values.reference_date),
    );

    match content {
        PageContent::Blank => {}
        PageContent::Outcome(outcome) => render_outcome(&mut html, outcome),
        PageContent::Error { life_path, message } => {
            if let Some(n) = life_path {
                render_life_path(&mut html, n);
            }
            let _ = writeln!(
                html,
                "<p class=\"error\" role=\"alert\">{}</p>",
                escape_html(message)
            );
        }
    }

    html.push_str(
        "<hr>\n<p>📌 This app is for entertainment only. Do not rely on it for important decisions.</p>\n\
         </body>\n</html>\n",
    );
    html
}

fn render_life_path(html: &mut String, life_path: LifePathNumber) {
    let _ = writeln!(
        html,
        "<p>🔢 Your life path number is <strong>{life_path}</strong>.</p>"
    );
}

fn render_outcome(html: &mut String, outcome: &FortuneOutcome) {
    render_life_path(html, outcome.life_path_number);

    let _ = writeln!(
        html,
        "<p>{} · {} · {}</p>",
        outcome.reference_date,
        escape_html(&outcome.weekday),
        escape_html(&outcome.season)
    );

    html.push_str("<h2>🍀 Lucky numbers for the day</h2>\n<ul class=\"numbers\">\n");
    for (number, explanation) in outcome.fortune.entries() {
        let _ = writeln!(
            html,
            "<li><strong>{number}</strong>: {}</li>",
            escape_html(explanation)
        );
    }
    html.push_str("</ul>\n");

    let _ = writeln!(
        html,
        "<h2>✨ Why these numbers</h2>\n<p>{}</p>",
        escape_html(outcome.fortune.overall_explanation())
    );

    let line = outcome
        .fortune
        .numbers()
        .iter()
        .map(u8::to_string)
        .collect::<Vec<_>>()
        .join(" ");
    let _ = writeln!(
        html,
        "<h2>🎱 Final lucky numbers</h2>\n<p class=\"final\">{line}</p>"
    );
}

fn escape_html(text: &str) -> String {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fortune::parser::parse_fortune_reply;
    use crate::llm_client::stub::WELL_FORMED_REPLY;
    use crate::numerology::compute_life_path_number;
    use chrono::NaiveDate;

    fn outcome() -> FortuneOutcome {
        let birthdate = NaiveDate::from_ymd_opt(1990, 5, 15).unwrap();
        FortuneOutcome {
            life_path_number: compute_life_path_number(birthdate),
            reference_date: NaiveDate::from_ymd_opt(2024, 6, 10).unwrap(),
            weekday: "Monday".to_string(),
            month: "June".to_string(),
            season: "Summer".to_string(),
            fortune: parse_fortune_reply(WELL_FORMED_REPLY).unwrap(),
        }
    }

    #[test]
    fn test_blank_page_has_form_with_minimum_birthdate() {
        let html = render_page(
            &FormValues {
                session_id: "abc",
                ..Default::default()
            },
            PageContent::Blank,
        );

        assert!(html.contains("name=\"birthdate\" min=\"1900-01-01\""));
        assert!(html.contains("name=\"session_id\" value=\"abc\""));
        assert!(!html.contains("Lucky numbers"));
    }

    #[test]
    fn test_reference_date_minimum_follows_birthdate() {
        let html = render_page(
            &FormValues {
                birthdate: "1990-05-15",
                ..Default::default()
            },
            PageContent::Blank,
        );
        assert!(html.contains("name=\"reference_date\" min=\"1990-05-15\""));
    }

    #[test]
    fn test_outcome_renders_six_aligned_entries() {
        let outcome = outcome();
        let html = render_page(&FormValues::default(), PageContent::Outcome(&outcome));

        assert!(html.contains("life path number is <strong>3</strong>"));
        assert_eq!(html.matches("<li>").count(), 6);
        assert!(html.contains("<li><strong>12</strong>: Twelve reduces to three.</li>"));
        assert!(html.contains("vibration of three"));
        assert!(html.contains("<p class=\"final\">3 12 21 30 39 45</p>"));
    }

    #[test]
    fn test_error_renders_inline_with_life_path() {
        let life_path = compute_life_path_number(NaiveDate::from_ymd_opt(2000, 1, 1).unwrap());
        let html = render_page(
            &FormValues::default(),
            PageContent::Error {
                life_path: Some(life_path),
                message: "Please try again.",
            },
        );

        assert!(html.contains("life path number is <strong>4</strong>"));
        assert!(html.contains("role=\"alert\">Please try again.</p>"));
    }

    #[test]
    fn test_user_values_are_escaped() {
        let html = render_page(
            &FormValues {
                birthdate: "\"><script>",
                ..Default::default()
            },
            PageContent::Blank,
        );
        assert!(!html.contains("<script>"));
        assert!(html.contains("&quot;&gt;&lt;script&gt;"));
    }
}
