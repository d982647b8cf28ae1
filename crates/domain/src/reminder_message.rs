use crate::notification::NotificationTask;
use chrono::{TimeZone, Utc};
use chrono_tz::Tz;

/// The email sent to the owner of an `Event` about to start or end
#[derive(Debug, Clone, PartialEq)]
pub struct ReminderMessage {
    pub subject: String,
    pub text: String,
    pub html: String,
}

impl ReminderMessage {
    pub fn new(task: &NotificationTask, timezone: &Tz) -> Self {
        let event = &task.event;
        let verb = task.edge.verb();
        let at = format_local_time(task.edge.timestamp(event), timezone);

        let subject = format!("Reminder: {} is {} soon", event.title, verb);

        let mut text = format!("Your event \"{}\" is {} at {}.\n", event.title, verb, at);
        let mut html = format!(
            "<p>Your event <strong>{}</strong> is {} at {}.</p>",
            escape_html(&event.title),
            verb,
            escape_html(&at)
        );

        if let Some(location) = non_blank(&event.location) {
            text.push_str(&format!("\nLocation: {}\n", location));
            html.push_str(&format!(
                "<p><strong>Location:</strong> {}</p>",
                escape_html(location)
            ));
        }
        if let Some(description) = non_blank(&event.description) {
            text.push_str(&format!("\nDetails:\n{}\n", description));
            html.push_str(&format!(
                "<p><strong>Details:</strong><br>{}</p>",
                escape_html(description).replace('\n', "<br>")
            ));
        }

        Self {
            subject,
            text,
            html,
        }
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

/// E.g. "Monday, January 1, 2024 at 10:02 AM UTC"
pub fn format_local_time(ts: i64, timezone: &Tz) -> String {
    match Utc.timestamp_millis_opt(ts).single() {
        Some(datetime) => datetime
            .with_timezone(timezone)
            .format("%A, %B %-d, %Y at %-I:%M %p %Z")
            .to_string(),
        None => ts.to_string(),
    }
}

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}
