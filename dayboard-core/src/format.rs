//! Display labels for dates and times.

use chrono::NaiveDate;

/// "Today", "Tomorrow", "In N days" within a week, otherwise "Nov 12".
pub fn due_date_label(due: NaiveDate, today: NaiveDate) -> String {
    match (due - today).num_days() {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        days @ 2..=7 => format!("In {} days", days),
        _ => due.format("%b %-d").to_string(),
    }
}

/// `"14:30"` → `"2:30 PM"`. Input without a parsable hour is returned as is.
pub fn time_12h(time: &str) -> String {
    let Some((hours, minutes)) = time.split_once(':') else {
        return time.to_string();
    };
    let Ok(hour) = hours.trim().parse::<u32>() else {
        return time.to_string();
    };

    let suffix = if hour >= 12 { "PM" } else { "AM" };
    let display_hour = match hour {
        0 => 12,
        h if h > 12 => h - 12,
        h => h,
    };

    format!("{}:{} {}", display_hour, minutes, suffix)
}
