/// Format a rupee amount with thousands separators: `15000.0` -> `₹15,000`
pub fn format_inr(amount: f64) -> String {
    let negative = amount < 0.0;
    let rounded = amount.abs().round() as u64;
    let digits = rounded.to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if negative {
        format!("-₹{}", grouped)
    } else {
        format!("₹{}", grouped)
    }
}

/// Upper-case the first character: `farmer` -> `Farmer`
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Wall-clock time for chat bubbles: `09:41 AM`
pub fn clock_time() -> String {
    chrono::Local::now().format("%I:%M %p").to_string()
}

/// Human readable age of an event given in minutes
pub fn relative_time(minutes_ago: u32) -> String {
    match minutes_ago {
        0 => "just now".to_string(),
        1..=59 => format!("{} min ago", minutes_ago),
        60..=1439 => {
            let hours = minutes_ago / 60;
            if hours == 1 { "1 hour ago".to_string() } else { format!("{} hours ago", hours) }
        }
        _ => {
            let days = minutes_ago / 1440;
            if days == 1 { "1 day ago".to_string() } else { format!("{} days ago", days) }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rupees_are_grouped() {
        assert_eq!(format_inr(0.0), "₹0");
        assert_eq!(format_inr(999.0), "₹999");
        assert_eq!(format_inr(15000.0), "₹15,000");
        assert_eq!(format_inr(1234567.4), "₹1,234,567");
        assert_eq!(format_inr(-2500.0), "-₹2,500");
    }

    #[test]
    fn capitalizes_roles() {
        assert_eq!(capitalize("farmer"), "Farmer");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn relative_times() {
        assert_eq!(relative_time(0), "just now");
        assert_eq!(relative_time(45), "45 min ago");
        assert_eq!(relative_time(120), "2 hours ago");
        assert_eq!(relative_time(1440), "1 day ago");
        assert_eq!(relative_time(2880), "2 days ago");
    }
}
