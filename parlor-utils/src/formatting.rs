/// Format seconds into a compact human-readable duration (e.g. 59s, 1m, 1h, 1d, 1h 30m).
pub fn format_compact_duration(total_seconds: u64) -> String {
    let days = total_seconds / 86_400;
    let hours = (total_seconds % 86_400) / 3_600;
    let minutes = (total_seconds % 3_600) / 60;
    let seconds = total_seconds % 60;

    if days > 0 {
        return if hours > 0 {
            format!("{}d {}h", days, hours)
        } else {
            format!("{}d", days)
        };
    }

    if hours > 0 {
        let mut parts = vec![format!("{}h", hours)];
        if minutes > 0 {
            parts.push(format!("{}m", minutes));
        }
        if seconds > 0 {
            parts.push(format!("{}s", seconds));
        }
        return parts.join(" ");
    }

    if minutes > 0 {
        return if seconds > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}m", minutes)
        };
    }

    format!("{}s", seconds)
}

/// Build the OAuth invite URL for the configured application, or `None` when
/// no client id is set.
pub fn invite_url(client_id: Option<&str>, permissions: &str) -> Option<String> {
    let client_id = client_id?.trim();
    if client_id.is_empty() {
        return None;
    }

    Some(format!(
        "https://discord.com/oauth2/authorize?client_id={}&permissions={}&scope=bot%20applications.commands",
        client_id, permissions
    ))
}

#[cfg(test)]
mod tests {
    use super::{format_compact_duration, invite_url};

    #[test]
    fn compact_duration_formatting() {
        assert_eq!(format_compact_duration(59), "59s");
        assert_eq!(format_compact_duration(60), "1m");
        assert_eq!(format_compact_duration(61), "1m 1s");
        assert_eq!(format_compact_duration(3600), "1h");
        assert_eq!(format_compact_duration(3660), "1h 1m");
        assert_eq!(format_compact_duration(3670), "1h 1m 10s");
        assert_eq!(format_compact_duration(86400), "1d");
        assert_eq!(format_compact_duration(90000), "1d 1h");
    }

    #[test]
    fn invite_url_requires_a_client_id() {
        assert_eq!(invite_url(None, "8"), None);
        assert_eq!(invite_url(Some("  "), "8"), None);

        let url = invite_url(Some("1234"), "2147485696").unwrap();
        assert!(url.contains("client_id=1234"));
        assert!(url.contains("permissions=2147485696"));
        assert!(url.contains("scope=bot%20applications.commands"));
    }
}
