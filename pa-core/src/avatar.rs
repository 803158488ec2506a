//! Avatar URL decoding and how avatars land in the avatar container.

use crate::presence::MonthlyMean;

/// How new avatars combine with the ones already shown.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum AvatarMode {
    /// Show only the new avatars
    Replace,
    /// Add the new avatars after the existing ones
    Append,
}

/// Display options for the avatar container.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct AvatarStyle {
    pub mode: AvatarMode,
    /// Square size in pixels; `None` keeps the image's natural size
    pub size: Option<u32>,
}

impl AvatarStyle {
    /// One avatar for the selected user.
    pub const SINGLE_USER: AvatarStyle = AvatarStyle {
        mode: AvatarMode::Replace,
        size: None,
    };

    /// One avatar per ranked user, side by side.
    pub const RANKING: AvatarStyle = AvatarStyle {
        mode: AvatarMode::Append,
        size: Some(64),
    };

    /// Merge `incoming` into `current` according to the mode.
    pub fn apply(&self, current: &mut Vec<String>, incoming: Vec<String>) {
        match self.mode {
            AvatarMode::Replace => *current = incoming,
            AvatarMode::Append => current.extend(incoming),
        }
    }

    /// Inline CSS for one `<img>`.
    pub fn img_style(&self) -> String {
        match self.size {
            Some(px) => format!("width: {px}px; height: {px}px; margin-right: 8px;"),
            None => "margin-right: 8px;".to_string(),
        }
    }
}

/// Decode the `/api/v1/user_image/{user_id}` body.
///
/// The endpoint answers with either a JSON string or a bare URL. Anything
/// else (objects, arrays, blank bodies) yields `None`.
pub fn parse_avatar_url(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }
    match serde_json::from_str::<serde_json::Value>(trimmed) {
        Ok(serde_json::Value::String(url)) if !url.trim().is_empty() => Some(url),
        Ok(_) => None,
        Err(_) => Some(trimmed.to_string()),
    }
}

/// Avatar URLs embedded in monthly records, in record order.
pub fn monthly_avatars(records: &[MonthlyMean]) -> Vec<String> {
    records
        .iter()
        .filter(|r| !r.avatar.is_empty())
        .map(|r| r.avatar.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_avatar_url() {
        assert_eq!(
            parse_avatar_url(r#""https://intranet.example/api/images/users/10""#),
            Some("https://intranet.example/api/images/users/10".to_string())
        );
        assert_eq!(
            parse_avatar_url("https://intranet.example/api/images/users/10\n"),
            Some("https://intranet.example/api/images/users/10".to_string())
        );
        assert_eq!(parse_avatar_url(""), None);
        assert_eq!(parse_avatar_url(r#""""#), None);
        assert_eq!(parse_avatar_url(r#"{"url": "x"}"#), None);
    }

    #[test]
    fn test_apply_modes() {
        let mut shown = vec!["a".to_string()];
        AvatarStyle::RANKING.apply(&mut shown, vec!["b".to_string()]);
        assert_eq!(shown, vec!["a", "b"]);
        AvatarStyle::SINGLE_USER.apply(&mut shown, vec!["c".to_string()]);
        assert_eq!(shown, vec!["c"]);
    }

    #[test]
    fn test_img_style() {
        assert!(AvatarStyle::RANKING.img_style().contains("width: 64px"));
        assert!(!AvatarStyle::SINGLE_USER.img_style().contains("width"));
    }

    #[test]
    fn test_monthly_avatars_keeps_order() {
        let records = vec![
            MonthlyMean {
                name: "User 10".to_string(),
                mean: 1,
                avatar: "http://a/10".to_string(),
            },
            MonthlyMean {
                name: "User 11".to_string(),
                mean: 1,
                avatar: String::new(),
            },
            MonthlyMean {
                name: "User 12".to_string(),
                mean: 1,
                avatar: "http://a/12".to_string(),
            },
        ];
        assert_eq!(monthly_avatars(&records), vec!["http://a/10", "http://a/12"]);
    }
}
