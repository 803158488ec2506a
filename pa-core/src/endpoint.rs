//! REST endpoints consumed by the dashboard and the CLI.

/// Base path of the presence API.
pub const API_PREFIX: &str = "/api/v1";

/// A `GET` endpoint of the presence API.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Endpoint {
    Users,
    Months,
    PresenceStartEnd(String),
    Top5Monthly(String),
    UserImage(String),
    MeanTimeWeekday(String),
    PresenceWeekday(String),
}

impl Endpoint {
    fn parts(&self) -> (&'static str, Option<&str>) {
        match self {
            Endpoint::Users => ("users", None),
            Endpoint::Months => ("months", None),
            Endpoint::PresenceStartEnd(id) => ("presence_start_end", Some(id.as_str())),
            Endpoint::Top5Monthly(month) => ("top5monthly", Some(month.as_str())),
            Endpoint::UserImage(id) => ("user_image", Some(id.as_str())),
            Endpoint::MeanTimeWeekday(id) => ("mean_time_weekday", Some(id.as_str())),
            Endpoint::PresenceWeekday(id) => ("presence_weekday", Some(id.as_str())),
        }
    }

    /// Path segments below the host, parameter left unencoded.
    pub fn segments(&self) -> Vec<&str> {
        let (name, param) = self.parts();
        let mut segments = vec!["api", "v1", name];
        segments.extend(param);
        segments
    }

    /// Absolute path, with the parameter passed through `encode`.
    ///
    /// The browser apps hand in `encodeURIComponent`; the native client
    /// builds URLs from `segments()` instead.
    pub fn path_with<F>(&self, encode: F) -> String
    where
        F: Fn(&str) -> String,
    {
        let (name, param) = self.parts();
        match param {
            Some(p) => format!("{}/{}/{}", API_PREFIX, name, encode(p)),
            None => format!("{}/{}", API_PREFIX, name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        let plain = |s: &str| s.to_string();
        assert_eq!(Endpoint::Users.path_with(plain), "/api/v1/users");
        assert_eq!(Endpoint::Months.path_with(plain), "/api/v1/months");
        assert_eq!(
            Endpoint::PresenceStartEnd("10".to_string()).path_with(plain),
            "/api/v1/presence_start_end/10"
        );
        assert_eq!(
            Endpoint::UserImage("11".to_string()).path_with(plain),
            "/api/v1/user_image/11"
        );
    }

    #[test]
    fn test_param_is_encoded() {
        let encode = |s: &str| s.replace(' ', "%20");
        assert_eq!(
            Endpoint::Top5Monthly("2013 September".to_string()).path_with(encode),
            "/api/v1/top5monthly/2013%20September"
        );
    }

    #[test]
    fn test_segments() {
        assert_eq!(Endpoint::Users.segments(), vec!["api", "v1", "users"]);
        assert_eq!(
            Endpoint::MeanTimeWeekday("10".to_string()).segments(),
            vec!["api", "v1", "mean_time_weekday", "10"]
        );
    }
}
