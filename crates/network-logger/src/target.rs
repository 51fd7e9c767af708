use std::fmt;

use url::Url;

/// Logical endpoint a request is made for.
///
/// `Display` names the endpoint in messages such as
/// `Received empty network response for zen.`
pub trait Target: fmt::Display {
    fn base_url(&self) -> Option<Url>;

    fn path(&self) -> String;

    /// Base URL and path joined by exactly one `/`.
    fn url(&self) -> Option<Url> {
        let base = self.base_url()?;
        let path = self.path();
        if path.is_empty() {
            return Some(base);
        }
        let joined = format!(
            "{}/{}",
            base.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        Url::parse(&joined).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Endpoint {
        base: &'static str,
        path: &'static str,
    }

    impl fmt::Display for Endpoint {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}", self.path.trim_start_matches('/'))
        }
    }

    impl Target for Endpoint {
        fn base_url(&self) -> Option<Url> {
            Url::parse(self.base).ok()
        }

        fn path(&self) -> String {
            self.path.to_string()
        }
    }

    #[test]
    fn test_url_joins_with_single_slash() {
        for (base, path) in [
            ("https://api.github.com", "/zen"),
            ("https://api.github.com/", "zen"),
            ("https://api.github.com/", "/zen"),
        ] {
            let target = Endpoint { base, path };
            assert_eq!(
                target.url().map(|url| url.to_string()),
                Some("https://api.github.com/zen".to_string())
            );
        }
    }

    #[test]
    fn test_url_keeps_base_path() {
        let target = Endpoint {
            base: "https://example.com/api/v3",
            path: "users/octocat",
        };

        assert_eq!(
            target.url().map(|url| url.to_string()),
            Some("https://example.com/api/v3/users/octocat".to_string())
        );
    }

    #[test]
    fn test_unresolvable_url() {
        let target = Endpoint {
            base: "not a url",
            path: "/zen",
        };

        assert_eq!(target.url(), None);
        assert_eq!(target.to_string(), "zen");
    }
}
