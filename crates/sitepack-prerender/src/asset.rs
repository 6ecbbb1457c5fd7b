//! Classification and rewriting of `href`/`src` values.

/// A URL found in an asset attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetReference<'a> {
    /// No `//` anywhere in the value; served from the public path.
    Relative(&'a str),
    /// Absolute or protocol-relative; never rewritten.
    Absolute(&'a str),
}

impl<'a> AssetReference<'a> {
    pub fn classify(url: &'a str) -> Self {
        if url.contains("//") {
            Self::Absolute(url)
        } else {
            Self::Relative(url)
        }
    }

    pub fn is_relative(&self) -> bool {
        matches!(self, Self::Relative(_))
    }

    /// The value to write back once `public_path` applies.
    ///
    /// Relative values are prefixed, with a single slash kept at the join.
    /// Absolute values come back unchanged.
    pub fn with_public_path(&self, public_path: &str) -> String {
        match *self {
            Self::Absolute(url) => url.to_string(),
            Self::Relative(url) => {
                if public_path.ends_with('/') && url.starts_with('/') {
                    format!("{public_path}{}", &url[1..])
                } else {
                    format!("{public_path}{url}")
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_by_double_slash() {
        assert!(AssetReference::classify("/app.js").is_relative());
        assert!(AssetReference::classify("app.js").is_relative());
        assert!(!AssetReference::classify("//cdn.example.com/lib.js").is_relative());
        assert!(!AssetReference::classify("https://cdn.example.com/lib.js").is_relative());
    }

    #[test]
    fn joins_with_one_slash() {
        let reference = AssetReference::classify("/app.js");
        assert_eq!(reference.with_public_path("/static/"), "/static/app.js");
        assert_eq!(reference.with_public_path("/static"), "/static/app.js");
        assert_eq!(
            AssetReference::classify("app.js").with_public_path("/static/"),
            "/static/app.js"
        );
    }

    #[test]
    fn absolute_is_untouched() {
        let reference = AssetReference::classify("//cdn.example.com/lib.js");
        assert_eq!(reference.with_public_path("/static/"), "//cdn.example.com/lib.js");
    }

    #[test]
    fn empty_public_path_keeps_value() {
        assert_eq!(AssetReference::classify("/app.js").with_public_path(""), "/app.js");
    }
}
