//! URL mapping entity.

/// A short link and the fully-qualified URL it redirects to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlMapping {
    pub short_link: String,
    pub long_link: String,
}

impl UrlMapping {
    /// Creates a new mapping.
    pub fn new(short_link: impl Into<String>, long_link: impl Into<String>) -> Self {
        Self {
            short_link: short_link.into(),
            long_link: long_link.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapping_creation() {
        let mapping = UrlMapping::new("abcd1234", "https://example.com/foo/bar");

        assert_eq!(mapping.short_link, "abcd1234");
        assert_eq!(mapping.long_link, "https://example.com/foo/bar");
    }
}
