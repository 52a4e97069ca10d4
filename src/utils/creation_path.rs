//! Parsing of `/add/<domain>/<path...>` creation requests.

use crate::error::AppError;

/// A creation request split into its domain and remaining path segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreationPath<'a> {
    pub domain: &'a str,
    pub segments: Vec<&'a str>,
}

impl<'a> CreationPath<'a> {
    /// Splits a request path on `/`.
    ///
    /// The first segment is the empty string before the leading slash and the
    /// second is `add`; the third is the domain and everything after it is the
    /// target path. Empty segments are kept, so trailing and doubled slashes
    /// survive into the long link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidRequest`] if the path has fewer than three
    /// segments.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let parsed = CreationPath::parse("/add/example.com/foo/bar")?;
    /// assert_eq!(parsed.domain, "example.com");
    /// assert_eq!(parsed.long_link(), "https://example.com/foo/bar");
    /// ```
    pub fn parse(path: &'a str) -> Result<Self, AppError> {
        let parts: Vec<&str> = path.split('/').collect();
        if parts.len() < 3 {
            return Err(AppError::InvalidRequest);
        }

        Ok(Self {
            domain: parts[2],
            segments: parts[3..].to_vec(),
        })
    }

    /// Builds the redirect target, always over HTTPS.
    pub fn long_link(&self) -> String {
        format!("https://{}/{}", self.domain, self.segments.join("/"))
    }
}
