/// One support link: a name, optional description, the normalized URL and
/// an optional owner. URLs are stored without a scheme.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Entry {
    pub display_name: String,
    pub description: String,
    pub url: String,
    pub owner: String,
}

impl Entry {
    /// Builds an entry with every field trimmed.
    pub fn new(
        display_name: impl AsRef<str>,
        description: impl AsRef<str>,
        url: impl AsRef<str>,
        owner: impl AsRef<str>,
    ) -> Self {
        Self {
            display_name: display_name.as_ref().trim().to_string(),
            description: description.as_ref().trim().to_string(),
            url: url.as_ref().trim().to_string(),
            owner: owner.as_ref().trim().to_string(),
        }
    }

    /// Key used for deduplication, taken from the fields as they are
    /// serialized: the name compares case-insensitively, the URL exactly.
    pub fn dedup_key(&self) -> (String, String) {
        (
            crate::record::sanitize_field(&self.display_name).to_lowercase(),
            crate::record::sanitize_field(&self.url),
        )
    }

    /// Key used for alphabetical ordering.
    pub fn sort_key(&self) -> String {
        self.label().to_lowercase()
    }

    /// The visible label: the display name, or the scheme-less URL when the
    /// name is empty.
    pub fn label(&self) -> &str {
        if self.display_name.is_empty() {
            self.url_display()
        } else {
            &self.display_name
        }
    }

    /// URL without `http://` or `https://`.
    pub fn url_display(&self) -> &str {
        strip_scheme(&self.url)
    }

    /// URL suitable for an `href`: `https://` is prepended when no scheme
    /// is present.
    pub fn href(&self) -> String {
        if self.url.starts_with("http://") || self.url.starts_with("https://") {
            self.url.clone()
        } else {
            format!("https://{}", self.url)
        }
    }
}

pub fn strip_scheme(url: &str) -> &str {
    url.strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url)
}
