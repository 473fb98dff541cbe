use unicode_segmentation::UnicodeSegmentation;

const MAX_GRAPHEMES: usize = 256;

/// A non-empty, case-insensitive name filter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchTerm {
    raw: String,
    needle: String,
}

impl SearchTerm {
    /// An empty string means "no search" and yields `Ok(None)`.
    /// Whitespace is significant, as typed.
    pub fn parse(s: String) -> Result<Option<Self>, String> {
        if s.is_empty() {
            Ok(None)
        } else if s.graphemes(true).count() > MAX_GRAPHEMES {
            Err(format!(
                "Search term is too long, the limit is {} characters.",
                MAX_GRAPHEMES
            ))
        } else {
            let needle = s.to_lowercase();
            Ok(Some(Self { raw: s, needle }))
        }
    }

    pub fn matches(&self, name: &str) -> bool {
        name.to_lowercase().contains(&self.needle)
    }
}

impl AsRef<str> for SearchTerm {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}
