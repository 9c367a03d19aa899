//! Quote record type
//!
//! A `QuoteRecord` is the single entity produced by the extractor. Its tags
//! are stored already joined with [`TAG_SEPARATOR`], which is also the shape
//! written to the CSV `tags` column.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Separator used to join a quote's tags into one field
pub const TAG_SEPARATOR: &str = ", ";

/// A single quote scraped from a listing page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRecord {
    /// The quote text, exactly as it appeared in the markup
    #[serde(rename = "quote")]
    pub text: String,

    /// The quote's author
    pub author: String,

    /// Tags in document order, joined with `", "`
    pub tags: String,
}

impl QuoteRecord {
    /// Creates a record from a tag sequence, joining the tags
    pub fn new<I, S>(text: impl Into<String>, author: impl Into<String>, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            text: text.into(),
            author: author.into(),
            tags: join_tags(tags),
        }
    }

    /// Splits the joined tags field back into tokens
    ///
    /// The join is lossy: a tag that itself contains `", "` cannot be told
    /// apart from two tags, so the returned list may differ from the one the
    /// record was built from.
    pub fn tag_list(&self) -> Vec<&str> {
        split_tags(&self.tags)
    }
}

impl fmt::Display for QuoteRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{quote: {:?}, author: {:?}, tags: {:?}}}",
            self.text, self.author, self.tags
        )
    }
}

/// Joins a tag sequence with [`TAG_SEPARATOR`]
pub fn join_tags<I, S>(tags: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut joined = String::new();
    for (i, tag) in tags.into_iter().enumerate() {
        if i > 0 {
            joined.push_str(TAG_SEPARATOR);
        }
        joined.push_str(tag.as_ref());
    }
    joined
}

/// Splits a joined tags field on [`TAG_SEPARATOR`]
///
/// An empty field means the quote had no tags and yields an empty list.
pub fn split_tags(tags: &str) -> Vec<&str> {
    if tags.is_empty() {
        return Vec::new();
    }
    tags.split(TAG_SEPARATOR).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_tags() {
        let record = QuoteRecord::new("text", "author", ["change", "deep-thoughts"]);
        assert_eq!(record.tags, "change, deep-thoughts");
    }

    #[test]
    fn test_join_no_tags() {
        let record = QuoteRecord::new("text", "author", Vec::<String>::new());
        assert_eq!(record.tags, "");
        assert!(record.tag_list().is_empty());
    }

    #[test]
    fn test_split_round_trip_plain_tags() {
        let record = QuoteRecord::new("text", "author", ["life", "love", "truth"]);
        assert_eq!(record.tag_list(), vec!["life", "love", "truth"]);
    }

    #[test]
    fn test_separator_tag_is_ambiguous_on_resplit() {
        // A tag that is literally the separator cannot be recovered
        let original = ["alpha", ", ", "beta"];
        let record = QuoteRecord::new("text", "author", original);

        assert_eq!(record.tags, "alpha, , , beta");
        let resplit = record.tag_list();
        assert_eq!(resplit, vec!["alpha", "", "", "beta"]);
        assert_ne!(resplit.len(), original.len());
    }

    #[test]
    fn test_display_format() {
        let record = QuoteRecord::new("Be yourself.", "Oscar Wilde", ["life"]);
        assert_eq!(
            record.to_string(),
            r#"{quote: "Be yourself.", author: "Oscar Wilde", tags: "life"}"#
        );
    }
}
