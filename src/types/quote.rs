use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Namespace for quote identities. Changing it invalidates every stored bookmark id.
pub const QUOTE_NAMESPACE: Uuid = Uuid::from_u128(0x6a1d_4f0e_93b2_5c7e_a8f1_2d04_b9c3_e516);

/// Separates text from author when deriving an identity (ASCII unit separator).
const FIELD_SEPARATOR: u8 = 0x1f;

/// Footer appended to shared quotes.
pub const SHARE_FOOTER: &str = "Shared from QuotesApp";

/// Stable identity derived from a quote's `(text, author)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct QuoteId(Uuid);

impl QuoteId {
    /// Derives the identity for a text/author pair.
    ///
    /// The pair is hashed byte-exactly: no trimming, no case folding.
    pub fn derive(text: &str, author: &str) -> Self {
        let mut name = Vec::with_capacity(text.len() + author.len() + 1);
        name.extend_from_slice(text.as_bytes());
        name.push(FIELD_SEPARATOR);
        name.extend_from_slice(author.as_bytes());
        Self(Uuid::new_v5(&QUOTE_NAMESPACE, &name))
    }

    /// Parses an identity previously produced by [`QuoteId::to_string`].
    pub fn parse(s: &str) -> Option<Self> {
        Uuid::parse_str(s).ok().map(Self)
    }
}

impl std::fmt::Display for QuoteId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

/// An immutable quote as shown to the user.
///
/// Only constructible through [`Quote::new`], so `id` always matches the pair.
/// Deserializing ignores any stored `id` and derives it again.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "QuoteFields")]
pub struct Quote {
    id: QuoteId,
    text: String,
    author: String,
}

impl Quote {
    pub fn new(text: impl Into<String>, author: impl Into<String>) -> Self {
        let text = text.into();
        let author = author.into();
        Self {
            id: QuoteId::derive(&text, &author),
            text,
            author,
        }
    }

    pub fn id(&self) -> QuoteId {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    /// Plain-text payload sent alongside a shared quote image.
    pub fn share_text(&self) -> String {
        format!("\"{}\"\n— {}\n\n{}", self.text, self.author, SHARE_FOOTER)
    }
}

#[derive(Deserialize)]
struct QuoteFields {
    text: String,
    author: String,
}

impl From<QuoteFields> for Quote {
    fn from(fields: QuoteFields) -> Self {
        Quote::new(fields.text, fields.author)
    }
}

/// Wire shape of the remote quote endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteQuote {
    pub quote: String,
    pub author: String,
}

impl From<RemoteQuote> for Quote {
    fn from(remote: RemoteQuote) -> Self {
        Quote::new(remote.quote, remote.author)
    }
}

/// A bookmarked quote as persisted in the `bookmarks` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookmarkRecord {
    pub id: QuoteId,
    pub text: String,
    pub author: String,
    pub created_at: i64,
}

impl BookmarkRecord {
    /// Rebuilds the quote this record was saved from.
    pub fn to_quote(&self) -> Quote {
        Quote::new(self.text.clone(), self.author.clone())
    }
}
