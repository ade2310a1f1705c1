//! Deep link into WhatsApp. Building the URL never opens it.
use std::borrow::Cow;

/// Number used when the site is built for the current offering.
pub const DEFAULT_DESTINATION: &str = "14078207333";

/// Percent-encodes `message` as a query component and splices it into the
/// `wa.me` deep-link form. `destination` is configuration, not user input.
pub fn build_link(destination: &str, message: &str) -> String {
    format!("https://wa.me/{destination}?text={}", urlencoding::encode(message))
}

/// Inverse used by tests: the decoded `text` query value of a built link.
pub fn text_query_value(link: &str) -> Option<Cow<'_, str>> {
    let (_, encoded) = link.split_once("?text=")?;
    urlencoding::decode(encoded).ok()
}
