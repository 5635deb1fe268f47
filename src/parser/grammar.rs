//! Line grammar for receiver definitions
//!
//! The grammar is line-oriented and matched with named-capture regex
//! patterns rather than an imperative matcher. Optionality of a capture
//! group is semantically load-bearing: a message line's reply group being
//! absent (no `->` clause, one-way message) is distinct from the group
//! matching an empty string (`-> ()`, reply with no values).

use once_cell::sync::Lazy;
use regex::Regex;

/// Receiver body open:
/// `messages -> [Namespace::]Destination [: Superclass] [attributes] {`
pub(crate) static RECEIVER_OPEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^messages -> (?:(?P<namespace>[A-Za-z]+)::)?(?P<destination>[A-Za-z_0-9]+)\s+(?::\s*(?P<superclass>.*?)\s+)?(?:(?P<attributes>.*?)\s+)?\{$",
    )
    .unwrap()
});

/// Message declaration:
/// `[options] Name(parameters) [-> (replyParameters)] [attributes]`
pub(crate) static MESSAGE_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?:\[(?P<options>.*)\]\s+)?(?P<name>[A-Za-z_0-9]+)\((?P<parameters>.*?)\)(?:\s+->\s+\((?P<reply>.*?)\))?(?:\s+(?P<attributes>.+))?$",
    )
    .unwrap()
});

/// One `Name=Value` entry in the header attribute list.
pub(crate) static HEADER_ATTRIBUTE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?P<name>\w+)\s*=\s*(?P<value>.+)$").unwrap());
