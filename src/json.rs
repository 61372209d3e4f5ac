/*!
Decoding of JSON values shared by [`Date`](crate::Date) and
[`Time`](crate::Time).

Decoding happens in a fixed order:

1. A JSON string holding a complete RFC 3339 timestamp is reformatted in the
canonical layout of the target type and then parsed as usual.
2. A JSON `null`, or the JSON string `"null"`, decodes to nothing. Callers
leave their value untouched in this case.
3. Anything that isn't a JSON string is rejected.
4. Otherwise, the contents of the string are parsed with the layouts of the
target type.
*/

use alloc::string::String;

use crate::{
    error::{json::Error as E, Error},
    fmt::parse::{parse_rfc3339, Rfc3339},
};

/// A type that can be decoded from JSON.
pub(crate) trait Interchange: Sized {
    /// A short noun used in error messages, e.g., `date`.
    const NAME: &'static str;

    /// Parses the given text with this type's layouts.
    fn parse_text(input: &[u8]) -> Result<Self, Error>;

    /// Renders the components of an RFC 3339 timestamp in this type's
    /// canonical layout.
    fn reformat(timestamp: &Rfc3339) -> String;
}

/// Decodes a raw JSON value.
///
/// This returns `None` when the value is `null` or `"null"`.
pub(crate) fn decode_json<T: Interchange>(
    data: &[u8],
) -> Result<Option<T>, Error> {
    if data == b"null" {
        debug!("ignoring JSON null while decoding {}", T::NAME);
        return Ok(None);
    }
    let content = match *data {
        [b'"', ref content @ .., b'"'] => content,
        _ => return Err(E::NotString { what: T::NAME }.into()),
    };
    decode_str(content)
}

/// Decodes the contents of a JSON string, without its surrounding quotes.
///
/// This returns `None` when the contents are exactly `null`.
pub(crate) fn decode_str<T: Interchange>(
    content: &[u8],
) -> Result<Option<T>, Error> {
    if let Ok(timestamp) = parse_rfc3339(content) {
        let text = T::reformat(&timestamp);
        return T::parse_text(text.as_bytes()).map(Some).map_err(|err| {
            warn!("reformatted RFC 3339 timestamp {text:?} was rejected");
            err.context(E::Reformat { what: T::NAME })
        });
    }
    if content == b"null" {
        debug!("ignoring JSON string \"null\" while decoding {}", T::NAME);
        return Ok(None);
    }
    T::parse_text(content).map(Some)
}

/// Renders a value as a quoted JSON string.
///
/// Canonical renderings never contain characters that need escaping.
pub(crate) fn encode(value: impl core::fmt::Display) -> String {
    alloc::format!("\"{value}\"")
}
