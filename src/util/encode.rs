use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// Characters escaped when encoding a full URI.
///
/// Reserved characters (`;,/?:@&=+$#`) and unreserved marks (`-_.!~*'()`) pass through, so a
/// title containing them still yields a single path segment the website understands.
const URI: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Percent-encodes `value` the way a browser's `encodeURI` does.
pub fn encode_uri(value: &str) -> String {
    utf8_percent_encode(value, URI).to_string()
}
