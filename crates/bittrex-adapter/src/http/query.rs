/*
[INPUT]:  Request URI, query parameter key and value
[OUTPUT]: URI with the parameter replaced in place or appended
[POS]:    HTTP layer - deterministic query string construction
[UPDATE]: When changing merge semantics or separator handling
*/

/// Merge a single query parameter into a URI string.
///
/// If `key` already appears as a query parameter (case-insensitive match on
/// the key token), its value is replaced in place, preserving surrounding
/// parameters and separators. Otherwise the pair is appended with `?` when the
/// URI has no query string yet, else with `&`.
///
/// Values are inserted verbatim, never percent-encoded: the upstream service
/// signs and matches the literal URI bytes, so encoding here would break the
/// signature. Callers passing values with reserved characters get a URI that
/// the upstream may reject; that is a known limitation carried over from the
/// upstream contract.
pub fn merge_query_param(uri: &str, key: &str, value: &str) -> String {
    if let Some((start, value_end)) = find_param(uri, key) {
        let mut merged = String::with_capacity(uri.len() + value.len());
        merged.push_str(&uri[..start]);
        merged.push_str(key);
        merged.push('=');
        merged.push_str(value);
        merged.push_str(&uri[value_end..]);
        return merged;
    }

    let separator = if uri.contains('?') { '&' } else { '?' };
    format!("{uri}{separator}{key}={value}")
}

/// Locate `key=` as a query parameter token. Returns the byte range covering
/// the key through the end of its value (exclusive of the trailing `&`).
fn find_param(uri: &str, key: &str) -> Option<(usize, usize)> {
    let lowered_uri = uri.to_ascii_lowercase();
    let lowered_key = key.to_ascii_lowercase();

    let mut from = 0;
    while let Some(offset) = lowered_uri[from..].find(&lowered_key) {
        let start = from + offset;
        let end = start + lowered_key.len();

        let preceded = start > 0 && matches!(uri.as_bytes()[start - 1], b'?' | b'&');
        let followed = uri.as_bytes().get(end) == Some(&b'=');
        if preceded && followed {
            let value_start = end + 1;
            let value_end = uri[value_start..]
                .find('&')
                .map(|i| value_start + i)
                .unwrap_or(uri.len());
            return Some((start, value_end));
        }
        from = start + 1;
    }
    None
}
