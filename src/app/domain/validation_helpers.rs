/// Check that a string looks like `local@domain.tld`: a single `@`, no
/// whitespace, and a dot in the domain with characters on both sides.
///
/// Deliberately loose. It rejects some addresses that are technically valid
/// and does not attempt RFC 5322 conformance; callers wanting stricter rules
/// should parse with a real address library instead.
pub fn is_email_shape(t: &str) -> bool {
    fn is_token(s: &str) -> bool {
        !s.is_empty() && s.chars().all(|c| !c.is_whitespace() && c != '@')
    }

    match t.split_once('@') {
        Some((local, domain)) => {
            is_token(local)
                && match domain.rsplit_once('.') {
                    Some((host, tld)) => is_token(host) && is_token(tld),
                    None => false,
                }
        }
        None => false,
    }
}

/// Check that a string looks like a phone number: an optional leading `+`
/// followed by at least 10 characters drawn from digits, whitespace, hyphens
/// and parentheses.
pub fn is_phone_shape(t: &str) -> bool {
    let rest = t.strip_prefix('+').unwrap_or(t);
    rest.chars().count() >= 10
        && rest
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_whitespace() || matches!(c, '-' | '(' | ')'))
}
