// src/core/sanitize.rs

/// Decode the handful of entities the modem pages use, plus numeric forms.
/// Unknown or unterminated entities are kept verbatim.
pub fn decode_entities(s: &str) -> String {
    if !s.contains('&') {
        return s.to_string();
    }
    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let tail = &rest[amp..];
        // Entities are short; don't scan the whole remainder for ';'
        let semi = tail.bytes().take(12).position(|b| b == b';');
        match semi.and_then(|e| decode_one(&tail[1..e]).map(|ch| (ch, e))) {
            Some((ch, e)) => {
                out.push(ch);
                rest = &tail[e + 1..];
            }
            None => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

fn decode_one(name: &str) -> Option<char> {
    match name {
        "nbsp" => Some('\u{a0}'),
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        _ => {
            let num = name.strip_prefix('#')?;
            let code = match num.strip_prefix(['x', 'X']) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => num.parse().ok()?,
            };
            char::from_u32(code)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_and_numeric_entities() {
        assert_eq!(decode_entities("a&nbsp;b &amp; c"), "a\u{a0}b & c");
        assert_eq!(decode_entities("&lt;td&gt;"), "<td>");
        assert_eq!(decode_entities("&#65;&#x42;"), "AB");
    }

    #[test]
    fn unknown_entities_kept() {
        assert_eq!(decode_entities("R&D &bogus; &"), "R&D &bogus; &");
    }
}
