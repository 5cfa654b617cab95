// src/core/normalize.rs
//! Text-level repairs applied before parsing.
//!
//! The connection status page ships two kinds of broken markup:
//! - the "Bonded Channels" heading row of the downstream and upstream tables
//!   is not closed (or the row after it is never opened), so the column
//!   captions get glued onto the heading row;
//! - `<strong>` tags open and close in places that don't nest.
//!
//! Repairs are plain `(find, replace, max)` rules run in order over the whole
//! document. A rule's replacement never contains its own pattern (or an
//! earlier rule's), so running the pipeline again changes nothing and a rule
//! whose target is absent is a no-op. Caption cells left outside any row after
//! a repair are picked up by the parser's implicit row.

use crate::config::consts::{BONDED_PATCH_MAX, EMPHASIS_TAG};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Patch {
    pub find: &'static str,
    pub replace: &'static str,
    /// Replace at most this many occurrences, left to right.
    pub max: usize,
}

impl Patch {
    pub fn apply(&self, html: &str) -> String {
        html.replacen(self.find, self.replace, self.max)
    }
}

/// Status page heading-row repairs, in application order.
pub const BONDED_CHANNEL_PATCHES: [Patch; 2] = [
    // heading row never closed: close it, whatever follows on the next line
    Patch {
        find: "Bonded Channels</strong></th>\n",
        replace: "Bonded Channels</strong></th></tr>\n",
        max: BONDED_PATCH_MAX,
    },
    // heading row closed, caption cells left without a row
    Patch {
        find: "Bonded Channels</strong></th></tr>\n<td",
        replace: "Bonded Channels</strong></th></tr>\n<tr><td",
        max: BONDED_PATCH_MAX,
    },
];

pub fn apply_patches(html: &str, patches: &[Patch]) -> String {
    patches
        .iter()
        .fold(html.to_string(), |doc, p| p.apply(&doc))
}

/// Drop every bare `<tag>` / `</tag>` (ASCII case-insensitive) in one pass.
/// Tags with attributes are left alone. Removed text is not rescanned, so
/// `<str<strong>ong>` comes out as `<strong>`.
pub fn strip_bare_tag(html: &str, tag: &str) -> String {
    let b = html.as_bytes();
    let mut out = String::with_capacity(html.len());
    let mut copied = 0usize;
    let mut i = 0usize;

    while let Some(rel) = html[i..].find('<') {
        let at = i + rel;
        let name_at = if b.get(at + 1) == Some(&b'/') { at + 2 } else { at + 1 };
        let matched = b
            .get(name_at..name_at + tag.len())
            .is_some_and(|w| w.eq_ignore_ascii_case(tag.as_bytes()))
            && b.get(name_at + tag.len()) == Some(&b'>');

        if matched {
            out.push_str(&html[copied..at]);
            copied = name_at + tag.len() + 1;
            i = copied;
        } else {
            i = at + 1;
        }
    }
    out.push_str(&html[copied..]);
    out
}

/// Full repair pipeline for the connection status page.
pub fn normalize_status_page(html: &str) -> String {
    let patched = apply_patches(html, &BONDED_CHANNEL_PATCHES);
    strip_bare_tag(&patched, EMPHASIS_TAG)
}
