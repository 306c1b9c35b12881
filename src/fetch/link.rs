//! `Link` header parsing (RFC 8288 web linking).
//!
//! Shopify carries its pagination cursor in headers like:
//!
//! ```text
//! <https://shop.myshopify.com/admin/api/2024-01/products.json?limit=250&page_info=abc>; rel="previous",
//! <https://shop.myshopify.com/admin/api/2024-01/products.json?limit=250&page_info=def>; rel="next"
//! ```

use crate::config::LINK_REL_NEXT;

/// Returns the target of the first `rel="next"` entry in a `Link` header.
///
/// `rel` may be quoted or bare and may hold several space-separated relation
/// types. Returns `None` when there is no `next` relation, which ends
/// pagination.
pub fn parse_next_link(header: &str) -> Option<String> {
    split_entries(header)
        .into_iter()
        .find_map(|entry| link_target_if_rel(entry, LINK_REL_NEXT))
}

/// Splits a header on the commas that separate links. Commas inside a
/// `<...>` target or a quoted parameter value belong to that entry.
fn split_entries(header: &str) -> Vec<&str> {
    let mut entries = Vec::new();
    let mut in_target = false;
    let mut in_quotes = false;
    let mut start = 0;

    for (i, c) in header.char_indices() {
        match c {
            '<' if !in_quotes => in_target = true,
            '>' if !in_quotes => in_target = false,
            '"' if !in_target => in_quotes = !in_quotes,
            ',' if !in_target && !in_quotes => {
                entries.push(&header[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    entries.push(&header[start..]);
    entries
}

fn link_target_if_rel(entry: &str, wanted: &str) -> Option<String> {
    let (target, params) = entry.trim().strip_prefix('<')?.split_once('>')?;
    let target = target.trim();
    if target.is_empty() {
        return None;
    }

    let has_rel = params.split(';').any(|param| {
        let Some((name, value)) = param.split_once('=') else {
            return false;
        };
        name.trim().eq_ignore_ascii_case("rel")
            && value
                .trim()
                .trim_matches('"')
                .split_ascii_whitespace()
                .any(|rel| rel.eq_ignore_ascii_case(wanted))
    });

    has_rel.then(|| target.to_string())
}
