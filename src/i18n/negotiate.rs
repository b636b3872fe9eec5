//! Locale detection inputs: parsing `Accept-Language` and matching browser
//! preferences against configured locales.

use crate::i18n::LocaleEntry;

/// Parse an `Accept-Language` header into language tags, most preferred first.
///
/// Tags are ordered by quality value (`q`), ties keep header order. Wildcards
/// and tags with `q=0` are dropped; an unparseable `q` counts as `1.0`.
pub fn parse_accept_language(header: &str) -> Vec<String> {
    let mut tags: Vec<(String, f32)> = header
        .split(',')
        .filter_map(|part| {
            let mut pieces = part.split(';');
            let tag = pieces.next()?.trim();
            if tag.is_empty() || tag == "*" {
                return None;
            }

            let quality = pieces
                .find_map(|param| param.trim().strip_prefix("q="))
                .map(|q| q.trim().parse::<f32>().unwrap_or(1.0))
                .unwrap_or(1.0);

            (quality > 0.0).then(|| (tag.to_string(), quality))
        })
        .collect();

    // sort_by is stable, so equal weights keep header order
    tags.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    tags.into_iter().map(|(tag, _)| tag).collect()
}

/// Pick the first browser locale that names a configured locale.
///
/// Each entry is tried as an exact (case-insensitive) code first, then by its
/// primary language subtag, so `de-DE` selects a configured `de`.
pub fn negotiate<'a, S: AsRef<str>>(
    locales: &'a [LocaleEntry],
    browser_locales: &[S],
) -> Option<&'a LocaleEntry> {
    browser_locales
        .iter()
        .find_map(|tag| match_tag(locales, tag.as_ref()))
}

fn match_tag<'a>(locales: &'a [LocaleEntry], tag: &str) -> Option<&'a LocaleEntry> {
    let tag = tag.trim();
    if tag.is_empty() {
        return None;
    }

    if let Some(entry) = locales.iter().find(|e| e.code.eq_ignore_ascii_case(tag)) {
        return Some(entry);
    }

    let primary = tag.split(['-', '_']).next()?;
    locales
        .iter()
        .find(|e| e.code.eq_ignore_ascii_case(primary))
}
