use std::collections::HashMap;
use std::fmt;

use http::header::{HeaderName, HeaderValue};
use http::HeaderMap;

use crate::base::{Error, Result};

/// A header name that preserves the caller's original casing alongside the
/// case-folded form used for lookups.
///
/// HTTP/1.1 headers are case-insensitive per spec, but fingerprinting
/// detectors check the exact bytes on the wire, so the original spelling
/// must survive until serialization.
#[derive(Debug, Clone)]
pub struct OrigHeaderName {
    orig: Box<str>,
    folded: HeaderName,
}

impl OrigHeaderName {
    /// Validate and wrap a header name, keeping its casing.
    ///
    /// Fails with [`Error::MalformedHeaderName`] if the name contains bytes
    /// that are invalid for wire transmission.
    pub fn new(name: &str) -> Result<Self> {
        let folded =
            HeaderName::from_bytes(name.as_bytes()).map_err(|_| Error::MalformedHeaderName)?;
        Ok(Self {
            orig: Box::from(name),
            folded,
        })
    }

    /// The name exactly as given by the caller.
    pub fn as_str(&self) -> &str {
        &self.orig
    }

    /// The case-folded (lowercase) form used for logical matching.
    pub fn folded(&self) -> &HeaderName {
        &self.folded
    }
}

impl fmt::Display for OrigHeaderName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.orig)
    }
}

/// Equality is logical (case-insensitive); casing is presentation only.
impl PartialEq for OrigHeaderName {
    fn eq(&self, other: &Self) -> bool {
        self.folded == other.folded
    }
}

impl Eq for OrigHeaderName {}

/// A header map that strictly preserves insertion order and original casing.
///
/// Entries live in a vector (iteration order == insertion order); a
/// case-folded index maps each logical name to its entry positions. Multiple
/// entries may share a logical name (after [`append`](Self::append)), which
/// is required to reproduce e.g. repeated `cookie` lines.
#[derive(Debug, Clone, Default)]
pub struct OrderedHeaderMap {
    entries: Vec<(OrigHeaderName, HeaderValue)>,
    index: HashMap<HeaderName, Vec<usize>>,
}

impl OrderedHeaderMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    /// Insert a header, replacing all existing entries for the
    /// case-insensitively matched name.
    ///
    /// The replacement entry takes the end-most position among the removed
    /// entries (or the end of the sequence if the name was absent), and the
    /// stored bytes keep the casing given here.
    pub fn insert(&mut self, name: &str, value: &str) -> Result<()> {
        let name = OrigHeaderName::new(name)?;
        let value = HeaderValue::from_str(value).map_err(|_| Error::MalformedHeaderValue)?;
        self.insert_entry(name, value);
        Ok(())
    }

    /// Insert a pre-validated entry. See [`insert`](Self::insert).
    pub fn insert_entry(&mut self, name: OrigHeaderName, value: HeaderValue) {
        let positions = match self.index.get(name.folded()) {
            Some(positions) => positions.clone(),
            None => Vec::new(),
        };
        if let Some((&last, earlier)) = positions.split_last() {
            self.entries[last] = (name, value);
            for &pos in earlier.iter().rev() {
                self.entries.remove(pos);
            }
            if !earlier.is_empty() {
                self.rebuild_index();
            }
        } else {
            self.append_entry(name, value);
        }
    }

    /// Append a header at the end of the sequence without removing existing
    /// entries for the same name.
    pub fn append(&mut self, name: &str, value: &str) -> Result<()> {
        let name = OrigHeaderName::new(name)?;
        let value = HeaderValue::from_str(value).map_err(|_| Error::MalformedHeaderValue)?;
        self.append_entry(name, value);
        Ok(())
    }

    /// Append a pre-validated entry. See [`append`](Self::append).
    pub fn append_entry(&mut self, name: OrigHeaderName, value: HeaderValue) {
        let folded = name.folded().clone();
        self.entries.push((name, value));
        self.index
            .entry(folded)
            .or_default()
            .push(self.entries.len() - 1);
    }

    /// First value for the name, matched case-insensitively.
    pub fn get(&self, name: &str) -> Option<&HeaderValue> {
        let folded = HeaderName::from_bytes(name.as_bytes()).ok()?;
        let first = *self.index.get(&folded)?.first()?;
        Some(&self.entries[first].1)
    }

    /// All values for the name in insertion order. The returned iterator is
    /// finite and a fresh one is produced per call.
    pub fn get_all(&self, name: &str) -> GetAll<'_> {
        let positions = HeaderName::from_bytes(name.as_bytes())
            .ok()
            .and_then(|folded| self.index.get(&folded))
            .map(Vec::as_slice)
            .unwrap_or(&[]);
        GetAll {
            entries: &self.entries,
            positions: positions.iter(),
        }
    }

    /// Remove all entries for the name. No-op if absent.
    pub fn remove(&mut self, name: &str) {
        if let Ok(folded) = HeaderName::from_bytes(name.as_bytes()) {
            if self.index.remove(&folded).is_some() {
                self.entries.retain(|(n, _)| *n.folded() != folded);
                self.rebuild_index();
            }
        }
    }

    /// Iterate `(name, value)` pairs in insertion order, one pair per entry,
    /// duplicates included.
    pub fn iter(&self) -> impl Iterator<Item = (&OrigHeaderName, &HeaderValue)> {
        self.entries.iter().map(|(n, v)| (n, v))
    }

    /// Total entry count (duplicates included).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Count of distinct case-insensitive names.
    pub fn keys_len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.index.clear();
    }

    /// Reorder entries to follow a caller-supplied wire-order template.
    ///
    /// Entries whose logical name appears in `template` move to the front in
    /// template order and adopt the template's casing; all remaining entries
    /// follow in their previous relative order with their stored casing.
    pub fn sort_by_template(&mut self, template: &[OrigHeaderName]) {
        if template.is_empty() {
            return;
        }
        let mut remaining: Vec<Option<(OrigHeaderName, HeaderValue)>> =
            self.entries.drain(..).map(Some).collect();
        let mut ordered = Vec::with_capacity(remaining.len());
        for tname in template {
            for slot in remaining.iter_mut() {
                let hit = matches!(slot, Some((n, _)) if n.folded() == tname.folded());
                if hit {
                    if let Some((_, value)) = slot.take() {
                        ordered.push((tname.clone(), value));
                    }
                }
            }
        }
        ordered.extend(remaining.into_iter().flatten());
        self.entries = ordered;
        self.rebuild_index();
    }

    /// Iterate `(name, value)` pairs with names title-cased
    /// (e.g. `content-type` -> `Content-Type`), for HTTP/1 emission toward
    /// peers that expect canonical casing regardless of the stored form.
    pub fn as_title_case(&self) -> impl Iterator<Item = (String, &HeaderValue)> + '_ {
        self.entries.iter().map(|(n, v)| {
            let title = n
                .as_str()
                .split('-')
                .map(|word| {
                    let mut chars: Vec<char> = word.chars().collect();
                    if let Some(first) = chars.first_mut() {
                        *first = first.to_ascii_uppercase();
                    }
                    for c in chars.iter_mut().skip(1) {
                        *c = c.to_ascii_lowercase();
                    }
                    chars.into_iter().collect::<String>()
                })
                .collect::<Vec<_>>()
                .join("-");
            (title, v)
        })
    }

    /// Convert into a standard `http::HeaderMap` (folded names) for handoff
    /// to an engine that performs its own normalization.
    pub fn to_header_map(&self) -> HeaderMap {
        let mut map = HeaderMap::with_capacity(self.entries.len());
        for (name, value) in &self.entries {
            map.append(name.folded().clone(), value.clone());
        }
        map
    }

    fn rebuild_index(&mut self) {
        self.index.clear();
        for (pos, (name, _)) in self.entries.iter().enumerate() {
            self.index
                .entry(name.folded().clone())
                .or_default()
                .push(pos);
        }
    }
}

impl Extend<(OrigHeaderName, HeaderValue)> for OrderedHeaderMap {
    fn extend<I: IntoIterator<Item = (OrigHeaderName, HeaderValue)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.append_entry(name, value);
        }
    }
}

impl FromIterator<(OrigHeaderName, HeaderValue)> for OrderedHeaderMap {
    fn from_iter<I: IntoIterator<Item = (OrigHeaderName, HeaderValue)>>(iter: I) -> Self {
        let mut map = OrderedHeaderMap::new();
        map.extend(iter);
        map
    }
}

/// Iterator over all values for one logical name. See
/// [`OrderedHeaderMap::get_all`].
#[derive(Debug)]
pub struct GetAll<'a> {
    entries: &'a [(OrigHeaderName, HeaderValue)],
    positions: std::slice::Iter<'a, usize>,
}

impl<'a> Iterator for GetAll<'a> {
    type Item = &'a HeaderValue;

    fn next(&mut self) -> Option<Self::Item> {
        self.positions.next().map(|&pos| &self.entries[pos].1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let mut headers = OrderedHeaderMap::new();
        headers.insert("Content-Type", "application/json").unwrap();
        assert_eq!(
            headers.get("Content-Type").unwrap().to_str().unwrap(),
            "application/json"
        );
    }

    #[test]
    fn test_case_insensitive_get() {
        let mut headers = OrderedHeaderMap::new();
        headers.insert("ACCEPT", "text/html").unwrap();
        assert!(headers.get("accept").is_some());
        assert!(headers.get("Accept").is_some());
    }

    #[test]
    fn test_update_existing_header() {
        let mut headers = OrderedHeaderMap::new();
        headers.insert("Host", "example.com").unwrap();
        headers.insert("Host", "updated.com").unwrap();
        assert_eq!(
            headers.get("Host").unwrap().to_str().unwrap(),
            "updated.com"
        );
        assert_eq!(headers.len(), 1);
        assert_eq!(headers.keys_len(), 1);
    }

    #[test]
    fn test_insert_keeps_last_casing() {
        let mut headers = OrderedHeaderMap::new();
        headers.insert("Accept", "first").unwrap();
        headers.insert("accept", "second").unwrap();

        assert_eq!(headers.get("ACCEPT").unwrap().to_str().unwrap(), "second");
        assert_eq!(headers.get_all("accept").count(), 1);
        let names: Vec<_> = headers.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, ["accept"]);
    }

    #[test]
    fn test_append_keeps_duplicates() {
        let mut headers = OrderedHeaderMap::new();
        headers.append("Cookie", "a=1").unwrap();
        headers.append("cookie", "b=2").unwrap();

        assert_eq!(headers.len(), 2);
        assert_eq!(headers.keys_len(), 1);
        let values: Vec<_> = headers
            .get_all("Cookie")
            .map(|v| v.to_str().unwrap())
            .collect();
        assert_eq!(values, ["a=1", "b=2"]);
        // restartable: a second call yields the same sequence
        assert_eq!(headers.get_all("Cookie").count(), 2);
    }

    #[test]
    fn test_insert_replaces_duplicates_at_endmost_position() {
        let mut headers = OrderedHeaderMap::new();
        headers.append("Cookie", "a=1").unwrap();
        headers.append("Accept", "text/html").unwrap();
        headers.append("Cookie", "b=2").unwrap();
        headers.insert("Cookie", "c=3").unwrap();

        let pairs: Vec<_> = headers
            .iter()
            .map(|(n, v)| (n.as_str(), v.to_str().unwrap()))
            .collect();
        assert_eq!(pairs, [("Accept", "text/html"), ("Cookie", "c=3")]);
    }

    #[test]
    fn test_insert_replaces_value_not_position() {
        let mut headers = OrderedHeaderMap::new();
        headers.insert("User-Agent", "X").unwrap();
        headers.insert("Accept", "a").unwrap();
        headers.insert("Accept", "b").unwrap();

        let pairs: Vec<_> = headers
            .iter()
            .map(|(n, v)| (n.as_str(), v.to_str().unwrap()))
            .collect();
        assert_eq!(pairs, [("User-Agent", "X"), ("Accept", "b")]);
    }

    #[test]
    fn test_remove_header() {
        let mut headers = OrderedHeaderMap::new();
        headers.append("X-Custom", "1").unwrap();
        headers.append("x-custom", "2").unwrap();
        headers.remove("X-CUSTOM");
        assert!(headers.get("X-Custom").is_none());
        assert_eq!(headers.len(), 0);
        assert_eq!(headers.keys_len(), 0);

        // no-op on absent name
        headers.remove("X-Custom");
        assert!(headers.is_empty());
    }

    #[test]
    fn test_len_tracks_entries_keys_len_tracks_names() {
        let mut headers = OrderedHeaderMap::new();
        headers.append("A", "1").unwrap();
        headers.append("a", "2").unwrap();
        headers.append("B", "3").unwrap();
        assert_eq!(headers.len(), 3);
        assert_eq!(headers.keys_len(), 2);

        headers.remove("b");
        assert_eq!(headers.len(), 2);
        assert_eq!(headers.keys_len(), 1);
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut headers = OrderedHeaderMap::new();
        headers.insert("Host", "example.com").unwrap();
        headers.clear();
        assert!(headers.is_empty());
        headers.clear();
        assert!(headers.is_empty());
        assert_eq!(headers.len(), 0);
    }

    #[test]
    fn test_preserves_insertion_order() {
        let mut headers = OrderedHeaderMap::new();
        headers.insert("Host", "example.com").unwrap();
        headers.insert("Accept", "text/html").unwrap();
        headers.insert("User-Agent", "test").unwrap();

        let names: Vec<_> = headers.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, ["Host", "Accept", "User-Agent"]);
    }

    #[test]
    fn test_sort_by_template() {
        let mut headers = OrderedHeaderMap::new();
        headers.insert("User-Agent", "ua").unwrap();
        headers.insert("Cookie", "a=1").unwrap();
        headers.insert("Accept", "text/html").unwrap();

        let template = vec![
            OrigHeaderName::new("cookie").unwrap(),
            OrigHeaderName::new("User-Agent").unwrap(),
        ];
        headers.sort_by_template(&template);

        let names: Vec<_> = headers.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, ["cookie", "User-Agent", "Accept"]);
    }

    #[test]
    fn test_as_title_case() {
        let mut headers = OrderedHeaderMap::new();
        headers.insert("user-agent", "test").unwrap();
        headers.insert("accept-encoding", "gzip").unwrap();

        let title_cased: Vec<_> = headers.as_title_case().collect();
        assert_eq!(title_cased[0].0, "User-Agent");
        assert_eq!(title_cased[1].0, "Accept-Encoding");
    }

    #[test]
    fn test_invalid_header_name() {
        let mut headers = OrderedHeaderMap::new();
        assert_eq!(
            headers.insert("Invalid Header", "value"),
            Err(Error::MalformedHeaderName)
        );
    }

    #[test]
    fn test_invalid_header_value() {
        let mut headers = OrderedHeaderMap::new();
        assert_eq!(
            headers.insert("Valid", "invalid\nvalue"),
            Err(Error::MalformedHeaderValue)
        );
    }

    #[test]
    fn test_to_header_map() {
        let mut headers = OrderedHeaderMap::new();
        headers.insert("Host", "example.com").unwrap();
        headers.append("Cookie", "a=1").unwrap();
        headers.append("Cookie", "b=2").unwrap();

        let map = headers.to_header_map();
        assert_eq!(map.len(), 3);
        assert_eq!(map.get_all("cookie").iter().count(), 2);
    }
}
