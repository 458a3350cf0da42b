//! Itemized header lists: Menimbang (lettered) and Mengingat (numbered).

use std::sync::LazyLock;

use regex::Regex;

use super::flatten_lines;
use crate::types::ListItem;

/// Menimbang block, bounded by the Mengingat or decision marker.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static CONSIDERATIONS_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)Menimbang\s*:\s*(.*?)(?:\n\s*Mengingat\s*:|MEMUTUSKAN:)")
        .expect("valid regex")
});

/// Start of a lettered item ("a.").
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static LETTER_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-z]\.").expect("valid regex"));

/// Where a lettered item ends: the next "x. " marker.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static LETTER_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-z]\.\s").expect("valid regex"));

/// Mengingat marker; the block starts right after it.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static LEGAL_BASES_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Mengingat\s*:").expect("valid regex"));

/// Decision marker on its own line, ending the Mengingat block.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static LEGAL_BASES_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\n\s*MEMUTUSKAN\s*:").expect("valid regex"));

/// Numbered item marker at the start of a line ("1.").
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static NUMBER_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*(\d+)\.\s*").expect("valid regex"));

/// Parse the Menimbang list.
///
/// Each lettered item runs up to the next letter marker or the end of the
/// block. A block without any marker becomes a single item `a`. Returns
/// `None` when the block is not bounded by Mengingat or MEMUTUSKAN.
#[must_use]
pub fn parse_considerations(text: &str) -> Option<Vec<ListItem>> {
    let block = CONSIDERATIONS_BLOCK.captures(text)?.get(1)?.as_str().trim();

    let items = split_lettered(block);
    if items.is_empty() {
        return Some(vec![ListItem::new("a", flatten_lines(block))]);
    }
    Some(items)
}

/// Split a block on lettered markers.
///
/// A marker is any lowercase letter followed by a period; an item ends
/// where the next such marker followed by whitespace begins. Words that
/// end a sentence ("efektif. ") therefore also open a new item, which
/// matches how these headers are scanned elsewhere.
fn split_lettered(block: &str) -> Vec<ListItem> {
    let mut items = Vec::new();
    let mut pos = 0;

    while let Some(marker) = LETTER_MARKER.find_at(block, pos) {
        let point = &block[marker.start()..marker.start() + 1];
        let rest = &block[marker.end()..];
        let body_start = marker.end() + (rest.len() - rest.trim_start().len());

        // An item needs at least one character of text.
        let Some(first) = block[body_start..].chars().next() else {
            break;
        };
        let end = LETTER_BOUNDARY
            .find_at(block, body_start + first.len_utf8())
            .map_or(block.len(), |m| m.start());

        items.push(ListItem::new(point, flatten_lines(&block[body_start..end])));
        pos = end;
    }

    items
}

/// Parse the Mengingat list.
///
/// The block is located by the marker's end offset and runs to a
/// line-leading MEMUTUSKAN or the end of the text. Items may themselves
/// contain periods ("No. 5 Tahun 1960"), so items are only split on
/// numbers that start a line. Trailing semicolons are stripped and empty
/// items dropped. Returns `None` when there is no Mengingat marker.
#[must_use]
pub fn parse_legal_bases(text: &str) -> Option<Vec<ListItem>> {
    let start = LEGAL_BASES_START.find(text)?;
    let after = &text[start.end()..];
    let block = match LEGAL_BASES_END.find(after) {
        Some(end) => &after[..end.start()],
        None => after,
    };

    let block = block
        .replace("\r\n", "\n")
        .replace('\r', "\n")
        .replace('\u{00A0}', " ");

    let markers: Vec<_> = NUMBER_MARKER.captures_iter(&block).collect();
    let mut items = Vec::new();

    for (i, caps) in markers.iter().enumerate() {
        let (Some(whole), Some(number)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let end = markers
            .get(i + 1)
            .and_then(|next| next.get(0))
            .map_or(block.len(), |m| m.start());

        let item_text = collapse_whitespace(&block[whole.end()..end]);
        let item_text = item_text.trim_matches(|c| c == ' ' || c == ';');
        if !item_text.is_empty() {
            items.push(ListItem::new(number.as_str(), item_text));
        }
    }

    Some(items)
}

/// Collapse every whitespace run into a single space.
fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
