#![deny(missing_docs)]

//! # Replacement Table
//!
//! An ordered list of literal (old, new) pairs applied to a text buffer.
//! The table is data: the patcher walks it in order and never branches on
//! individual entries.

use crate::error::{PatchError, PatchResult};

/// Old signature of the touch-pad reader in M5Unified.
pub const READ_TOUCH_PAD_OLD: &str =
    "static void _read_touch_pad(uint32_t* results, const touch_pad_t* channel, const size_t channel_count)";
/// ESP-IDF 5.5 compatible signature.
pub const READ_TOUCH_PAD_NEW: &str =
    "static void _read_touch_pad(uint32_t* results, const int* channel, const size_t channel_count)";
/// Old channel table declaration.
pub const CHANNEL_ID_OLD: &str = "static constexpr touch_pad_t s_channel_id[] = {";
/// ESP-IDF 5.5 compatible channel table declaration.
pub const CHANNEL_ID_NEW: &str = "static constexpr int s_channel_id[] = {";

/// A single literal substitution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    /// Literal to search for.
    pub from: String,
    /// Literal written in its place.
    pub to: String,
}

impl Replacement {
    /// Creates a pair.
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// Result of running a table over some text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Applied {
    /// Text after every pair has been applied.
    pub text: String,
    /// Occurrences replaced, one entry per table row, in table order.
    pub hits: Vec<usize>,
}

impl Applied {
    /// Total number of occurrences replaced.
    pub fn total_hits(&self) -> usize {
        self.hits.iter().sum()
    }
}

/// Ordered sequence of replacements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplacementTable {
    entries: Vec<Replacement>,
}

impl ReplacementTable {
    /// Builds a table, rejecting entries whose `from` is empty.
    pub fn new(entries: Vec<Replacement>) -> PatchResult<Self> {
        if let Some(idx) = entries.iter().position(|r| r.from.is_empty()) {
            return Err(PatchError::InvalidTable(format!(
                "entry {} has an empty search literal",
                idx
            )));
        }
        Ok(Self { entries })
    }

    /// The built-in table that replaces `touch_pad_t` usages removed in ESP-IDF 5.5.
    pub fn m5unified_touch_pad() -> Self {
        Self {
            entries: vec![
                Replacement::new(READ_TOUCH_PAD_OLD, READ_TOUCH_PAD_NEW),
                Replacement::new(CHANNEL_ID_OLD, CHANNEL_ID_NEW),
                Replacement::new("TOUCH_PAD_NUM4", "4"),
                Replacement::new("TOUCH_PAD_NUM7", "7"),
            ],
        }
    }

    /// Entries in application order.
    pub fn entries(&self) -> &[Replacement] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Applies every entry in order, replacing all occurrences of each.
    pub fn apply(&self, source: &str) -> Applied {
        let mut text = source.to_string();
        let mut hits = Vec::with_capacity(self.entries.len());

        for entry in &self.entries {
            let count = text.matches(entry.from.as_str()).count();
            if count > 0 {
                text = text.replace(entry.from.as_str(), &entry.to);
            }
            log::debug!("{:?}: {} occurrence(s)", entry.from, count);
            hits.push(count);
        }

        Applied { text, hits }
    }
}
