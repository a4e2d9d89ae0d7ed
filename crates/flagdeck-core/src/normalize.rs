//! Group name normalization.
//!
//! Maps a raw server key to the pair of handles the rest of the system
//! uses: a human-readable section label and the canonical lowercase
//! identifier. Pure and total — any input, including the empty string,
//! produces a deterministic result.

use crate::model::GroupId;

/// Display label and canonical identifier derived from a raw server key.
///
/// Ephemeral: recomputed from the raw key whenever needed. Only the
/// [`GroupId`] is a long-lived handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupName {
    pub label: String,
    pub id: GroupId,
}

/// Normalize a raw server key.
///
/// The label replaces every underscore with a space and uppercases the
/// first character of each whitespace-delimited word, leaving the rest of
/// the word unchanged (mixed-case tails are preserved). Whitespace itself
/// is carried through verbatim. The identifier is the lowercased raw key.
pub fn normalize(raw: &str) -> GroupName {
    let spaced = raw.replace('_', " ");
    let mut label = String::with_capacity(spaced.len());
    let mut at_word_start = true;
    for ch in spaced.chars() {
        if ch.is_whitespace() {
            at_word_start = true;
            label.push(ch);
        } else if at_word_start {
            label.extend(ch.to_uppercase());
            at_word_start = false;
        } else {
            label.push(ch);
        }
    }

    GroupName {
        label,
        id: GroupId::from_raw(raw),
    }
}
