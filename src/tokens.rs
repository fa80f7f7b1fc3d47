//! Token parsing for denormalized multi-value fields.
//!
//! Raw material values arrive as free text like `"Iron, Bronze"`. The comma
//! tokenizer keeps multi-word token names intact (`"Gilt bronze"` stays one
//! token); the loose variant additionally splits on whitespace and exists
//! for genuinely space-delimited columns.

use std::collections::BTreeSet;

use crate::constants::parsing::MATERIAL_DELIMITER;
use crate::types::Token;

/// Split a raw material value into atomic tokens on comma delimiters.
///
/// Each piece is stripped of surrounding whitespace and a trailing literal
/// comma; empty pieces are dropped silently. Idempotent: parsing an
/// already-atomic token yields a singleton set of that token.
pub fn material_tokens(raw: &str) -> BTreeSet<Token> {
    raw.split(MATERIAL_DELIMITER)
        .map(clean_piece)
        .filter(|piece| !piece.is_empty())
        .collect()
}

/// Split a raw value on whitespace as well as commas.
///
/// Historical behavior of the earliest vocabulary scans. Breaks multi-word
/// token names apart, so material fields use [`material_tokens`] instead.
pub fn loose_tokens(raw: &str) -> BTreeSet<Token> {
    raw.split_whitespace()
        .map(clean_piece)
        .filter(|piece| !piece.is_empty())
        .collect()
}

/// Parse an optional field value; an absent value yields an empty set.
pub fn material_tokens_opt(raw: Option<&str>) -> BTreeSet<Token> {
    raw.map(material_tokens).unwrap_or_default()
}

fn clean_piece(piece: &str) -> Token {
    piece
        .trim()
        .trim_end_matches(MATERIAL_DELIMITER)
        .trim()
        .to_string()
}
