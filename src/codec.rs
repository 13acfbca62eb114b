// 💾 Card file codec
// One card per line: term ## definition ## missed
//
// The delimiter is not escaped. A term or definition containing "##" will not
// survive a round trip.

use crate::card::Card;
use crate::error::{FlashcardError, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

pub const DELIMITER: &str = "##";

/// Number of fields in one record
const FIELD_COUNT: usize = 3;

// ============================================================================
// TEXT ENCODING
// ============================================================================

/// Encode one card as a single record line
pub fn encode_card(card: &Card) -> String {
    format!(
        "{}{DELIMITER}{}{DELIMITER}{}",
        card.term(),
        card.definition(),
        card.missed
    )
}

/// Encode cards in order, one per line, without a trailing newline
pub fn encode<'a, I>(cards: I) -> String
where
    I: IntoIterator<Item = &'a Card>,
{
    cards
        .into_iter()
        .map(encode_card)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Decode one record line (line_number is 1-based, used for error reporting)
pub fn decode_line(line: &str, line_number: usize) -> Result<Card> {
    let fields: Vec<&str> = line.split(DELIMITER).collect();

    if fields.len() != FIELD_COUNT {
        return Err(FlashcardError::MalformedRecord {
            line: line_number,
            reason: format!("expected {} fields, found {}", FIELD_COUNT, fields.len()),
        });
    }

    let missed = fields[2]
        .parse::<u32>()
        .map_err(|_| FlashcardError::MalformedRecord {
            line: line_number,
            reason: format!("\"{}\" is not a valid miss count", fields[2]),
        })?;

    Ok(Card::with_missed(fields[0], fields[1], missed))
}

/// Decode a whole file body; the first bad line aborts the decode
pub fn decode(text: &str) -> Result<Vec<Card>> {
    text.lines()
        .enumerate()
        .map(|(i, line)| decode_line(line, i + 1))
        .collect()
}

// ============================================================================
// FILE ACCESS
// ============================================================================

/// Read and decode a card file
pub fn read_cards(path: &Path) -> Result<Vec<Card>> {
    let text = fs::read_to_string(path).map_err(|e| FlashcardError::from_io(path, e))?;
    let cards = decode(&text)?;

    debug!(path = %path.display(), count = cards.len(), "decoded card file");
    Ok(cards)
}

/// Encode and write cards, replacing the file; returns how many were written
pub fn write_cards<'a, I>(path: &Path, cards: I) -> Result<usize>
where
    I: IntoIterator<Item = &'a Card>,
{
    let cards: Vec<&Card> = cards.into_iter().collect();
    fs::write(path, encode(cards.iter().copied())).map_err(|e| FlashcardError::from_io(path, e))?;

    debug!(path = %path.display(), count = cards.len(), "wrote card file");
    Ok(cards.len())
}

// ============================================================================
// TESTS
// ============================================================================
