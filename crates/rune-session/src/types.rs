use rune_core::ConvertedUnit;

/// Longest text the session keeps, in characters.
pub const MAX_INPUT_CHARS: usize = 500;

/// Edit applied to the session text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditEvent {
    /// Append text at the end (typing or paste).
    Insert(String),
    /// Remove the last character.
    Backspace,
    Clear,
    /// Replace the whole text.
    Replace(String),
}

/// What the UI should show after an edit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionResponse {
    /// The text changed and the rendering must be refreshed.
    pub changed: bool,
    /// Input was cut at `MAX_INPUT_CHARS`.
    pub truncated: bool,
    pub glyphs: String,
    /// Distinct runes in first-occurrence order.
    pub legend: Vec<ConvertedUnit>,
    /// Letters with no rune, as typed.
    pub unknown: Vec<String>,
}
