use super::types::SessionResponse;
use super::ConverterSession;

impl ConverterSession {
    pub(super) fn make_response(&self, changed: bool, truncated: bool) -> SessionResponse {
        let result = &self.result;
        SessionResponse {
            changed,
            truncated,
            glyphs: result.glyph_string(),
            legend: result.distinct_glyphs().into_units(),
            unknown: result.unknown_units().map(|u| u.original.clone()).collect(),
        }
    }
}
