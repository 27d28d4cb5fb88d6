mod basic;

use super::*;

pub(super) fn make_session() -> ConverterSession {
    ConverterSession::default()
}

pub(super) fn type_string(session: &mut ConverterSession, s: &str) -> SessionResponse {
    let mut resp = SessionResponse::default();
    for ch in s.chars() {
        resp = session.handle(EditEvent::Insert(ch.to_string()));
    }
    resp
}
