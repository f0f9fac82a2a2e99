//! Reserved inbound token vocabulary.

/// Opens an inbound request; its value is the HTTP method.
pub const TOK_METHOD: &str = "method";
/// Appends one path fragment to the open request.
///
/// The wire text is misspelled. Both ends agree on it, so it stays.
pub const TOK_PATH_FRAGMENT: &str = "path_frament";
/// Names a query variable; the next line carries its value.
pub const TOK_GET_VAR: &str = "get_var";
/// Carries the value paired with the preceding `get_var`.
pub const TOK_GET_VALUE: &str = "get_value";
/// Closes the open request; the host should now respond.
pub const TOK_RESPOND: &str = "respond";

/// The closed inbound vocabulary.
///
/// Anything not listed parses as `Unknown`; the engine consumes such lines
/// and ignores them, which keeps the grammar forward-compatible with newer
/// firmware.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Method,
    PathFragment,
    GetVar,
    GetValue,
    Respond,
    Unknown,
}

impl Token {
    /// Classify a command token read off the wire.
    pub fn parse(text: &[u8]) -> Token {
        match text {
            t if t == TOK_METHOD.as_bytes() => Token::Method,
            t if t == TOK_PATH_FRAGMENT.as_bytes() => Token::PathFragment,
            t if t == TOK_GET_VAR.as_bytes() => Token::GetVar,
            t if t == TOK_GET_VALUE.as_bytes() => Token::GetValue,
            t if t == TOK_RESPOND.as_bytes() => Token::Respond,
            _ => Token::Unknown,
        }
    }

    /// Wire text for the token, if it has one.
    pub fn wire_text(&self) -> Option<&'static str> {
        match self {
            Token::Method => Some(TOK_METHOD),
            Token::PathFragment => Some(TOK_PATH_FRAGMENT),
            Token::GetVar => Some(TOK_GET_VAR),
            Token::GetValue => Some(TOK_GET_VALUE),
            Token::Respond => Some(TOK_RESPOND),
            Token::Unknown => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_tokens_parse() {
        assert_eq!(Token::parse(b"method"), Token::Method);
        assert_eq!(Token::parse(b"path_frament"), Token::PathFragment);
        assert_eq!(Token::parse(b"get_var"), Token::GetVar);
        assert_eq!(Token::parse(b"get_value"), Token::GetValue);
        assert_eq!(Token::parse(b"respond"), Token::Respond);
    }

    #[test]
    fn unknown_tokens_fall_through() {
        assert_eq!(Token::parse(b"telemetry"), Token::Unknown);
        assert_eq!(Token::parse(b""), Token::Unknown);
        // The correctly spelled form is NOT the wire token.
        assert_eq!(Token::parse(b"path_fragment"), Token::Unknown);
    }

    #[test]
    fn wire_text_roundtrips() {
        for token in [
            Token::Method,
            Token::PathFragment,
            Token::GetVar,
            Token::GetValue,
            Token::Respond,
        ] {
            let text = token.wire_text().unwrap();
            assert_eq!(Token::parse(text.as_bytes()), token);
        }
        assert_eq!(Token::Unknown.wire_text(), None);
    }
}
