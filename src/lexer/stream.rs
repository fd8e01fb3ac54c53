use crate::lexer::Position;

/// A character source with a single slot of pushback.
///
/// The scanner reads one character past the end of every identifier, number
/// and operator run; `unread` puts that character back so the next read sees
/// it again, position included.
pub struct CharStream<I: Iterator<Item = char>> {
    chars: I,
    pushback: Option<char>,
    pos: Position,
    prev_pos: Position,
}

impl<I: Iterator<Item = char>> CharStream<I> {
    pub fn new(chars: I) -> Self {
        Self {
            chars,
            pushback: None,
            pos: Position::start(),
            prev_pos: Position::start(),
        }
    }

    /// Position of the next character to be read.
    pub fn position(&self) -> Position {
        self.pos
    }

    pub fn next_char(&mut self) -> Option<char> {
        let ch = self.pushback.take().or_else(|| self.chars.next())?;
        self.prev_pos = self.pos;
        if ch == '\n' {
            self.pos.line += 1;
            self.pos.column = 1;
        } else {
            self.pos.column += 1;
        }
        Some(ch)
    }

    /// Push back the character most recently returned by `next_char`.
    ///
    /// Only one character may be pending at a time.
    pub fn unread(&mut self, ch: char) {
        debug_assert!(self.pushback.is_none(), "pushback slot already occupied");
        self.pushback = Some(ch);
        self.pos = self.prev_pos;
    }

    /// Consume the next character if it equals `expected`.
    pub fn match_char(&mut self, expected: char) -> bool {
        match self.next_char() {
            Some(ch) if ch == expected => true,
            Some(ch) => {
                self.unread(ch);
                false
            }
            None => false,
        }
    }

    /// Consume characters while `pred` holds, appending them to `buf`.
    pub fn take_while_into(&mut self, buf: &mut String, pred: impl Fn(char) -> bool) {
        while let Some(ch) = self.next_char() {
            if pred(ch) {
                buf.push(ch);
            } else {
                self.unread(ch);
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unread_restores_char_and_position() {
        let mut stream = CharStream::new("ab".chars());
        assert_eq!(stream.next_char(), Some('a'));
        assert_eq!(stream.next_char(), Some('b'));
        assert_eq!(stream.position(), Position::new(1, 3));
        stream.unread('b');
        assert_eq!(stream.position(), Position::new(1, 2));
        assert_eq!(stream.next_char(), Some('b'));
        assert_eq!(stream.next_char(), None);
    }

    #[test]
    fn newline_advances_line() {
        let mut stream = CharStream::new("a\nb".chars());
        stream.next_char();
        stream.next_char();
        assert_eq!(stream.position(), Position::new(2, 1));
        stream.unread('\n');
        assert_eq!(stream.position(), Position::new(1, 2));
    }

    #[test]
    fn match_char_only_consumes_on_match() {
        let mut stream = CharStream::new("=x".chars());
        assert!(!stream.match_char('x'));
        assert!(stream.match_char('='));
        assert!(!stream.match_char('='));
        assert_eq!(stream.next_char(), Some('x'));
        assert!(!stream.match_char('='));
    }

    #[test]
    fn take_while_stops_before_mismatch() {
        let mut stream = CharStream::new("abc_1;".chars());
        let mut buf = String::new();
        stream.take_while_into(&mut buf, |c| c.is_ascii_alphanumeric() || c == '_');
        assert_eq!(buf, "abc_1");
        assert_eq!(stream.next_char(), Some(';'));
    }
}
