//! Line splitting with universal newlines.

/// Iterator over the lines of a text, see [`split_lines`].
#[derive(Debug, Clone)]
pub struct Lines<'a> {
    rest: &'a str,
}

/// Split `text` into lines, treating `\r\n`, a lone `\r` and `\n` each as
/// one line ending. Terminators are not part of the yielded lines and a
/// trailing terminator does not produce an extra empty line.
pub fn split_lines(text: &str) -> Lines<'_> {
    Lines { rest: text }
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }

        match self.rest.find(|c| c == '\r' || c == '\n') {
            None => {
                let line = self.rest;
                self.rest = "";
                Some(line)
            }
            Some(idx) => {
                let line = &self.rest[..idx];
                let ending = if self.rest[idx..].starts_with("\r\n") { 2 } else { 1 };
                self.rest = &self.rest[idx + ending..];
                Some(line)
            }
        }
    }
}
