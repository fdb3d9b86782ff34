use std::sync::Arc;

/// A cursor into a source text.
///
/// A `Position` records where in the source a token or diagnostic sits. The
/// lexer owns one mutable cursor and advances it a character at a time; every
/// token and error stores snapshots of it taken with [`Position::copy`].
///
/// The file name and source text are shared, so snapshots are cheap to take
/// and can outlive the lexer that produced them.
///
/// # Example
/// ```
/// use fal::frontend::position::Position;
///
/// let mut pos = Position::new("demo", "1\n+");
/// pos.advance('1').advance('\n');
/// assert_eq!((pos.index, pos.line, pos.col), (2, 1, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Position {
    /// Zero-based byte offset into `ftext`.
    pub index: usize,
    /// Zero-based line number.
    pub line:  usize,
    /// Zero-based column, counted in characters.
    pub col:   usize,
    /// Logical name of the source, used only for display.
    pub fname: Arc<str>,
    /// The complete source text.
    pub ftext: Arc<str>,
}

impl Position {
    /// Creates a cursor placed on the first character of `ftext`.
    pub fn new(fname: impl Into<Arc<str>>, ftext: impl Into<Arc<str>>) -> Self {
        Self { index: 0,
               line:  0,
               col:   0,
               fname: fname.into(),
               ftext: ftext.into(), }
    }

    /// Moves the cursor past `current_char`.
    ///
    /// A newline starts a new line and resets the column. Returns the cursor
    /// itself so calls can be chained.
    pub fn advance(&mut self, current_char: char) -> &mut Self {
        self.index += current_char.len_utf8();

        if current_char == '\n' {
            self.line += 1;
            self.col = 0;
        } else {
            self.col += 1;
        }

        self
    }

    /// Returns an independent snapshot of this cursor.
    #[must_use]
    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// Returns the source line the cursor is on, without its line terminator.
    ///
    /// A cursor sitting right after a newline belongs to the following line.
    #[must_use]
    pub fn line_text(&self) -> &str {
        let index = self.index.min(self.ftext.len());
        let start = self.ftext[..index].rfind('\n').map_or(0, |i| i + 1);
        let end = self.ftext[index..].find('\n')
                                     .map_or(self.ftext.len(), |i| index + i);
        &self.ftext[start..end]
    }
}
