//! Pull-based lexer over the raw argument list.
//!
//! The lookahead is consumed a prefix at a time so that `--name=value`,
//! `-nvalue`, `-n=value` and `-n value` all reduce to the same sequence of
//! calls: once a prefix strip empties the lookahead, the next raw argument
//! takes its place.

pub struct Tokenizer<I> {
    args: I,
    lookahead: Option<String>,
    exhausted: bool,
}

impl<I, S> Tokenizer<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    /// Wrap a full argument list; the first element (program path) is skipped.
    pub fn new<A>(args: A) -> Self
    where
        A: IntoIterator<IntoIter = I, Item = S>,
    {
        let mut args = args.into_iter();
        let exhausted = args.next().is_none();
        Tokenizer {
            args,
            lookahead: None,
            exhausted,
        }
    }

    fn fill(&mut self) {
        if self.lookahead.is_some() || self.exhausted {
            return;
        }
        match self.args.next() {
            Some(arg) => self.lookahead = Some(arg.as_ref().to_string()),
            None => self.exhausted = true,
        }
    }

    /// The lookahead token, or `""` at end of input.
    pub fn current(&mut self) -> &str {
        self.fill();
        self.lookahead.as_deref().unwrap_or("")
    }

    /// Strip `prefix` from the lookahead if it starts with it.
    pub fn eat<'p>(&mut self, prefix: &'p str) -> Option<&'p str> {
        self.fill();
        let token = self.lookahead.as_mut()?;
        if !token.starts_with(prefix) {
            return None;
        }
        token.drain(..prefix.len());
        if token.is_empty() {
            self.lookahead = None;
            self.fill();
        }
        Some(prefix)
    }

    /// Return the lookahead and move past it; `""` at end of input.
    pub fn next_token(&mut self) -> String {
        self.fill();
        self.lookahead.take().unwrap_or_default()
    }

    pub fn eof(&mut self) -> bool {
        self.fill();
        self.lookahead.is_none()
    }
}
