use core::fmt;
use core::ops::Range;

use crate::input::{Input, InputError, NL};

/// Attach `path:line:col` context to an error raised while solving over the
/// given input.
pub fn error_context<E>(path: &'static str, data: Input, error: E) -> anyhow::Error
where
    anyhow::Error: From<E>,
{
    let error = anyhow::Error::from(error);
    let span = find_span(&error);
    let pos = pos_from(data.as_data(), span);
    error.context(ErrorContext { path, pos })
}

/// A line and column combination, both zero-based internally and rendered
/// one-based.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineCol {
    line: usize,
    col: usize,
}

impl LineCol {
    const EMPTY: Self = Self::new(0, 0);

    const fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }
}

impl fmt::Display for LineCol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.col + 1)
    }
}

/// Need to be able to unwrap an error fully in case it's threaded through
/// multiple layers of processing.
fn find_span(error: &anyhow::Error) -> Range<usize> {
    match error.downcast_ref::<InputError>() {
        Some(e) => e.span(),
        None => 0..0,
    }
}

/// Recover the line and column of the start of the given byte span.
fn pos_from(data: &[u8], span: Range<usize>) -> LineCol {
    let Some(head) = data.get(..span.start) else {
        return LineCol::EMPTY;
    };

    let line = memchr::memchr_iter(NL, head).count();

    let col = match memchr::memrchr(NL, head) {
        Some(n) => head.len() - (n + 1),
        None => head.len(),
    };

    LineCol::new(line, col)
}

#[derive(Debug)]
struct ErrorContext {
    path: &'static str,
    pos: LineCol,
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{path}:{pos}", path = self.path, pos = self.pos)
    }
}

#[cfg(test)]
mod tests {
    use super::error_context;
    use crate::input::{Input, Split};

    #[test]
    fn errors_point_into_the_file() {
        let input = Input::new(b"1:2\nbroken\n");
        let mut p = input;

        p.try_next::<crate::input::Nl<Split<':', [Input; 2]>>>().unwrap();
        let error = p
            .try_next::<crate::input::Nl<Split<':', [Input; 2]>>>()
            .unwrap_err();

        let error = error_context("inputs/x.txt", input, error);
        assert_eq!(
            format!("{error:#}"),
            "inputs/x.txt:2:1: expected split on `':'`"
        );
    }
}
