//! Input cursor and parser combinators.

mod error;

#[cfg(test)]
mod tests;

use core::mem;
use core::ops::Range;
use std::str::from_utf8;

use arrayvec::ArrayVec;
use bstr::BStr;

pub use self::error::{ErrorKind, InputError};

pub(crate) type Result<T> = std::result::Result<T, InputError>;

pub(crate) const NL: u8 = b'\n';

/// Cursor over the raw input of a puzzle.
///
/// The data is borrowed for the lifetime of the process (see [crate::load]),
/// which keeps the cursor `Copy` so a solver can be re-run over the same
/// input any number of times. `at` tracks the byte offset into the original
/// input so errors can point back into the file.
#[derive(Debug, Clone, Copy)]
pub struct Input {
    data: &'static [u8],
    at: usize,
}

impl Input {
    /// Construct a new cursor over the given input.
    #[inline]
    pub fn new(data: &'static [u8]) -> Self {
        Self { data, at: 0 }
    }

    /// Byte offset into the original input.
    #[inline]
    pub fn at(&self) -> usize {
        self.at
    }

    /// Test if the remaining input is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Length of the remaining input.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Remaining input.
    #[inline]
    pub fn as_data(&self) -> &'static [u8] {
        self.data
    }

    /// Remaining input as a binary string.
    #[inline]
    pub fn as_bstr(&self) -> &'static BStr {
        BStr::new(self.data)
    }

    /// Split on the given byte, yielding the segments as sub-cursors.
    #[inline]
    pub fn splitn(&mut self, byte: u8) -> impl InputIterator + '_ {
        return Iter { input: self, byte };

        struct Iter<'a> {
            input: &'a mut Input,
            byte: u8,
        }

        impl InputIterator for Iter<'_> {
            #[inline]
            fn at(&self) -> usize {
                self.input.at
            }

            #[inline]
            fn next(&mut self) -> Option<Input> {
                self.input.split_once(self.byte)
            }
        }
    }

    /// Parse the next value as `T`.
    #[inline]
    #[allow(clippy::should_implement_trait)]
    pub fn next<T>(&mut self) -> Result<T>
    where
        T: FromInput,
    {
        T::from_input(self)
    }

    /// Try to parse the next value as `T`, returning `None` once there is no
    /// more data to process.
    #[inline]
    pub fn try_next<T>(&mut self) -> Result<Option<T>>
    where
        T: FromInput,
    {
        T::try_from_input(self)
    }

    /// Parse the next line as `T`, erroring if no line remains.
    #[inline]
    pub fn line<T>(&mut self) -> Result<T>
    where
        T: FromInput,
    {
        let at = self.at;

        let Some(line) = self.try_line()? else {
            return Err(InputError::new(at..self.at, ErrorKind::ExpectedLine));
        };

        Ok(line)
    }

    /// Try to parse the next line as `T`, returning `None` at the end of
    /// input or if the line does not start a `T`.
    #[inline]
    pub fn try_line<T>(&mut self) -> Result<Option<T>>
    where
        T: FromInput,
    {
        let Some(mut line) = self.split_once(NL) else {
            return Ok(None);
        };

        let Some(output) = line.try_next()? else {
            return Ok(None);
        };

        Ok(Some(output))
    }

    /// Try to parse the next whitespace-separated word as `T`, returning the
    /// byte offset the word starts at alongside the value.
    pub fn try_next_word<T>(&mut self) -> Result<Option<(usize, T)>>
    where
        T: FromInput,
    {
        let s = self.find(0, |b| !u8::is_ascii_whitespace(b));
        let n = self.find(s, u8::is_ascii_whitespace);

        if s == n {
            return Ok(None);
        }

        let start = self.at + s;

        let Some(mut word) = self.slice(s..n) else {
            return Ok(None);
        };

        let Some(value) = T::try_from_input(&mut word)? else {
            return Ok(None);
        };

        self.advance(n);
        Ok(Some((start, value)))
    }

    /// Split once at the given byte or at the end of input, returning the
    /// cursor over the segment before the split.
    #[inline]
    pub(crate) fn split_once(&mut self, byte: u8) -> Option<Input> {
        self.split_once_at(|data| memchr::memchr(byte, data))
    }

    fn split_once_at<F>(&mut self, find: F) -> Option<Input>
    where
        F: FnOnce(&[u8]) -> Option<usize>,
    {
        if self.data.is_empty() {
            return None;
        }

        let at = self.at;

        let Some(n) = find(self.data) else {
            let data = mem::take(&mut self.data);
            self.at += data.len();
            return Some(Input { data, at });
        };

        let data = &self.data[..n];
        self.advance(n + 1);
        Some(Input { data, at })
    }

    /// Find by predicate, starting at `n`.
    fn find(&self, mut n: usize, p: fn(&u8) -> bool) -> usize {
        while let Some(b) = self.data.get(n) {
            if p(b) {
                break;
            }

            n += 1;
        }

        n
    }

    #[inline]
    fn advance(&mut self, n: usize) {
        let n = n.min(self.data.len());
        self.at += n;
        self.data = &self.data[n..];
    }

    /// Construct a sub-cursor over the given range.
    #[inline]
    fn slice(&self, range: Range<usize>) -> Option<Input> {
        let at = self.at.checked_add(range.start)?;

        Some(Self {
            data: self.data.get(range)?,
            at,
        })
    }
}

/// A value that can be parsed from input.
pub trait FromInput: Sized {
    /// Error kind raised when the value is required but missing.
    #[inline]
    fn error_kind() -> ErrorKind {
        ErrorKind::UnexpectedEof
    }

    /// Try to parse a value, returning `None` if the input does not start
    /// one.
    fn try_from_input(p: &mut Input) -> Result<Option<Self>>;

    /// Parse a value, erroring if the input does not start one.
    #[inline]
    fn from_input(p: &mut Input) -> Result<Self> {
        let at = p.at;

        let Some(value) = Self::try_from_input(p)? else {
            return Err(InputError::new(at..p.at, Self::error_kind()));
        };

        Ok(value)
    }
}

/// Iterator over sub-cursors of an input.
pub trait InputIterator {
    /// Current byte offset of the iterator.
    fn at(&self) -> usize;

    /// Get the next sub-cursor.
    fn next(&mut self) -> Option<Input>;
}

/// Parse something from a sequence of sub-cursors.
pub trait FromInputIter: Sized {
    fn from_input_iter<I>(inputs: I) -> Result<Option<Self>>
    where
        I: InputIterator;
}

macro_rules! tuple {
    ($num:literal => $($ty:ident $var:ident),* $(,)?) => {
        impl<$($ty,)*> FromInput for ($($ty,)*)
        where
            $($ty: FromInput,)*
        {
            #[inline]
            fn error_kind() -> ErrorKind {
                ErrorKind::ExpectedTuple($num)
            }

            #[inline]
            fn try_from_input(p: &mut Input) -> Result<Option<Self>> {
                $(
                    let Some($var) = p.try_next()? else {
                        return Ok(None);
                    };
                )*

                Ok(Some(($($var,)*)))
            }
        }
    };
}

tuple!(1 => A a);
tuple!(2 => A a, B b);
tuple!(3 => A a, B b, C c);
tuple!(4 => A a, B b, C c, D d);

macro_rules! integer {
    ($ty:ty) => {
        impl FromInput for $ty {
            #[inline]
            fn try_from_input(p: &mut Input) -> Result<Option<Self>> {
                let Some((start, word)) = p.try_next_word::<&str>()? else {
                    return Ok(None);
                };

                let Ok(n) = str::parse(word) else {
                    return Err(InputError::new(start..p.at, ErrorKind::NotInteger(word)));
                };

                Ok(Some(n))
            }
        }
    };
}

integer!(usize);
integer!(isize);
integer!(u32);
integer!(u64);
integer!(i32);
integer!(i64);

impl FromInput for Input {
    #[inline]
    fn try_from_input(p: &mut Input) -> Result<Option<Self>> {
        Ok(Some(*p))
    }
}

impl FromInput for &'static [u8] {
    #[inline]
    fn try_from_input(p: &mut Input) -> Result<Option<Self>> {
        let data = mem::take(&mut p.data);
        p.at += data.len();
        Ok(Some(data))
    }
}

impl FromInput for &'static str {
    #[inline]
    fn try_from_input(p: &mut Input) -> Result<Option<Self>> {
        let at = p.at;

        let Some(data) = <&[u8]>::try_from_input(p)? else {
            return Ok(None);
        };

        let Ok(data) = from_utf8(data) else {
            return Err(InputError::new(at..p.at, ErrorKind::NotUtf8));
        };

        Ok(Some(data))
    }
}

impl<T> FromInput for Vec<T>
where
    T: FromInput,
{
    #[inline]
    fn try_from_input(p: &mut Input) -> Result<Option<Self>> {
        let mut output = Vec::new();

        while let Some(element) = T::try_from_input(p)? {
            output.push(element);
        }

        Ok(Some(output))
    }
}

/// Parse a full line as `T`, erroring if the line does not parse.
#[derive(Debug)]
pub struct Nl<T>(pub T);

impl<T> FromInput for Nl<T>
where
    T: FromInput,
{
    #[inline]
    fn try_from_input(p: &mut Input) -> Result<Option<Self>> {
        let Some(mut line) = p.split_once(NL) else {
            return Ok(None);
        };

        Ok(Some(Self(line.next()?)))
    }
}

/// Split on byte `D` and parse the segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Split<const D: char, T>(pub T);

impl<const D: char, T> FromInput for Split<D, T>
where
    T: FromInputIter,
{
    #[inline]
    fn error_kind() -> ErrorKind {
        ErrorKind::ExpectedSplit(D)
    }

    #[inline]
    fn try_from_input(p: &mut Input) -> Result<Option<Self>> {
        let it = p.splitn(D as u8);

        let Some(out) = T::from_input_iter(it)? else {
            return Ok(None);
        };

        Ok(Some(Self(out)))
    }
}

impl<const N: usize, T> FromInputIter for [T; N]
where
    T: FromInput,
{
    #[inline]
    fn from_input_iter<I>(mut it: I) -> Result<Option<Self>>
    where
        I: InputIterator,
    {
        let at = it.at();
        let mut array = ArrayVec::new();

        while array.remaining_capacity() > 0 {
            let Some(mut value) = it.next() else {
                return Ok(None);
            };

            let Some(value) = T::try_from_input(&mut value)? else {
                return Ok(None);
            };

            array.push(value);
        }

        match array.into_inner() {
            Ok(array) => Ok(Some(array)),
            Err(array) => Err(InputError::new(
                at..it.at(),
                ErrorKind::BadArray(N, array.len()),
            )),
        }
    }
}

#[non_exhaustive]
pub struct Skip;

impl FromInput for Skip {
    #[inline]
    fn try_from_input(_: &mut Input) -> Result<Option<Self>> {
        Ok(Some(Self))
    }
}

/// Parse a whitespace-separated word of input as `T`.
pub struct W<T = Skip>(pub T);

impl<T> FromInput for W<T>
where
    T: FromInput,
{
    #[inline]
    fn try_from_input(p: &mut Input) -> Result<Option<Self>> {
        let Some((_, value)) = p.try_next_word()? else {
            return Ok(None);
        };

        Ok(Some(Self(value)))
    }
}
