pub mod cli;
pub mod grid;
mod input;

pub use self::input::{
    ErrorKind, FromInput, FromInputIter, Input, InputError, InputIterator, Nl, Skip, Split, W,
};

pub mod prelude {
    //! Helper prelude with useful imports.
    pub use crate::grid::Grid;
    pub use crate::input::{Input, Nl, Split, W};
    pub use anyhow::{anyhow, bail, ensure, Context, Result};
    pub type ArrayVec<T, const N: usize = 16> = arrayvec::ArrayVec<T, N>;
    pub use bstr::{BStr, ByteSlice};
}

/// Read an input file into leaked static storage.
///
/// Inputs are small and live for the whole process anyway, so leaking keeps
/// [Input] free of lifetimes and trivially copyable.
pub fn load(path: &'static str, read_path: &str) -> anyhow::Result<Input> {
    use anyhow::{anyhow, Context};

    let data = std::fs::read(read_path).with_context(|| anyhow!("{path}"))?;
    Ok(Input::new(Box::leak(data.into_boxed_slice())))
}

/// Prepare the input for a day binary.
///
/// Paths resolve relative to the manifest directory of the calling crate so
/// binaries can be run from anywhere in the workspace.
#[macro_export]
macro_rules! input {
    ($path:literal) => {{
        let path = concat!("inputs/", $path);
        let read_path = concat!(env!("CARGO_MANIFEST_DIR"), "/inputs/", $path);
        ($crate::load(path, read_path)?, path)
    }};
}

/// Helper macro to implement [FromInput] for a type in terms of another
/// parsed value.
#[macro_export]
macro_rules! from_input {
    (
        |($value:pat_param): $ty:ty| -> $out:ident $block:block
    ) => {
        impl $crate::FromInput for $out {
            #[inline]
            fn error_kind() -> $crate::ErrorKind {
                <$ty as $crate::FromInput>::error_kind()
            }

            #[inline]
            fn try_from_input(
                p: &mut $crate::Input,
            ) -> core::result::Result<Option<Self>, $crate::InputError> {
                let Some(value) = <$ty as $crate::FromInput>::try_from_input(p)? else {
                    return Ok(None);
                };

                let out = (|$value: $ty| -> core::result::Result<$out, $crate::InputError> {
                    $block
                })(value)?;

                Ok(Some(out))
            }
        }
    };
}
