//! Numeric element types that an image can hold.
//!
//! # Overview
//!
//! - [`Sample`] - Trait for image element types (u8, u16, u32, i8, i16, i32, f16, f32, f64)
//!
//! Profiles are computed on raw intensity values: a `u8` pixel of 200
//! contributes `200.0`, not `200 / 255`. The element type only matters for
//! display scaling, which reads [`Sample::DTYPE_RANGE`].
//!
//! # Dependencies
//!
//! - `half` crate for `f16` support

use half::f16;

/// Trait for numeric image element types.
///
/// # Constants
///
/// - [`NAME`](Sample::NAME) - Short type name for reports
/// - [`IS_FLOAT`](Sample::IS_FLOAT) - Whether this is a floating-point type
/// - [`DTYPE_RANGE`](Sample::DTYPE_RANGE) - Nominal intensity range of the type
///
/// # Example
///
/// ```
/// use lineprof_core::Sample;
///
/// assert_eq!(200u8.value(), 200.0);
/// assert_eq!(<u8 as Sample>::DTYPE_RANGE, (0.0, 255.0));
/// assert_eq!(<f32 as Sample>::DTYPE_RANGE, (-1.0, 1.0));
/// ```
pub trait Sample: Copy + Send + Sync + 'static {
    /// Short type name (`"u8"`, `"f32"`, ...).
    const NAME: &'static str;

    /// Whether this is a floating-point type.
    const IS_FLOAT: bool;

    /// Nominal `(min, max)` intensity range.
    ///
    /// Integer types span their representable range. Float types use
    /// `(-1.0, 1.0)`, the conventional range for normalised float images.
    const DTYPE_RANGE: (f32, f32);

    /// Raw value as `f32`, without normalisation.
    fn value(self) -> f32;
}

macro_rules! impl_int_sample {
    ($($ty:ty => $name:literal),* $(,)?) => {
        $(
            impl Sample for $ty {
                const NAME: &'static str = $name;
                const IS_FLOAT: bool = false;
                const DTYPE_RANGE: (f32, f32) = (<$ty>::MIN as f32, <$ty>::MAX as f32);

                #[inline]
                fn value(self) -> f32 {
                    self as f32
                }
            }
        )*
    };
}

impl_int_sample! {
    u8 => "u8",
    u16 => "u16",
    u32 => "u32",
    i8 => "i8",
    i16 => "i16",
    i32 => "i32",
}

impl Sample for f16 {
    const NAME: &'static str = "f16";
    const IS_FLOAT: bool = true;
    const DTYPE_RANGE: (f32, f32) = (-1.0, 1.0);

    #[inline]
    fn value(self) -> f32 {
        self.to_f32()
    }
}

impl Sample for f32 {
    const NAME: &'static str = "f32";
    const IS_FLOAT: bool = true;
    const DTYPE_RANGE: (f32, f32) = (-1.0, 1.0);

    #[inline]
    fn value(self) -> f32 {
        self
    }
}

impl Sample for f64 {
    const NAME: &'static str = "f64";
    const IS_FLOAT: bool = true;
    const DTYPE_RANGE: (f32, f32) = (-1.0, 1.0);

    #[inline]
    fn value(self) -> f32 {
        self as f32
    }
}
