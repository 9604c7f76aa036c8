use std::fmt::Debug;

use num_traits::{Bounded, Num, NumCast, ToPrimitive};

/// A trait for types that can be used as coordinates of indexed items.
///
/// This trait is sealed and cannot be implemented for external types. The bundled geometry relies
/// on `Bounded` to represent an empty box as the inverted range `[max_value, min_value]`, which is
/// only sound for the primitive numeric types listed here.
pub trait IndexableNum:
    private::Sealed
    + Num
    + NumCast
    + ToPrimitive
    + PartialOrd
    + Copy
    + Debug
    + Send
    + Sync
    + Bounded
{
    /// The type squared distances are accumulated in.
    ///
    /// Integer coordinates widen so that squaring the span between any two values cannot
    /// overflow: `i64` for 8 and 16 bit types, `i128` for 32 bit types. Floats keep their own
    /// type.
    type Distance: Num + PartialOrd + Copy + Debug + Send + Sync + Bounded;

    /// The square of the difference between two values, computed in [`Self::Distance`].
    fn squared_delta(self, other: Self) -> Self::Distance;

    /// Whether this value is NaN. Always `false` for integer types.
    #[inline]
    fn is_nan(self) -> bool {
        self.to_f64().is_some_and(f64::is_nan)
    }
}

macro_rules! impl_indexable_int {
    ($($t:ty => $wide:ty),* $(,)?) => {
        $(
            impl IndexableNum for $t {
                type Distance = $wide;

                #[inline]
                fn squared_delta(self, other: Self) -> $wide {
                    let d = self as $wide - other as $wide;
                    d * d
                }
            }
        )*
    };
}

macro_rules! impl_indexable_float {
    ($($t:ty),* $(,)?) => {
        $(
            impl IndexableNum for $t {
                type Distance = $t;

                #[inline]
                fn squared_delta(self, other: Self) -> $t {
                    let d = self - other;
                    d * d
                }
            }
        )*
    };
}

impl_indexable_int!(i8 => i64, u8 => i64, i16 => i64, u16 => i64, i32 => i128, u32 => i128);
impl_indexable_float!(f32, f64);

// https://rust-lang.github.io/api-guidelines/future-proofing.html#sealed-traits-protect-against-downstream-implementations-c-sealed
mod private {
    pub trait Sealed {}

    impl Sealed for i8 {}
    impl Sealed for u8 {}
    impl Sealed for i16 {}
    impl Sealed for u16 {}
    impl Sealed for i32 {}
    impl Sealed for u32 {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
}
