use std::ops::Add;

/// An operand accepted by [`add`](crate::add) and [`divide`](crate::divide).
pub trait Numeric: Copy + Add<Output = Self> {
    /// True for `0`, and for both `0.0` and `-0.0` on floats.
    fn is_zero(self) -> bool;

    fn to_f64(self) -> f64;
}

macro_rules! impl_numeric {
    ($zero:literal => $($t:ty),+) => {
        $(
            impl Numeric for $t {
                #[inline]
                fn is_zero(self) -> bool {
                    self == $zero
                }

                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )+
    };
}

impl_numeric!(0 => i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
impl_numeric!(0.0 => f32, f64);
