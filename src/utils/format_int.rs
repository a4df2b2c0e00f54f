use std::fmt::{self, Display, Formatter, Write};

/// Integer printed with `'` between groups of three digits, e.g. `-1'234'567`.
///
/// Wraps populations and coordinate spans in log fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NiceInt {
    negative: bool,
    magnitude: u128,
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {$(
        impl From<$t> for NiceInt {
            fn from(value: $t) -> Self {
                Self { negative: false, magnitude: value as u128 }
            }
        }
    )*};
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {$(
        impl From<$t> for NiceInt {
            fn from(value: $t) -> Self {
                Self { negative: value < 0, magnitude: value.unsigned_abs() as u128 }
            }
        }
    )*};
}

impl_from_unsigned!(u32, u64, usize);
impl_from_signed!(i32, i64);

impl Display for NiceInt {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let digits = self.magnitude.to_string();
        if self.negative {
            f.write_char('-')?;
        }
        // first group is 1..=3 digits long, the rest exactly 3
        let head = match digits.len() % 3 {
            0 => 3,
            r => r,
        };
        f.write_str(&digits[..head])?;
        for group in digits.as_bytes()[head..].chunks(3) {
            f.write_char('\'')?;
            for &d in group {
                f.write_char(d as char)?;
            }
        }
        Ok(())
    }
}
