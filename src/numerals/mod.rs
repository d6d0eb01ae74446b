//! Spanish numeral translation.

mod decimal;
mod integer;

pub use decimal::{decimal_to_words, Distance};
pub use integer::integer_to_words;
pub(crate) use integer::small_to_words;
