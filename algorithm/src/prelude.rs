pub use crate::data_structure::graph::*;
pub use crate::string::{slugify, strip_digit_prefix};
