//! Relational helpers over the version ordering contract
//!
//! Every scheme's value type implements `Ord` consistently with `Eq`, so
//! these are purely derived; they exist to keep call sites readable where
//! the release engine decides "is this tag newer than that one".

/// `a < b` under the scheme's total order.
pub fn less_than<T: Ord>(a: &T, b: &T) -> bool {
    a < b
}

/// `a <= b` under the scheme's total order.
pub fn less_than_or_equal_to<T: Ord>(a: &T, b: &T) -> bool {
    a <= b
}

/// `a > b` under the scheme's total order.
pub fn greater_than<T: Ord>(a: &T, b: &T) -> bool {
    a > b
}

/// `a >= b` under the scheme's total order.
pub fn greater_than_or_equal_to<T: Ord>(a: &T, b: &T) -> bool {
    a >= b
}
