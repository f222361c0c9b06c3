/// Equality and ordering between values.
///
/// Defines how numbers of different kinds compare with each other, and how
/// text and sequences are ordered.
pub mod compare;

pub mod core;
