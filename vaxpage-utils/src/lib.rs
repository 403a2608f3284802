/// Pagination math, page windows, navigation and control layout.
pub mod pagination;
/// Pure parser helpers for user-supplied arguments.
pub mod parse;
