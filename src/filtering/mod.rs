/*! Filtering utilities

Records are kept or discarded according to the language of their text.
Filters implement [Filter], and are pure: 2 successive equal inputs give 2 equal outputs.
! */
mod filter;
mod language;
mod normalize;

pub use filter::Filter;
pub use language::Language;
pub use normalize::normalize;
