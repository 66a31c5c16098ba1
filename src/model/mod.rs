//! Data model for positioned text fragments and per-page parse results.

mod fragment;
mod page;
mod style;

pub use fragment::TextFragment;
pub use page::PageContent;
pub use style::{StyleTable, TextStyle};
