//! Runtime values for listlang
//!
//! `IntegerList` is the list object behind listlang list literals and list
//! expressions. Every index-taking operation reports failures as `IndexError`.

mod error;
mod list;

pub use error::IndexError;
pub use list::IntegerList;
