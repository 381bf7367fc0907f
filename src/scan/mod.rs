//! Lexical scanners over raw source text.
//!
//! Both scanners are pure and total: any input yields a (possibly
//! empty) result, never an error. Neither is preprocessor-aware; an
//! include-like token inside a string literal or comment elsewhere in
//! the file will match. That trade-off is intentional scope, not a
//! defect.

pub mod comments;
pub mod includes;

pub use comments::{extract_comments, Comment, CommentKind};
pub use includes::extract_includes;
