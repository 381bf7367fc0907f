//! Comment extraction for the documentation collaborator.
//!
//! Peripheral to the graph engine; shares the raw-text input contract
//! with include extraction but feeds an external text-summarization
//! component instead.

use serde::{Deserialize, Serialize};

/// Kind of comment fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommentKind {
    /// `// ...` to end of line.
    Line,
    /// `/* ... */`, possibly spanning lines.
    Block,
}

/// A human-authored documentation fragment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// Line or block.
    pub kind: CommentKind,
    /// Comment text without the delimiters.
    pub text: String,
}

/// Extract line and block comments from raw source text, in order.
///
/// Comment-like text inside string and character literals is skipped.
/// An unterminated block comment runs to end of input. Never fails.
pub fn extract_comments(text: &str) -> Vec<Comment> {
    let mut comments = Vec::new();
    let bytes = text.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'"' | b'\'' => {
                // Skip the literal, honoring backslash escapes.
                let quote = bytes[i];
                i += 1;
                while i < bytes.len() {
                    if bytes[i] == b'\\' {
                        i += 2;
                    } else if bytes[i] == quote {
                        i += 1;
                        break;
                    } else {
                        i += 1;
                    }
                }
            }
            b'/' if i + 1 < bytes.len() && bytes[i + 1] == b'/' => {
                let start = i + 2;
                let end = text[start..]
                    .find('\n')
                    .map(|off| start + off)
                    .unwrap_or(bytes.len());
                comments.push(Comment {
                    kind: CommentKind::Line,
                    text: text[start..end].to_string(),
                });
                i = end;
            }
            b'/' if i + 1 < bytes.len() && bytes[i + 1] == b'*' => {
                let start = i + 2;
                let end = text[start..]
                    .find("*/")
                    .map(|off| start + off)
                    .unwrap_or(bytes.len());
                comments.push(Comment {
                    kind: CommentKind::Block,
                    text: text[start..end].to_string(),
                });
                i = (end + 2).min(bytes.len());
            }
            _ => i += 1,
        }
    }

    comments
}
