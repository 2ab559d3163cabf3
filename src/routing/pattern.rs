//! Path pattern compilation and matching.
//!
//! # Responsibilities
//! - Compile a path pattern string into literal and parameter segments
//! - Match a concrete request path against a compiled pattern
//! - Extract named parameter values into `RouteParams`
//!
//! # Design Decisions
//! - Segment count is fixed per pattern; no wildcard or variadic segments
//! - Matching is case-sensitive and trailing-slash-sensitive
//! - A parameter segment binds any non-empty value
//! - No regex to guarantee O(n) matching

use std::collections::HashMap;

use thiserror::Error;

/// Errors raised when compiling a path pattern at registration time.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidPatternError {
    /// The pattern string is empty.
    #[error("route pattern is empty")]
    Empty,

    /// The pattern does not start with the segment delimiter.
    #[error("route pattern {0:?} must start with '/'")]
    MissingLeadingSlash(String),

    /// A `:` segment carries no parameter name.
    #[error("route pattern {0:?} contains an unnamed parameter segment")]
    UnnamedParameter(String),
}

/// One compiled pattern segment.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    /// Must equal the request path segment exactly.
    Literal(String),
    /// Binds any non-empty request path segment to the given name.
    Param(String),
}

/// A compiled path pattern, ready for repeated matching.
///
/// Compiled once at route registration; matching never allocates on the
/// failure path.
#[derive(Debug, Clone)]
pub struct PathPattern {
    raw: String,
    segments: Vec<Segment>,
}

impl PathPattern {
    /// Compile a pattern string such as `/users/:id/orders`.
    ///
    /// Segments prefixed with `:` become named parameters; everything else
    /// must match literally.
    pub fn compile(pattern: &str) -> Result<Self, InvalidPatternError> {
        if pattern.is_empty() {
            return Err(InvalidPatternError::Empty);
        }
        if !pattern.starts_with('/') {
            return Err(InvalidPatternError::MissingLeadingSlash(pattern.to_string()));
        }

        let mut segments = Vec::new();
        for part in pattern.split('/') {
            if let Some(name) = part.strip_prefix(':') {
                if name.is_empty() {
                    return Err(InvalidPatternError::UnnamedParameter(pattern.to_string()));
                }
                segments.push(Segment::Param(name.to_string()));
            } else {
                segments.push(Segment::Literal(part.to_string()));
            }
        }

        Ok(Self {
            raw: pattern.to_string(),
            segments,
        })
    }

    /// The original pattern string.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Match a concrete request path against this pattern.
    ///
    /// Returns the extracted parameter values on a match, `None` otherwise.
    /// Empty segments are kept when splitting, so `/a/b` and `/a/b/` have
    /// different segment counts and never match the same pattern.
    pub fn match_path(&self, path: &str) -> Option<RouteParams> {
        let parts: Vec<&str> = path.split('/').collect();
        if parts.len() != self.segments.len() {
            return None;
        }

        let mut values = HashMap::new();
        for (segment, part) in self.segments.iter().zip(parts) {
            match segment {
                Segment::Literal(literal) => {
                    if literal != part {
                        return None;
                    }
                }
                Segment::Param(name) => {
                    if part.is_empty() {
                        return None;
                    }
                    values.insert(name.clone(), part.to_string());
                }
            }
        }

        Some(RouteParams { values })
    }
}

/// Parameter values extracted from a request path, scoped to one request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteParams {
    values: HashMap<String, String>,
}

impl RouteParams {
    /// Look up a parameter by the name it carries in the pattern.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Number of bound parameters.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True if the matched pattern had no parameter segments.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
