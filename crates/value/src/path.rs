//! Positional paths into a parameter tree.
//!
//! Supports the dotted syntax `book.author.first_name` with bracketed
//! array indices, `tags[0]` or `books[1].title`.

use std::fmt;

use smallvec::SmallVec;

use crate::error::{ValueError, ValueResult};

/// One step of a [`Path`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// Hash key access.
    Key(String),
    /// Array index access.
    Index(usize),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(key) => f.write_str(key),
            Self::Index(index) => write!(f, "[{index}]"),
        }
    }
}

/// A sequence of segments from the root of a parameter tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Path {
    segments: SmallVec<[PathSegment; 4]>,
}

impl Path {
    /// The empty path, pointing at the root.
    #[must_use]
    pub fn root() -> Self {
        Self::default()
    }

    /// A single-key path. The key is taken literally, dots included.
    #[must_use]
    pub fn key(key: impl Into<String>) -> Self {
        let mut path = Self::root();
        path.push(PathSegment::Key(key.into()));
        path
    }

    /// Parses the dotted/bracketed syntax.
    ///
    /// ```
    /// use paramguard_value::{Path, PathSegment};
    ///
    /// let path = Path::parse("books[1].title").unwrap();
    /// assert_eq!(path.len(), 3);
    /// assert_eq!(path.to_string(), "books[1].title");
    /// assert!(Path::parse("books..title").is_err());
    /// ```
    pub fn parse(input: &str) -> ValueResult<Self> {
        let mut path = Self::root();
        for part in input.split('.') {
            let (name, mut rest) = part.split_at(part.find('[').unwrap_or(part.len()));
            if name.is_empty() {
                return Err(ValueError::invalid_path(input, "empty key"));
            }
            path.push(PathSegment::Key(name.to_owned()));

            while !rest.is_empty() {
                let close = rest
                    .find(']')
                    .ok_or_else(|| ValueError::invalid_path(input, "unclosed '['"))?;
                let index = rest[1..close]
                    .parse::<usize>()
                    .map_err(|_| ValueError::invalid_path(input, "index is not a number"))?;
                path.push(PathSegment::Index(index));
                rest = &rest[close + 1..];
                if !rest.is_empty() && !rest.starts_with('[') {
                    return Err(ValueError::invalid_path(input, "text after ']'"));
                }
            }
        }
        Ok(path)
    }

    /// Appends a segment.
    pub fn push(&mut self, segment: PathSegment) {
        self.segments.push(segment);
    }

    /// Inserts a segment at the root end.
    pub fn prepend(&mut self, segment: PathSegment) {
        self.segments.insert(0, segment);
    }

    /// Number of segments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns `true` for the root path.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The final segment, if any.
    #[must_use]
    pub fn last(&self) -> Option<&PathSegment> {
        self.segments.last()
    }

    /// Iterates segments from the root.
    pub fn iter(&self) -> std::slice::Iter<'_, PathSegment> {
        self.segments.iter()
    }
}

impl FromIterator<PathSegment> for Path {
    fn from_iter<I: IntoIterator<Item = PathSegment>>(iter: I) -> Self {
        Self {
            segments: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a PathSegment;
    type IntoIter = std::slice::Iter<'a, PathSegment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 && matches!(segment, PathSegment::Key(_)) {
                f.write_str(".")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}
