//! Cross-field presence constraints.

use paramguard_value::{Params, Path};

use crate::error::InvalidParameterError;

/// How many keys of a group may be present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupMode {
    /// Exactly one key must be present.
    ExactlyOne,
    /// At least one key must be present.
    AtLeastOne,
    /// No more than one key may be present.
    AtMostOne,
}

/// An ordered list of keys with a presence rule.
///
/// Keys may be dotted paths (`"book.isbn"`), resolved from the level the
/// group is declared on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintGroup {
    keys: Vec<String>,
    mode: GroupMode,
}

impl ConstraintGroup {
    pub fn new<I, K>(mode: GroupMode, keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            mode,
        }
    }

    #[must_use]
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    #[must_use]
    pub const fn mode(&self) -> GroupMode {
        self.mode
    }

    /// Counts present keys in `params` and applies the mode.
    pub fn check(&self, params: &Params) -> Result<(), InvalidParameterError> {
        let present = self
            .keys
            .iter()
            .filter(|key| {
                let path = Path::parse(key).unwrap_or_else(|_| Path::key(key.as_str()));
                params.get_path(&path).is_some_and(|value| !value.is_null())
            })
            .count();

        match self.mode {
            GroupMode::ExactlyOne | GroupMode::AtMostOne if present > 1 => {
                Err(InvalidParameterError::mutually_exclusive(&self.keys))
            }
            GroupMode::ExactlyOne | GroupMode::AtLeastOne if present == 0 => {
                Err(InvalidParameterError::none_present(&self.keys))
            }
            _ => Ok(()),
        }
    }
}
