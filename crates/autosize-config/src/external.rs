//! Deciding which module ids stay external to a bundle.

use regex::Regex;
use serde::{Serialize, Serializer, ser::SerializeStruct};

use crate::error::Result;

/// Predicate over module ids: true when the bundler should leave the import
/// as a runtime reference instead of inlining it.
///
/// An id is external when it equals one of the names or continues with a
/// `/` subpath after one (`react`, `react/jsx-runtime`, but not `react-dom`).
#[derive(Debug, Clone)]
pub struct ExternalPredicate {
    names: Vec<String>,
    pattern: Option<Regex>,
}

impl ExternalPredicate {
    /// Predicate that keeps every module in the bundle.
    pub fn none() -> Self {
        Self {
            names: Vec::new(),
            pattern: None,
        }
    }

    /// Build a predicate from package names, in the given order.
    ///
    /// Names are matched literally. Duplicates are kept as they come.
    pub fn from_names<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.is_empty() {
            return Ok(Self::none());
        }

        let alternation = names
            .iter()
            .map(|name| regex::escape(name))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = Regex::new(&format!("^({alternation})($|/)"))?;

        Ok(Self {
            names,
            pattern: Some(pattern),
        })
    }

    pub fn is_external(&self, id: &str) -> bool {
        self.pattern.as_ref().is_some_and(|re| re.is_match(id))
    }

    /// Names the predicate was built from.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Source of the compiled pattern, if any name was given.
    pub fn pattern(&self) -> Option<&str> {
        self.pattern.as_ref().map(Regex::as_str)
    }

    /// Borrow as a plain closure for callers that take `Fn(&str) -> bool`.
    pub fn as_fn(&self) -> impl Fn(&str) -> bool + '_ {
        move |id| self.is_external(id)
    }
}

impl Default for ExternalPredicate {
    fn default() -> Self {
        Self::none()
    }
}

impl PartialEq for ExternalPredicate {
    fn eq(&self, other: &Self) -> bool {
        self.names == other.names
    }
}

impl Serialize for ExternalPredicate {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ExternalPredicate", 2)?;
        state.serialize_field("names", &self.names)?;
        state.serialize_field("pattern", &self.pattern())?;
        state.end()
    }
}

/// Shorthand for [`ExternalPredicate::from_names`].
pub fn build_external_predicate<I, S>(names: I) -> Result<ExternalPredicate>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    ExternalPredicate::from_names(names)
}
