//! Variable cache and resolver seam
//!
//! Variables are free-form lowercase identifiers whose values come from
//! outside the evaluator. The first time a name is seen, the
//! [`VariableResolver`] is asked for it; the answer is parsed as a number and
//! kept in the [`VariableCache`] so later expressions reuse it without asking
//! again.
//!
//! The cache is plain owned data. Sharing one between threads needs a lock
//! around the whole lookup-or-resolve step, otherwise two evaluations can
//! both ask for the same missing name.

use rustc_hash::FxHashMap;
use std::collections::BTreeMap;
use std::io;

/// Resolved variable values, keyed by name
///
/// Entries are only ever added.
#[derive(Debug, Clone, Default)]
pub struct VariableCache {
    values: FxHashMap<String, f64>,
}

impl VariableCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    /// Store a value, replacing any earlier one for the same name
    pub fn insert(&mut self, name: impl Into<String>, value: f64) {
        self.values.insert(name.into(), value);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Entries sorted by name
    pub fn sorted(&self) -> BTreeMap<&str, f64> {
        self.values
            .iter()
            .map(|(name, value)| (name.as_str(), *value))
            .collect()
    }
}

/// Supplies the value of a variable the cache does not know yet
///
/// Implementations return the raw text of the answer; the evaluator parses
/// it. Interactive implementations may block.
pub trait VariableResolver {
    fn resolve(&mut self, name: &str) -> io::Result<String>;
}

impl<F> VariableResolver for F
where
    F: FnMut(&str) -> io::Result<String>,
{
    fn resolve(&mut self, name: &str) -> io::Result<String> {
        self(name)
    }
}

/// Resolver that refuses every name
///
/// For evaluating expressions that must not contain unknown variables.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoVariables;

impl VariableResolver for NoVariables {
    fn resolve(&mut self, name: &str) -> io::Result<String> {
        Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("no value available for '{}'", name),
        ))
    }
}

/// Resolver answering from a fixed table, recording every request
#[derive(Debug, Clone, Default)]
pub struct ScriptedResolver {
    answers: FxHashMap<String, String>,
    requests: Vec<String>,
}

impl ScriptedResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an answer for `name`
    pub fn with(mut self, name: &str, answer: &str) -> Self {
        self.answers.insert(name.to_string(), answer.to_string());
        self
    }

    /// Names asked for so far, in order
    pub fn requests(&self) -> &[String] {
        &self.requests
    }
}

impl VariableResolver for ScriptedResolver {
    fn resolve(&mut self, name: &str) -> io::Result<String> {
        self.requests.push(name.to_string());
        self.answers.get(name).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("no scripted value for '{}'", name),
            )
        })
    }
}
