//! Immutable view of the environment used for classification.

use envcheck_core::config::EmptyValuePolicy;
use envcheck_core::types::collections::FxHashMap;

/// A point-in-time copy of environment variables.
///
/// The checker classifies against this instead of reading the process
/// environment, so results depend only on what the caller passes in.
#[derive(Debug, Clone, Default)]
pub struct EnvSnapshot {
    vars: FxHashMap<String, String>,
}

impl EnvSnapshot {
    /// Capture the current process environment.
    ///
    /// Names and values that are not valid Unicode are converted lossily.
    pub fn from_process() -> Self {
        std::env::vars_os()
            .map(|(k, v)| {
                (
                    k.to_string_lossy().into_owned(),
                    v.to_string_lossy().into_owned(),
                )
            })
            .collect()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    /// Whether `name` counts as set under `policy`.
    pub fn is_set(&self, name: &str, policy: EmptyValuePolicy) -> bool {
        match (self.get(name), policy) {
            (None, _) => false,
            (Some(value), EmptyValuePolicy::Missing) => !value.is_empty(),
            (Some(_), EmptyValuePolicy::Present) => true,
        }
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for EnvSnapshot
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
