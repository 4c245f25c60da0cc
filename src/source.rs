//! Configuration sources.
//!
//! The loader never touches `std::env` directly. It reads through a
//! `ConfigSource`, so callers (and tests) can hand it any mapping from
//! variable name to value.

use std::collections::{BTreeMap, HashMap};
use std::env;

/// A read-only mapping from variable name to string value.
pub trait ConfigSource {
    /// Look up `key`. Returns `None` when unset or unreadable.
    fn var(&self, key: &str) -> Option<String>;

    /// Whether `key` is present at all, even if `var` cannot return it.
    fn is_set(&self, key: &str) -> bool {
        self.var(key).is_some()
    }
}

/// The current process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl ConfigSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        env::var(key).ok()
    }

    fn is_set(&self, key: &str) -> bool {
        env::var_os(key).is_some()
    }
}

impl ConfigSource for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl ConfigSource for BTreeMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

/// Fixed key/value pairs, handy for tests and embedding.
#[derive(Debug, Clone, Copy)]
pub struct StaticSource<'a>(pub &'a [(&'a str, &'a str)]);

impl ConfigSource for StaticSource<'_> {
    fn var(&self, key: &str) -> Option<String> {
        self.0
            .iter()
            .rev()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| (*v).to_string())
    }
}

impl<S: ConfigSource + ?Sized> ConfigSource for &S {
    fn var(&self, key: &str) -> Option<String> {
        (**self).var(key)
    }

    fn is_set(&self, key: &str) -> bool {
        (**self).is_set(key)
    }
}

/// Read `key`, treating an empty value the same as an unset one.
pub fn non_empty_var(source: &impl ConfigSource, key: &str) -> Option<String> {
    source.var(key).filter(|v| !v.is_empty())
}
