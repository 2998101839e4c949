use crate::error::{PatternCompilationErr, Result};
use log::debug;
use regex::{Regex, RegexBuilder};
use snafu::prelude::*;
use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Drop every pattern equal (ignoring case) to one seen earlier in the list.
///
/// Patterns are compared char by char on their simple uppercase mapping, so
/// `ß` and `SS` stay distinct, as do `\u{212A}` (Kelvin sign) and `k`.
pub fn dedup_case_insensitive<I, P>(patterns: I) -> Vec<String>
where
    I: IntoIterator<Item = P>,
    P: Into<String>,
{
    let mut seen = HashSet::new();

    patterns
        .into_iter()
        .map(Into::into)
        .filter(|pattern| seen.insert(fold_case(pattern)))
        .collect()
}

fn fold_case(pattern: &str) -> String {
    pattern
        .chars()
        .map(|c| {
            let mut upper = c.to_uppercase();
            match (upper.next(), upper.next()) {
                (Some(u), None) => u,
                _ => c,
            }
        })
        .collect()
}

pub fn compile(patterns: &[String]) -> Result<Vec<Regex>> {
    patterns
        .iter()
        .map(|pattern| {
            RegexBuilder::new(pattern)
                .case_insensitive(true)
                .build()
                .context(PatternCompilationErr { pattern })
        })
        .collect()
}

#[derive(Debug)]
struct CacheEntry {
    patterns: Vec<String>,
    regexes: Arc<[Regex]>,
}

/// Remembers the regexes compiled for the last pattern list. A lookup only
/// hits when the list handed in is identical to the cached one.
#[derive(Debug, Default)]
pub struct PatternCache {
    entry: Mutex<Option<CacheEntry>>,
}

impl PatternCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_compile(&self, patterns: Vec<String>) -> Result<Arc<[Regex]>> {
        let cached = self
            .lock()
            .as_ref()
            .filter(|e| e.patterns == patterns)
            .map(|e| e.regexes.clone());

        if let Some(regexes) = cached {
            debug!("Reusing {} compiled patterns", regexes.len());
            return Ok(regexes);
        }

        // Compile without holding the lock; the last writer wins.
        let regexes: Arc<[Regex]> = compile(&patterns)?.into();
        debug!("Compiled {} patterns", regexes.len());

        *self.lock() = Some(CacheEntry {
            patterns,
            regexes: regexes.clone(),
        });

        Ok(regexes)
    }

    fn lock(&self) -> MutexGuard<'_, Option<CacheEntry>> {
        self.entry.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
