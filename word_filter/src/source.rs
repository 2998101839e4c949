use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

/// Sample word list shipped with [`InMemorySource::default`].
pub const DEFAULT_PATTERNS: [&str; 4] = ["swine", "bad", "nasty", "horrible"];

/// Owner of the pattern list and the filtering flag.
///
/// The engine only reads through this trait, apart from forwarding
/// enable/disable requests. Implementations decide how (and whether) their
/// state is shared between threads.
#[cfg_attr(test, mockall::automock)]
pub trait WordSource {
    /// Current patterns in order. Duplicates are allowed.
    fn all_patterns(&self) -> Vec<String>;

    fn is_filtering_enabled(&self) -> bool;

    fn enable(&self);

    fn disable(&self);
}

impl<S: WordSource + ?Sized> WordSource for &S {
    fn all_patterns(&self) -> Vec<String> {
        (**self).all_patterns()
    }

    fn is_filtering_enabled(&self) -> bool {
        (**self).is_filtering_enabled()
    }

    fn enable(&self) {
        (**self).enable()
    }

    fn disable(&self) {
        (**self).disable()
    }
}

impl<S: WordSource + ?Sized> WordSource for Box<S> {
    fn all_patterns(&self) -> Vec<String> {
        (**self).all_patterns()
    }

    fn is_filtering_enabled(&self) -> bool {
        (**self).is_filtering_enabled()
    }

    fn enable(&self) {
        (**self).enable()
    }

    fn disable(&self) {
        (**self).disable()
    }
}

impl<S: WordSource + ?Sized> WordSource for Arc<S> {
    fn all_patterns(&self) -> Vec<String> {
        (**self).all_patterns()
    }

    fn is_filtering_enabled(&self) -> bool {
        (**self).is_filtering_enabled()
    }

    fn enable(&self) {
        (**self).enable()
    }

    fn disable(&self) {
        (**self).disable()
    }
}

/// Word list and flag held in memory for the life of the process.
#[derive(Debug)]
pub struct InMemorySource {
    patterns: RwLock<Vec<String>>,
    enabled: AtomicBool,
}

impl InMemorySource {
    pub fn new<I, P>(patterns: I, enabled: bool) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<String>,
    {
        let patterns = RwLock::new(patterns.into_iter().map(Into::into).collect());
        let enabled = AtomicBool::new(enabled);

        Self { patterns, enabled }
    }

    pub fn with_patterns<I, P>(patterns: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<String>,
    {
        Self::new(patterns, true)
    }

    pub fn set_patterns<I, P>(&self, patterns: I)
    where
        I: IntoIterator<Item = P>,
        P: Into<String>,
    {
        let patterns = patterns.into_iter().map(Into::into).collect();
        *self.patterns.write().unwrap_or_else(PoisonError::into_inner) = patterns;
    }
}

impl Default for InMemorySource {
    fn default() -> Self {
        Self::new(DEFAULT_PATTERNS, true)
    }
}

impl WordSource for InMemorySource {
    fn all_patterns(&self) -> Vec<String> {
        self.patterns
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn is_filtering_enabled(&self) -> bool {
        self.enabled.load(Ordering::SeqCst)
    }

    fn enable(&self) {
        self.enabled.store(true, Ordering::SeqCst);
    }

    fn disable(&self) {
        self.enabled.store(false, Ordering::SeqCst);
    }
}
