use crate::error::Result;
use crate::mask::{mask_middle, MASK};
use crate::patterns::{dedup_case_insensitive, PatternCache};
use crate::source::WordSource;
use log::debug;
use regex::Regex;
use std::borrow::Cow;
use std::collections::HashSet;
use std::sync::Arc;

/// Counts and masks the words supplied by a [`WordSource`].
///
/// Every call reads the source afresh (flag at most once, pattern list at most
/// once), so changes made to the source are seen by the very next call.
/// Compiled patterns are reused only while the pattern list stays identical.
pub struct FilterEngine<S> {
    source: S,
    mask: char,
    cache: PatternCache,
}

impl<S: WordSource> FilterEngine<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            mask: MASK,
            cache: PatternCache::new(),
        }
    }

    pub fn with_mask(mut self, mask: char) -> Self {
        self.mask = mask;
        self
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Total number of non-overlapping matches of every pattern in `text`.
    /// Different patterns matching the same span are counted separately.
    pub fn count(&self, text: &str) -> Result<usize> {
        if is_blank(text) {
            return Ok(0);
        }

        let regexes = self.regexes()?;
        let total: usize = regexes
            .iter()
            .map(|regex| regex.find_iter(text).count())
            .sum();
        debug!("Counted {total} negative words");

        Ok(total)
    }

    pub fn count_optional(&self, text: Option<&str>) -> Result<usize> {
        text.map_or(Ok(0), |text| self.count(text))
    }

    /// Copy of `text` with every match masked. Blank text, or any text while
    /// filtering is off, is handed back as is.
    ///
    /// Matches are always searched for in the original text. Each matched
    /// value then replaces all of its occurrences in the output built so far,
    /// so the result for patterns whose matches overlap depends on the order
    /// of the pattern list.
    pub fn filter<'t>(&self, text: &'t str) -> Result<Cow<'t, str>> {
        if is_blank(text) {
            return Ok(Cow::Borrowed(text));
        }

        if !self.source.is_filtering_enabled() {
            debug!("Filtering is off, passing text through");
            return Ok(Cow::Borrowed(text));
        }

        let regexes = self.regexes()?;
        let mut output = Cow::Borrowed(text);

        for regex in regexes.iter() {
            let mut seen = HashSet::new();

            for found in regex.find_iter(text) {
                let word = found.as_str();
                if word.is_empty() || !seen.insert(word) {
                    continue;
                }

                let masked = mask_middle(word, self.mask);
                if masked != word && output.contains(word) {
                    output = Cow::Owned(output.replace(word, &masked));
                }
            }
        }

        Ok(output)
    }

    pub fn filter_optional<'t>(&self, text: Option<&'t str>) -> Result<Option<Cow<'t, str>>> {
        text.map(|text| self.filter(text)).transpose()
    }

    pub fn turn_on_filter(&self) {
        debug!("Turning filtering on");
        self.source.enable();
    }

    pub fn turn_off_filter(&self) {
        debug!("Turning filtering off");
        self.source.disable();
    }

    fn regexes(&self) -> Result<Arc<[Regex]>> {
        let patterns = dedup_case_insensitive(self.source.all_patterns());
        debug!("Using {} distinct patterns", patterns.len());
        self.cache.get_or_compile(patterns)
    }
}

fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::MockWordSource;
    use crate::Error;

    const WEATHER: &str = "The weather in Manchester in winter is bad. It rains all the time - it must be horrible for people visiting.";
    const BLANKS: [&str; 3] = ["", "   ", "\t\n"];

    fn words(patterns: &[&str]) -> Vec<String> {
        patterns.iter().map(|p| p.to_string()).collect()
    }

    fn source_with(patterns: &[&str]) -> MockWordSource {
        let mut source = MockWordSource::new();
        source
            .expect_all_patterns()
            .return_const(words(patterns));
        source
    }

    fn enabled_source_with(patterns: &[&str]) -> MockWordSource {
        let mut source = source_with(patterns);
        source.expect_is_filtering_enabled().return_const(true);
        source
    }

    #[test]
    fn count_finds_every_occurrence() {
        let cases: [(&str, usize); 6] = [
            (WEATHER, 2),
            ("The weather in Manchester in winter is bad, It rains all the time - it must be horrible for people visiting.", 2),
            ("horrible, pleasant", 1),
            ("horrible, horrible", 2),
            ("a,b,c", 0),
            ("all good words", 0),
        ];

        let engine = FilterEngine::new(source_with(&["bad", "horrible"]));
        for (text, expected) in cases {
            assert_eq!(engine.count(text).unwrap(), expected, "{text}");
        }

        let engine = FilterEngine::new(source_with(&["a", "c"]));
        assert_eq!(engine.count("a,b,c").unwrap(), 2);
    }

    #[test]
    fn count_ignores_case() {
        let engine = FilterEngine::new(source_with(&["bAd", "HorRible"]));
        assert_eq!(engine.count("Horrible, Pleasant").unwrap(), 1);

        let engine = FilterEngine::new(source_with(&["baD", "hOrribLe"]));
        assert_eq!(engine.count("horrible, horriblE").unwrap(), 2);

        let engine = FilterEngine::new(source_with(&["a", "C"]));
        assert_eq!(engine.count("a,B,c").unwrap(), 2);
    }

    #[test]
    fn count_drops_patterns_differing_only_in_case() {
        let engine = FilterEngine::new(source_with(&["bad", "BAD", "Bad"]));
        assert_eq!(engine.count("bad bad").unwrap(), 2);
    }

    #[test]
    fn count_scores_overlapping_patterns_independently() {
        let engine = FilterEngine::new(source_with(&["a", "ab"]));
        assert_eq!(engine.count("ab").unwrap(), 2);
    }

    #[test]
    fn count_of_blank_text_never_reads_source() {
        let mut source = MockWordSource::new();
        source.expect_all_patterns().never();
        source.expect_is_filtering_enabled().never();

        let engine = FilterEngine::new(source);
        for text in BLANKS {
            assert_eq!(engine.count(text).unwrap(), 0);
        }
        assert_eq!(engine.count_optional(None).unwrap(), 0);
    }

    #[test]
    fn count_without_patterns_is_zero() {
        let engine = FilterEngine::new(source_with(&[]));
        for text in ["Horrible, pleasant", "Horrible horrible", "all good words", "a b c"] {
            assert_eq!(engine.count(text).unwrap(), 0);
        }
    }

    #[test]
    fn count_reads_patterns_once() {
        let mut source = MockWordSource::new();
        source
            .expect_all_patterns()
            .times(1)
            .return_const(words(&["bad", "nasty", "horrible"]));

        let engine = FilterEngine::new(source);
        assert_eq!(engine.count(WEATHER).unwrap(), 2);
    }

    #[test]
    fn count_reports_invalid_pattern() {
        let engine = FilterEngine::new(source_with(&["bad", "[oops"]));
        let err = engine.count("bad").unwrap_err();
        assert!(matches!(err, Error::PatternCompilation { ref pattern, .. } if pattern == "[oops"));
    }

    #[test]
    fn filter_masks_matches() {
        let cases = [
            (
                WEATHER,
                "The weather in Manchester in winter is b#d. It rains all the time - it must be h######e for people visiting.",
            ),
            (
                "The weather in Manchester in winter is bad, It rains all the time - it must be HorRible for people visiting.",
                "The weather in Manchester in winter is b#d, It rains all the time - it must be H######e for people visiting.",
            ),
            ("horrible, pleasant", "h######e, pleasant"),
            ("horrible, horrible", "h######e, h######e"),
            ("horriblE, hOrrible", "h######E, h######e"),
            ("all good words", "all good words"),
        ];

        let engine = FilterEngine::new(enabled_source_with(&["bad", "horrible"]));
        for (text, expected) in cases {
            assert_eq!(engine.filter(text).unwrap(), expected);
        }
    }

    #[test]
    fn filter_leaves_short_matches_alone() {
        let engine = FilterEngine::new(enabled_source_with(&["a", "no"]));
        assert_eq!(engine.filter("a no b").unwrap(), "a no b");
    }

    #[test]
    fn filter_returns_same_text_when_nothing_matches() {
        let engine = FilterEngine::new(enabled_source_with(&["bad"]));
        let text = "all good words";
        assert!(matches!(engine.filter(text).unwrap(), Cow::Borrowed(s) if std::ptr::eq(s, text)));
    }

    #[test]
    fn filter_of_blank_text_is_identity() {
        let mut source = MockWordSource::new();
        source.expect_all_patterns().never();
        source.expect_is_filtering_enabled().never();

        let engine = FilterEngine::new(source);
        for text in BLANKS {
            assert_eq!(engine.filter(text).unwrap(), text);
        }
        assert!(engine.filter_optional(None).unwrap().is_none());
    }

    #[test]
    fn filter_without_patterns_is_identity() {
        let engine = FilterEngine::new(enabled_source_with(&[]));
        for text in ["Horrible, pleasant", "Horrible horrible", "all good words", "a b c"] {
            assert_eq!(engine.filter(text).unwrap(), text);
        }
    }

    #[test]
    fn filter_when_disabled_is_identity() {
        let mut source = MockWordSource::new();
        source.expect_is_filtering_enabled().return_const(false);
        source.expect_all_patterns().never();

        let engine = FilterEngine::new(source);
        for text in ["Horrible, pleasant", "Horrible horrible", "all good words", "a b c", "", "     "] {
            assert_eq!(engine.filter(text).unwrap(), text);
        }
    }

    #[test]
    fn filter_takes_one_snapshot_per_call() {
        let mut source = MockWordSource::new();
        source
            .expect_is_filtering_enabled()
            .times(1)
            .return_const(true);
        source
            .expect_all_patterns()
            .times(1)
            .return_const(words(&["bad", "horrible"]));

        let engine = FilterEngine::new(source);
        engine.filter(WEATHER).unwrap();
    }

    #[test]
    fn filter_uses_custom_mask() {
        let engine = FilterEngine::new(enabled_source_with(&["nasty"])).with_mask('*');
        assert_eq!(engine.filter("a nasty swine").unwrap(), "a n***y swine");
    }

    #[test]
    fn filter_overlapping_patterns_depend_on_order() {
        let engine = FilterEngine::new(enabled_source_with(&["abc", "bcd"]));
        assert_eq!(engine.filter("abcd").unwrap(), "a#cd");

        let engine = FilterEngine::new(enabled_source_with(&["bcd", "abc"]));
        assert_eq!(engine.filter("abcd").unwrap(), "ab#d");
    }

    #[test]
    fn filter_searches_original_text_not_masked_output() {
        let engine = FilterEngine::new(enabled_source_with(&["bad", "#"]));
        assert_eq!(engine.filter("bad").unwrap(), "b#d");
        assert_eq!(engine.count("bad").unwrap(), 1);
    }

    #[test]
    fn filter_ignores_empty_matches() {
        let engine = FilterEngine::new(enabled_source_with(&["x*", "bad"]));
        assert_eq!(engine.filter("so bad").unwrap(), "so b#d");
    }

    #[test]
    fn filter_masks_regex_matches_by_value() {
        let engine = FilterEngine::new(enabled_source_with(&[r"b\w+d"]));
        assert_eq!(
            engine.filter("bread, BAND, bread").unwrap(),
            "b###d, B##D, b###d"
        );
    }

    #[test]
    fn filter_reports_invalid_pattern() {
        let engine = FilterEngine::new(enabled_source_with(&["("]));
        assert!(engine.filter("anything").is_err());
    }

    #[test]
    fn turn_on_filter_delegates_once() {
        let mut source = MockWordSource::new();
        source.expect_enable().times(1).return_const(());
        source.expect_disable().never();

        FilterEngine::new(source).turn_on_filter();
    }

    #[test]
    fn turn_off_filter_delegates_once() {
        let mut source = MockWordSource::new();
        source.expect_disable().times(1).return_const(());
        source.expect_enable().never();

        FilterEngine::new(source).turn_off_filter();
    }
}
