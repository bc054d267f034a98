//! Search and filter predicates for the snippet list
//!
//! Three independent predicates (text, language, tag) combined with AND.
//! The list view only ever activates one of language/tag at a time
//! (`select_language` / `select_tag`), but the fields compose freely.

use std::collections::BTreeSet;

use crate::model::Snippet;

/// Active search term and filters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SnippetFilter {
    /// Case-insensitive substring matched against title or code; empty matches all
    pub search: String,
    /// Exact language label
    pub language: Option<String>,
    /// Tag that must be present
    pub tag: Option<String>,
}

impl SnippetFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search = term.into();
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Activate a language filter the way the list view does: clears the tag
    pub fn select_language(&mut self, language: Option<String>) {
        self.language = language;
        if self.language.is_some() {
            self.tag = None;
        }
    }

    /// Activate a tag filter the way the list view does: clears the language
    pub fn select_tag(&mut self, tag: Option<String>) {
        self.tag = tag;
        if self.tag.is_some() {
            self.language = None;
        }
    }

    pub fn is_active(&self) -> bool {
        !self.search.is_empty() || self.language.is_some() || self.tag.is_some()
    }

    pub fn matches(&self, snippet: &Snippet) -> bool {
        self.matches_search(snippet) && self.matches_language(snippet) && self.matches_tag(snippet)
    }

    fn matches_search(&self, snippet: &Snippet) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        snippet.title.to_lowercase().contains(&needle)
            || snippet.code.to_lowercase().contains(&needle)
    }

    fn matches_language(&self, snippet: &Snippet) -> bool {
        self.language
            .as_deref()
            .map_or(true, |language| snippet.language == language)
    }

    fn matches_tag(&self, snippet: &Snippet) -> bool {
        self.tag.as_deref().map_or(true, |tag| snippet.has_tag(tag))
    }

    /// Matching snippets in source order
    pub fn apply<'a>(&self, snippets: &'a [Snippet]) -> Vec<&'a Snippet> {
        snippets.iter().filter(|s| self.matches(s)).collect()
    }
}

/// Distinct language labels across the collection (sorted, blanks skipped)
pub fn unique_languages(snippets: &[Snippet]) -> Vec<String> {
    snippets
        .iter()
        .map(|s| s.language.as_str())
        .filter(|l| !l.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Distinct tags across the collection (sorted)
pub fn unique_tags(snippets: &[Snippet]) -> Vec<String> {
    snippets
        .iter()
        .flat_map(|s| s.tags.iter().map(String::as_str))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snippet(id: i64, title: &str, code: &str, language: &str, tags: &[&str]) -> Snippet {
        Snippet::new(
            id,
            title,
            code,
            language,
            tags.iter().map(|t| t.to_string()).collect(),
        )
    }

    #[test]
    fn test_search_matches_code_case_insensitively() {
        let items = vec![snippet(1, "Debounce", "function DEBOUNCE() {}", "javascript", &[])];
        let filter = SnippetFilter::new().with_search("debounce()");
        assert_eq!(filter.apply(&items).len(), 1);
    }

    #[test]
    fn test_select_clears_the_other_filter() {
        let mut filter = SnippetFilter::new().with_tag("algo");
        filter.select_language(Some("python".to_string()));
        assert_eq!(filter.language.as_deref(), Some("python"));
        assert_eq!(filter.tag, None);

        filter.select_tag(Some("web".to_string()));
        assert_eq!(filter.language, None);
        assert_eq!(filter.tag.as_deref(), Some("web"));

        filter.select_tag(None);
        assert!(!filter.is_active());
    }

    #[test]
    fn test_unique_sets_have_no_duplicates() {
        let items = vec![
            snippet(1, "a", "", "python", &["algo", "algo"]),
            snippet(2, "b", "", "python", &["web"]),
            snippet(3, "c", "", "", &[]),
        ];
        assert_eq!(unique_languages(&items), vec!["python"]);
        assert_eq!(unique_tags(&items), vec!["algo", "web"]);
    }
}
