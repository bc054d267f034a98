use serde::{Deserialize, Serialize};

/// Snippet identifier (assigned at creation, immutable afterwards)
pub type SnippetId = i64;

/// Languages offered by the create/edit forms
///
/// Other labels are tolerated everywhere; this list only drives defaults
/// and CLI hints.
pub const KNOWN_LANGUAGES: [&str; 4] = ["javascript", "python", "css", "html"];

/// Language preselected for new snippets
pub const DEFAULT_LANGUAGE: &str = "javascript";

/// Snippet - a titled, tagged block of source code
///
/// Missing `title`/`code`/`language`/`tags` in stored JSON deserialize to
/// empty values so that older or hand-edited slots still load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snippet {
    pub id: SnippetId,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub code: String,

    #[serde(default)]
    pub language: String,

    /// Ordered labels, duplicates kept
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Snippet {
    pub fn new(
        id: SnippetId,
        title: impl Into<String>,
        code: impl Into<String>,
        language: impl Into<String>,
        tags: Vec<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            code: code.into(),
            language: language.into(),
            tags,
        }
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// True when title, code and language are all identical to the given values
    pub fn same_content(&self, title: &str, code: &str, language: &str) -> bool {
        self.title == title && self.code == code && self.language == language
    }

    pub fn is_known_language(&self) -> bool {
        KNOWN_LANGUAGES.contains(&self.language.as_str())
    }
}

/// Input for a validated create (everything but the id)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSnippet {
    pub title: String,
    pub code: String,
    pub language: String,
    pub tags: Vec<String>,
}

impl NewSnippet {
    /// New snippet in the default language with no tags
    pub fn new(title: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            code: code.into(),
            language: DEFAULT_LANGUAGE.to_string(),
            tags: Vec::new(),
        }
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }
}

/// Partial update; `None` fields are left untouched
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnippetPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl SnippetPatch {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn tags(mut self, tags: Vec<String>) -> Self {
        self.tags = Some(tags);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.code.is_none() && self.language.is_none() && self.tags.is_none()
    }

    /// Merge the supplied fields into `snippet`. The id is never touched.
    pub fn apply_to(&self, snippet: &mut Snippet) {
        if let Some(title) = &self.title {
            snippet.title = title.clone();
        }
        if let Some(code) = &self.code {
            snippet.code = code.clone();
        }
        if let Some(language) = &self.language {
            snippet.language = language.clone();
        }
        if let Some(tags) = &self.tags {
            snippet.tags = tags.clone();
        }
    }
}
