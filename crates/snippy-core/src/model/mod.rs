pub mod snippet;

pub use snippet::{NewSnippet, Snippet, SnippetId, SnippetPatch, DEFAULT_LANGUAGE, KNOWN_LANGUAGES};
