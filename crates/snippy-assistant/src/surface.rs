use crate::actions::{action_specs, ActionSpec, UPDATE_SNIPPET};

pub const CHAT_TITLE: &str = "Snippy - Code Snippet Manager";

pub const LIST_INSTRUCTIONS: &str = "You are assisting the user with managing code snippets. \
You can create, update, and delete code snippets.";

pub const DETAIL_INSTRUCTIONS: &str = "You are assisting the user with a code snippet. \
You can help them update the snippet by providing the new title and code.";

/// Where the chat is opened
///
/// The list page offers every action; the detail page of one snippet
/// only offers updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatSurface {
    List,
    Detail,
}

impl ChatSurface {
    pub fn instructions(self) -> &'static str {
        match self {
            ChatSurface::List => LIST_INSTRUCTIONS,
            ChatSurface::Detail => DETAIL_INSTRUCTIONS,
        }
    }

    pub fn greeting(self) -> &'static str {
        "Hey there! How can I assist you?"
    }

    pub fn offers(self, action: &str) -> bool {
        match self {
            ChatSurface::List => action_specs().iter().any(|spec| spec.name == action),
            ChatSurface::Detail => action == UPDATE_SNIPPET,
        }
    }

    pub fn action_specs(self) -> Vec<ActionSpec> {
        action_specs()
            .into_iter()
            .filter(|spec| self.offers(spec.name))
            .collect()
    }
}
