//! Project card and code snippet descriptors.

/// A project card backed by a GitHub repository.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    /// Element id; a URL hash equal to it opens the card.
    pub id: &'static str,
    pub title: &'static str,
    pub repo: &'static str,
}

impl Project {
    /// Whether the URL `hash` (with or without `#`) targets this card.
    pub fn is_targeted_by(&self, hash: &str) -> bool {
        hash.trim_start_matches('#') == self.id
    }

    pub fn repo_url(&self, user: &str) -> String {
        format!("https://github.com/{}/{}", user, self.repo)
    }
}

/// A source file rendered as a highlighted code block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Snippet {
    pub title: &'static str,
    pub src: &'static str,
    /// Overrides the language derived from the file extension.
    pub language: Option<&'static str>,
}
