use reqwest::Url;

/// The browser-history capability the control surface needs.
pub trait History {
    fn location(&self) -> &Url;

    /// Rewrites the current entry without adding a new one.
    fn replace_location(&mut self, url: Url);
}

/// In-memory history stack with back/forward traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionHistory {
    entries: Vec<Url>,
    index: usize,
}

impl SessionHistory {
    #[must_use]
    pub fn new(initial: Url) -> Self {
        Self {
            entries: vec![initial],
            index: 0,
        }
    }

    /// Adds an entry after the current one, dropping any forward entries.
    pub fn push(&mut self, url: Url) {
        self.entries.truncate(self.index + 1);
        self.entries.push(url);
        self.index = self.entries.len() - 1;
    }

    /// Returns `true` when the location changed, i.e. a popstate would fire.
    pub fn back(&mut self) -> bool {
        if self.index == 0 {
            return false;
        }
        self.index -= 1;
        true
    }

    pub fn forward(&mut self) -> bool {
        if self.index + 1 >= self.entries.len() {
            return false;
        }
        self.index += 1;
        true
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub const fn position(&self) -> usize {
        self.index
    }
}

impl History for SessionHistory {
    fn location(&self) -> &Url {
        &self.entries[self.index]
    }

    fn replace_location(&mut self, url: Url) {
        self.entries[self.index] = url;
    }
}
