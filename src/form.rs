//! Title Form Field
//!
//! Holds the text typed into the todo form until it is submitted.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TitleField {
    value: Option<String>,
}

impl TitleField {
    pub fn set(&mut self, title: impl Into<String>) {
        self.value = Some(title.into());
    }

    /// Current text, `None` after a reset
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn reset(&mut self) {
        self.value = None;
    }
}
