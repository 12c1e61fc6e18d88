//! Options for excerpt extraction.

/// Controls how much context [`excerpt`](crate::excerpt) keeps around a phrase.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExcerptOptions {
    /// Characters of context kept on each side of the phrase.
    pub radius: usize,

    /// Marker placed where text was cut off.
    pub omission: String,
}

impl Default for ExcerptOptions {
    fn default() -> Self {
        Self {
            radius: 3,
            omission: "...".to_string(),
        }
    }
}

impl ExcerptOptions {
    /// Builder method to set the context radius.
    #[must_use]
    pub fn with_radius(mut self, radius: usize) -> Self {
        self.radius = radius;
        self
    }

    /// Builder method to set the omission marker.
    #[must_use]
    pub fn with_omission(mut self, omission: impl Into<String>) -> Self {
        self.omission = omission.into();
        self
    }
}
