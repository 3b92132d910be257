//! Load status for images rendered through `OptimizedImage`.

#[cfg(test)]
#[path = "image_test.rs"]
mod image_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ImageStatus {
    #[default]
    Loading,
    Loaded,
    Failed,
}

impl ImageStatus {
    /// `load` fired. A late `load` after an `error` does not resurrect the image.
    #[must_use]
    pub fn on_load(self) -> Self {
        match self {
            Self::Failed => Self::Failed,
            Self::Loading | Self::Loaded => Self::Loaded,
        }
    }

    #[must_use]
    pub fn on_error(self) -> Self {
        Self::Failed
    }

    #[must_use]
    pub fn shows_placeholder(self) -> bool {
        self == Self::Loading
    }

    /// Opacity class for the `<img>` element.
    #[must_use]
    pub fn image_class(self) -> &'static str {
        match self {
            Self::Loaded => "optimized-image loaded",
            Self::Loading | Self::Failed => "optimized-image",
        }
    }
}
