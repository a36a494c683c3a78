use serde::Serialize;

/// Header bar of a stacked screen: a back button, a title and an optional
/// close button that returns to the map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScreenHeader {
    pub title: &'static str,
    pub show_close: bool,
}

impl ScreenHeader {
    pub fn new(title: &'static str) -> Self {
        Self {
            title,
            show_close: true,
        }
    }

    pub fn without_close(mut self) -> Self {
        self.show_close = false;
        self
    }
}
