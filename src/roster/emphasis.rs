//! Length-driven emphasis for the intro paragraph

/// Class set applied to the intro paragraph.
///
/// Depends only on the roster length: `red` at two records or fewer,
/// `bold` as well at one or fewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Emphasis {
    pub red: bool,
    pub bold: bool,
}

impl Emphasis {
    pub fn for_len(len: usize) -> Self {
        Self {
            red: len <= 2,
            bold: len <= 1,
        }
    }

    /// Class names in application order
    pub fn classes(&self) -> Vec<&'static str> {
        let mut classes = Vec::with_capacity(2);
        if self.red {
            classes.push("red");
        }
        if self.bold {
            classes.push("bold");
        }
        classes
    }

    /// Classes joined with a single space
    pub fn class_name(&self) -> String {
        self.classes().join(" ")
    }
}
