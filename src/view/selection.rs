//! Display index to identifier resolution.

/// Ephemeral mapping from 1-based display numbers to the items of one fetch.
///
/// Built right after a fetch and dropped when the action ends, so a number
/// always resolves against what the user was just shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionTable<I> {
    items: Vec<I>,
}

impl<I> SelectionTable<I> {
    /// Numbers `items` from 1 in iteration order.
    #[must_use]
    pub fn new(items: impl IntoIterator<Item = I>) -> Self {
        Self {
            items: items.into_iter().collect(),
        }
    }

    /// Returns the number of selectable items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns whether there is nothing to select.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates over `(number, item)` pairs.
    pub fn numbered(&self) -> impl Iterator<Item = (usize, &I)> {
        self.items
            .iter()
            .enumerate()
            .map(|(index, item)| (index + 1, item))
    }

    /// Resolves typed input to the item shown under that number.
    ///
    /// Returns `None` for non-numeric input and numbers outside
    /// `1..=len()`.
    #[must_use]
    pub fn resolve(&self, input: &str) -> Option<&I> {
        let number = input.trim().parse::<usize>().ok()?;
        self.items.get(number.checked_sub(1)?)
    }
}
