//! Media groups and their on-demand derivation.

use crate::media::MediaSource;

/// Ordered thumbnails sharing one content container.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaGroup<M> {
    items: Vec<M>,
}

impl<M> Default for MediaGroup<M> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<M: MediaSource> MediaGroup<M> {
    pub fn new(items: Vec<M>) -> Self {
        Self { items }
    }

    pub fn single(item: M) -> Self {
        Self { items: vec![item] }
    }

    /// Position of `item` in document order, by identity.
    pub fn position_of(&self, item: &M) -> Option<usize> {
        self.items.iter().position(|m| m == item)
    }

    pub fn get(&self, index: usize) -> Option<&M> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[M] {
        &self.items
    }
}

/// The container that defines group boundaries for a thumbnail.
pub trait GroupScope: Sized {
    type Media: MediaSource;

    /// Closest enclosing container of `media`.
    fn enclosing(media: &Self::Media) -> Option<Self>;

    /// Every qualifying thumbnail inside this container, in document order.
    fn members(&self) -> Vec<Self::Media>;
}

/// Build the group for an activated thumbnail from the current structure.
///
/// Never cached: content may change between opens. A thumbnail outside any
/// container forms a group of its own.
pub fn derive_group<S: GroupScope>(activating: &S::Media) -> MediaGroup<S::Media> {
    match S::enclosing(activating) {
        Some(scope) => MediaGroup::new(scope.members()),
        None => MediaGroup::single(activating.clone()),
    }
}
