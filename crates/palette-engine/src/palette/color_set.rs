//! Insertion-ordered, deduplicating color collection.

use std::collections::HashSet;
use std::fmt;

use super::error::PaletteError;
use crate::color::Color;

/// Capacity of a freshly created [`ColorSet`].
pub const DEFAULT_CAPACITY: usize = 16;

/// Result of [`ColorSet::insert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The color was new and has been appended.
    Inserted,
    /// An equal color was already stored; nothing changed.
    AlreadyPresent,
}

impl InsertOutcome {
    /// `true` for [`InsertOutcome::Inserted`].
    pub fn is_inserted(self) -> bool {
        self == InsertOutcome::Inserted
    }
}

/// Iterator over the colors of a [`ColorSet`] in insertion order.
pub type Iter<'a> = std::iter::Copied<std::slice::Iter<'a, Color>>;

/// An ordered sequence of unique colors.
///
/// Colors are kept in the order they were first inserted and are never
/// re-sorted. [`insert`](ColorSet::insert) is the only way in, and it is the
/// single place where duplicates are detected.
///
/// Storage starts at [`DEFAULT_CAPACITY`] and doubles whenever an insertion
/// would exceed it. Growth uses fallible reservation: if memory runs out the
/// insertion fails with [`PaletteError::OutOfMemory`] and the set keeps every
/// color it already had.
///
/// Duplicate detection goes through a hash index kept next to the ordered
/// storage, so inserting is O(1) on average instead of a linear scan. The
/// index never affects iteration order.
///
/// # Example
///
/// ```
/// use palette_engine::{Color, ColorSet, InsertOutcome};
///
/// let mut set = ColorSet::new();
/// let teal = Color::opaque(0, 128, 128);
///
/// assert_eq!(set.insert(teal).unwrap(), InsertOutcome::Inserted);
/// assert_eq!(set.insert(teal).unwrap(), InsertOutcome::AlreadyPresent);
/// assert_eq!(set.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct ColorSet {
    // Insertion order
    colors: Vec<Color>,
    // Membership lookup, always holds exactly the elements of `colors`
    index: HashSet<Color>,
}

impl ColorSet {
    /// Create an empty set with [`DEFAULT_CAPACITY`].
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create an empty set able to hold `capacity` colors before growing.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            colors: Vec::with_capacity(capacity),
            index: HashSet::with_capacity(capacity),
        }
    }

    /// Insert a color unless an equal one is already present.
    ///
    /// # Errors
    ///
    /// [`PaletteError::OutOfMemory`] if storage had to grow and could not.
    /// The set is unchanged in that case.
    pub fn insert(&mut self, color: Color) -> Result<InsertOutcome, PaletteError> {
        if self.index.contains(&color) {
            return Ok(InsertOutcome::AlreadyPresent);
        }
        if self.colors.len() == self.colors.capacity() {
            self.grow()?;
        }
        self.colors.push(color);
        self.index.insert(color);
        Ok(InsertOutcome::Inserted)
    }

    /// Double the capacity of both the ordered storage and the index.
    ///
    /// The index is reserved first: if the ordered storage then fails to
    /// grow, [`capacity`](ColorSet::capacity) is unchanged and only the
    /// index may have kept its extra room.
    fn grow(&mut self) -> Result<(), PaletteError> {
        let additional = self.colors.capacity().max(1);
        let target = self
            .colors
            .capacity()
            .checked_add(additional)
            .ok_or(PaletteError::OutOfMemory)?;
        self.index
            .try_reserve(target - self.index.len())
            .map_err(|_| PaletteError::OutOfMemory)?;
        self.colors
            .try_reserve_exact(additional)
            .map_err(|_| PaletteError::OutOfMemory)
    }

    /// Number of colors.
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// `true` if no colors have been inserted.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Number of colors the set can hold before it has to grow.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.colors.capacity()
    }

    /// Color at `index` in insertion order.
    ///
    /// # Errors
    ///
    /// [`PaletteError::IndexOutOfRange`] if `index >= self.len()`.
    pub fn get(&self, index: usize) -> Result<Color, PaletteError> {
        self.colors
            .get(index)
            .copied()
            .ok_or(PaletteError::IndexOutOfRange {
                index,
                len: self.colors.len(),
            })
    }

    /// `true` if an equal color is stored.
    pub fn contains(&self, color: &Color) -> bool {
        self.index.contains(color)
    }

    /// Iterate over the colors in insertion order.
    ///
    /// Each call starts a fresh pass from the first color.
    pub fn iter(&self) -> Iter<'_> {
        self.colors.iter().copied()
    }

    /// The colors as a slice, in insertion order.
    pub fn as_slice(&self) -> &[Color] {
        &self.colors
    }

    /// Remove every color and release the storage.
    pub fn clear(&mut self) {
        self.colors = Vec::new();
        self.index = HashSet::new();
    }
}

impl Default for ColorSet {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a ColorSet {
    type Item = Color;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for ColorSet {
    /// One canonical `RRGGBBAA` color per line, in insertion order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for color in &self.colors {
            writeln!(f, "{color}")?;
        }
        Ok(())
    }
}
