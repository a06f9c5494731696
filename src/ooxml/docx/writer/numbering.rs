/// Numbering definitions referenced by list paragraphs.
use serde::{Deserialize, Serialize};

/// Concrete numbering ID reserved for the default bullet list.
pub const BULLET_NUM_ID: u32 = 1;

/// Abstract numbering ID of the default bullet list.
pub const BULLET_ABSTRACT_NUM_ID: u32 = 0;

/// A concrete numbering definition (`w:num`).
///
/// Paragraphs only forward the ID; the abstract definition it points to
/// decides what the list looks like.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Num {
    id: u32,
    #[serde(default)]
    abstract_num_id: u32,
}

impl Num {
    pub fn new(id: u32, abstract_num_id: u32) -> Self {
        Self {
            id,
            abstract_num_id,
        }
    }

    #[inline]
    pub fn id(&self) -> u32 {
        self.id
    }

    #[inline]
    pub fn abstract_num_id(&self) -> u32 {
        self.abstract_num_id
    }
}

/// Registry of concrete numbering definitions for one document.
#[derive(Debug, Clone)]
pub struct Numbering {
    nums: Vec<Num>,
}

impl Default for Numbering {
    fn default() -> Self {
        Self {
            nums: vec![Num::new(BULLET_NUM_ID, BULLET_ABSTRACT_NUM_ID)],
        }
    }
}

impl Numbering {
    /// Create a registry holding only the default bullet list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a concrete numbering that restarts the given abstract definition.
    pub fn create_concrete_numbering(&mut self, abstract_num_id: u32) -> Num {
        let id = self.nums.iter().map(Num::id).max().unwrap_or(0) + 1;
        let num = Num::new(id, abstract_num_id);
        self.nums.push(num);
        num
    }

    /// The default bullet list.
    pub fn bullet(&self) -> Num {
        Num::new(BULLET_NUM_ID, BULLET_ABSTRACT_NUM_ID)
    }

    pub fn get(&self, id: u32) -> Option<&Num> {
        self.nums.iter().find(|n| n.id == id)
    }

    /// All concrete definitions in creation order.
    #[inline]
    pub fn nums(&self) -> &[Num] {
        &self.nums
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bullet_is_preregistered() {
        let numbering = Numbering::new();
        assert_eq!(numbering.nums().len(), 1);
        assert_eq!(numbering.get(BULLET_NUM_ID), Some(&numbering.bullet()));
    }

    #[test]
    fn test_concrete_ids_are_sequential() {
        let mut numbering = Numbering::new();
        let a = numbering.create_concrete_numbering(3);
        let b = numbering.create_concrete_numbering(3);
        assert_eq!(a.id(), 2);
        assert_eq!(b.id(), 3);
        assert_eq!(b.abstract_num_id(), 3);
        assert!(numbering.get(4).is_none());
    }
}
