use crate::utilities::{popcount, slot_index, ENTRY_COUNT};

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Bitmap(u32);

impl Bitmap {
    pub fn new() -> Self {
        Bitmap(0)
    }

    pub fn get(&self, bit: u32) -> bool {
        self.0 & bit != 0
    }

    pub fn set(&self, bit: u32) -> Self {
        Bitmap(self.0 | bit)
    }

    pub fn unset(&self, bit: u32) -> Self {
        Bitmap(self.0 & !bit)
    }

    pub fn size(&self) -> u8 {
        popcount(self.0)
    }

    /// Returns a position of a bit's entry in a compacted array.
    pub fn slot(&self, bit: u32) -> usize {
        slot_index(self.0, bit)
    }

    /// Returns indices of set bits in ascending order.
    pub fn indices(self) -> impl Iterator<Item = u8> {
        (0..ENTRY_COUNT as u8).filter(move |&i| self.get(1 << i))
    }
}
