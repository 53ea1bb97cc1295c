use std::{
    collections::hash_map::DefaultHasher,
    hash::{Hash, Hasher},
};

pub const BITS_PER_LEVEL: u32 = 5;
pub const ENTRY_COUNT: usize = 1 << BITS_PER_LEVEL;
// The last level only has 2 bits of a hash left.
pub const MAX_SHIFT: u32 = 30;

const INDEX_MASK: u32 = 0b11111;

pub fn hash_key(key: &(impl Hash + ?Sized)) -> u32 {
    let mut hasher = DefaultHasher::new();

    key.hash(&mut hasher);

    let hash = hasher.finish();

    (hash ^ (hash >> 32)) as u32
}

/// Extracts a 5-bit chunk of a hash. Shifts beyond the width of a hash yield
/// chunk 0.
pub fn index_at(hash: u32, shift: u32) -> u8 {
    (hash.checked_shr(shift).unwrap_or(0) & INDEX_MASK) as u8
}

/// Returns a single-bit mask of a 5-bit chunk of a hash.
pub fn bit(hash: u32, shift: u32) -> u32 {
    1 << index_at(hash, shift)
}

pub fn popcount(bitmap: u32) -> u8 {
    bitmap.count_ones() as u8
}

/// Returns a position of a bit's entry in a compacted array.
pub fn slot_index(bitmap: u32, bit: u32) -> usize {
    popcount(bitmap & bit.wrapping_sub(1)) as usize
}

pub fn with_replaced<T: Clone>(entries: &[T], index: usize, entry: T) -> Box<[T]> {
    let mut copy = entries.to_vec();

    copy[index] = entry;

    copy.into_boxed_slice()
}

pub fn with_inserted<T: Clone>(entries: &[T], index: usize, entry: T) -> Box<[T]> {
    let mut copy = Vec::with_capacity(entries.len() + 1);

    copy.extend_from_slice(&entries[..index]);
    copy.push(entry);
    copy.extend_from_slice(&entries[index..]);

    copy.into_boxed_slice()
}

pub fn with_removed<T: Clone>(entries: &[T], index: usize) -> Box<[T]> {
    let mut copy = Vec::with_capacity(entries.len() - 1);

    copy.extend_from_slice(&entries[..index]);
    copy.extend_from_slice(&entries[index + 1..]);

    copy.into_boxed_slice()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_key_is_deterministic() {
        assert_eq!(hash_key(&42u64), hash_key(&42u64));
        assert_eq!(hash_key("foo"), hash_key(&"foo".to_string()));
    }

    #[test]
    fn index_at_extracts_chunks() {
        assert_eq!(index_at(0b11111, 0), 31);
        assert_eq!(index_at(0b100000, 0), 0);
        assert_eq!(index_at(0b100000, 5), 1);
        assert_eq!(index_at(0x1234_5678, 0), 0x18);
        assert_eq!(index_at(0x1234_5678, 5), 0x13);
        assert_eq!(index_at(0xffff_ffff, 30), 0b11);
        assert_eq!(index_at(0x4000_0000, 30), 1);
    }

    #[test]
    fn index_at_beyond_hash_width() {
        assert_eq!(index_at(0xffff_ffff, 32), 0);
        assert_eq!(index_at(0xffff_ffff, 35), 0);
        assert_eq!(index_at(0xffff_ffff, 60), 0);
    }

    #[test]
    fn bit_of_hash() {
        assert_eq!(bit(0, 0), 1);
        assert_eq!(bit(3, 0), 8);
        assert_eq!(bit(31, 0), 1 << 31);
        assert_eq!(bit(1 << 5, 5), 2);
        assert_eq!(bit(0xffff_ffff, 30), 8);
        assert_eq!(bit(0xffff_ffff, 32), 1);
    }

    #[test]
    fn popcount_of_bitmaps() {
        assert_eq!(popcount(0), 0);
        assert_eq!(popcount(1), 1);
        assert_eq!(popcount(0b1011), 3);
        assert_eq!(popcount(0xffff_ffff), 32);
    }

    #[test]
    fn slot_index_counts_lower_bits() {
        assert_eq!(slot_index(0, 1), 0);
        assert_eq!(slot_index(0b1011, 1), 0);
        assert_eq!(slot_index(0b1011, 0b10), 1);
        assert_eq!(slot_index(0b1011, 0b100), 2);
        assert_eq!(slot_index(0b1011, 0b1000), 2);
        assert_eq!(slot_index(0xffff_ffff, 1 << 31), 31);
    }

    #[test]
    fn replace() {
        let entries = [1, 2, 3];

        assert_eq!(&*with_replaced(&entries, 0, 42), &[42, 2, 3]);
        assert_eq!(&*with_replaced(&entries, 2, 42), &[1, 2, 42]);
        assert_eq!(entries, [1, 2, 3]);
    }

    #[test]
    fn insert() {
        let entries = [1, 2, 3];

        assert_eq!(&*with_inserted(&entries, 0, 42), &[42, 1, 2, 3]);
        assert_eq!(&*with_inserted(&entries, 1, 42), &[1, 42, 2, 3]);
        assert_eq!(&*with_inserted(&entries, 3, 42), &[1, 2, 3, 42]);
        assert_eq!(&*with_inserted(&[], 0, 42), &[42]);
    }

    #[test]
    fn remove() {
        let entries = [1, 2, 3];

        assert_eq!(&*with_removed(&entries, 0), &[2, 3]);
        assert_eq!(&*with_removed(&entries, 1), &[1, 3]);
        assert_eq!(&*with_removed(&entries, 2), &[1, 2]);
        assert_eq!(&*with_removed(&[42], 0), &[] as &[i32]);
    }
}
