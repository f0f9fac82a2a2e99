//! Fixed-bucket chained hash map.
//!
//! `ChainMap<K, V>` keeps a fixed number of buckets, each holding a singly
//! linked chain of heap nodes. A key lives in at most one chain, at the
//! bucket its hash selects. Hashing is pluggable per key type through
//! [`BucketKey`]; integers hash by identity, [`ZString`] uses a 37-base
//! polynomial over its bytes, reduced modulo the bucket count and
//! normalized non-negative.
//!
//! All chain walks follow the dedicated `next` link. Teardown is iterative,
//! so dropping a map never recurses proportionally to a chain's length.

use crate::array::Array;
use crate::error::{CollectionError, Result};
use crate::zstring::ZString;

/// Number of buckets in every map.
pub const BUCKET_COUNT: usize = 10;

/// Maps a key to its bucket. Implementations reduce their own hash to
/// `[0, bucket_count)`.
pub trait BucketKey: Eq {
    fn bucket_index(&self, bucket_count: usize) -> usize;
}

impl BucketKey for ZString {
    fn bucket_index(&self, bucket_count: usize) -> usize {
        let mut hash: i32 = 0;
        for &byte in self.as_bytes() {
            hash = hash.wrapping_mul(37).wrapping_add(i32::from(byte));
        }
        // Wrapping accumulation can go negative; rem_euclid keeps the bucket
        // index non-negative.
        hash.rem_euclid(bucket_count as i32) as usize
    }
}

macro_rules! identity_bucket_key {
    ($($ty:ty),*) => {
        $(
            impl BucketKey for $ty {
                fn bucket_index(&self, bucket_count: usize) -> usize {
                    (*self as u64 % bucket_count as u64) as usize
                }
            }
        )*
    };
}

identity_bucket_key!(u8, u16, u32, u64, usize);

struct Node<K, V> {
    key: K,
    value: V,
    /// Next entry in the same bucket's chain.
    next: Option<Box<Node<K, V>>>,
}

pub struct ChainMap<K: BucketKey, V> {
    buckets: Array<Option<Box<Node<K, V>>>>,
}

impl<K: BucketKey, V> ChainMap<K, V> {
    pub fn new() -> Self {
        let mut buckets = Array::with_capacity(BUCKET_COUNT);
        for _ in 0..BUCKET_COUNT {
            buckets.push(None);
        }
        Self { buckets }
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Insert a key/value pair. An existing key has its value overwritten.
    pub fn insert(&mut self, key: K, value: V) {
        let idx = key.bucket_index(self.buckets.len());
        let mut slot = &mut self.buckets[idx];
        loop {
            match slot {
                None => {
                    *slot = Some(Box::new(Node {
                        key,
                        value,
                        next: None,
                    }));
                    return;
                }
                Some(node) if node.key == key => {
                    node.value = value;
                    return;
                }
                Some(node) => slot = &mut node.next,
            }
        }
    }

    /// Unlink and release the entry for `key`. No-op if absent.
    pub fn erase(&mut self, key: &K) {
        let idx = key.bucket_index(self.buckets.len());
        let mut slot = &mut self.buckets[idx];
        loop {
            let Some(mut node) = slot.take() else { return };
            if node.key == *key {
                *slot = node.next.take();
                return;
            }
            // Put the node back and step to its `next` link.
            slot = &mut slot.insert(node).next;
        }
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        let idx = key.bucket_index(self.buckets.len());
        let mut node = self.buckets[idx].as_deref();
        while let Some(entry) = node {
            if entry.key == *key {
                return Some(&entry.value);
            }
            node = entry.next.as_deref();
        }
        None
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let idx = key.bucket_index(self.buckets.len());
        let mut node = self.buckets[idx].as_deref_mut();
        while let Some(entry) = node {
            if entry.key == *key {
                return Some(&mut entry.value);
            }
            node = entry.next.as_deref_mut();
        }
        None
    }

    /// 1 if the key is present, 0 otherwise.
    pub fn count(&self, key: &K) -> usize {
        usize::from(self.get(key).is_some())
    }

    /// Checked lookup failing with `KeyNotFound`.
    pub fn at(&self, key: &K) -> Result<&V>
    where
        K: std::fmt::Debug,
    {
        self.get(key)
            .ok_or_else(|| CollectionError::KeyNotFound(format!("{key:?}")))
    }

    /// Release every node in every bucket.
    pub fn clear(&mut self) {
        for bucket in self.buckets.as_mut_slice() {
            let mut node = bucket.take();
            while let Some(mut entry) = node {
                node = entry.next.take();
            }
        }
    }
}

impl<K: BucketKey, V> Default for ChainMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: BucketKey, V> Drop for ChainMap<K, V> {
    fn drop(&mut self) {
        // Unlink iteratively; the derived drop of a long chain would recurse
        // once per node.
        self.clear();
    }
}
