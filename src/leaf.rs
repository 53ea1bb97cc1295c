#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Leaf<K, V> {
    hash: u32,
    key: K,
    value: V,
}

impl<K, V> Leaf<K, V> {
    pub fn new(hash: u32, key: K, value: V) -> Self {
        Self { hash, key, value }
    }

    pub fn hash(&self) -> u32 {
        self.hash
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    pub fn entry(&self) -> (&K, &V) {
        (&self.key, &self.value)
    }
}
