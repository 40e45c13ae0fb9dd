//! Exhaustive per-variant storage for closed enums.
//!
//! Renderer tables (`ZoneKind → renderer`, `ButtonKey → renderer`, ...) must
//! cover every variant. `KindMap` can only be built through `from_fn`, which
//! visits every variant, so a table with a missing entry cannot exist.
//!
//! ## Example
//!
//! ```
//! use rust_board::registry::{KindMap, ZoneKind};
//!
//! let names: KindMap<ZoneKind, String> = KindMap::from_fn(|kind: ZoneKind| kind.to_string());
//!
//! assert_eq!(names[ZoneKind::EnergyDeck], "energyDeck");
//! assert_eq!(names.len(), 8);
//! ```

use std::marker::PhantomData;
use std::ops::{Index, IndexMut};

/// A closed enum usable as a `KindMap` key.
///
/// `ALL[i].index() == i` must hold for every variant.
pub trait Kind: Copy + Eq + std::fmt::Debug + 'static {
    /// Every variant, in declaration order.
    const ALL: &'static [Self];

    /// Position of this variant in `ALL`.
    fn index(self) -> usize;
}

/// One value per variant of `K`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KindMap<K: Kind, T> {
    data: Vec<T>,
    _kind: PhantomData<K>,
}

impl<K: Kind, T> KindMap<K, T> {
    /// Build the map by calling `factory` once per variant.
    pub fn from_fn(mut factory: impl FnMut(K) -> T) -> Self {
        let data = K::ALL.iter().map(|&kind| factory(kind)).collect();
        Self {
            data,
            _kind: PhantomData,
        }
    }

    /// Build the map with the same value for every variant.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::from_fn(|_| value.clone())
    }

    /// Number of entries (always the variant count).
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always false: every enum has at least one variant here.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[must_use]
    pub fn get(&self, kind: K) -> &T {
        &self.data[kind.index()]
    }

    pub fn get_mut(&mut self, kind: K) -> &mut T {
        &mut self.data[kind.index()]
    }

    /// Iterate over `(variant, &value)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (K, &T)> {
        K::ALL.iter().copied().zip(self.data.iter())
    }

    /// Transform every value, keeping the keys.
    pub fn map<U>(self, mut f: impl FnMut(K, T) -> U) -> KindMap<K, U> {
        let data = K::ALL.iter().copied().zip(self.data).map(|(k, v)| f(k, v)).collect();
        KindMap {
            data,
            _kind: PhantomData,
        }
    }
}

impl<K: Kind, T> Index<K> for KindMap<K, T> {
    type Output = T;

    fn index(&self, kind: K) -> &T {
        self.get(kind)
    }
}

impl<K: Kind, T> IndexMut<K> for KindMap<K, T> {
    fn index_mut(&mut self, kind: K) -> &mut T {
        self.get_mut(kind)
    }
}
