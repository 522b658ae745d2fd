use crate::core::geo::TileCoord;
use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::Arc;

/// Tiles kept per layer. A 1080p viewport shows around 40 tiles, so this
/// holds several zoom levels' worth of recently seen imagery.
const DEFAULT_CAPACITY: usize = 512;

/// Per-layer store of encoded tile bytes with LRU eviction.
///
/// Downloads arrive on the layer's channel and are inserted here; rendering
/// reads them back to decode textures. Bytes are wrapped in `Arc` so a
/// lookup does not copy the image payload.
#[derive(Debug)]
pub struct TileCache {
    tiles: LruCache<TileCoord, Arc<Vec<u8>>>,
}

impl TileCache {
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity)
            .unwrap_or_else(|| NonZeroUsize::new(DEFAULT_CAPACITY).expect("nonzero capacity"));
        Self {
            tiles: LruCache::new(capacity),
        }
    }

    pub fn insert(&mut self, coord: TileCoord, data: Vec<u8>) {
        self.tiles.put(coord, Arc::new(data));
    }

    /// Fetches a tile, marking it most recently used
    pub fn get(&mut self, coord: &TileCoord) -> Option<Arc<Vec<u8>>> {
        self.tiles.get(coord).cloned()
    }

    /// Membership check that does not disturb the LRU order
    pub fn contains(&self, coord: &TileCoord) -> bool {
        self.tiles.peek(coord).is_some()
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}

impl Default for TileCache {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let mut cache = TileCache::new(4);
        let coord = TileCoord::new(3, 2, 3);

        assert!(cache.is_empty());
        cache.insert(coord, vec![0xff, 0xd8]);

        assert!(cache.contains(&coord));
        assert_eq!(*cache.get(&coord).unwrap(), vec![0xff, 0xd8]);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_least_recent_tile_is_evicted() {
        let mut cache = TileCache::new(2);
        let older = TileCoord::new(0, 0, 1);
        let newer = TileCoord::new(1, 0, 1);

        cache.insert(older, vec![1]);
        cache.insert(newer, vec![2]);

        // touching `older` makes `newer` the eviction candidate
        cache.get(&older);
        cache.insert(TileCoord::new(1, 1, 1), vec![3]);

        assert!(cache.contains(&older));
        assert!(!cache.contains(&newer));
    }

    #[test]
    fn test_contains_preserves_recency() {
        let mut cache = TileCache::new(2);
        let older = TileCoord::new(0, 0, 1);
        let newer = TileCoord::new(1, 0, 1);

        cache.insert(older, vec![1]);
        cache.insert(newer, vec![2]);

        // peek-only check, so `older` stays the eviction candidate
        cache.contains(&older);
        cache.insert(TileCoord::new(1, 1, 1), vec![3]);

        assert!(!cache.contains(&older));
    }
}
