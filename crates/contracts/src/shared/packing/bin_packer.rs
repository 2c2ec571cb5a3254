//! Rectangle packing for widget grids (maximal free rectangles, best short side fit).
//!
//! The container has a fixed width and grows downwards. Blocks are placed in
//! input order; the resulting height is the lowest edge of any placed block.

use serde::{Deserialize, Serialize};

/// Height of the initial free rectangle. Large enough for any dashboard,
/// small enough to keep `y + height` far from overflow.
pub const UNBOUNDED_HEIGHT: u32 = 1 << 30;

/// Block to be placed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RectBlock {
    pub key: String,
    pub width: u32,
    pub height: u32,
}

impl RectBlock {
    pub fn new(key: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            key: key.into(),
            width,
            height,
        }
    }
}

/// Placed block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackedBlock {
    pub key: String,
    pub width: u32,
    pub height: u32,
    pub x: u32,
    pub y: u32,
}

impl PackedBlock {
    pub fn right(&self) -> u32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> u32 {
        self.y + self.height
    }

    pub fn overlaps(&self, other: &PackedBlock) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PackResult {
    pub width: u32,
    pub height: u32,
    pub items: Vec<PackedBlock>,
}

impl PackResult {
    pub fn get(&self, key: &str) -> Option<&PackedBlock> {
        self.items.iter().find(|item| item.key == key)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FreeRect {
    x: u32,
    y: u32,
    width: u32,
    height: u32,
}

impl FreeRect {
    fn right(&self) -> u32 {
        self.x + self.width
    }

    fn bottom(&self) -> u32 {
        self.y + self.height
    }

    fn fits(&self, width: u32, height: u32) -> bool {
        width <= self.width && height <= self.height
    }

    fn contains(&self, other: &FreeRect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    fn intersects(&self, block: &PackedBlock) -> bool {
        self.x < block.right()
            && block.x < self.right()
            && self.y < block.bottom()
            && block.y < self.bottom()
    }

    /// Maximal remainders of `self` once `block` is carved out of it.
    fn split_around(&self, block: &PackedBlock, out: &mut Vec<FreeRect>) {
        // left
        if block.x > self.x {
            out.push(FreeRect {
                x: self.x,
                y: self.y,
                width: block.x - self.x,
                height: self.height,
            });
        }
        // right
        if block.right() < self.right() {
            out.push(FreeRect {
                x: block.right(),
                y: self.y,
                width: self.right() - block.right(),
                height: self.height,
            });
        }
        // top
        if block.y > self.y {
            out.push(FreeRect {
                x: self.x,
                y: self.y,
                width: self.width,
                height: block.y - self.y,
            });
        }
        // bottom
        if block.bottom() < self.bottom() {
            out.push(FreeRect {
                x: self.x,
                y: block.bottom(),
                width: self.width,
                height: self.bottom() - block.bottom(),
            });
        }
    }
}

/// Packs `blocks` into a container `container_width` wide.
///
/// Every block must satisfy `width <= container_width`. A block that fits
/// nowhere is stacked at `x = 0` below everything placed so far, so the
/// no-overlap guarantee still holds.
pub fn pack(blocks: &[RectBlock], container_width: u32) -> PackResult {
    let mut packer = BinPacker::new(container_width);
    for block in blocks {
        packer.insert(block);
    }
    packer.finish()
}

/// Incremental packer; `pack` is the usual entry point.
#[derive(Debug, Clone)]
pub struct BinPacker {
    container_width: u32,
    free: Vec<FreeRect>,
    placed: Vec<PackedBlock>,
}

impl BinPacker {
    pub fn new(container_width: u32) -> Self {
        Self {
            container_width,
            free: vec![FreeRect {
                x: 0,
                y: 0,
                width: container_width,
                height: UNBOUNDED_HEIGHT,
            }],
            placed: Vec::new(),
        }
    }

    pub fn insert(&mut self, block: &RectBlock) -> &PackedBlock {
        let packed = match self.best_short_side_fit(block.width, block.height) {
            Some(index) => {
                let target = self.free[index];
                PackedBlock {
                    key: block.key.clone(),
                    width: block.width,
                    height: block.height,
                    x: target.x,
                    y: target.y,
                }
            }
            None => {
                log::warn!(
                    "block '{}' ({}x{}) does not fit into container width {}",
                    block.key,
                    block.width,
                    block.height,
                    self.container_width
                );
                PackedBlock {
                    key: block.key.clone(),
                    width: block.width,
                    height: block.height,
                    x: 0,
                    y: self.used_height(),
                }
            }
        };

        self.carve(&packed);
        self.placed.push(packed);
        &self.placed[self.placed.len() - 1]
    }

    pub fn used_height(&self) -> u32 {
        self.placed.iter().map(PackedBlock::bottom).max().unwrap_or(0)
    }

    pub fn finish(self) -> PackResult {
        let height = self.used_height();
        PackResult {
            width: self.container_width,
            height,
            items: self.placed,
        }
    }

    /// Index of the free rectangle with the smallest leftover on its shorter
    /// side; the first one wins on ties.
    fn best_short_side_fit(&self, width: u32, height: u32) -> Option<usize> {
        let mut best: Option<(usize, u32)> = None;
        for (index, rect) in self.free.iter().enumerate() {
            if !rect.fits(width, height) {
                continue;
            }
            let short_side = (rect.width - width).min(rect.height - height);
            match best {
                Some((_, score)) if score <= short_side => {}
                _ => best = Some((index, short_side)),
            }
        }
        best.map(|(index, _)| index)
    }

    fn carve(&mut self, block: &PackedBlock) {
        let mut next = Vec::with_capacity(self.free.len() + 4);
        for rect in &self.free {
            if rect.intersects(block) {
                rect.split_around(block, &mut next);
            } else {
                next.push(*rect);
            }
        }
        self.free = prune(next);
    }
}

/// Drops free rectangles contained in another one (and exact duplicates).
fn prune(rects: Vec<FreeRect>) -> Vec<FreeRect> {
    let mut kept: Vec<FreeRect> = Vec::with_capacity(rects.len());
    'outer: for (i, rect) in rects.iter().enumerate() {
        for (j, other) in rects.iter().enumerate() {
            if i == j || !other.contains(rect) {
                continue;
            }
            // Equal rectangles: keep the first occurrence only
            if rect == other && i < j {
                continue;
            }
            continue 'outer;
        }
        kept.push(*rect);
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_valid(result: &PackResult, blocks: &[RectBlock]) {
        assert_eq!(result.items.len(), blocks.len());
        for item in &result.items {
            assert!(item.right() <= result.width, "{item:?} sticks out");
        }
        for (i, a) in result.items.iter().enumerate() {
            for b in &result.items[i + 1..] {
                assert!(!a.overlaps(b), "{a:?} overlaps {b:?}");
            }
        }
        let expected_height = result.items.iter().map(PackedBlock::bottom).max().unwrap_or(0);
        assert_eq!(result.height, expected_height);
    }

    #[test]
    fn test_stacks_when_container_is_narrow() {
        let blocks = vec![RectBlock::new("a", 100, 50), RectBlock::new("b", 100, 50)];
        let result = pack(&blocks, 100);
        assert_eq!((result.items[0].x, result.items[0].y), (0, 0));
        assert_eq!((result.items[1].x, result.items[1].y), (0, 50));
        assert_eq!(result.height, 100);
        assert_valid(&result, &blocks);
    }

    #[test]
    fn test_side_by_side_when_room() {
        let blocks = vec![RectBlock::new("a", 100, 50), RectBlock::new("b", 100, 50)];
        let result = pack(&blocks, 200);
        assert_eq!((result.items[0].x, result.items[0].y), (0, 0));
        assert_eq!((result.items[1].x, result.items[1].y), (100, 0));
        assert_eq!(result.height, 50);
        assert_eq!(result.width, 200);
        assert_valid(&result, &blocks);
    }

    #[test]
    fn test_empty_input() {
        let result = pack(&[], 300);
        assert_eq!(result.height, 0);
        assert!(result.items.is_empty());
    }

    #[test]
    fn test_wide_block_below_short_one_does_not_overlap() {
        // A 100x50 leaves a free strip on the right; B must not reuse the
        // part of that strip it covers.
        let blocks = vec![
            RectBlock::new("a", 100, 50),
            RectBlock::new("b", 150, 10),
            RectBlock::new("c", 100, 30),
            RectBlock::new("d", 50, 100),
        ];
        let result = pack(&blocks, 200);
        assert_valid(&result, &blocks);
        assert_eq!(result.get("b").map(|b| (b.x, b.y)), Some((0, 50)));
    }

    #[test]
    fn test_fills_gap_next_to_tall_block() {
        let blocks = vec![
            RectBlock::new("tall", 1, 3),
            RectBlock::new("s1", 1, 1),
            RectBlock::new("s2", 1, 1),
            RectBlock::new("s3", 1, 1),
        ];
        let result = pack(&blocks, 2);
        assert_valid(&result, &blocks);
        assert_eq!(result.height, 3);
        for key in ["s1", "s2", "s3"] {
            assert_eq!(result.get(key).map(|b| b.x), Some(1));
        }
    }

    #[test]
    fn test_mixed_dashboard_is_valid() {
        let sizes = [
            (2, 120),
            (1, 300),
            (1, 80),
            (4, 60),
            (3, 200),
            (1, 40),
            (2, 90),
            (1, 90),
            (1, 150),
            (2, 30),
        ];
        let blocks: Vec<RectBlock> = sizes
            .iter()
            .enumerate()
            .map(|(i, (w, h))| RectBlock::new(format!("w{i}"), w * 100, *h))
            .collect();
        let result = pack(&blocks, 400);
        assert_valid(&result, &blocks);
        // Best short side fit never does worse than stacking everything
        let stacked: u32 = blocks.iter().map(|b| b.height).sum();
        assert!(result.height <= stacked);
    }

    #[test]
    fn test_deterministic() {
        let blocks: Vec<RectBlock> = (0..20)
            .map(|i| RectBlock::new(format!("b{i}"), 10 + (i * 7) % 40, 5 + (i * 13) % 30))
            .collect();
        let first = pack(&blocks, 60);
        let second = pack(&blocks, 60);
        assert_eq!(first, second);
        assert_valid(&first, &blocks);
    }

    fn xorshift(state: &mut u64) -> u64 {
        *state ^= *state << 13;
        *state ^= *state >> 7;
        *state ^= *state << 17;
        *state
    }

    #[test]
    fn test_generated_inputs_are_valid() {
        let mut seed = 0x9E37_79B9_7F4A_7C15_u64;
        for round in 0..500 {
            let container = 20 + (xorshift(&mut seed) % 400) as u32;
            let count = (xorshift(&mut seed) % 25) as usize;
            let blocks: Vec<RectBlock> = (0..count)
                .map(|i| {
                    let width = 1 + (xorshift(&mut seed) % container as u64) as u32;
                    let height = 1 + (xorshift(&mut seed) % 200) as u32;
                    RectBlock::new(format!("r{round}b{i}"), width, height)
                })
                .collect();
            let result = pack(&blocks, container);
            assert_valid(&result, &blocks);
            for (block, item) in blocks.iter().zip(&result.items) {
                assert_eq!(
                    (&item.key, item.width, item.height),
                    (&block.key, block.width, block.height)
                );
            }
        }
    }

    #[test]
    fn test_too_wide_block_is_stacked_below() {
        let blocks = vec![RectBlock::new("a", 50, 20), RectBlock::new("huge", 120, 10)];
        let result = pack(&blocks, 100);
        let huge = result.get("huge").cloned().unwrap();
        assert_eq!((huge.x, huge.y), (0, 20));
        assert_eq!(result.height, 30);
        assert!(!huge.overlaps(&result.items[0]));
    }

    #[test]
    fn test_prune_removes_contained() {
        let outer = FreeRect { x: 0, y: 0, width: 10, height: 10 };
        let inner = FreeRect { x: 2, y: 2, width: 3, height: 3 };
        let pruned = prune(vec![inner, outer, outer]);
        assert_eq!(pruned, vec![outer]);
    }
}
