use alloc::vec::Vec;
use hashbrown::HashSet;
use rand::prelude::*;

use super::*;

/// Uniform placement without replacement, reproducible from a seed.
#[derive(Clone, Debug)]
pub struct RandomMineGenerator {
    seed: u64,
    rng: SmallRng,
}

impl RandomMineGenerator {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl MineGenerator for RandomMineGenerator {
    fn generate(&mut self, (width, height): Coord2, count: CellCount) -> Result<Vec<Coord2>> {
        let total = mult(width, height);
        if count > total {
            return Err(GameError::TooManyMines);
        }

        let indices = if count == total {
            log::debug!("Board is full of mines, skipping sampling");
            (0..total).collect()
        } else if count > total / 2 {
            // sample the safe cells instead, rejection sampling stays cheap that way
            let safe: HashSet<_> = unique_random_indices(&mut self.rng, total, total - count)
                .into_iter()
                .collect();
            (0..total).filter(|index| !safe.contains(index)).collect()
        } else {
            unique_random_indices(&mut self.rng, total, count)
        };

        Ok(indices
            .into_iter()
            .map(|index| index_to_coords(index, height))
            .collect())
    }
}

/// Draws `count` distinct values from `0..total`, discarding repeats, in draw order.
pub fn unique_random_indices(rng: &mut SmallRng, total: CellCount, count: CellCount) -> Vec<CellCount> {
    debug_assert!(count <= total);

    let mut seen = HashSet::with_capacity(count as usize);
    let mut result = Vec::with_capacity(count as usize);
    while (result.len() as CellCount) < count {
        let candidate = rng.random_range(0..total);
        if seen.insert(candidate) {
            result.push(candidate);
        }
    }
    result
}

/// Column-major mapping, `index = x * height + y`.
pub const fn index_to_coords(index: CellCount, height: Coord) -> Coord2 {
    let height = height as CellCount;
    ((index / height) as Coord, (index % height) as Coord)
}
