use crate::*;

pub trait CategorySelector {
    fn select(self) -> [CategoryId; CATEGORY_COUNT];
}

/// Picks every identifier independently, so the same category can come up twice.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomCategorySelector {
    seed: u64,
    limit: CategoryId,
}

impl RandomCategorySelector {
    pub fn new(seed: u64) -> Self {
        Self::with_limit(seed, CATEGORY_ID_LIMIT)
    }

    pub fn with_limit(seed: u64, limit: CategoryId) -> Self {
        Self {
            seed,
            limit: limit.max(1),
        }
    }
}

impl CategorySelector for RandomCategorySelector {
    fn select(self) -> [CategoryId; CATEGORY_COUNT] {
        use rand::prelude::*;

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let ids = core::array::from_fn(|_| rng.random_range(0..self.limit));
        log::debug!("selected categories: {:?}", ids);
        ids
    }
}
