use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Insert,
    /// Neither tree supports removal, so these steps are dropped by the runner.
    Delete,
    Search,
}

impl Operation {
    const ALL: [Operation; 3] = [Operation::Insert, Operation::Delete, Operation::Search];
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step {
    pub op: Operation,
    pub key: i32,
}

/// A finite, reproducible stream of randomized steps. The operation is drawn
/// uniformly from the three kinds, then the key uniformly from
/// `0..key_range`.
#[derive(Clone, Debug)]
pub struct Workload {
    rng: StdRng,
    remaining: usize,
    key_range: i32,
}

impl Workload {
    pub fn new(seed: u64, len: usize, key_range: i32) -> Self {
        Workload {
            rng: StdRng::seed_from_u64(seed),
            remaining: len,
            key_range: key_range.max(1),
        }
    }
}

impl Iterator for Workload {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let op = Operation::ALL[self.rng.random_range(0..Operation::ALL.len())];
        let key = self.rng.random_range(0..self.key_range);
        Some(Step { op, key })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Workload {}
