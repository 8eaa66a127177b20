/// Outcome of one lookup: whether the key was present and how many nodes the
/// descent compared against.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Probe {
    pub found: bool,
    pub comparisons: u32,
}

/// Running totals over the searches of one batch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub comparisons: u64,
    pub searches: u64,
    pub hits: u64,
}

impl SearchStats {
    pub fn new() -> Self {
        SearchStats::default()
    }

    pub fn record(&mut self, probe: Probe) {
        self.comparisons += u64::from(probe.comparisons);
        self.searches += 1;
        if probe.found {
            self.hits += 1;
        }
    }

    /// Average comparisons per search, `None` if nothing was searched.
    pub fn mean_comparisons(&self) -> Option<f64> {
        if self.searches == 0 {
            return None;
        }
        Some(self.comparisons as f64 / self.searches as f64)
    }
}

pub trait SearchTree {
    /// Short label used when reporting.
    const NAME: &'static str;

    fn new() -> Self;
    /// Returns false when the key was already present and nothing changed.
    fn insert(&mut self, key: i32) -> bool;
    fn search(&self, key: i32) -> Probe;
    fn len(&self) -> usize;
    fn height(&self) -> i32;
    fn keys(&self) -> Vec<i32>;
    /// Releases every node and leaves the tree empty, returning how many
    /// nodes were released.
    fn teardown(&mut self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn contains(&self, key: i32) -> bool {
        self.search(key).found
    }
}
