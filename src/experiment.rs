use crate::avl_vec::AvlTree;
use crate::binary_tree::BinaryTree;
use crate::tree::{SearchStats, SearchTree};
use crate::workload::{Operation, Step, Workload};
use std::time::{Duration, Instant};

/// Counters gathered while one batch ran against one tree.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BatchReport {
    pub stats: SearchStats,
    pub inserted: u64,
    pub duplicates: u64,
    pub deletes_skipped: u64,
    /// Node count just before teardown.
    pub nodes: usize,
    /// Tree height just before teardown.
    pub height: i32,
    pub released: usize,
    pub elapsed: Duration,
}

/// Applies `steps` in order to `tree`, then tears the tree down.
pub fn run_batch<T, I>(tree: &mut T, steps: I) -> BatchReport
where
    T: SearchTree,
    I: IntoIterator<Item = Step>,
{
    let mut report = BatchReport::default();
    let start = Instant::now();
    for step in steps {
        match step.op {
            Operation::Insert => {
                if tree.insert(step.key) {
                    report.inserted += 1;
                } else {
                    report.duplicates += 1;
                }
            }
            Operation::Delete => report.deletes_skipped += 1,
            Operation::Search => report.stats.record(tree.search(step.key)),
        }
    }
    report.elapsed = Instant::now().saturating_duration_since(start);
    report.nodes = tree.len();
    report.height = tree.height();
    report.released = tree.teardown();
    report
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TreeSelection {
    Avl,
    Bst,
    Both,
}

impl TreeSelection {
    fn avl(self) -> bool {
        matches!(self, TreeSelection::Avl | TreeSelection::Both)
    }

    fn bst(self) -> bool {
        matches!(self, TreeSelection::Bst | TreeSelection::Both)
    }
}

#[derive(Clone, Debug)]
pub struct ExperimentConfig {
    pub rounds: usize,
    pub batch_size: usize,
    pub key_range: i32,
    pub pause: Duration,
    pub seed: Option<u64>,
    pub trees: TreeSelection,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        ExperimentConfig {
            rounds: 3,
            batch_size: 2000,
            key_range: 1000,
            pause: Duration::from_secs(1),
            seed: None,
            trees: TreeSelection::Both,
        }
    }
}

#[derive(Clone, Debug)]
pub struct RoundReport {
    pub round: usize,
    pub seed: u64,
    pub avl: Option<BatchReport>,
    pub bst: Option<BatchReport>,
}

/// Runs the same randomized batch against each selected tree kind, one round
/// at a time. Trees are reused across rounds and emptied after every batch.
pub struct Experiment {
    config: ExperimentConfig,
    seed: u64,
    avl: AvlTree,
    bst: BinaryTree,
}

impl Experiment {
    pub fn new(config: ExperimentConfig) -> Self {
        let seed = config.seed.unwrap_or_else(rand::random);
        Experiment {
            config,
            seed,
            avl: AvlTree::new(),
            bst: BinaryTree::new(),
        }
    }

    pub fn config(&self) -> &ExperimentConfig {
        &self.config
    }

    /// Base seed of the whole run; passing it back reproduces every round.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn round_seed(&self, round: usize) -> u64 {
        self.seed.wrapping_add(round as u64)
    }

    fn workload(&self, round: usize) -> Workload {
        Workload::new(
            self.round_seed(round),
            self.config.batch_size,
            self.config.key_range,
        )
    }

    /// AVL runs first, then the unbalanced tree, both on an identical step
    /// sequence.
    pub fn run_round(&mut self, round: usize) -> RoundReport {
        let trees = self.config.trees;
        let avl = if trees.avl() {
            let steps = self.workload(round);
            Some(run_batch(&mut self.avl, steps))
        } else {
            None
        };
        let bst = if trees.bst() {
            let steps = self.workload(round);
            Some(run_batch(&mut self.bst, steps))
        } else {
            None
        };
        RoundReport {
            round,
            seed: self.round_seed(round),
            avl,
            bst,
        }
    }

    pub fn run(&mut self) -> Vec<RoundReport> {
        (1..=self.config.rounds)
            .map(|round| self.run_round(round))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn steps(list: &[(Operation, i32)]) -> Vec<Step> {
        list.iter().map(|&(op, key)| Step { op, key }).collect()
    }

    #[test]
    fn batch_applies_steps_in_order() {
        let mut tree = AvlTree::new();
        let report = run_batch(
            &mut tree,
            steps(&[
                (Operation::Search, 30),
                (Operation::Insert, 30),
                (Operation::Insert, 20),
                (Operation::Delete, 20),
                (Operation::Insert, 10),
                (Operation::Insert, 10),
                (Operation::Search, 20),
                (Operation::Search, 10),
                (Operation::Search, 5),
            ]),
        );

        assert_eq!(report.inserted, 3);
        assert_eq!(report.duplicates, 1);
        assert_eq!(report.deletes_skipped, 1);
        assert_eq!(report.stats.searches, 4);
        // empty tree 0, root hit 1, leaf hit 2, miss below a leaf 2
        assert_eq!(report.stats.comparisons, 5);
        assert_eq!(report.stats.hits, 2);
        assert_eq!(report.nodes, 3);
        assert_eq!(report.height, 2);
        assert_eq!(report.released, 3);
        assert!(tree.is_empty());
    }

    #[test]
    fn deletes_do_not_remove() {
        let mut tree = BinaryTree::new();
        let report = run_batch(
            &mut tree,
            steps(&[
                (Operation::Insert, 1),
                (Operation::Delete, 1),
                (Operation::Search, 1),
            ]),
        );
        assert_eq!(report.stats.hits, 1);
        assert_eq!(report.deletes_skipped, 1);
    }

    #[test]
    fn batch_without_searches_has_no_mean() {
        let mut tree = BinaryTree::new();
        let report = run_batch(&mut tree, steps(&[(Operation::Insert, 1)]));
        assert_eq!(report.stats.mean_comparisons(), None);
    }

    #[test]
    fn avl_mean_not_above_bst() {
        let mut experiment = Experiment::new(ExperimentConfig {
            rounds: 5,
            batch_size: 20_000,
            key_range: 10_000,
            pause: Duration::ZERO,
            seed: Some(2024),
            trees: TreeSelection::Both,
        });
        for report in experiment.run() {
            let avl = report.avl.unwrap();
            let bst = report.bst.unwrap();
            assert_eq!(avl.stats.searches, bst.stats.searches);
            assert_eq!(avl.stats.hits, bst.stats.hits);
            assert_eq!(avl.nodes, bst.nodes);
            assert!(avl.height <= bst.height);
            assert!(
                avl.stats.mean_comparisons().unwrap() <= bst.stats.mean_comparisons().unwrap(),
                "round {}: {:?} vs {:?}",
                report.round,
                avl.stats,
                bst.stats
            );
        }
    }

    #[test]
    fn avl_wins_on_sorted_inserts() {
        let mut list: Vec<(Operation, i32)> = (0..500).map(|key| (Operation::Insert, key)).collect();
        list.extend((0..500).map(|key| (Operation::Search, key)));

        let avl = run_batch(&mut AvlTree::new(), steps(&list));
        let bst = run_batch(&mut BinaryTree::new(), steps(&list));
        assert_eq!(bst.height, 500);
        assert!(avl.height <= 9);
        assert!(avl.stats.comparisons * 10 < bst.stats.comparisons);
    }

    #[test]
    fn rounds_start_from_empty_trees() {
        let mut experiment = Experiment::new(ExperimentConfig {
            rounds: 2,
            batch_size: 300,
            key_range: 50,
            pause: Duration::ZERO,
            seed: Some(1),
            trees: TreeSelection::Avl,
        });
        let first = experiment.run_round(1);
        assert!(first.bst.is_none());
        let first = first.avl.unwrap();
        assert_eq!(first.released, first.nodes);

        // only keys drawn in the second round's workload survive into it
        let second = experiment.run_round(2).avl.unwrap();
        let mut expected: Vec<i32> = experiment
            .workload(2)
            .filter(|step| step.op == Operation::Insert)
            .map(|step| step.key)
            .collect();
        expected.sort_unstable();
        expected.dedup();
        assert_eq!(second.nodes, expected.len());
    }

    #[test]
    fn same_seed_reproduces_run() {
        let config = ExperimentConfig {
            rounds: 2,
            batch_size: 500,
            pause: Duration::ZERO,
            seed: Some(77),
            ..ExperimentConfig::default()
        };
        let a = Experiment::new(config.clone()).run();
        let b = Experiment::new(config).run();
        for (a, b) in a.iter().zip(b.iter()) {
            assert_eq!(a.seed, b.seed);
            assert_eq!(a.avl.map(|r| r.stats), b.avl.map(|r| r.stats));
            assert_eq!(a.bst.map(|r| r.stats), b.bst.map(|r| r.stats));
        }
    }
}
