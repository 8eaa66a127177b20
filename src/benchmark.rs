use clap::{Parser, ValueEnum};
use compare_avl::avl_vec::AvlTree;
use compare_avl::binary_tree::BinaryTree;
use compare_avl::experiment::{BatchReport, Experiment, ExperimentConfig, TreeSelection};
use compare_avl::tree::SearchTree;
use std::thread;
use std::time::Duration;

#[derive(Clone, Copy, ValueEnum)]
enum TreeArg {
    Avl,
    Bst,
    Both,
}

impl From<TreeArg> for TreeSelection {
    fn from(arg: TreeArg) -> Self {
        match arg {
            TreeArg::Avl => TreeSelection::Avl,
            TreeArg::Bst => TreeSelection::Bst,
            TreeArg::Both => TreeSelection::Both,
        }
    }
}

#[derive(Parser)]
#[command(name = "compare")]
#[command(about = "Compares search cost of an AVL tree and an unbalanced BST")]
struct Args {
    /// Number of rounds, each running one batch per tree
    #[arg(long, default_value = "3", value_parser = clap::value_parser!(u64).range(1..))]
    rounds: u64,

    /// Randomized operations per batch
    #[arg(long, default_value = "2000", value_parser = clap::value_parser!(u64).range(1..))]
    batch_size: u64,

    /// Keys are drawn from 0..key-range
    #[arg(long, default_value = "1000", value_parser = clap::value_parser!(i32).range(1..))]
    key_range: i32,

    /// Pause between rounds in milliseconds
    #[arg(long, default_value = "1000")]
    pause_ms: u64,

    /// Base seed; random when omitted
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, value_enum, default_value = "both")]
    tree: TreeArg,

    /// Print per-batch counters as well as the averages
    #[arg(long, short)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    let config = ExperimentConfig {
        rounds: args.rounds as usize,
        batch_size: args.batch_size as usize,
        key_range: args.key_range,
        pause: Duration::from_millis(args.pause_ms),
        seed: args.seed,
        trees: args.tree.into(),
    };
    let mut experiment = Experiment::new(config);

    if args.verbose {
        println!(
            "Running {} rounds of {} operations over keys 0..{} (seed {})",
            experiment.config().rounds,
            experiment.config().batch_size,
            experiment.config().key_range,
            experiment.seed()
        );
    }

    let rounds = experiment.config().rounds;
    let pause = experiment.config().pause;
    for round in 1..=rounds {
        let report = experiment.run_round(round);
        if let Some(avl) = &report.avl {
            print_batch(AvlTree::NAME, avl, args.verbose);
        }
        if let Some(bst) = &report.bst {
            print_batch(BinaryTree::NAME, bst, args.verbose);
        }
        println!();

        if round < rounds && !pause.is_zero() {
            thread::sleep(pause);
        }
    }
}

fn print_batch(name: &str, report: &BatchReport, verbose: bool) {
    match report.stats.mean_comparisons() {
        Some(mean) => println!("average {} compare count: {:.2}", name, mean),
        None => println!("average {} compare count: n/a (no searches)", name),
    }
    if verbose {
        println!(
            "  searches {} (hits {}), inserts {} (duplicates {}), deletes skipped {}",
            report.stats.searches,
            report.stats.hits,
            report.inserted,
            report.duplicates,
            report.deletes_skipped
        );
        println!(
            "  nodes {}, height {}, released {}, took {} seconds",
            report.nodes,
            report.height,
            report.released,
            report.elapsed.as_secs_f32()
        );
    }
}
