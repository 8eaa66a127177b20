pub mod arena;
pub mod avl_vec;
pub mod binary_tree;
pub mod experiment;
pub mod tree;
pub mod workload;
