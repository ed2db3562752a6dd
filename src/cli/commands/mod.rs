//! Command implementations for the cluster-eval CLI

pub mod evaluate;
