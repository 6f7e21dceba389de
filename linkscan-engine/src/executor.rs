//! Batch execution strategies
//!
//! A batch is a list of independent texts scanned with one shared
//! automaton. Scans never share mutable state, so the parallel strategy is a
//! plain `par_iter` over the texts.

use linkscan_core::{run, Automaton, Token};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Execution mode selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionMode {
    /// Scan texts one after another on the calling thread
    Sequential,
    /// Scan texts on the rayon thread pool
    Parallel,
    /// Pick based on the batch size
    #[default]
    Adaptive,
}

/// Strategy for scanning a batch of texts
pub trait BatchExecutor: Send + Sync {
    /// Scan every text, returning token lists in input order
    fn run_batch<'a>(&self, automaton: &Automaton, texts: &[&'a str]) -> Vec<Vec<Token<'a>>>;

    /// Mode this executor implements
    fn mode(&self) -> ExecutionMode;
}

/// Single-threaded executor
#[derive(Debug, Default, Clone, Copy)]
pub struct SequentialExecutor;

impl BatchExecutor for SequentialExecutor {
    fn run_batch<'a>(&self, automaton: &Automaton, texts: &[&'a str]) -> Vec<Vec<Token<'a>>> {
        texts.iter().map(|text| run(automaton, text)).collect()
    }

    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Sequential
    }
}

/// Multi-threaded executor backed by rayon
#[cfg(feature = "parallel")]
#[derive(Debug, Default, Clone, Copy)]
pub struct ParallelExecutor;

#[cfg(feature = "parallel")]
impl BatchExecutor for ParallelExecutor {
    fn run_batch<'a>(&self, automaton: &Automaton, texts: &[&'a str]) -> Vec<Vec<Token<'a>>> {
        texts.par_iter().map(|text| run(automaton, text)).collect()
    }

    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Parallel
    }
}

/// Resolve `Adaptive` to a concrete mode based on the batch size
pub fn auto_select(total_bytes: usize, threshold: usize) -> ExecutionMode {
    if total_bytes < threshold {
        ExecutionMode::Sequential
    } else {
        #[cfg(feature = "parallel")]
        return ExecutionMode::Parallel;

        #[cfg(not(feature = "parallel"))]
        ExecutionMode::Sequential
    }
}

/// Executor for a concrete mode; `Parallel` degrades to sequential when the
/// `parallel` feature is off
pub(crate) fn executor_for(mode: ExecutionMode) -> Box<dyn BatchExecutor> {
    match mode {
        #[cfg(feature = "parallel")]
        ExecutionMode::Parallel => Box::new(ParallelExecutor),
        _ => Box::new(SequentialExecutor),
    }
}
