//! Configuration types for the engine

use crate::executor::ExecutionMode;

/// Scanner configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScannerConfig {
    /// Execution mode selector for batches
    pub execution_mode: ExecutionMode,
    /// Minimum total batch size in bytes for parallel scanning in adaptive mode
    pub parallel_threshold: usize,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            execution_mode: ExecutionMode::Adaptive,
            parallel_threshold: 64 * 1024, // 64KB
        }
    }
}

impl ScannerConfig {
    /// Configuration that never leaves the calling thread
    pub fn sequential() -> Self {
        Self {
            execution_mode: ExecutionMode::Sequential,
            parallel_threshold: usize::MAX,
        }
    }

    /// Configuration that always scans batches in parallel
    pub fn parallel() -> Self {
        Self {
            execution_mode: ExecutionMode::Parallel,
            parallel_threshold: 0,
        }
    }

    /// Concrete mode for a batch of `total_bytes`
    pub fn resolve(&self, total_bytes: usize) -> ExecutionMode {
        match self.execution_mode {
            ExecutionMode::Adaptive => {
                crate::executor::auto_select(total_bytes, self.parallel_threshold)
            }
            mode => mode,
        }
    }
}
