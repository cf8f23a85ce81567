//! Worker pool dispatch for chunked transforms
//!
//! Chunks are processed by a bounded rayon thread pool with work-stealing
//! (unordered) completion. Results are collected keyed by chunk index, so
//! reduction downstream never depends on completion order. Any transform
//! error aborts the whole batch.

use std::num::NonZeroUsize;

use rayon::prelude::*;

use crate::error::{CoreError, Result};

/// Default number of lines per chunk.
pub const DEFAULT_CHUNK_SIZE: usize = 10_000;

/// Multiprocessing parameters for chunked operations.
#[derive(Debug, Clone)]
pub struct PoolOptions {
    /// Requested worker count; clamped to the number of chunks.
    pub n_jobs: usize,
    /// Lines per chunk; `None` processes everything as a single chunk.
    pub chunk_size: Option<NonZeroUsize>,
    /// Tasks a worker may handle before being recycled. Thread workers
    /// share one read-only context by reference, so there is no per-worker
    /// copy to recycle and this setting has no effect; it is accepted for
    /// interface stability.
    pub max_tasks_per_worker: Option<NonZeroUsize>,
}

impl Default for PoolOptions {
    fn default() -> Self {
        Self {
            n_jobs: num_cpus::get(),
            chunk_size: NonZeroUsize::new(DEFAULT_CHUNK_SIZE),
            max_tasks_per_worker: None,
        }
    }
}

/// Runs `transform` over all chunks on a bounded worker pool and returns
/// the per-chunk results in chunk-index order.
///
/// Workers pull chunks from a shared backlog in unspecified order; the
/// shared context captured by `transform` is read-only for the lifetime of
/// the pool. The first transform error cancels the remaining work and is
/// propagated to the caller.
pub fn dispatch<T, R, F>(chunks: &[T], options: &PoolOptions, transform: F) -> Result<Vec<R>>
where
    T: Sync,
    R: Send,
    F: Fn(usize, &T) -> Result<R> + Send + Sync,
{
    if chunks.is_empty() {
        return Ok(Vec::new());
    }

    let workers = options.n_jobs.clamp(1, chunks.len());
    log::debug!("Chunks: {}", chunks.len());
    log::debug!("Workers (final): {workers}");
    if let Some(limit) = options.max_tasks_per_worker {
        log::debug!("Worker task limit {limit} ignored: context is shared, not copied");
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .build()
        .map_err(|e| CoreError::ThreadPool(e.to_string()))?;

    pool.install(|| {
        chunks
            .par_iter()
            .enumerate()
            .map(|(index, chunk)| transform(index, chunk))
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_results_are_in_chunk_index_order() {
        let chunks: Vec<usize> = (0..64).collect();
        let options = PoolOptions {
            n_jobs: 4,
            ..PoolOptions::default()
        };
        let results = dispatch(&chunks, &options, |index, chunk| {
            assert_eq!(index, *chunk);
            Ok(index * 10)
        })
        .unwrap();
        let expected: Vec<usize> = (0..64).map(|i| i * 10).collect();
        assert_eq!(results, expected);
    }

    #[test]
    fn test_empty_backlog_spawns_no_work() {
        let chunks: Vec<usize> = Vec::new();
        let results = dispatch(&chunks, &PoolOptions::default(), |_, _| Ok(0)).unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn test_failure_aborts_the_batch() {
        let chunks: Vec<usize> = (0..16).collect();
        let result = dispatch(&chunks, &PoolOptions::default(), |index, _| {
            if index == 7 {
                Err(CoreError::ThreadPool("boom".to_string()))
            } else {
                Ok(index)
            }
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_workers_share_read_only_context() {
        let context: Vec<String> = vec!["shared".to_string(); 3];
        let chunks: Vec<usize> = (0..8).collect();
        let results = dispatch(&chunks, &PoolOptions::default(), |_, chunk| {
            Ok(format!("{}-{}", context[0], chunk))
        })
        .unwrap();
        assert_eq!(results[5], "shared-5");
    }

    #[test]
    fn test_more_jobs_than_chunks() {
        let chunks = [1, 2];
        let options = PoolOptions {
            n_jobs: 64,
            ..PoolOptions::default()
        };
        let results = dispatch(&chunks, &options, |_, chunk| Ok(chunk * 2)).unwrap();
        assert_eq!(results, vec![2, 4]);
    }
}
