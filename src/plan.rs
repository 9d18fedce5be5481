//! Chunk planning: splitting a file into balanced byte ranges.

/// One unit of planned read work: a contiguous byte range of the file
/// assigned to a single concurrent read task.
///
/// A plan partitions the file with no gaps or overlaps; indices are unique
/// and contiguous from zero, and only the highest-index chunk may have a
/// different length from the others.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkSpec {
    /// Ordinal position, used for reassembly order (not completion order).
    pub index: usize,
    /// Byte offset into the file where this chunk begins.
    pub offset: u64,
    /// Number of bytes this chunk is expected to contain.
    pub len: u64,
}

/// Worker-count policy for parallel reads.
///
/// Thresholds are fixed at construction, not adaptive to CPU count. The
/// defaults (1 MiB / 128 MiB, 1 / 8 / 16 workers) are the established
/// tuning; override them only with evidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadPolicy {
    /// Largest file size (bytes) still read with a single worker.
    pub single_threaded_max: u64,
    /// Largest file size (bytes) read with `medium_workers` workers.
    pub medium_max: u64,
    /// Worker count for files above `single_threaded_max`.
    pub medium_workers: usize,
    /// Worker count for files above `medium_max`.
    pub large_workers: usize,
}

impl Default for ReadPolicy {
    fn default() -> Self {
        Self {
            single_threaded_max: 1_048_576,   // 1 MiB
            medium_max: 134_217_728,          // 128 MiB
            medium_workers: 8,
            large_workers: 16,
        }
    }
}

impl ReadPolicy {
    /// Number of concurrent read workers for a file of `file_size` bytes.
    #[must_use]
    pub fn workers_for(&self, file_size: u64) -> usize {
        if file_size <= self.single_threaded_max {
            1
        } else if file_size <= self.medium_max {
            self.medium_workers
        } else {
            self.large_workers
        }
    }

    /// Compute the chunk plan for a file of `file_size` bytes.
    ///
    /// `chunk_size = ceil(file_size / workers)`; every chunk gets
    /// `chunk_size` bytes except the last, which gets the remainder (it may
    /// be smaller, or equal when the size divides evenly). The single-worker
    /// case yields one chunk covering the whole file, and `file_size == 0`
    /// yields an empty, well-formed plan.
    #[must_use]
    pub fn plan(&self, file_size: u64) -> Vec<ChunkSpec> {
        if file_size == 0 {
            return Vec::new();
        }

        let workers = self.workers_for(file_size).max(1) as u64;
        let chunk_size = file_size.div_ceil(workers);

        let mut chunks = Vec::with_capacity(workers as usize);
        let mut offset = 0u64;
        while offset < file_size {
            let len = chunk_size.min(file_size - offset);
            chunks.push(ChunkSpec {
                index: chunks.len(),
                offset,
                len,
            });
            offset += len;
        }
        chunks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIB: u64 = 1_048_576;

    #[test]
    fn worker_count_boundaries() {
        let policy = ReadPolicy::default();
        assert_eq!(policy.workers_for(0), 1);
        assert_eq!(policy.workers_for(MIB), 1);
        assert_eq!(policy.workers_for(MIB + 1), 8);
        assert_eq!(policy.workers_for(128 * MIB), 8);
        assert_eq!(policy.workers_for(128 * MIB + 1), 16);
    }

    #[test]
    fn zero_size_plan_is_empty() {
        assert!(ReadPolicy::default().plan(0).is_empty());
    }

    #[test]
    fn single_worker_covers_whole_file() {
        let plan = ReadPolicy::default().plan(MIB);
        assert_eq!(plan.len(), 1);
        assert_eq!(plan[0], ChunkSpec { index: 0, offset: 0, len: MIB });
    }

    #[test]
    fn plan_partitions_without_gaps() {
        let policy = ReadPolicy::default();
        for size in [MIB + 1, 10 * MIB + 7, 128 * MIB + 1] {
            let plan = policy.plan(size);
            assert_eq!(plan.len(), policy.workers_for(size));

            let mut expected_offset = 0u64;
            for (i, chunk) in plan.iter().enumerate() {
                assert_eq!(chunk.index, i);
                assert_eq!(chunk.offset, expected_offset);
                expected_offset += chunk.len;
            }
            assert_eq!(expected_offset, size);

            // Only the final chunk may differ in length.
            let head = plan[0].len;
            for chunk in &plan[..plan.len() - 1] {
                assert_eq!(chunk.len, head);
            }
            assert!(plan[plan.len() - 1].len <= head);
        }
    }

    #[test]
    fn evenly_divisible_size_gives_equal_chunks() {
        let policy = ReadPolicy {
            single_threaded_max: 64,
            medium_max: 1024,
            medium_workers: 4,
            large_workers: 8,
        };
        let plan = policy.plan(512);
        assert_eq!(plan.len(), 4);
        assert!(plan.iter().all(|c| c.len == 128));
    }
}
