//! Overlap window: how many index-adjacent predecessors can share an
//! instant with a given job.
//!
//! # Algorithm
//!
//! For job `q`, scan candidate instants `t` from `deadline(q)` down to
//! `release(q)`. At each `t`, extend a predecessor boundary backwards
//! (`q-1`, `q-2`, ...) while the next predecessor's window contains `t`,
//! stopping at the first one that does not. The boundary never moves
//! forward again: a later (smaller) `t` resumes from where the previous
//! instant stopped.
//!
//! # Complexity
//! O(w + k) where w = `deadline(q) - release(q)` and k = predecessors
//! absorbed.

use log::trace;

use crate::models::Job;

/// Maximum batch size ending at job `q` (1-indexed).
///
/// Returns at least 1 (job `q` alone) and at most `q`.
///
/// # Panics
/// If `q == 0` or `q > jobs.len()`.
///
/// # Example
///
/// ```
/// use u_batch::models::Job;
/// use u_batch::solver::max_batchable;
///
/// let jobs = [Job::new(0, 2), Job::new(1, 3), Job::new(2, 4)];
/// assert_eq!(max_batchable(&jobs, 3), 3);
/// ```
pub fn max_batchable(jobs: &[Job], q: usize) -> usize {
    assert!(q >= 1 && q <= jobs.len(), "job index {q} out of range");
    if q == 1 {
        return 1;
    }

    let job = jobs[q - 1];
    // 1-indexed: the lowest job already absorbed into the window.
    let mut boundary = q;
    let mut count = 1;

    trace!("job {q}: sweeping {} instants", job.window_len());
    let mut t = job.deadline;
    while t >= job.release {
        while boundary > 1 && jobs[boundary - 2].contains(t) {
            boundary -= 1;
            count += 1;
        }
        trace!("job {q}: t={t} boundary={boundary} count={count}");
        if boundary == 1 || t == job.release {
            break;
        }
        t -= 1;
    }

    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_job_is_alone() {
        assert_eq!(max_batchable(&[Job::new(0, 100)], 1), 1);
    }

    #[test]
    fn test_all_three_overlap_at_common_instant() {
        let jobs = [Job::new(0, 2), Job::new(1, 3), Job::new(2, 4)];
        assert_eq!(max_batchable(&jobs, 2), 2);
        assert_eq!(max_batchable(&jobs, 3), 3);
    }

    #[test]
    fn test_disjoint_predecessor() {
        let jobs = [Job::new(0, 1), Job::new(5, 6)];
        assert_eq!(max_batchable(&jobs, 2), 1);
    }

    #[test]
    fn test_point_window_scans_once() {
        let jobs = [Job::new(0, 10), Job::new(4, 4), Job::new(4, 4)];
        assert_eq!(max_batchable(&jobs, 3), 3);

        let jobs = [Job::new(0, 3), Job::new(4, 4)];
        assert_eq!(max_batchable(&jobs, 2), 1);
    }

    #[test]
    fn test_stops_at_first_non_overlapping_predecessor() {
        // Job 1 overlaps job 3 but job 2 does not, so job 1 is unreachable.
        let jobs = [Job::new(0, 10), Job::new(20, 30), Job::new(5, 8)];
        assert_eq!(max_batchable(&jobs, 3), 1);
    }

    #[test]
    fn test_boundary_is_not_reset_between_instants() {
        // At t=10 job 2 is absorbed; job 1 only contains t=5. Because the
        // boundary persists, job 1 is absorbed when the sweep reaches t=5.
        let jobs = [Job::new(5, 5), Job::new(10, 10), Job::new(0, 10)];
        assert_eq!(max_batchable(&jobs, 3), 3);
    }

    #[test]
    fn test_negative_times() {
        let jobs = [Job::new(-5, -1), Job::new(-3, 0)];
        assert_eq!(max_batchable(&jobs, 2), 2);
    }

    #[test]
    fn test_never_exceeds_index() {
        let jobs = vec![Job::new(0, 50); 6];
        for q in 1..=jobs.len() {
            assert_eq!(max_batchable(&jobs, q), q);
        }
    }

    #[test]
    #[should_panic]
    fn test_sentinel_index_rejected() {
        let _ = max_batchable(&[Job::new(0, 1)], 0);
    }
}
