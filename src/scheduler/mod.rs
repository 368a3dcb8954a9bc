//! Dual-burner schedule computation.
//!
//! A pure, deterministic greedy scheduler: no shared state, safe to call
//! concurrently for different sessions. The same input always yields the
//! same assignments.
//!
//! # Algorithm
//!
//! Longest-processing-time-first list scheduling on two identical
//! machines, with explicit equipment preferences honored before load
//! balancing. Not an exact solver — worst case is a degenerate but valid
//! schedule (everything serialized on one burner).
//!
//! # Reference
//!
//! - Graham (1969), "Bounds on Multiprocessing Timing Anomalies"
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 5

mod dual_burner;

pub use dual_burner::{estimated_end_time, schedule_dual_burner};
