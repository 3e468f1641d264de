/// Candidate sets backed by a fixed-size bitset
pub mod bitset;
/// Backtrack records and the depth-first decision stack
pub mod backtrack;
/// Admissibility checks for each constraint strategy
pub mod compatibility;
/// Solver state machine and run orchestration
pub mod executor;
/// Candidate recomputation and singleton collapse
pub mod propagation;
/// Minimum-entropy cell selection and seeded random choices
pub mod selection;
