pub mod early_stopping;
pub mod options;
pub mod round_stats;
pub mod trainer;

pub use early_stopping::{early_stopping, early_stopping_with_rng, StopReport};
pub use options::{load_options, TrainOptions};
pub use round_stats::RoundStats;
pub use trainer::{train, train_with_rng};
