pub mod sum_squares;

pub use sum_squares::SumSquaresLoss;
