pub mod activation;

pub use activation::{logistic, logistic_derivative, OutputActivation};
