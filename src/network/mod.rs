pub mod backprop;
pub mod mlp;

pub use backprop::Deltas;
pub use mlp::{ForwardPass, Mlp};
