// This binary crate is intentionally minimal.
// All trainer logic lives in the library (src/lib.rs and its modules).
// Run examples with:
//   cargo run --example xor
fn main() {
    println!("pyrite-mlp: a single-hidden-layer perceptron trainer in Rust.");
    println!("Run `cargo run --example xor` or `cargo run --example sinewave`.");
}
