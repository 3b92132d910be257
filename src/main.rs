//! Trunk binary target.

fn main() {
    #[cfg(feature = "csr")]
    portfolio::start();
}
