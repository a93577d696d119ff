mod biguint_ext;
pub use biguint_ext::BigUintExt;

pub mod sieve;
