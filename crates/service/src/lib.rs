//! Service layer for classroom reservations.
//! - Separates booking rules from data access and transport.
//! - Reuses entity definitions and model-level validation from the `models` crate.
//! - External registries are consumed through capability traits.

pub mod reservation;
#[cfg(test)]
pub mod test_support;
