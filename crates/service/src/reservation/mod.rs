//! Reservation module: domain, repository and service layers.
//!
//! The service owns the validation pipeline and conflict policy; storage and
//! the class/professor registries sit behind traits.

pub mod domain;
pub mod errors;
pub mod locks;
pub mod overlap;
pub mod registry;
pub mod repository;
pub mod service;
pub mod repo;

pub use service::ReservationService;
