//! Professionals module - who is billed and at which percentage.

mod professionals_model;
mod professionals_traits;

pub use professionals_model::{Professional, Role};
pub use professionals_traits::ProfessionalRepositoryTrait;
