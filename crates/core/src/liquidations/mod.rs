//! Liquidations module - monthly split of billed amounts between a
//! professional and the clinic.

mod commission;
mod liquidations_model;
mod liquidations_service;
mod liquidations_traits;

pub use commission::{calculate_commission, split_liquidation};
pub use liquidations_model::{Liquidation, LiquidationFigure, LiquidationStatus};
pub use liquidations_service::LiquidationService;
pub use liquidations_traits::{LiquidationRepositoryTrait, LiquidationServiceTrait};
