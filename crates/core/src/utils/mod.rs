pub mod period;

pub use period::BillingPeriod;
