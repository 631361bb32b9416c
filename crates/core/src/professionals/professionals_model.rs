//! Professional domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Access role of a clinic user. Enforcement happens outside this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    #[default]
    Professional,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Professional {
    pub id: String,
    pub full_name: String,
    #[serde(default)]
    pub role: Role,
    /// Negotiated share of billed amounts, in `[0, 1]`.
    pub commission_percentage: Option<Decimal>,
}

impl Professional {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_role_defaults_to_professional() {
        let professional: Professional = serde_json::from_str(
            r#"{"id":"p1","fullName":"Ana Rojas","commissionPercentage":0.7}"#,
        )
        .unwrap();
        assert_eq!(professional.role, Role::Professional);
        assert!(!professional.is_admin());
        assert_eq!(professional.commission_percentage, Some(dec!(0.7)));
    }

    #[test]
    fn test_admin_role_serialization() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
    }
}
