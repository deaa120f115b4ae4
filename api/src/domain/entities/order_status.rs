//! Order lifecycle status shared by client and supplier orders

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    InPreparation,
    Validated,
    Delivered,
}

impl OrderStatus {
    /// Delivered orders are frozen
    pub fn is_editable(self) -> bool {
        self != OrderStatus::Delivered
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderStatus::InPreparation => write!(f, "in_preparation"),
            OrderStatus::Validated => write!(f, "validated"),
            OrderStatus::Delivered => write!(f, "delivered"),
        }
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "in_preparation" | "inpreparation" => Ok(OrderStatus::InPreparation),
            "validated" => Ok(OrderStatus::Validated),
            "delivered" => Ok(OrderStatus::Delivered),
            _ => Err(format!("Unknown order status: {}", s)),
        }
    }
}
