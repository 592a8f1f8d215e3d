use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How urgent a recommended item is. Only affects display ordering.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Default)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Low,
    Medium,
    High,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Low => write!(f, "low"),
            Severity::Medium => write!(f, "medium"),
            Severity::High => write!(f, "high"),
        }
    }
}

/// Customer outcome on a decision.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Choice {
    #[default]
    Unset,
    Approve,
    Postpone,
}

impl std::fmt::Display for Choice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Choice::Unset => write!(f, "unset"),
            Choice::Approve => write!(f, "approve"),
            Choice::Postpone => write!(f, "postpone"),
        }
    }
}

impl std::str::FromStr for Choice {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "approve" | "approved" | "fix" => Ok(Choice::Approve),
            "postpone" | "postponed" | "later" => Ok(Choice::Postpone),
            "unset" | "clear" => Ok(Choice::Unset),
            _ => anyhow::bail!("Invalid choice: {s}. Valid values: approve, postpone, unset"),
        }
    }
}

/// Price of a decision: a repair split into parts and labour, or a flat
/// package price.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DecisionCost {
    PartsLabour { parts: Decimal, labour: Decimal },
    Flat { price: Decimal },
}

impl DecisionCost {
    pub fn amount(&self) -> Decimal {
        match self {
            DecisionCost::PartsLabour { parts, labour } => *parts + *labour,
            DecisionCost::Flat { price } => *price,
        }
    }

    pub(crate) fn is_negative(&self) -> bool {
        match self {
            DecisionCost::PartsLabour { parts, labour } => {
                parts.is_sign_negative() || labour.is_sign_negative()
            }
            DecisionCost::Flat { price } => price.is_sign_negative(),
        }
    }
}

/// A discretionary, priced item the customer approves or postpones.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Decision {
    pub id: String,
    pub description: String,
    pub cost: DecisionCost,
    #[serde(default)]
    pub severity: Severity,
    #[serde(default)]
    pub choice: Choice,
    /// Exclusive-choice group; at most one member may be approved
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
}

impl Decision {
    pub fn repair(
        id: impl Into<String>,
        description: impl Into<String>,
        parts: Decimal,
        labour: Decimal,
        severity: Severity,
    ) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            cost: DecisionCost::PartsLabour { parts, labour },
            severity,
            choice: Choice::Unset,
            group: None,
        }
    }

    pub fn package(
        id: impl Into<String>,
        description: impl Into<String>,
        price: Decimal,
        group: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            cost: DecisionCost::Flat { price },
            severity: Severity::Low,
            choice: Choice::Unset,
            group: Some(group.into()),
        }
    }

    pub fn is_approved(&self) -> bool {
        self.choice == Choice::Approve
    }

    pub fn in_group(&self, group: &str) -> bool {
        self.group.as_deref() == Some(group)
    }

    pub fn approved_amount(&self) -> Decimal {
        if self.is_approved() {
            self.cost.amount()
        } else {
            Decimal::ZERO
        }
    }
}
