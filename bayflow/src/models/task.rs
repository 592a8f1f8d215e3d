use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Opaque handle to a photo held by the image store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct PhotoRef(pub String);

impl std::fmt::Display for PhotoRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which photo of a task a handle belongs to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PhotoSlot {
    Before,
    After,
}

impl std::fmt::Display for PhotoSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PhotoSlot::Before => write!(f, "before"),
            PhotoSlot::After => write!(f, "after"),
        }
    }
}

impl std::str::FromStr for PhotoSlot {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "before" => Ok(PhotoSlot::Before),
            "after" => Ok(PhotoSlot::After),
            _ => anyhow::bail!("Invalid photo slot: {s}. Valid values: before, after"),
        }
    }
}

/// A checklist item within a stage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_minutes: Option<u32>,
    /// Charged on the invoice once the task is completed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    /// Open QC issue; blocks the stage gate until cleared
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issue: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before_photo: Option<PhotoRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after_photo: Option<PhotoRef>,
}

impl Task {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            completed: false,
            estimated_minutes: None,
            price: None,
            issue: None,
            before_photo: None,
            after_photo: None,
        }
    }

    pub fn with_price(mut self, price: Decimal) -> Self {
        self.price = Some(price);
        self
    }

    pub fn with_estimate(mut self, minutes: u32) -> Self {
        self.estimated_minutes = Some(minutes);
        self
    }

    /// Done and free of open issues.
    pub fn is_satisfied(&self) -> bool {
        self.completed && self.issue.is_none()
    }

    /// Amount this task adds to the invoice in its current state.
    pub fn billed_amount(&self) -> Decimal {
        match self.price {
            Some(price) if self.completed => price,
            _ => Decimal::ZERO,
        }
    }

    pub fn photo(&self, slot: PhotoSlot) -> Option<&PhotoRef> {
        match slot {
            PhotoSlot::Before => self.before_photo.as_ref(),
            PhotoSlot::After => self.after_photo.as_ref(),
        }
    }

    pub(crate) fn set_photo(&mut self, slot: PhotoSlot, photo: PhotoRef) {
        match slot {
            PhotoSlot::Before => self.before_photo = Some(photo),
            PhotoSlot::After => self.after_photo = Some(photo),
        }
    }
}
