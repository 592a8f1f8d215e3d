use rust_decimal::Decimal;

/// VAT applied to the discounted subtotal (15%).
pub const TAX_RATE: Decimal = Decimal::from_parts(15, 0, 0, false, 2);

/// Upper bound for a discount, in percent.
pub const MAX_DISCOUNT_PERCENT: Decimal = Decimal::ONE_HUNDRED;

/// Decimal places kept on every computed invoice amount.
pub const MONEY_SCALE: u32 = 2;

/// Prefix of generated job identifiers (job card numbers).
pub const JOB_ID_PREFIX: &str = "JC";

/// Name of the exclusive decision group holding the detailing packages.
pub const DETAILING_PACKAGE_GROUP: &str = "detailing-package";
