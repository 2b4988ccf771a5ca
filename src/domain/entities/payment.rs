//! Payment methods offered after a contact request.
//!
//! Selection has no backing logic; the methods are only listed back to the
//! visitor once their contact details have been received.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    CreditCard,
    Upi,
    NetBanking,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 3] = [Self::CreditCard, Self::Upi, Self::NetBanking];

    pub fn label(&self) -> &'static str {
        match self {
            Self::CreditCard => "Credit Card",
            Self::Upi => "UPI",
            Self::NetBanking => "Net Banking",
        }
    }
}
