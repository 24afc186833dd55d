// SPDX-License-Identifier: Apache-2.0

use crate::field::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum PaymentStatus {
    Confirmed,
    Pending,
    Failed,
}

impl PaymentStatus {
    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        match raw {
            "confirmed" => Ok(Self::Confirmed),
            "pending" => Ok(Self::Pending),
            "failed" => Ok(Self::Failed),
            _ => Err(ParseError::InvalidFormat(
                "status",
                "must be one of confirmed, pending, failed",
            )),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Confirmed => "confirmed",
            Self::Pending => "pending",
            Self::Failed => "failed",
        }
    }
}

impl Display for PaymentStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the mock M-Pesa ledger. Display-only: there is no gateway
/// behind this and the collection is seeded, never written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Payment {
    pub id: u64,
    pub student_name: String,
    pub course: String,
    pub amount_ksh: u64,
    pub mpesa_code: String,
    pub paid_on: String,
    pub status: PaymentStatus,
    pub phone: String,
}
