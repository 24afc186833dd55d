// SPDX-License-Identifier: Apache-2.0

//! The mock payment ledger view: search, status filter, summary figures, and
//! the CSV export (the browser-download analog writes to a path instead).

use super::contains_ci;
use elimu_api::PaymentDto;
use std::path::Path;

#[must_use]
pub fn filter<'a>(payments: &'a [PaymentDto], term: &str, status: &str) -> Vec<&'a PaymentDto> {
    payments
        .iter()
        .filter(|p| {
            let matches_term = term.is_empty()
                || contains_ci(&p.student_name, term)
                || contains_ci(&p.mpesa_code, term)
                || contains_ci(&p.course, term);
            let matches_status = status == "all" || p.status == status;
            matches_term && matches_status
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedgerSummary {
    pub confirmed_revenue_ksh: u64,
    pub confirmed_count: usize,
    pub pending_count: usize,
    pub failed_count: usize,
}

#[must_use]
pub fn summarize(payments: &[PaymentDto]) -> LedgerSummary {
    LedgerSummary {
        confirmed_revenue_ksh: payments
            .iter()
            .filter(|p| p.status == "confirmed")
            .map(|p| p.amount)
            .sum(),
        confirmed_count: payments.iter().filter(|p| p.status == "confirmed").count(),
        pending_count: payments.iter().filter(|p| p.status == "pending").count(),
        failed_count: payments.iter().filter(|p| p.status == "failed").count(),
    }
}

fn csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Comma-joined text blob, one header row plus one row per payment.
#[must_use]
pub fn to_csv(payments: &[PaymentDto]) -> String {
    let mut out = String::from("id,studentName,course,amount,mpesaCode,paymentDate,status,phoneNumber\n");
    for p in payments {
        out.push_str(&format!(
            "{},{},{},{},{},{},{},{}\n",
            p.id,
            csv_field(&p.student_name),
            csv_field(&p.course),
            p.amount,
            csv_field(&p.mpesa_code),
            csv_field(&p.payment_date),
            p.status,
            csv_field(&p.phone_number),
        ));
    }
    out
}

pub fn export_csv(payments: &[PaymentDto], path: &Path) -> std::io::Result<()> {
    std::fs::write(path, to_csv(payments))
}
