use serde::{Deserialize, Serialize};

/// System-wide totals shown on the super-admin overview.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateStats {
    pub total_users: u64,
    pub total_admins: u64,
    pub total_santri: u64,
    /// Rupiah, whole units.
    pub total_donasi: u64,
}

/// Totals shown on the admin overview.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminOverview {
    pub total_santri: u64,
    pub total_users: u64,
    pub total_donasi: u64,
}

/// Body of the `GET /api/*/total` endpoints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TotalResponse {
    #[serde(default)]
    pub total: Option<f64>,
}

impl TotalResponse {
    /// Total as a non-negative whole number; missing, negative or
    /// non-finite values read as zero.
    pub fn count(&self) -> u64 {
        match self.total {
            Some(t) if t.is_finite() && t > 0.0 => t.round() as u64,
            _ => 0,
        }
    }
}

/// Format a rupiah amount with Indonesian thousands separators, e.g. `Rp 1.500.000`.
pub fn format_rupiah(amount: u64) -> String {
    format!("Rp {}", group_thousands(amount))
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}
