//! Virus-scan status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Virus-scan verdict for an uploaded document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "virus_scan_status", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum VirusScanStatus {
    /// Scan has not completed yet.
    Pending,
    /// No threat detected.
    Clean,
    /// A threat was detected; the upload is rejected.
    Infected,
}

impl VirusScanStatus {
    /// Return the status as its stored uppercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Clean => "CLEAN",
            Self::Infected => "INFECTED",
        }
    }
}

impl fmt::Display for VirusScanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for VirusScanStatus {
    type Err = crm_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "PENDING" => Ok(Self::Pending),
            "CLEAN" => Ok(Self::Clean),
            "INFECTED" => Ok(Self::Infected),
            _ => Err(crm_core::AppError::validation(format!(
                "Invalid virus scan status: '{s}'. Expected one of: PENDING, CLEAN, INFECTED"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        for status in [
            VirusScanStatus::Pending,
            VirusScanStatus::Clean,
            VirusScanStatus::Infected,
        ] {
            assert_eq!(status.as_str().parse::<VirusScanStatus>().unwrap(), status);
        }
    }

    #[test]
    fn test_unknown_status_rejected() {
        assert!("QUARANTINED".parse::<VirusScanStatus>().is_err());
    }
}
