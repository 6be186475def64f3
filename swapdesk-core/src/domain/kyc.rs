//! KYC domain model
//!
//! Submission intake only: records are appended with status `Pending` and
//! nothing in this core ever transitions them out of it. Review happens
//! elsewhere (or, in the demo, never).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::result::{Error, Result};

/// Per-document size ceiling: 1 MiB.
pub const MAX_DOCUMENT_BYTES: u64 = 1_048_576;

/// Accepted document content types. Checked client-side only.
pub const ALLOWED_DOCUMENT_TYPES: [&str; 4] = [
    "image/png",
    "image/jpg",
    "image/jpeg",
    "application/pdf",
];

/// Review status. Variant names match the persisted strings
/// ("Pending", "Approved", "Cancelled").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KycStatus {
    Pending,
    Approved,
    Cancelled,
}

/// One verification request in the `kycSubmissions` list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KycSubmission {
    pub id: i64,
    /// 1-based sequence number at append time
    pub number: u64,
    pub name: String,
    pub email: String,
    pub status: KycStatus,
    pub document_type: String,
    pub submission_date: NaiveDate,
    /// Creation time, epoch milliseconds; listings sort on this, newest first
    pub timestamp: i64,
}

/// An uploaded document as seen by the client-side checks: only the
/// metadata matters here, the bytes never leave the machine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KycDocument {
    pub file_name: String,
    pub content_type: String,
    pub size_bytes: u64,
}

impl KycDocument {
    /// Client-side type and size check for a single document.
    pub fn validate(&self) -> Result<()> {
        if !ALLOWED_DOCUMENT_TYPES.contains(&self.content_type.as_str()) {
            return Err(Error::validation(
                "Only PNG, JPG, JPEG, and PDF files are allowed",
            ));
        }
        if self.size_bytes > MAX_DOCUMENT_BYTES {
            return Err(Error::validation(
                "Each file must be less than 1MB in size",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(content_type: &str, size_bytes: u64) -> KycDocument {
        KycDocument {
            file_name: "scan.png".to_string(),
            content_type: content_type.to_string(),
            size_bytes,
        }
    }

    #[test]
    fn test_allowed_types_pass() {
        for content_type in ALLOWED_DOCUMENT_TYPES {
            assert!(doc(content_type, 1024).validate().is_ok());
        }
    }

    #[test]
    fn test_disallowed_type_rejected() {
        assert!(doc("image/gif", 1024).validate().is_err());
        assert!(doc("application/octet-stream", 1024).validate().is_err());
    }

    #[test]
    fn test_size_ceiling() {
        assert!(doc("image/png", MAX_DOCUMENT_BYTES).validate().is_ok());
        assert!(doc("image/png", MAX_DOCUMENT_BYTES + 1).validate().is_err());
    }

    #[test]
    fn test_status_serializes_capitalized() {
        let json = serde_json::to_value(KycStatus::Pending).unwrap();
        assert_eq!(json, "Pending");
    }
}
