//! KYC service - verification intake over the persisted store
//!
//! Appends to the `kycSubmissions` list; nothing here ever moves a
//! record past `Pending`. One pending submission per email at a time.

use std::sync::Arc;

use chrono::Utc;

use crate::domain::kyc::{KycDocument, KycStatus, KycSubmission};
use crate::domain::result::{Error, Result};
use crate::domain::UserRecord;
use crate::ports::{StateStore, StoreKey};

/// Number of documents a complete submission carries: document front,
/// document back, selfie.
pub const REQUIRED_DOCUMENTS: usize = 3;

pub struct KycService {
    store: Arc<dyn StateStore>,
}

impl KycService {
    pub fn new(store: Arc<dyn StateStore>) -> Self {
        Self { store }
    }

    /// All submissions, newest first. Absent or malformed data reads as
    /// an empty list.
    pub fn submissions(&self) -> Result<Vec<KycSubmission>> {
        let mut submissions: Vec<KycSubmission> = match self.store.read(StoreKey::KycSubmissions)? {
            Some(value) => serde_json::from_value(value).unwrap_or_default(),
            None => Vec::new(),
        };
        submissions.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(submissions)
    }

    /// Whether the given email already has a submission awaiting review.
    pub fn has_pending(&self, email: &str) -> Result<bool> {
        Ok(self
            .submissions()?
            .iter()
            .any(|s| s.email == email && s.status == KycStatus::Pending))
    }

    /// Record a new verification request for the given user.
    ///
    /// Validates the document type, the document count and each
    /// document's metadata, then appends a `Pending` record stamped with
    /// the current time.
    pub fn submit(
        &self,
        user: &UserRecord,
        document_type: &str,
        documents: &[KycDocument],
    ) -> Result<KycSubmission> {
        if document_type.is_empty() {
            return Err(Error::validation("Please select a document type"));
        }
        if documents.len() != REQUIRED_DOCUMENTS {
            return Err(Error::validation("Please upload all required documents"));
        }
        for document in documents {
            document.validate()?;
        }
        if self.has_pending(&user.email)? {
            return Err(Error::validation(
                "You already have a pending KYC verification. Please wait for it to be processed.",
            ));
        }

        let mut submissions: Vec<KycSubmission> = match self.store.read(StoreKey::KycSubmissions)? {
            Some(value) => serde_json::from_value(value).unwrap_or_default(),
            None => Vec::new(),
        };

        let now = Utc::now();
        let submission = KycSubmission {
            id: now.timestamp_millis(),
            number: submissions.len() as u64 + 1,
            name: user.name.clone(),
            email: user.email.clone(),
            status: KycStatus::Pending,
            document_type: document_type.to_string(),
            submission_date: now.date_naive(),
            timestamp: now.timestamp_millis(),
        };

        submissions.push(submission.clone());
        self.store
            .write(StoreKey::KycSubmissions, serde_json::to_value(&submissions)?)?;
        Ok(submission)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::MemoryStore;
    use crate::domain::Role;

    fn user(email: &str) -> UserRecord {
        UserRecord {
            id: 1,
            email: email.to_string(),
            password: "pw".to_string(),
            name: "Test User".to_string(),
            role: Role::User,
            avatar: 'T',
            expires_at: 0,
        }
    }

    fn documents() -> Vec<KycDocument> {
        vec![
            KycDocument {
                file_name: "front.png".to_string(),
                content_type: "image/png".to_string(),
                size_bytes: 2048,
            },
            KycDocument {
                file_name: "back.jpg".to_string(),
                content_type: "image/jpeg".to_string(),
                size_bytes: 2048,
            },
            KycDocument {
                file_name: "selfie.pdf".to_string(),
                content_type: "application/pdf".to_string(),
                size_bytes: 4096,
            },
        ]
    }

    fn service() -> KycService {
        KycService::new(Arc::new(MemoryStore::new()))
    }

    #[test]
    fn test_submit_appends_pending_record() {
        let svc = service();
        let submission = svc.submit(&user("a@x.com"), "passport", &documents()).unwrap();
        assert_eq!(submission.status, KycStatus::Pending);
        assert_eq!(submission.number, 1);
        assert_eq!(submission.email, "a@x.com");
        assert_eq!(svc.submissions().unwrap().len(), 1);
    }

    #[test]
    fn test_missing_document_type_rejected() {
        let svc = service();
        let err = svc.submit(&user("a@x.com"), "", &documents()).unwrap_err();
        assert_eq!(err.to_string(), "Please select a document type");
    }

    #[test]
    fn test_incomplete_document_set_rejected() {
        let svc = service();
        let docs = documents()[..2].to_vec();
        let err = svc.submit(&user("a@x.com"), "passport", &docs).unwrap_err();
        assert_eq!(err.to_string(), "Please upload all required documents");
    }

    #[test]
    fn test_invalid_document_rejected() {
        let svc = service();
        let mut docs = documents();
        docs[1].content_type = "image/gif".to_string();
        assert!(svc.submit(&user("a@x.com"), "passport", &docs).is_err());
        assert!(svc.submissions().unwrap().is_empty());
    }

    #[test]
    fn test_one_pending_submission_per_email() {
        let svc = service();
        svc.submit(&user("a@x.com"), "passport", &documents()).unwrap();

        let err = svc
            .submit(&user("a@x.com"), "license", &documents())
            .unwrap_err();
        assert!(err.to_string().contains("pending KYC verification"));

        // A different email is unaffected
        svc.submit(&user("b@x.com"), "passport", &documents()).unwrap();
        assert_eq!(svc.submissions().unwrap().len(), 2);
    }

    #[test]
    fn test_submissions_sorted_newest_first() {
        let store = Arc::new(MemoryStore::new());
        let svc = KycService::new(store.clone());

        let older = KycSubmission {
            id: 1,
            number: 1,
            name: "Old".to_string(),
            email: "old@x.com".to_string(),
            status: KycStatus::Approved,
            document_type: "passport".to_string(),
            submission_date: chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            timestamp: 1_000,
        };
        let newer = KycSubmission {
            timestamp: 2_000,
            id: 2,
            number: 2,
            name: "New".to_string(),
            email: "new@x.com".to_string(),
            ..older.clone()
        };
        store
            .write(
                StoreKey::KycSubmissions,
                serde_json::to_value(vec![&older, &newer]).unwrap(),
            )
            .unwrap();

        let listed = svc.submissions().unwrap();
        assert_eq!(listed[0].email, "new@x.com");
        assert_eq!(listed[1].email, "old@x.com");
    }

    #[test]
    fn test_malformed_list_reads_as_empty() {
        let store = Arc::new(MemoryStore::new());
        store
            .write(StoreKey::KycSubmissions, serde_json::json!({"nope": 1}))
            .unwrap();
        let svc = KycService::new(store);
        assert!(svc.submissions().unwrap().is_empty());
    }
}
