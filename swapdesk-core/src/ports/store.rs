//! State store port - persisted key-value abstraction

use serde_json::Value;

use crate::domain::result::Result;

/// The well-known keys of the persisted blob. Everything the app ever
/// stores lives under one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreKey {
    /// The single current-session `UserRecord`, or absent
    CurrentUser,
    /// Ordered list of every account ever signed up
    Users,
    /// Ordered list of `KycSubmission`
    KycSubmissions,
    /// Contact-channel name to value mapping
    CompanyContactData,
}

impl StoreKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreKey::CurrentUser => "currentUser",
            StoreKey::Users => "users",
            StoreKey::KycSubmissions => "kycSubmissions",
            StoreKey::CompanyContactData => "companyContactData",
        }
    }
}

/// Persisted key-value store abstraction
///
/// Semantics are deliberately localStorage-like: JSON values, last write
/// wins, no transactions. There is a single logical writer (one UI or one
/// CLI invocation at a time), so implementations only need to keep
/// individual reads and writes atomic.
pub trait StateStore: Send + Sync {
    /// Read the value stored under `key`, if any
    fn read(&self, key: StoreKey) -> Result<Option<Value>>;

    /// Store `value` under `key`, replacing any previous value
    fn write(&self, key: StoreKey, value: Value) -> Result<()>;

    /// Delete the value under `key`; deleting an absent key is a no-op
    fn remove(&self, key: StoreKey) -> Result<()>;
}
