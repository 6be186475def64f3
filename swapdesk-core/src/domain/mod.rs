//! Core domain entities
//!
//! Pure data structures with validation logic - no I/O or external
//! dependencies.

pub mod kyc;
pub mod nav;
pub mod result;
mod session;
mod user;

pub use kyc::{KycDocument, KycStatus, KycSubmission, ALLOWED_DOCUMENT_TYPES, MAX_DOCUMENT_BYTES};
pub use nav::{project_nav, NavProjection, Section};
pub use session::{SessionNotice, SessionState};
pub use user::{Role, UserRecord};
