//! Swapdesk Core - Business logic for the mock exchange desk
//!
//! This crate implements the core domain logic following hexagonal architecture:
//!
//! - **domain**: Core business entities (UserRecord, KycSubmission, etc.)
//! - **ports**: Trait definitions for external dependencies (StateStore)
//! - **services**: Business logic orchestration
//! - **adapters**: Concrete implementations (JSON file store, in-memory store)

pub mod domain;
pub mod ports;
pub mod services;
pub mod adapters;
pub mod config;

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;

use adapters::json_file::JsonFileStore;
use config::Config;
use services::*;

// Re-export commonly used types at crate root
pub use domain::{
    KycDocument, KycStatus, KycSubmission, NavProjection, Role, Section, SessionNotice,
    SessionState, UserRecord,
};
pub use domain::result::Error;
pub use ports::{StateStore, StoreKey};

/// Main context for Swapdesk operations
///
/// This is the primary entry point for all business logic. It holds
/// the persistent store, configuration, and all services.
pub struct SwapdeskContext {
    pub config: Config,
    pub store: Arc<JsonFileStore>,
    pub session_service: Arc<SessionService>,
    pub view_service: ViewService,
    pub kyc_service: KycService,
    pub contact_service: ContactService,
    pub exchange_service: ExchangeService,
    pub dashboard_service: DashboardService,
    pub notifier_service: NotifierService,
}

impl SwapdeskContext {
    /// Create a new Swapdesk context
    pub fn new(swapdesk_dir: &Path) -> Result<Self> {
        let config = Config::load(swapdesk_dir)?;

        let store = Arc::new(JsonFileStore::new(swapdesk_dir.join("store.json")));

        let session_service = Arc::new(SessionService::new(
            Arc::clone(&store) as Arc<dyn StateStore>,
            config.session_duration_ms,
        ));
        let view_service = ViewService::new(Arc::clone(&session_service));
        let kyc_service = KycService::new(Arc::clone(&store) as Arc<dyn StateStore>);
        let contact_service = ContactService::new(Arc::clone(&store) as Arc<dyn StateStore>);
        let exchange_service = ExchangeService::new(config.quote_countdown_secs);
        let dashboard_service = DashboardService::new();
        let notifier_service = NotifierService::new();

        Ok(Self {
            config,
            store,
            session_service,
            view_service,
            kyc_service,
            contact_service,
            exchange_service,
            dashboard_service,
            notifier_service,
        })
    }
}
