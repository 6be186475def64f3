//! Service layer - business logic orchestration
//!
//! Services coordinate domain logic and port interactions. Each service
//! focuses on a specific use case or feature area.

mod contact;
mod dashboard;
mod exchange;
mod kyc;
pub mod logging;
mod notifier;
mod session;
mod view;

pub use contact::{ContactData, ContactService};
pub use dashboard::{Activity, ActivityKind, ActivityStatus, DashboardService};
pub use exchange::{ExchangeService, Quote, CURRENCIES};
pub use kyc::{KycService, REQUIRED_DOCUMENTS};
pub use logging::{EntryPoint, LogEntry, LogEvent, LoggingService};
pub use notifier::{NotifierService, TickerKind, TickerNotice};
pub use session::SessionService;
pub use view::{ViewService, ViewState};
