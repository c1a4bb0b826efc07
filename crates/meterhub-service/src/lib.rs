//! # meterhub-service
//!
//! Business logic services for MeterHub. The [`SessionEngine`] is the only
//! component that starts and stops sessions; [`ResourceService`] owns
//! resource CRUD, [`BillingGenerator`] derives settlement records, and the
//! query services expose read paths to the HTTP layer.

pub mod billing;
pub mod resource;
pub mod session;

pub use billing::generator::BillingGenerator;
pub use billing::service::BillingService;
pub use resource::service::ResourceService;
pub use session::engine::SessionEngine;
pub use session::service::SessionService;
