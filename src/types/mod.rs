//! Domain-based type organization
//!
//! Types are organized by domain to match the structure in `update/`:
//! - setup: wizard steps, operating mode, accumulated configuration
//! - wifi: scan results and credentials
//! - mqtt: broker settings
//! - cloud: MyPVLog.net sign-in, OAuth and provisioning types
//! - common: shared wire types

pub mod cloud;
pub mod common;
pub mod mqtt;
pub mod setup;
pub mod wifi;

pub use cloud::*;
pub use common::*;
pub use mqtt::*;
pub use setup::*;
pub use wifi::*;
