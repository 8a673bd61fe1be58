//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` struct for
//! customization and `create_*` convenience functions for common shapes.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let offline = factory::create_offline_session(1);
//! let online = factory::create_online_session(2, factory::base_time());
//! ```
//!
//! # Available Factories
//!
//! - `session` - Create presence session entities
//! - `helpers` - Unique ids and the fixed reference instant

pub mod helpers;
pub mod session;

pub use helpers::{base_time, next_id};
pub use session::{create_afk_session, create_offline_session, create_online_session};
