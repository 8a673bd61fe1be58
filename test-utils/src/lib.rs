//! Playtime Tracker Test Utils
//!
//! Provides shared testing utilities for the playtime tracker. The crate offers
//! factories for building session entities in any presence state, anchored on a
//! fixed reference instant so that tests never depend on the wall clock.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::factory::{self, session::SessionFactory};
//!
//! #[tokio::test]
//! async fn test_session_operations() {
//!     let start = factory::base_time();
//!
//!     let idle = factory::create_offline_session(1);
//!     let playing = SessionFactory::new()
//!         .user_id(2)
//!         .online_since(start)
//!         .online_total(120)
//!         .build();
//!
//!     // Insert into a store and exercise the services...
//! }
//! ```

pub mod factory;
