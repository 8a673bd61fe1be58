pub use super::session::Model as Session;
pub use super::session::Status as SessionStatus;
