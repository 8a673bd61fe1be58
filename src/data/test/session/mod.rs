use crate::data::session::{SessionRepository, SessionStore};
use entity::session::Status;
use test_utils::factory;

mod delete_all;
mod display_name;
mod find_by_user_id;
mod snapshot;
mod update;
