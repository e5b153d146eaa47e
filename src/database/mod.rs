pub mod db;

pub use db::{Database, connect_to_database, init_schema};
