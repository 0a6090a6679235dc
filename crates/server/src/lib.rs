pub mod config;
pub mod db;
pub mod models;
pub mod routes;
pub mod store;

use store::AnyMessageStore;

pub struct AppState {
    pub store: AnyMessageStore,
}
