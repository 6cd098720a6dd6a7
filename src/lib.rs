pub mod app;
pub mod color;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod navigator;
pub mod pager;
pub mod rating;
pub mod state;
pub mod storage;
pub mod ui;

pub use app::router;
pub use config::Config;
pub use state::AppState;
pub use storage::SlateStore;
