pub mod format;
pub mod level;
pub mod models;
pub mod sink;
pub mod utils;
