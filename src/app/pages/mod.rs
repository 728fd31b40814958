pub mod dashboard;
pub mod marketing;
pub mod routes;

pub use routes::{App, Route};
