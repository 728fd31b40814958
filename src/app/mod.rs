pub mod components;
pub mod layouts;
pub mod pages;

// Re-export the Spotlight App
pub use pages::routes::App;
