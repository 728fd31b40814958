// Domain models (shell entities)
// Pure Rust, no framework dependencies

pub mod navigation;
pub mod session;
pub mod shell;

pub use navigation::{NavIcon, NavigationDestination, DASHBOARD_DESTINATIONS, MARKETING_DESTINATIONS};
pub use session::{Identity, SessionSnapshot};
pub use shell::{RenderMode, ResizePolicy, ShellVisibilityState, ViewportClass};
