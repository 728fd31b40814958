// Shell view-state services
// Framework-agnostic, 100% testable

pub mod account;
pub mod auth_gate;
pub mod nav_shell;
pub mod route_highlighter;
pub mod sign_out;
pub mod traits;
pub mod transition;
pub mod viewport;
pub mod visibility;

pub use account::{account_view, AccountAction, AccountView};
pub use auth_gate::{decide, AuthGate, GateOutcome};
pub use nav_shell::{DashboardFrame, DashboardShell, HeaderFrame, HeaderShell, NavItemView};
pub use route_highlighter::{active_destination, is_active};
pub use sign_out::SignOutFlow;
pub use traits::{AuthProvider, Navigate, Notifier};
pub use transition::{DurationClass, Stagger, StaggerOrder, TransitionDescriptor, TransitionTrigger};
pub use viewport::{classify, SubscriptionId, ViewportClassifier};
pub use visibility::ShellVisibilityController;
