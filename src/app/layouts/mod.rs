pub mod dashboard_layout;
pub mod site_header;

pub use dashboard_layout::DashboardLayout;
pub use site_header::{MarketingLayout, SiteHeader};
