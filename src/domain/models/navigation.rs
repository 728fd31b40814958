/// Icon shown next to a destination label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIcon {
    FileText,
    User,
    Briefcase,
    GraduationCap,
    Palette,
    None,
}

impl NavIcon {
    pub fn glyph(&self) -> &'static str {
        match self {
            NavIcon::FileText => "📄",
            NavIcon::User => "👤",
            NavIcon::Briefcase => "💼",
            NavIcon::GraduationCap => "🎓",
            NavIcon::Palette => "🎨",
            NavIcon::None => "",
        }
    }
}

/// A named, path-addressable navigation target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationDestination {
    pub icon: NavIcon,
    pub label: &'static str,
    pub path: &'static str,
}

impl NavigationDestination {
    pub const fn new(icon: NavIcon, label: &'static str, path: &'static str) -> Self {
        Self { icon, label, path }
    }
}

pub const DASHBOARD_DESTINATIONS: &[NavigationDestination] = &[
    NavigationDestination::new(NavIcon::FileText, "Overview", "/dashboard"),
    NavigationDestination::new(NavIcon::User, "Profile", "/dashboard/profile"),
    NavigationDestination::new(NavIcon::Briefcase, "Projects", "/dashboard/projects"),
    NavigationDestination::new(NavIcon::GraduationCap, "Education", "/dashboard/education"),
    NavigationDestination::new(NavIcon::Briefcase, "Experience", "/dashboard/experience"),
    NavigationDestination::new(NavIcon::Palette, "Templates", "/dashboard/templates"),
];

pub const MARKETING_DESTINATIONS: &[NavigationDestination] = &[
    NavigationDestination::new(NavIcon::None, "Features", "/features"),
    NavigationDestination::new(NavIcon::None, "Examples", "/examples"),
    NavigationDestination::new(NavIcon::None, "Pricing", "/pricing"),
];
