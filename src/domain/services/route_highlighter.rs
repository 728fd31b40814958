use crate::domain::models::NavigationDestination;

/// Destination whose path equals `path` exactly (no prefix or trailing-slash
/// matching).
pub fn active_destination<'a>(
    path: &str,
    destinations: &'a [NavigationDestination],
) -> Option<&'a NavigationDestination> {
    destinations.iter().find(|destination| destination.path == path)
}

pub fn is_active(path: &str, destination: &NavigationDestination) -> bool {
    destination.path == path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{DASHBOARD_DESTINATIONS, MARKETING_DESTINATIONS};

    #[test]
    fn test_exact_match() {
        let active = active_destination("/dashboard/profile", DASHBOARD_DESTINATIONS).unwrap();
        assert_eq!(active.label, "Profile");

        let overview = active_destination("/dashboard", DASHBOARD_DESTINATIONS).unwrap();
        assert_eq!(overview.label, "Overview");

        let pricing = active_destination("/pricing", MARKETING_DESTINATIONS).unwrap();
        assert_eq!(pricing.label, "Pricing");
    }

    #[test]
    fn test_no_prefix_or_slash_normalization() {
        assert!(active_destination("/dashboard/profile/extra", DASHBOARD_DESTINATIONS).is_none());
        assert!(active_destination("/dashboard/", DASHBOARD_DESTINATIONS).is_none());
        assert!(active_destination("/Dashboard", DASHBOARD_DESTINATIONS).is_none());
        assert!(active_destination("", DASHBOARD_DESTINATIONS).is_none());
        assert!(active_destination("/features", DASHBOARD_DESTINATIONS).is_none());
    }

    #[test]
    fn test_at_most_one_active() {
        for destination in DASHBOARD_DESTINATIONS {
            let count = DASHBOARD_DESTINATIONS
                .iter()
                .filter(|d| is_active(destination.path, d))
                .count();
            assert_eq!(count, 1, "{}", destination.path);
        }
    }
}
