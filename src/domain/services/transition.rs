//! Transition descriptors
//!
//! Abstract animation contracts handed to the rendering layer: which state
//! triggers the transition, a coarse duration class, and the stagger ordering
//! for child items. Easing curves and spring parameters live in CSS.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionTrigger {
    Open,
    Closed,
    Visible,
    Hidden,
}

impl TransitionTrigger {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransitionTrigger::Open => "open",
            TransitionTrigger::Closed => "closed",
            TransitionTrigger::Visible => "visible",
            TransitionTrigger::Hidden => "hidden",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DurationClass {
    Quick,
    Standard,
    Slow,
}

impl DurationClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            DurationClass::Quick => "quick",
            DurationClass::Standard => "standard",
            DurationClass::Slow => "slow",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StaggerOrder {
    Forward,
    Reverse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stagger {
    pub step_ms: u32,
    pub delay_children_ms: u32,
    pub order: StaggerOrder,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionDescriptor {
    pub trigger: TransitionTrigger,
    pub duration: DurationClass,
    pub stagger: Option<Stagger>,
}

impl TransitionDescriptor {
    pub const SIDEBAR_OPEN: TransitionDescriptor = TransitionDescriptor {
        trigger: TransitionTrigger::Open,
        duration: DurationClass::Standard,
        stagger: Some(Stagger {
            step_ms: 50,
            delay_children_ms: 100,
            order: StaggerOrder::Forward,
        }),
    };

    pub const SIDEBAR_CLOSED: TransitionDescriptor = TransitionDescriptor {
        trigger: TransitionTrigger::Closed,
        duration: DurationClass::Standard,
        stagger: Some(Stagger {
            step_ms: 50,
            delay_children_ms: 0,
            order: StaggerOrder::Reverse,
        }),
    };

    pub const HEADER_FADE_IN: TransitionDescriptor = TransitionDescriptor {
        trigger: TransitionTrigger::Visible,
        duration: DurationClass::Standard,
        stagger: None,
    };

    pub const MOBILE_MENU_VISIBLE: TransitionDescriptor = TransitionDescriptor {
        trigger: TransitionTrigger::Visible,
        duration: DurationClass::Quick,
        stagger: Some(Stagger {
            step_ms: 50,
            delay_children_ms: 0,
            order: StaggerOrder::Forward,
        }),
    };

    pub const MOBILE_MENU_HIDDEN: TransitionDescriptor = TransitionDescriptor {
        trigger: TransitionTrigger::Hidden,
        duration: DurationClass::Quick,
        stagger: None,
    };

    /// Per-route content swap in the dashboard main area
    pub const ROUTE_CONTENT: TransitionDescriptor = TransitionDescriptor {
        trigger: TransitionTrigger::Visible,
        duration: DurationClass::Quick,
        stagger: None,
    };

    pub fn sidebar(open: bool) -> Self {
        if open {
            Self::SIDEBAR_OPEN
        } else {
            Self::SIDEBAR_CLOSED
        }
    }

    pub fn mobile_menu(open: bool) -> Self {
        if open {
            Self::MOBILE_MENU_VISIBLE
        } else {
            Self::MOBILE_MENU_HIDDEN
        }
    }

    /// Delay before child `index` (of `count`) starts animating
    pub fn child_delay_ms(&self, index: usize, count: usize) -> u32 {
        let Some(stagger) = self.stagger else {
            return 0;
        };
        if index >= count {
            return 0;
        }
        let position = match stagger.order {
            StaggerOrder::Forward => index,
            StaggerOrder::Reverse => count - 1 - index,
        };
        stagger.delay_children_ms + stagger.step_ms * position as u32
    }

    /// CSS modifier classes, e.g. `is-open c-transition--standard`
    pub fn css_class(&self) -> String {
        format!("is-{} c-transition--{}", self.trigger.as_str(), self.duration.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_sidebar_staggers_forward_after_initial_delay() {
        let open = TransitionDescriptor::sidebar(true);
        let delays: Vec<u32> = (0..6).map(|i| open.child_delay_ms(i, 6)).collect();
        assert_eq!(delays, vec![100, 150, 200, 250, 300, 350]);
    }

    #[test]
    fn test_closed_sidebar_staggers_in_reverse() {
        let closed = TransitionDescriptor::sidebar(false);
        let delays: Vec<u32> = (0..3).map(|i| closed.child_delay_ms(i, 3)).collect();
        assert_eq!(delays, vec![100, 50, 0]);
    }

    #[test]
    fn test_no_stagger_means_no_delay() {
        assert_eq!(TransitionDescriptor::HEADER_FADE_IN.child_delay_ms(4, 5), 0);
        assert_eq!(TransitionDescriptor::SIDEBAR_OPEN.child_delay_ms(9, 3), 0);
    }

    #[test]
    fn test_css_class() {
        assert_eq!(TransitionDescriptor::SIDEBAR_OPEN.css_class(), "is-open c-transition--standard");
        assert_eq!(TransitionDescriptor::mobile_menu(false).css_class(), "is-hidden c-transition--quick");
    }
}
