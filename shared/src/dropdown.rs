//! Click-driven state machine for the desktop auth dropdown.

use crate::classes::ClassEdit;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DropdownState {
    #[default]
    Closed,
    Open,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropdownEvent {
    TriggerClicked,
    /// A document click whose target is outside the dropdown wrapper.
    OutsideClicked,
    EscapePressed,
}

impl DropdownEvent {
    pub fn from_key(key: &str) -> Option<Self> {
        (key == "Escape").then_some(DropdownEvent::EscapePressed)
    }
}

/// What the view has to do after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropdownEffect {
    Show,
    Hide,
}

impl DropdownState {
    pub fn handle(self, event: DropdownEvent) -> (Self, Option<DropdownEffect>) {
        use DropdownEvent::*;
        use DropdownState::*;

        match (self, event) {
            (Closed, TriggerClicked) => (Open, Some(DropdownEffect::Show)),
            (Open, TriggerClicked | OutsideClicked | EscapePressed) => {
                (Closed, Some(DropdownEffect::Hide))
            }
            (Closed, OutsideClicked | EscapePressed) => (Closed, None),
        }
    }
}

/// Inline style the panel gets in each state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelStyle {
    pub opacity: &'static str,
    pub visibility: &'static str,
    pub transform: &'static str,
    pub pointer_events: &'static str,
}

impl PanelStyle {
    pub const OPEN: PanelStyle = PanelStyle {
        opacity: "1",
        visibility: "visible",
        transform: "translateY(0)",
        pointer_events: "auto",
    };

    pub const CLOSED: PanelStyle = PanelStyle {
        opacity: "0",
        visibility: "hidden",
        transform: "translateY(8px)",
        pointer_events: "none",
    };

    pub const TRANSITION: &'static str =
        "opacity 0.2s ease, visibility 0.2s ease, transform 0.2s ease";

    /// Tailwind class on the wrapper that drives the CSS hover fallback.
    pub const HOVER_CLASS: &'static str = "group";

    /// Trigger styling while the panel is open. Closing applies the inverse.
    pub const TRIGGER_ACTIVE: ClassEdit =
        ClassEdit::new(&["text-gray-400"], &["text-white", "bg-white/10"]);

    pub fn for_state(state: DropdownState) -> Self {
        match state {
            DropdownState::Open => Self::OPEN,
            DropdownState::Closed => Self::CLOSED,
        }
    }

    pub fn trigger_edit(state: DropdownState) -> ClassEdit {
        match state {
            DropdownState::Open => Self::TRIGGER_ACTIVE,
            DropdownState::Closed => Self::TRIGGER_ACTIVE.inverse(),
        }
    }

    /// CSS property/value pairs, in the order they are written.
    pub fn properties(&self) -> [(&'static str, &'static str); 4] {
        [
            ("opacity", self.opacity),
            ("visibility", self.visibility),
            ("transform", self.transform),
            ("pointer-events", self.pointer_events),
        ]
    }
}
