// Button adapter - hit testing for the footer's prev/next buttons

use crate::controller::{NavControls, Navigator};
use ratatui::layout::Rect;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavButton {
    Previous,
    Next,
}

/// Screen areas of the nav buttons from the last draw
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonBar {
    pub prev: Option<Rect>,
    pub next: Option<Rect>,
}

impl ButtonBar {
    /// Button under a screen position, if any
    pub fn hit(&self, column: u16, row: u16) -> Option<NavButton> {
        let inside = |r: &Rect| {
            column >= r.x && column < r.x + r.width && row >= r.y && row < r.y + r.height
        };
        if self.prev.as_ref().is_some_and(inside) {
            Some(NavButton::Previous)
        } else if self.next.as_ref().is_some_and(inside) {
            Some(NavButton::Next)
        } else {
            None
        }
    }

    /// Handle a click; disabled buttons swallow the click
    pub fn click(
        &self,
        column: u16,
        row: u16,
        controls: &NavControls,
        nav: &mut impl Navigator,
    ) -> Option<NavButton> {
        let button = self.hit(column, row)?;
        match button {
            NavButton::Previous if !controls.prev_disabled => {
                nav.previous();
            }
            NavButton::Next if !controls.next_disabled => {
                nav.next();
            }
            _ => return None,
        }
        Some(button)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::testing::RecordingNavigator;

    fn bar() -> ButtonBar {
        ButtonBar {
            prev: Some(Rect::new(0, 20, 10, 1)),
            next: Some(Rect::new(70, 20, 10, 1)),
        }
    }

    #[test]
    fn clicks_hit_buttons() {
        let mut nav = RecordingNavigator::new(2, 3);
        let controls = NavControls {
            prev_disabled: false,
            next_disabled: false,
            ..Default::default()
        };
        assert_eq!(bar().click(3, 20, &controls, &mut nav), Some(NavButton::Previous));
        assert_eq!(bar().click(79, 20, &controls, &mut nav), Some(NavButton::Next));
        assert_eq!(bar().click(40, 20, &controls, &mut nav), None);
        assert_eq!(bar().click(3, 19, &controls, &mut nav), None);
        assert_eq!(nav.calls, vec!["previous", "next"]);
    }

    #[test]
    fn disabled_button_does_nothing() {
        let mut nav = RecordingNavigator::new(1, 3);
        let controls = NavControls::default();
        assert!(controls.prev_disabled);
        assert_eq!(bar().click(3, 20, &controls, &mut nav), None);
        assert!(nav.calls.is_empty());
    }
}
