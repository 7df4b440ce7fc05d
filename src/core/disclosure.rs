//! Open/closed state of a single collapsible panel
//!
//! Every FAQ item owns its own `Disclosure`. Toggling one never touches
//! another, so several answers can be open at once.

use derive_more::Display;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Display)]
pub enum Disclosure {
    #[default]
    #[display("closed")]
    Closed,
    #[display("open")]
    Open,
}

impl Disclosure {
    pub fn is_open(&self) -> bool {
        matches!(self, Disclosure::Open)
    }

    pub fn toggled(self) -> Self {
        match self {
            Disclosure::Closed => Disclosure::Open,
            Disclosure::Open => Disclosure::Closed,
        }
    }

    pub fn toggle(&mut self) {
        *self = self.toggled();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_closed() {
        assert_eq!(Disclosure::default(), Disclosure::Closed);
        assert!(!Disclosure::default().is_open());
    }

    #[test]
    fn test_two_toggles_return_to_closed() {
        let mut state = Disclosure::default();
        state.toggle();
        assert!(state.is_open());
        state.toggle();
        assert_eq!(state, Disclosure::Closed);
    }

    #[test]
    fn test_toggling_one_item_leaves_others() {
        let mut items = [Disclosure::default(); 4];
        items[0].toggle();
        assert!(items[0].is_open());
        assert!(items[1..].iter().all(|d| !d.is_open()));

        items[2].toggle();
        assert!(items[0].is_open(), "opening another item must not close the first");
        assert!(items[2].is_open());

        items[0].toggle();
        assert!(!items[0].is_open());
        assert!(items[2].is_open());
        assert!(!items[1].is_open() && !items[3].is_open());
    }

    #[test]
    fn test_display_for_data_attribute() {
        assert_eq!(Disclosure::Closed.to_string(), "closed");
        assert_eq!(Disclosure::Open.to_string(), "open");
    }
}
