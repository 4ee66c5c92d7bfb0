/// Mobile navigation drawer. The only transition is [`MenuState::toggled`];
/// following a link or resizing the window leaves the drawer as it is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn toggled(self) -> Self {
        match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        }
    }

    pub fn is_open(self) -> bool {
        matches!(self, MenuState::Open)
    }

    pub fn toggle_label(self) -> &'static str {
        match self {
            MenuState::Closed => "Open navigation menu",
            MenuState::Open => "Close navigation menu",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        assert_eq!(MenuState::default(), MenuState::Closed);
        assert!(!MenuState::default().is_open());
    }

    #[test]
    fn single_toggle_opens() {
        assert_eq!(MenuState::Closed.toggled(), MenuState::Open);
        assert!(MenuState::Closed.toggled().is_open());
    }

    #[test]
    fn double_toggle_returns_to_closed() {
        assert_eq!(MenuState::Closed.toggled().toggled(), MenuState::Closed);
        assert_eq!(MenuState::Open.toggled().toggled(), MenuState::Open);
    }
}
