/// The header's mobile menu.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn toggle(&mut self) {
        *self = match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        };
    }

    pub fn close(&mut self) {
        *self = MenuState::Closed;
    }

    pub fn is_open(self) -> bool {
        matches!(self, MenuState::Open)
    }
}
