//! Focus state

/// Focused area of the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Token,
    AdminChatId,
    List,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Self::Token => Self::AdminChatId,
            Self::AdminChatId => Self::List,
            Self::List => Self::Token,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Token => Self::List,
            Self::AdminChatId => Self::Token,
            Self::List => Self::AdminChatId,
        }
    }

    /// Whether typed characters go to a text field
    pub fn is_text(self) -> bool {
        !matches!(self, Self::List)
    }
}

/// Focused field of the add window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AddField {
    #[default]
    Id,
    Name,
}

impl AddField {
    pub fn toggle(self) -> Self {
        match self {
            Self::Id => Self::Name,
            Self::Name => Self::Id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_cycles_both_ways() {
        let mut focus = Focus::default();
        for _ in 0..3 {
            focus = focus.next();
        }
        assert_eq!(focus, Focus::Token);
        assert_eq!(Focus::Token.prev(), Focus::List);
        assert!(!Focus::List.is_text());
    }
}
