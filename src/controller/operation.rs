/// A user-triggered form action (one per button).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Create,
    Update,
    Like,
    Disable,
    Retrieve,
    Delete,
    Clear,
    Search,
}

impl Operation {
    /// All operations, in the order their buttons are laid out.
    pub const ALL: [Operation; 8] = [
        Operation::Create,
        Operation::Update,
        Operation::Like,
        Operation::Disable,
        Operation::Retrieve,
        Operation::Delete,
        Operation::Clear,
        Operation::Search,
    ];

    /// Button label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Create => "Create",
            Self::Update => "Update",
            Self::Like => "Like",
            Self::Disable => "Disable",
            Self::Retrieve => "Retrieve",
            Self::Delete => "Delete",
            Self::Clear => "Clear",
            Self::Search => "Search",
        }
    }

    /// Identifier of the button that triggers this operation.
    pub fn button_id(self) -> &'static str {
        match self {
            Self::Create => "create-btn",
            Self::Update => "update-btn",
            Self::Like => "like-btn",
            Self::Disable => "disable-btn",
            Self::Retrieve => "retrieve-btn",
            Self::Delete => "delete-btn",
            Self::Clear => "clear-btn",
            Self::Search => "search-btn",
        }
    }

    /// Key that, pressed with Alt, triggers this operation.
    pub fn shortcut(self) -> char {
        match self {
            Self::Create => 'c',
            Self::Update => 'u',
            Self::Like => 'l',
            Self::Disable => 'd',
            Self::Retrieve => 'r',
            Self::Delete => 'x',
            Self::Clear => 'n',
            Self::Search => 's',
        }
    }

    /// Looks up the operation bound to `Alt+ch`.
    pub fn from_shortcut(ch: char) -> Option<Operation> {
        Self::ALL.into_iter().find(|op| op.shortcut() == ch)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn shortcuts_are_unique() {
        let keys: HashSet<char> = Operation::ALL.iter().map(|op| op.shortcut()).collect();
        assert_eq!(keys.len(), Operation::ALL.len());
    }

    #[test]
    fn shortcut_round_trips() {
        for op in Operation::ALL {
            assert_eq!(Operation::from_shortcut(op.shortcut()), Some(op));
        }
        assert_eq!(Operation::from_shortcut('z'), None);
    }

    #[test]
    fn button_ids_end_with_btn() {
        for op in Operation::ALL {
            assert!(op.button_id().ends_with("-btn"), "{op:?}");
        }
    }
}
