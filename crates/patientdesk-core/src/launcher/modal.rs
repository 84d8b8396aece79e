use std::fmt;

/// Which modal the landing page shows.
///
/// Only one modal can be open at a time. `Update` and `Remove` are accepted
/// as states but have no form bound to them, so nothing renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ActiveModal {
    #[default]
    None,
    Add,
    Search,
    Update,
    Remove,
}

impl ActiveModal {
    /// Modals offered as launcher tiles, in display order.
    pub const TILES: [ActiveModal; 4] = [
        ActiveModal::Add,
        ActiveModal::Search,
        ActiveModal::Update,
        ActiveModal::Remove,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ActiveModal::None => "None",
            ActiveModal::Add => "Add",
            ActiveModal::Search => "Search",
            ActiveModal::Update => "Update",
            ActiveModal::Remove => "Remove",
        }
    }

    /// True if a form is bound to this modal.
    pub fn has_form(self) -> bool {
        matches!(self, ActiveModal::Add | ActiveModal::Search)
    }
}

impl fmt::Display for ActiveModal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_none() {
        assert_eq!(ActiveModal::default(), ActiveModal::None);
    }

    #[test]
    fn test_only_add_and_search_have_forms() {
        assert!(ActiveModal::Add.has_form());
        assert!(ActiveModal::Search.has_form());
        assert!(!ActiveModal::Update.has_form());
        assert!(!ActiveModal::Remove.has_form());
        assert!(!ActiveModal::None.has_form());
    }

    #[test]
    fn test_tile_order() {
        let labels: Vec<_> = ActiveModal::TILES.iter().map(|m| m.label()).collect();
        assert_eq!(labels, ["Add", "Search", "Update", "Remove"]);
    }
}
