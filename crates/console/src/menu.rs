/// Top-level menu actions.
///
/// Each option carries the code the user types and a display label, so the
/// rendered menu and the dispatch table share one source of truth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    RecordSale,
    TotalAndAverage,
    DepartmentTotals,
    Exit,
}

impl MenuOption {
    pub const ALL: [MenuOption; 4] = [
        MenuOption::RecordSale,
        MenuOption::TotalAndAverage,
        MenuOption::DepartmentTotals,
        MenuOption::Exit,
    ];

    pub fn code(self) -> &'static str {
        match self {
            MenuOption::RecordSale => "1",
            MenuOption::TotalAndAverage => "2",
            MenuOption::DepartmentTotals => "3",
            MenuOption::Exit => "4",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuOption::RecordSale => "Record a sale",
            MenuOption::TotalAndAverage => "Show total and average",
            MenuOption::DepartmentTotals => "Show department totals",
            MenuOption::Exit => "Exit",
        }
    }

    /// Resolve a typed code to its option; `None` for unknown input, leaving
    /// the caller to re-prompt.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|option| option.code() == code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_code_resolves_to_its_option() {
        for option in MenuOption::ALL {
            assert_eq!(MenuOption::from_code(option.code()), Some(option));
        }
    }

    #[test]
    fn unknown_codes_resolve_to_none() {
        assert_eq!(MenuOption::from_code("0"), None);
        assert_eq!(MenuOption::from_code("5"), None);
        assert_eq!(MenuOption::from_code(""), None);
        assert_eq!(MenuOption::from_code("exit"), None);
    }
}
