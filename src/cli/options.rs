// src/cli/options.rs

/// The logical options the command line understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionId {
    Depots,
    Salesmen,
    Verbose,
    Help,
}

impl OptionId {
    /// Whether the option consumes the following token as its value.
    pub fn takes_value(self) -> bool {
        match self {
            OptionId::Depots | OptionId::Salesmen => true,
            OptionId::Verbose | OptionId::Help => false,
        }
    }
}

#[derive(Debug)]
pub struct OptionSpec {
    pub id: OptionId,
    pub short: char,
    /// Long spellings without the leading `--`. All of them are synonyms.
    pub long: &'static [&'static str],
    pub description: &'static str,
    /// Rendered in help output only. Typed defaults live on `Configuration`.
    pub default: Option<&'static str>,
}

pub static OPTIONS: &[OptionSpec] = &[
    OptionSpec {
        id: OptionId::Depots,
        short: 'd',
        long: &["depots"],
        description: "number of depots",
        default: Some("5"),
    },
    OptionSpec {
        id: OptionId::Salesmen,
        short: 's',
        long: &["salesmen", "vehicles"],
        description: "number of salesmen per depot",
        default: Some("2"),
    },
    OptionSpec {
        id: OptionId::Verbose,
        short: 'v',
        long: &["verbose"],
        description: "use city names when displaying/printing",
        default: None,
    },
    OptionSpec {
        id: OptionId::Help,
        short: 'h',
        long: &["help"],
        description: "display help",
        default: None,
    },
];

/// Resolves a single token against the table. Returns `None` for anything
/// that is not a declared spelling.
pub fn lookup(token: &str) -> Option<&'static OptionSpec> {
    if let Some(name) = token.strip_prefix("--") {
        return OPTIONS.iter().find(|spec| spec.long.contains(&name));
    }

    let rest = token.strip_prefix('-')?;
    let mut chars = rest.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => OPTIONS.iter().find(|spec| spec.short == c),
        _ => None,
    }
}

impl OptionSpec {
    /// Every spelling of this option, short form first.
    pub fn spellings(&self) -> Vec<String> {
        std::iter::once(format!("-{}", self.short))
            .chain(self.long.iter().map(|l| format!("--{l}")))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_and_long_resolve_to_same_option() {
        assert_eq!(lookup("-d").unwrap().id, OptionId::Depots);
        assert_eq!(lookup("--depots").unwrap().id, OptionId::Depots);
    }

    #[test]
    fn vehicles_is_alias_for_salesmen() {
        assert_eq!(lookup("--salesmen").unwrap().id, OptionId::Salesmen);
        assert_eq!(lookup("--vehicles").unwrap().id, OptionId::Salesmen);
        assert_eq!(lookup("-s").unwrap().id, OptionId::Salesmen);
    }

    #[test]
    fn undeclared_spellings_do_not_match() {
        assert!(lookup("-x").is_none());
        assert!(lookup("--bogus").is_none());
        assert!(lookup("-dv").is_none());
        assert!(lookup("--depots=3").is_none());
        assert!(lookup("--help=yes").is_none());
        assert!(lookup("depots").is_none());
        assert!(lookup("-").is_none());
        assert!(lookup("--").is_none());
    }

    #[test]
    fn only_counts_take_values() {
        assert!(OptionId::Depots.takes_value());
        assert!(OptionId::Salesmen.takes_value());
        assert!(!OptionId::Verbose.takes_value());
        assert!(!OptionId::Help.takes_value());
    }

    #[test]
    fn spellings_list_short_first() {
        let salesmen = OPTIONS
            .iter()
            .find(|spec| spec.id == OptionId::Salesmen)
            .unwrap();
        assert_eq!(salesmen.spellings(), ["-s", "--salesmen", "--vehicles"]);
    }
}
