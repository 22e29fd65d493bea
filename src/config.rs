// src/config.rs

use serde::Serialize;
use std::num::NonZeroUsize;

pub const DEFAULT_DEPOTS: NonZeroUsize = match NonZeroUsize::new(5) {
    Some(n) => n,
    None => unreachable!(),
};

pub const DEFAULT_SALESMEN: NonZeroUsize = match NonZeroUsize::new(2) {
    Some(n) => n,
    None => unreachable!(),
};

/// Problem parameters handed to the routing engine.
///
/// Built once from the command line and never mutated afterwards.
/// Counts are `NonZeroUsize`, so a configuration with zero depots or
/// zero salesmen cannot exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Configuration {
    depots: NonZeroUsize,
    salesmen: NonZeroUsize,
    verbose: bool,
}

impl Configuration {
    pub fn new(depots: NonZeroUsize, salesmen: NonZeroUsize, verbose: bool) -> Self {
        Self {
            depots,
            salesmen,
            verbose,
        }
    }

    pub fn depots(&self) -> usize {
        self.depots.get()
    }

    /// Salesmen (vehicles) stationed at each depot.
    pub fn salesmen(&self) -> usize {
        self.salesmen.get()
    }

    /// Whether output should show city names instead of numeric ids.
    pub fn verbose(&self) -> bool {
        self.verbose
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            depots: DEFAULT_DEPOTS,
            salesmen: DEFAULT_SALESMEN,
            verbose: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nz(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn default_matches_documented_values() {
        let config = Configuration::default();
        assert_eq!(config.depots(), 5);
        assert_eq!(config.salesmen(), 2);
        assert!(!config.verbose());
    }

    #[test]
    fn serializes_as_flat_object() {
        let config = Configuration::new(nz(3), nz(7), true);
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, r#"{"depots":3,"salesmen":7,"verbose":true}"#);
    }
}
