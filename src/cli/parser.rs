// src/cli/parser.rs

use crate::cli::error::ParseError;
use crate::cli::options::{self, OptionId};
use crate::config::{Configuration, DEFAULT_DEPOTS, DEFAULT_SALESMEN};
use std::num::NonZeroUsize;

/// Outcome of a successful scan over the argument tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parsed {
    /// Run the solver with this configuration.
    Run(Configuration),
    /// The user asked for usage information. Not an error.
    Help,
}

/// Parses argument tokens (program name excluded) into a configuration.
///
/// A help flag anywhere wins over everything else, including tokens that
/// would otherwise be rejected. Repeated options keep the last value.
pub fn parse<I, S>(tokens: I) -> Result<Parsed, ParseError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let tokens: Vec<S> = tokens.into_iter().collect();
    let tokens: Vec<&str> = tokens.iter().map(|t| t.as_ref()).collect();

    if help_requested(&tokens) {
        tracing::debug!("help requested, skipping validation");
        return Ok(Parsed::Help);
    }

    let mut ctx = ParseContext::new(&tokens);
    ctx.parse()?;
    Ok(Parsed::Run(ctx.into_configuration()))
}

fn help_requested(tokens: &[&str]) -> bool {
    tokens
        .iter()
        .any(|token| options::lookup(token).is_some_and(|spec| spec.id == OptionId::Help))
}

/// Scanning state. Fields start unset and are filled as tokens arrive.
struct ParseContext<'a> {
    tokens: &'a [&'a str],
    index: usize,
    depots: Option<NonZeroUsize>,
    salesmen: Option<NonZeroUsize>,
    verbose: bool,
}

impl<'a> ParseContext<'a> {
    fn new(tokens: &'a [&'a str]) -> Self {
        Self {
            tokens,
            index: 0,
            depots: None,
            salesmen: None,
            verbose: false,
        }
    }

    fn parse(&mut self) -> Result<(), ParseError> {
        while self.index < self.tokens.len() {
            let token = self.tokens[self.index];
            self.index += 1;

            let spec = options::lookup(token)
                .ok_or_else(|| ParseError::UnknownOption(token.to_string()))?;

            match spec.id {
                OptionId::Depots | OptionId::Salesmen => {
                    let raw = self.next_value(token)?;
                    let count = parse_count(token, raw)?;
                    self.set_count(spec.id, count);
                }
                OptionId::Verbose => self.verbose = true,
                // filtered out before scanning starts
                OptionId::Help => {}
            }
        }
        Ok(())
    }

    /// Consumes the token after an integer option. A declared option
    /// spelling in that position means the value was left out.
    fn next_value(&mut self, option: &str) -> Result<&'a str, ParseError> {
        let tokens = self.tokens;
        match tokens.get(self.index) {
            Some(next) if options::lookup(next).is_none() => {
                self.index += 1;
                Ok(*next)
            }
            _ => Err(ParseError::MissingValue {
                option: option.to_string(),
            }),
        }
    }

    fn set_count(&mut self, id: OptionId, count: NonZeroUsize) {
        let slot = if id == OptionId::Depots {
            &mut self.depots
        } else {
            &mut self.salesmen
        };
        if let Some(previous) = slot.replace(count) {
            tracing::debug!(
                option = ?id,
                previous = previous.get(),
                value = count.get(),
                "option repeated, keeping last value"
            );
        }
    }

    fn into_configuration(self) -> Configuration {
        Configuration::new(
            self.depots.unwrap_or(DEFAULT_DEPOTS),
            self.salesmen.unwrap_or(DEFAULT_SALESMEN),
            self.verbose,
        )
    }
}

fn parse_count(option: &str, raw: &str) -> Result<NonZeroUsize, ParseError> {
    raw.parse::<NonZeroUsize>()
        .map_err(|_| ParseError::InvalidValue {
            option: option.to_string(),
            value: raw.to_string(),
        })
}
