//! Binding tokens to a parameter table.

use crate::error::{ParseError, Result};
use crate::param::{ParamKind, ParamTable, ParsedParam, ParsedParams};

/// Parse parameter tokens against `table`, left to right.
///
/// Help and boolean flags bind a presence marker. A string flag binds the
/// next token verbatim; that token is not looked up in `table`, so a value
/// may spell another flag. A flag seen twice keeps its last binding.
///
/// # Example
///
/// ```
/// use cmdroute_proto::{parse_params, tokenize, ParamSpec, ParamTable};
///
/// let mut table = ParamTable::new();
/// table.insert("--name".into(), ParamSpec::string("who to greet"));
/// table.insert("--loud".into(), ParamSpec::boolean("shout"));
///
/// let tokens = tokenize("--name=world --loud");
/// let parsed = parse_params(&tokens, &table).unwrap();
/// assert_eq!(parsed.value("--name"), Some("world"));
/// assert!(parsed.is_set("--loud"));
/// ```
pub fn parse_params(tokens: &[&str], table: &ParamTable) -> Result<ParsedParams> {
    let mut parsed = ParsedParams::new();
    let mut cursor = tokens.iter();

    while let Some(&token) = cursor.next() {
        let spec = table
            .get(token)
            .ok_or_else(|| ParseError::UnknownParameter {
                param: token.to_string(),
            })?;

        let value = match spec.kind {
            ParamKind::Help => ParsedParam::Help,
            ParamKind::Boolean => ParsedParam::Flag,
            ParamKind::String => {
                let value = cursor.next().ok_or_else(|| ParseError::MissingValue {
                    param: token.to_string(),
                })?;
                ParsedParam::Value((*value).to_string())
            }
        };

        parsed.insert(token, value);
    }

    Ok(parsed)
}
