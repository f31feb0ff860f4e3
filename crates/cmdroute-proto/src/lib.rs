//! # cmdroute-proto
//!
//! The line grammar behind `cmdroute`: splitting a raw command string into
//! tokens and binding those tokens to a command's typed flags.
//!
//! ## Grammar
//!
//! ```text
//! line  = [command] *(flag [value])
//! flag  = "--" name
//! ```
//!
//! - `=` and whitespace both separate tokens, so `--foo=bar` is `--foo bar`
//! - there is no quoting; a value is a single token
//! - help and boolean flags take no value, string flags take exactly one
//!
//! ## Quick Start
//!
//! ```rust
//! use cmdroute_proto::{parse_params, tokenize, ParamSpec, ParamTable, ParsedParam};
//!
//! let mut table = ParamTable::new();
//! table.insert("--help".into(), ParamSpec::help("show help"));
//! table.insert("--port".into(), ParamSpec::string("port to bind"));
//!
//! let tokens = tokenize("serve --port=8080");
//! let (command, params) = tokens.split_first().unwrap();
//! assert_eq!(*command, "serve");
//!
//! let parsed = parse_params(params, &table).unwrap();
//! assert_eq!(parsed.get("--port"), Some(&ParsedParam::Value("8080".into())));
//! ```

#![deny(clippy::all)]

pub mod error;
pub mod param;
pub mod parse;
pub mod token;

pub use self::error::{ParseError, Result};
pub use self::param::{ParamKind, ParamSpec, ParamTable, ParsedParam, ParsedParams};
pub use self::parse::parse_params;
pub use self::token::{is_separator, tokenize, Tokens, VALUE_SEPARATOR};
