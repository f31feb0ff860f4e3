//! Property-based tests for tokenizing and parameter parsing.
//!
//! Uses proptest to generate flag tables and lines and verify that:
//! 1. Lines made only of declared help/boolean flags always parse
//! 2. String values are bound char-for-char, even when they spell a flag
//! 3. `--flag=value` and `--flag value` parse identically

use proptest::prelude::*;
use cmdroute_proto::{parse_params, tokenize, ParamSpec, ParamTable, ParsedParam};

// =============================================================================
// STRATEGIES
// =============================================================================

/// A flag: `--` followed by a short lowercase name.
fn flag_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("--[a-z][a-z0-9\\-]{0,11}").expect("valid regex")
}

/// A value token: no whitespace and no `=`.
fn value_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z0-9_\\-./:@,]{1,24}").expect("valid regex")
}

/// Separator between tokens: one or more spaces or tabs.
fn gap_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[ \t]{1,3}").expect("valid regex")
}

// =============================================================================
// PROPERTIES
// =============================================================================

proptest! {
    #[test]
    fn presence_flags_never_need_values(
        flags in prop::collection::btree_set(flag_strategy(), 1..6),
        picks in prop::collection::vec(any::<prop::sample::Index>(), 0..12),
        help_first in any::<bool>(),
    ) {
        let flags: Vec<String> = flags.into_iter().collect();
        let mut table = ParamTable::new();
        for (i, flag) in flags.iter().enumerate() {
            let spec = if i == 0 && help_first {
                ParamSpec::help("help")
            } else {
                ParamSpec::boolean("flag")
            };
            table.insert(flag.clone(), spec);
        }

        let chosen: Vec<&str> = picks.iter().map(|ix| flags[ix.index(flags.len())].as_str()).collect();
        let line = chosen.join(" ");

        let parsed = parse_params(&tokenize(&line), &table).expect("presence flags always parse");
        for flag in &chosen {
            let bound = parsed.get(flag).expect("every chosen flag is bound");
            prop_assert!(matches!(bound, ParsedParam::Help | ParsedParam::Flag));
        }
        prop_assert!(parsed.len() <= flags.len());
    }

    #[test]
    fn string_value_is_bound_verbatim(
        flag in flag_strategy(),
        value in value_strategy(),
        gap in gap_strategy(),
    ) {
        let mut table = ParamTable::new();
        table.insert(flag.clone(), ParamSpec::string("value"));

        let line = format!("{flag}{gap}{value}");
        let parsed = parse_params(&tokenize(&line), &table).expect("flag with value parses");
        prop_assert_eq!(parsed.value(&flag), Some(value.as_str()));
    }

    #[test]
    fn string_value_spelling_a_flag_is_not_checked(
        flags in prop::collection::btree_set(flag_strategy(), 2..4),
    ) {
        let flags: Vec<String> = flags.into_iter().collect();
        let mut table = ParamTable::new();
        table.insert(flags[0].clone(), ParamSpec::string("value"));
        for flag in &flags[1..] {
            table.insert(flag.clone(), ParamSpec::boolean("flag"));
        }

        let line = format!("{} {}", flags[0], flags[1]);
        let parsed = parse_params(&tokenize(&line), &table).expect("value may look like a flag");
        prop_assert_eq!(parsed.value(&flags[0]), Some(flags[1].as_str()));
        prop_assert!(!parsed.is_set(&flags[1]));
    }

    #[test]
    fn equals_and_space_forms_are_equivalent(
        pairs in prop::collection::btree_map(flag_strategy(), value_strategy(), 1..5),
    ) {
        let mut table = ParamTable::new();
        for flag in pairs.keys() {
            table.insert(flag.clone(), ParamSpec::string("value"));
        }

        let with_equals: Vec<String> = pairs.iter().map(|(f, v)| format!("{f}={v}")).collect();
        let with_spaces: Vec<String> = pairs.iter().map(|(f, v)| format!("{f} {v}")).collect();

        let a = parse_params(&tokenize(&with_equals.join(" ")), &table).expect("equals form parses");
        let b = parse_params(&tokenize(&with_spaces.join(" ")), &table).expect("space form parses");
        prop_assert_eq!(a, b);
    }

    #[test]
    fn tokenize_never_yields_empty_tokens(line in "[ a-z=\t\\-]{0,64}") {
        for token in tokenize(&line) {
            prop_assert!(!token.is_empty());
            prop_assert!(!token.contains('='));
            prop_assert!(!token.contains(char::is_whitespace));
        }
    }
}
