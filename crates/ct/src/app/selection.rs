//! Resolving line-number flags into a [`Selection`].

use std::collections::BTreeSet;

use crate::domain::errors::SelectionError;
use crate::domain::model::Selection;

/// Combine the `-l` and `--line` flags.
///
/// A positive `single` wins over `list`. Zero or negative `single` values are ignored, matching
/// the flag's "unset" default. With neither flag set every line is selected.
pub fn resolve(single: i64, list: Option<&str>) -> Result<Selection, SelectionError> {
    if single > 0 {
        return Ok(Selection::single(to_line(single)));
    }

    match list {
        Some(list) if !list.is_empty() => parse_line_list(list),
        _ => Ok(Selection::All),
    }
}

/// Parse a comma separated list such as `"1, 3,5"`.
///
/// Empty tokens are skipped. A list made only of empty tokens selects every line.
pub fn parse_line_list(list: &str) -> Result<Selection, SelectionError> {
    let mut lines = BTreeSet::new();
    for token in list.split(',').map(str::trim).filter(|token| !token.is_empty()) {
        let value: i64 = token
            .parse()
            .map_err(|source| SelectionError::InvalidLineNumber {
                token: token.to_owned(),
                source,
            })?;
        if value <= 0 {
            return Err(SelectionError::NonPositive(value));
        }
        lines.insert(to_line(value));
    }

    if lines.is_empty() {
        Ok(Selection::All)
    } else {
        Ok(Selection::Lines(lines))
    }
}

fn to_line(value: i64) -> usize {
    usize::try_from(value).unwrap_or(usize::MAX)
}
