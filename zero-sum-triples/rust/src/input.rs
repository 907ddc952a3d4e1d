use crate::error::{FindError, Result};

/// Parses textual tokens into the integer sequence the finder accepts.
///
/// Tokens are trimmed and blank ones skipped. `position` in the error counts
/// every token handed in, blank or not.
pub fn parse_values<I, S>(tokens: I) -> Result<Vec<i32>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let tokens = tokens.into_iter();
    let mut values = Vec::with_capacity(tokens.size_hint().0);

    for (position, token) in tokens.enumerate() {
        let token = token.as_ref().trim();
        if token.is_empty() {
            continue;
        }

        let value = token.parse::<i32>().map_err(|source| FindError::InvalidInput {
            position,
            token: token.to_owned(),
            source,
        })?;
        values.push(value);
    }

    Ok(values)
}

/// Parses a list such as `[-2, 0, 1, 1, 2]` or `-2 0 1 1 2`.
pub fn parse_list(list: &str) -> Result<Vec<i32>> {
    let list = list.trim();
    let list = list.strip_prefix('[').unwrap_or(list);
    let list = list.strip_suffix(']').unwrap_or(list);

    parse_values(list.split(|c: char| c == ',' || c.is_whitespace()))
}
