//! Fixup of tokenized paths embedded in provider connection strings

use super::DataSourcePathResolver;
use crate::{error::Result, interfaces::PathResolver};

/// Connection string keys whose values name a file or folder
pub const PATH_KEYS: &[&str] = &["Data Source", "AttachDbFilename", "DBQ", "DefaultDir"];

fn is_path_key(key: &str) -> bool {
    PATH_KEYS.iter().any(|k| k.eq_ignore_ascii_case(key))
}

/// Split on `;`, except inside a quoted or braced value
fn split_segments(connection_string: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut start = 0;
    let mut closing: Option<char> = None;
    let mut at_value_start = false;

    for (i, c) in connection_string.char_indices() {
        if let Some(close) = closing {
            if c == close {
                closing = None;
            }
            continue;
        }

        match c {
            ';' => {
                segments.push(&connection_string[start..i]);
                start = i + 1;
                at_value_start = false;
            }
            '=' => at_value_start = true,
            '"' | '\'' if at_value_start => {
                closing = Some(c);
                at_value_start = false;
            }
            '{' if at_value_start => {
                closing = Some('}');
                at_value_start = false;
            }
            c if c.is_whitespace() => {}
            _ => at_value_start = false,
        }
    }

    segments.push(&connection_string[start..]);
    segments
}

/// Strip one pair of matching surrounding quotes, returning the quote used
fn unquote(value: &str) -> (&str, Option<char>) {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return (&value[1..value.len() - 1], Some(quote));
        }
    }
    (value, None)
}

impl<R: PathResolver> DataSourcePathResolver<R> {
    /// Rewrite every tokenized path value of a `key=value;...` connection
    /// string through [`DataSourcePathResolver::fix_path`].
    ///
    /// Quoted values are unquoted before the fixup and requoted after it;
    /// `;` inside quotes or braces does not end a segment. Segments that are
    /// not path keys, or whose values carry no token, are kept byte for byte.
    pub fn fix_connection_string(&self, connection_string: &str) -> Result<String> {
        let mut segments = Vec::new();
        for segment in split_segments(connection_string) {
            let Some((key, value)) = segment.split_once('=') else {
                segments.push(segment.to_string());
                continue;
            };

            if !is_path_key(key.trim()) {
                segments.push(segment.to_string());
                continue;
            }

            let (path, quote) = unquote(value.trim());
            match self.fix_path(path)? {
                Some(fixed) => {
                    tracing::debug!("Fixed connection string key {}: {:?}", key.trim(), fixed);
                    let quote = quote.map(String::from).unwrap_or_default();
                    segments.push(format!("{key}={quote}{}{quote}", fixed.display()));
                }
                None => segments.push(segment.to_string()),
            }
        }

        Ok(segments.join(";"))
    }
}
