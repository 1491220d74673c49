// Copyright 2025 dentsusoken
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::error::{Result, SysidError};
use std::collections::HashMap;

/// Parse `KEY=VALUE` text in the os-release format into a map keyed by the
/// lowercased field name.
///
/// Blank lines are skipped. A non-blank line without `=` is a format error.
/// When the same key appears more than once, the last occurrence wins.
pub fn parse_release_text(text: &str) -> Result<HashMap<String, String>> {
    let mut vars = HashMap::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            return Err(SysidError::MalformedReleaseLine(line.to_string()));
        };

        vars.insert(key.to_lowercase(), parse_value(value));
    }

    Ok(vars)
}

/// Un-quote the right-hand side of a `KEY=VALUE` line.
///
/// The raw text is run through shell-word tokenization. If it reduces to
/// exactly one token, the token is the value (quotes stripped, escapes
/// resolved). Anything else, including text the tokenizer rejects, is kept
/// verbatim.
fn parse_value(raw: &str) -> String {
    match shell_tokens(raw) {
        Some(mut tokens) if tokens.len() == 1 => tokens.remove(0),
        _ => raw.to_string(),
    }
}

/// Split text into POSIX shell words.
///
/// Returns `None` for text that cannot be tokenized (unterminated quote,
/// trailing escape character).
fn shell_tokens(input: &str) -> Option<Vec<String>> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut chars = input.chars();

    while let Some(c) = chars.next() {
        match c {
            c if c.is_whitespace() => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            '\'' => {
                in_token = true;
                loop {
                    match chars.next() {
                        Some('\'') => break,
                        Some(inner) => current.push(inner),
                        None => return None,
                    }
                }
            }
            '"' => {
                in_token = true;
                loop {
                    match chars.next() {
                        Some('"') => break,
                        Some('\\') => match chars.next() {
                            // Inside double quotes the backslash only escapes
                            // the quote and itself.
                            Some(escaped @ ('"' | '\\')) => current.push(escaped),
                            Some(other) => {
                                current.push('\\');
                                current.push(other);
                            }
                            None => return None,
                        },
                        Some(inner) => current.push(inner),
                        None => return None,
                    }
                }
            }
            '\\' => {
                in_token = true;
                match chars.next() {
                    Some(escaped) => current.push(escaped),
                    None => return None,
                }
            }
            other => {
                in_token = true;
                current.push(other);
            }
        }
    }

    if in_token {
        tokens.push(current);
    }
    Some(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_value() {
        let vars = parse_release_text("ID=ubuntu").unwrap();
        assert_eq!(vars.get("id").map(String::as_str), Some("ubuntu"));
    }

    #[test]
    fn test_quoted_value_with_spaces() {
        let vars = parse_release_text("PRETTY_NAME=\"CentOS Linux\"").unwrap();
        assert_eq!(
            vars.get("pretty_name").map(String::as_str),
            Some("CentOS Linux")
        );
    }

    #[test]
    fn test_single_quoted_value() {
        let vars = parse_release_text("NAME='Alpine Linux'").unwrap();
        assert_eq!(vars.get("name").map(String::as_str), Some("Alpine Linux"));
    }

    #[test]
    fn test_unquoted_multi_token_kept_verbatim() {
        let vars = parse_release_text("PRETTY_NAME=Hello World").unwrap();
        assert_eq!(
            vars.get("pretty_name").map(String::as_str),
            Some("Hello World")
        );
    }

    #[test]
    fn test_unterminated_quote_kept_verbatim() {
        let vars = parse_release_text("NAME=\"oops").unwrap();
        assert_eq!(vars.get("name").map(String::as_str), Some("\"oops"));
    }

    #[test]
    fn test_escaped_quote_inside_double_quotes() {
        let vars = parse_release_text(r#"NAME="say \"hi\"""#).unwrap();
        assert_eq!(vars.get("name").map(String::as_str), Some("say \"hi\""));
    }

    #[test]
    fn test_keys_lowercased() {
        let vars = parse_release_text("VERSION_ID=\"20.04\"").unwrap();
        assert!(vars.contains_key("version_id"));
        assert!(!vars.contains_key("VERSION_ID"));
    }

    #[test]
    fn test_later_duplicate_wins() {
        let vars = parse_release_text("ID=centos\nID=almalinux").unwrap();
        assert_eq!(vars.get("id").map(String::as_str), Some("almalinux"));
    }

    #[test]
    fn test_blank_lines_skipped() {
        let vars = parse_release_text("\nID=debian\n\n   \nVERSION_ID=\"11\"\n").unwrap();
        assert_eq!(vars.len(), 2);
    }

    #[test]
    fn test_line_without_equals_is_an_error() {
        let err = parse_release_text("ID=fedora\nnot a key value line").unwrap_err();
        assert!(matches!(err, SysidError::MalformedReleaseLine(line) if line.contains("not a")));
    }

    #[test]
    fn test_value_with_equals_splits_on_first() {
        let vars = parse_release_text("HOME_URL=https://example.com/?a=b").unwrap();
        assert_eq!(
            vars.get("home_url").map(String::as_str),
            Some("https://example.com/?a=b")
        );
    }

    #[test]
    fn test_empty_value() {
        let vars = parse_release_text("VARIANT=").unwrap();
        assert_eq!(vars.get("variant").map(String::as_str), Some(""));
    }
}
