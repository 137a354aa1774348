//! Comment extraction from document source text.
//!
//! A `#` starts a comment at the beginning of a line or after whitespace,
//! unless it sits inside a quoted scalar or the body of a block scalar.

/// Split a line into its content and its trailing comment, if any.
///
/// `quote` is the quoted scalar still open from previous lines; it is
/// updated to the state at the end of this line.
fn split_comment<'a>(line: &'a str, quote: &mut Option<char>) -> (&'a str, Option<&'a str>) {
    let mut escaped = false;
    let mut prev: Option<char> = None;
    let mut last_significant: Option<char> = None;

    for (idx, c) in line.char_indices() {
        match *quote {
            Some(q) => {
                if escaped {
                    escaped = false;
                } else if q == '"' && c == '\\' {
                    escaped = true;
                } else if c == q {
                    // '' inside a single-quoted scalar is an escaped quote
                    if q == '\'' && line[idx + 1..].starts_with('\'') {
                        escaped = true;
                    } else {
                        *quote = None;
                    }
                }
            }
            None => {
                if c == '#' && prev.map_or(true, char::is_whitespace) {
                    return (&line[..idx], Some(&line[idx..]));
                }
                let opens_scalar = last_significant
                    .map_or(true, |p| matches!(p, ':' | '-' | '[' | '{' | ',' | '?'));
                if (c == '"' || c == '\'') && opens_scalar {
                    *quote = Some(c);
                }
            }
        }
        prev = Some(c);
        if !c.is_whitespace() {
            last_significant = Some(c);
        }
    }
    (line, None)
}

/// Column of the node a line introduces, past any `- ` sequence markers.
fn node_indent(line: &str) -> usize {
    let mut rest = line.trim_start();
    while let Some(after) = rest.strip_prefix("- ") {
        rest = after.trim_start();
    }
    line.len() - rest.len()
}

/// Whether `content` ends in a block scalar indicator (`|`, `>-`, `|2+`...).
fn opens_block_scalar(content: &str) -> bool {
    let content = content.trim_end();
    let (head, token) = match content.rsplit_once(char::is_whitespace) {
        Some((head, token)) => (head.trim_end(), token),
        None => ("", content),
    };
    let is_indicator = token.starts_with(['|', '>'])
        && token[1..].chars().all(|c| c == '-' || c == '+' || c.is_ascii_digit());
    if !is_indicator {
        return false;
    }
    let last_word = head.rsplit(char::is_whitespace).next().unwrap_or("");
    head.is_empty()
        || head.ends_with(':')
        || head.ends_with('-')
        || last_word.starts_with('!')
        || last_word.starts_with('&')
}

/// Extract the comments of one document, in source order.
///
/// Each comment is returned from its `#` to the end of the line with
/// surrounding whitespace trimmed.
pub fn extract_comments(text: &str) -> Vec<String> {
    let mut comments = Vec::new();
    let mut block_parent: Option<usize> = None;
    let mut quote: Option<char> = None;

    for line in text.lines() {
        let indent = line.len() - line.trim_start().len();
        if let Some(parent) = block_parent {
            if line.trim().is_empty() || indent > parent {
                continue;
            }
            block_parent = None;
        }

        let (content, comment) = split_comment(line, &mut quote);
        if let Some(comment) = comment {
            comments.push(comment.trim().to_string());
        }
        if quote.is_none() && opens_block_scalar(content) {
            let rest = content.trim_start().trim_start_matches(['-', ' ']);
            block_parent = Some(if rest.starts_with(['|', '>']) {
                indent
            } else {
                node_indent(content)
            });
        }
    }
    comments
}
