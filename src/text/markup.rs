// Inline markup parser
// Handles emphasis (`_x_`, `*x*`), strong emphasis (`__x__`, `**x**`)
// and backslash escapes
//
// Stricter than Markdown: a delimiter that opens a span must be closed and
// the span must not be empty. Delimiters that can neither open nor close
// (next to whitespace or the ends of the input) are literal.

use super::{RunStyle, TextRun};
use crate::error::MarkupError;

/// An emphasis span that has been opened but not yet closed
#[derive(Debug, Clone, Copy)]
struct OpenSpan {
    delimiter: &'static str,
    /// Byte offset of the opening delimiter in the source
    offset: usize,
    /// Number of characters emitted before the span opened
    mark: usize,
}

/// Accumulates characters into runs, merging runs of equal style
#[derive(Default)]
struct RunBuilder {
    runs: Vec<TextRun>,
    emitted: usize,
}

impl RunBuilder {
    fn push(&mut self, c: char, style: RunStyle) {
        match self.runs.last_mut() {
            Some(run) if run.style == style => run.text.push(c),
            _ => self.runs.push(TextRun::new(c.to_string(), style)),
        }
        self.emitted += 1;
    }

    fn push_str(&mut self, s: &str, style: RunStyle) {
        for c in s.chars() {
            self.push(c, style);
        }
    }
}

fn delimiter_for(c: char, doubled: bool) -> &'static str {
    match (c, doubled) {
        ('*', false) => "*",
        ('*', true) => "**",
        ('_', false) => "_",
        _ => "__",
    }
}

fn is_alphanumeric(c: Option<char>) -> bool {
    c.is_some_and(char::is_alphanumeric)
}

/// Parse inline markup into styled runs
pub fn parse_runs(source: &str) -> Result<Vec<TextRun>, MarkupError> {
    let chars: Vec<(usize, char)> = source.char_indices().collect();
    let mut builder = RunBuilder::default();
    let mut italic: Option<OpenSpan> = None;
    let mut strong: Option<OpenSpan> = None;

    let mut i = 0;
    while i < chars.len() {
        let (offset, c) = chars[i];
        let style = RunStyle {
            italic: italic.is_some(),
            strong: strong.is_some(),
        };

        match c {
            '\\' => match chars.get(i + 1) {
                Some(&(_, escaped)) => {
                    builder.push(escaped, style);
                    i += 2;
                }
                None => {
                    builder.push('\\', style);
                    i += 1;
                }
            },
            '*' | '_' => {
                let doubled = chars.get(i + 1).is_some_and(|&(_, n)| n == c);
                let width = if doubled { 2 } else { 1 };
                let delimiter = delimiter_for(c, doubled);
                let prev = i.checked_sub(1).map(|p| chars[p].1);
                let next = chars.get(i + width).map(|&(_, n)| n);

                // snake_case and friends stay literal
                if c == '_' && is_alphanumeric(prev) && is_alphanumeric(next) {
                    builder.push_str(delimiter, style);
                    i += width;
                    continue;
                }

                let can_open = next.is_some_and(|n| !n.is_whitespace());
                let can_close = prev.is_some_and(|p| !p.is_whitespace());
                let slot = if doubled { &mut strong } else { &mut italic };

                match *slot {
                    Some(open) if open.delimiter == delimiter && can_close => {
                        if builder.emitted == open.mark {
                            return Err(MarkupError::EmptySpan {
                                delimiter,
                                offset: open.offset,
                            });
                        }
                        *slot = None;
                    }
                    None if can_open => {
                        *slot = Some(OpenSpan {
                            delimiter,
                            offset,
                            mark: builder.emitted,
                        });
                    }
                    _ => builder.push_str(delimiter, style),
                }
                i += width;
            }
            _ => {
                builder.push(c, style);
                i += 1;
            }
        }
    }

    let unclosed = [italic, strong]
        .into_iter()
        .flatten()
        .min_by_key(|open| open.offset);
    if let Some(open) = unclosed {
        return Err(MarkupError::Unclosed {
            delimiter: open.delimiter,
            offset: open.offset,
        });
    }

    Ok(builder.runs)
}

#[cfg(test)]
mod tests {
    use super::*;

    const STRONG: RunStyle = RunStyle {
        italic: false,
        strong: true,
    };
    const BOTH: RunStyle = RunStyle {
        italic: true,
        strong: true,
    };

    #[test]
    fn test_plain_text_is_single_run() {
        let runs = parse_runs("William Shakespeare").unwrap();
        assert_eq!(runs, vec![TextRun::new("William Shakespeare", RunStyle::PLAIN)]);
    }

    #[test]
    fn test_empty_source() {
        assert!(parse_runs("").unwrap().is_empty());
    }

    #[test]
    fn test_asterisk_emphasis() {
        let runs = parse_runs("a *b* c").unwrap();
        assert_eq!(
            runs,
            vec![
                TextRun::new("a ", RunStyle::PLAIN),
                TextRun::new("b", RunStyle::ITALIC),
                TextRun::new(" c", RunStyle::PLAIN),
            ]
        );
    }

    #[test]
    fn test_strong_and_nested_emphasis() {
        let runs = parse_runs("**bold _both_**").unwrap();
        assert_eq!(
            runs,
            vec![
                TextRun::new("bold ", STRONG),
                TextRun::new("both", BOTH),
            ]
        );

        let runs = parse_runs("__Hamlet__").unwrap();
        assert_eq!(runs, vec![TextRun::new("Hamlet", STRONG)]);
    }

    #[test]
    fn test_escapes() {
        let runs = parse_runs(r"\_not emphasis\_ \\").unwrap();
        assert_eq!(runs, vec![TextRun::new(r"_not emphasis_ \", RunStyle::PLAIN)]);

        // Trailing lone backslash is literal
        let runs = parse_runs(r"end\").unwrap();
        assert_eq!(runs, vec![TextRun::new(r"end\", RunStyle::PLAIN)]);
    }

    #[test]
    fn test_intraword_underscore_is_literal() {
        let runs = parse_runs("snake_case and snake__case").unwrap();
        assert_eq!(
            runs,
            vec![TextRun::new("snake_case and snake__case", RunStyle::PLAIN)]
        );
    }

    #[test]
    fn test_delimiters_next_to_whitespace_are_literal() {
        let runs = parse_runs("2 * 3 = 6 _ **").unwrap();
        assert_eq!(runs, vec![TextRun::new("2 * 3 = 6 _ **", RunStyle::PLAIN)]);
    }

    #[test]
    fn test_mismatched_delimiter_is_literal_inside_span() {
        let runs = parse_runs("_a*b_").unwrap();
        assert_eq!(runs, vec![TextRun::new("a*b", RunStyle::ITALIC)]);
    }

    #[test]
    fn test_unclosed_reports_opening_offset() {
        assert_eq!(
            parse_runs("by _Hamlet"),
            Err(MarkupError::Unclosed {
                delimiter: "_",
                offset: 3,
            })
        );

        // Offsets are bytes, not chars
        assert_eq!(
            parse_runs("é **x"),
            Err(MarkupError::Unclosed {
                delimiter: "**",
                offset: 3,
            })
        );
    }

    #[test]
    fn test_earliest_unclosed_span_is_reported() {
        assert_eq!(
            parse_runs("**a _b"),
            Err(MarkupError::Unclosed {
                delimiter: "**",
                offset: 0,
            })
        );
    }

    #[test]
    fn test_unmatched_opener_fails_whole_parse() {
        // The later span would be valid on its own, but the earlier opener
        // is never closed
        assert_eq!(
            parse_runs("**a _b_"),
            Err(MarkupError::Unclosed {
                delimiter: "**",
                offset: 0,
            })
        );
    }

    #[test]
    fn test_lone_delimiters_are_literal_not_spans() {
        // Nothing follows, so neither can open a span
        assert_eq!(parse_runs("**"), Ok(vec![TextRun::new("**", RunStyle::PLAIN)]));
        assert_eq!(parse_runs("a _"), Ok(vec![TextRun::new("a _", RunStyle::PLAIN)]));
    }

    #[test]
    fn test_empty_span() {
        assert_eq!(
            parse_runs("x ****"),
            Err(MarkupError::EmptySpan {
                delimiter: "**",
                offset: 2,
            })
        );
    }
}
