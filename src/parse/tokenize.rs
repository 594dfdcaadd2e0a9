//! Shell-style line tokenizer.
//!
//! Splits a raw command line into argument tokens, honoring whitespace
//! separation, single/double quoted spans, and backslash-escaped quotes.
//! The one failure mode is a quote that is opened but never closed; the
//! error carries the opening position and an excerpt of the surrounding
//! input built with [`ellipsize`].

use thiserror::Error;

use super::ellipsize::ellipsize;

/// Quote characters the tokenizer recognizes.
const QUOTE_CHARS: [char; 2] = ['"', '\''];

/// Escape character: neutralizes an immediately following quote character.
const ESCAPE_CHAR: char = '\\';

/// Half-width of the context window shown in unterminated-quote errors.
const CONTEXT_WINDOW: usize = 3;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenizeError {
    /// A quote was opened but input ended before it was closed.
    /// `position` is the 0-based char index of the opening quote.
    #[error("unterminated quote at position {position}: {context}")]
    UnterminatedQuote { position: usize, context: String },
}

/// Split a command line into tokens.
///
/// Rules:
///   - Unquoted whitespace separates tokens; runs of it collapse.
///   - A quoted span (`'...'` or `"..."`) keeps its content verbatim,
///     whitespace included; the delimiters themselves are dropped.
///   - Inside a quoted span, `\` followed by the *matching* quote char
///     produces that quote literally. Any other character, the backslash
///     included, is literal.
///   - Outside a quoted span, `\` followed by *either* quote char produces
///     that quote literally inside the current token.
///
/// All state is local to the call; the function is reentrant and returns
/// either the complete token list or an error, never a partial result.
///
/// ```
/// use reqforge::parse::tokenize_line;
///
/// let tokens = tokenize_line(r#"code --wait "my file.ini""#).unwrap();
/// assert_eq!(tokens, vec!["code", "--wait", "my file.ini"]);
/// ```
pub fn tokenize_line(line: &str) -> Result<Vec<String>, TokenizeError> {
    let chars: Vec<char> = line.chars().collect();
    let len = chars.len();

    let mut tokens: Vec<String> = Vec::new();
    let mut buf = String::new();
    // (quote char, position where it was opened)
    let mut open_quote: Option<(char, usize)> = None;

    let mut i = 0;
    while i < len {
        let c = chars[i];

        // Leading / repeated separators outside quotes produce nothing.
        if open_quote.is_none() && c.is_whitespace() && buf.is_empty() {
            i += 1;
            continue;
        }

        if let Some((quote, _)) = open_quote {
            if c == ESCAPE_CHAR && i + 1 < len && chars[i + 1] == quote {
                buf.push(quote);
                i += 2;
                continue;
            }
            if c == quote {
                open_quote = None;
                i += 1;
                continue;
            }
            // Quoted content is literal, the escape char included.
            buf.push(c);
            i += 1;
            continue;
        }

        if c == ESCAPE_CHAR && i + 1 < len && QUOTE_CHARS.contains(&chars[i + 1]) {
            buf.push(chars[i + 1]);
            i += 2;
            continue;
        }
        if QUOTE_CHARS.contains(&c) {
            open_quote = Some((c, i));
            i += 1;
            continue;
        }
        if c.is_whitespace() {
            tokens.push(std::mem::take(&mut buf));
            i += 1;
            continue;
        }

        buf.push(c);
        i += 1;
    }

    if let Some((_, position)) = open_quote {
        let context = ellipsize(
            position.saturating_sub(CONTEXT_WINDOW),
            (position + CONTEXT_WINDOW + 1).min(len),
            line,
        );
        return Err(TokenizeError::UnterminatedQuote { position, context });
    }

    if !buf.is_empty() {
        tokens.push(buf);
    }

    Ok(tokens)
}
