//! Tokenizer
//!
//! Splits a raw input line into words. Space and tab separate words outside
//! double quotes; a `"` toggles quoting and is dropped; `\n` and `\t` escape
//! to newline and tab, any other escaped character is kept literally, and a
//! trailing lone backslash is kept as-is. Words past `max_args` are dropped.

/// One word of a command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    /// Set when any part of the word was quoted or escaped. Quoted words are
    /// never treated as redirection operators or alias names.
    pub quoted: bool,
}

impl Token {
    pub fn bare(text: &str) -> Self {
        Self {
            text: text.to_string(),
            quoted: false,
        }
    }

    /// True for an unquoted `>` or `>>`.
    pub fn is_redirect_op(&self) -> bool {
        !self.quoted && (self.text == ">" || self.text == ">>")
    }
}

#[derive(Default)]
struct WordBuilder {
    text: String,
    started: bool,
    quoted: bool,
}

impl WordBuilder {
    fn push(&mut self, c: char) {
        self.text.push(c);
        self.started = true;
    }

    fn mark_quoted(&mut self) {
        self.started = true;
        self.quoted = true;
    }

    fn take(&mut self) -> Option<Token> {
        if !self.started {
            return None;
        }
        let word = std::mem::take(self);
        Some(Token {
            text: word.text,
            quoted: word.quoted,
        })
    }
}

/// Split `line` into at most `max_args` tokens.
pub fn tokenize(line: &str, max_args: usize) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut word = WordBuilder::default();
    let mut in_quotes = false;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        if tokens.len() >= max_args {
            break;
        }
        match c {
            ' ' | '\t' if !in_quotes => {
                if let Some(token) = word.take() {
                    tokens.push(token);
                }
            }
            '"' => {
                in_quotes = !in_quotes;
                word.mark_quoted();
            }
            '\\' => {
                word.mark_quoted();
                match chars.next() {
                    Some('n') => word.push('\n'),
                    Some('t') => word.push('\t'),
                    Some(other) => word.push(other),
                    None => word.push('\\'),
                }
            }
            other => word.push(other),
        }
    }
    if tokens.len() < max_args {
        if let Some(token) = word.take() {
            tokens.push(token);
        }
    }

    log::trace!("tokenized {:?} into {} words", line, tokens.len());
    tokens
}

/// Re-quote a token so `tokenize` reads it back unchanged.
pub fn quote(token: &Token) -> String {
    let literal_op = token.quoted && (token.text == ">" || token.text == ">>");
    let needs_quotes = token.text.is_empty()
        || literal_op
        || token
            .text
            .chars()
            .any(|c| matches!(c, ' ' | '\t' | '\n' | '"' | '\\'));
    if !needs_quotes {
        return token.text.clone();
    }
    let mut out = String::with_capacity(token.text.len() + 2);
    out.push('"');
    for c in token.text.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '"' | '\\' => {
                out.push('\\');
                out.push(c);
            }
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Plain argument strings of a token list.
pub fn words(tokens: Vec<Token>) -> Vec<String> {
    tokens.into_iter().map(|t| t.text).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(line: &str) -> Vec<String> {
        words(tokenize(line, 12))
    }

    #[test]
    fn test_whitespace_collapses() {
        assert_eq!(texts("  ls \t -la   /tmp  "), vec!["ls", "-la", "/tmp"]);
        assert!(texts("   ").is_empty());
    }

    #[test]
    fn test_quotes_group_and_vanish() {
        assert_eq!(texts(r#"echo "hello   world""#), vec!["echo", "hello   world"]);
        assert_eq!(texts(r#"alias ll="ls -la""#), vec!["alias", "ll=ls -la"]);
    }

    #[test]
    fn test_empty_quotes_make_empty_token() {
        assert_eq!(texts(r#"echo "" x"#), vec!["echo", "", "x"]);
    }

    #[test]
    fn test_escapes() {
        assert_eq!(texts(r"echo a\nb"), vec!["echo", "a\nb"]);
        assert_eq!(texts(r"echo a\tb"), vec!["echo", "a\tb"]);
        assert_eq!(texts(r"echo a\ b"), vec!["echo", "a b"]);
        assert_eq!(texts(r#"echo "say \"hi\"""#), vec!["echo", "say \"hi\""]);
        assert_eq!(texts(r"echo end\"), vec!["echo", "end\\"]);
    }

    #[test]
    fn test_max_args_truncates_silently() {
        let tokens = tokenize("a b c d e", 3);
        assert_eq!(words(tokens), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_redirect_ops_only_when_bare() {
        let tokens = tokenize(r#"echo x > f ">" \>>"#, 12);
        let ops: Vec<bool> = tokens.iter().map(Token::is_redirect_op).collect();
        assert_eq!(ops, vec![false, false, true, false, false, false]);
    }

    #[test]
    fn test_quote_round_trips() {
        for text in ["plain", "two words", "", "tab\there", "q\"uote", "back\\slash", "line\nbreak"] {
            let token = Token {
                text: text.to_string(),
                quoted: true,
            };
            let back = tokenize(&quote(&token), 12);
            assert_eq!(back.len(), 1, "{:?}", text);
            assert_eq!(back[0].text, text);
        }
    }

    #[test]
    fn test_quote_keeps_literal_redirect_literal() {
        let token = Token {
            text: ">".to_string(),
            quoted: true,
        };
        let back = tokenize(&quote(&token), 12);
        assert!(!back[0].is_redirect_op());
        assert_eq!(quote(&Token::bare(">")), ">");
    }
}
