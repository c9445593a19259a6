//! Alias Table
//!
//! Bounded name → expansion map. Expansion is applied once per line: the
//! first word is replaced and the rebuilt line is re-tokenized, so an alias
//! whose expansion begins with another alias name is not expanded again.

use indexmap::IndexMap;

use super::errors::{ShellError, ShellResult};
use super::tokenizer::{quote, tokenize, Token};

#[derive(Debug, Clone)]
pub struct AliasTable {
    entries: IndexMap<String, String>,
    capacity: usize,
}

impl AliasTable {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: IndexMap::new(),
            capacity,
        }
    }

    /// Insert or overwrite an alias.
    pub fn set(&mut self, name: &str, expansion: &str) -> ShellResult<()> {
        if let Some(existing) = self.entries.get_mut(name) {
            *existing = expansion.to_string();
            return Ok(());
        }
        if self.entries.len() >= self.capacity {
            return Err(ShellError::TableFull);
        }
        self.entries.insert(name.to_string(), expansion.to_string());
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    pub fn remove(&mut self, name: &str) -> bool {
        self.entries.shift_remove(name).is_some()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Entries in definition order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Rewrite `tokens` if the first word names an alias. Returns `None` when
    /// no alias applies.
    ///
    /// The rebuilt line must fit in `line_capacity - 1` characters.
    pub fn expand(
        &self,
        tokens: &[Token],
        line_capacity: usize,
        max_args: usize,
    ) -> ShellResult<Option<Vec<Token>>> {
        let first = match tokens.first() {
            Some(first) if !first.quoted => first,
            _ => return Ok(None),
        };
        let expansion = match self.get(&first.text) {
            Some(expansion) => expansion,
            None => return Ok(None),
        };

        let mut line = expansion.to_string();
        for token in &tokens[1..] {
            line.push(' ');
            line.push_str(&quote(token));
        }
        if line.chars().count() > line_capacity.saturating_sub(1) {
            return Err(ShellError::BufferOverflow {
                what: "Alias expansion",
            });
        }

        log::debug!("alias {} -> {:?}", first.text, line);
        Ok(Some(tokenize(&line, max_args)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::tokenizer::words;

    fn expand(table: &AliasTable, line: &str) -> ShellResult<Option<Vec<String>>> {
        let tokens = tokenize(line, 12);
        table.expand(&tokens, 128, 12).map(|t| t.map(words))
    }

    #[test]
    fn test_set_overwrites() {
        let mut table = AliasTable::new(2);
        table.set("ll", "ls").unwrap();
        table.set("ll", "ls -la").unwrap();
        assert_eq!(table.get("ll"), Some("ls -la"));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_table_full() {
        let mut table = AliasTable::new(2);
        table.set("a", "x").unwrap();
        table.set("b", "y").unwrap();
        assert_eq!(table.set("c", "z"), Err(ShellError::TableFull));
        // Overwriting an existing name still works when full.
        table.set("a", "w").unwrap();
    }

    #[test]
    fn test_remove_keeps_order() {
        let mut table = AliasTable::new(4);
        table.set("a", "1").unwrap();
        table.set("b", "2").unwrap();
        table.set("c", "3").unwrap();
        assert!(table.remove("b"));
        assert!(!table.remove("b"));
        let names: Vec<&str> = table.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["a", "c"]);
    }

    #[test]
    fn test_expand_with_arguments() {
        let mut table = AliasTable::new(4);
        table.set("ll", "ls -la").unwrap();
        assert_eq!(
            expand(&table, "ll /tmp").unwrap(),
            Some(vec!["ls".to_string(), "-la".to_string(), "/tmp".to_string()])
        );
    }

    #[test]
    fn test_expand_is_single_level() {
        let mut table = AliasTable::new(4);
        table.set("a", "b x").unwrap();
        table.set("b", "echo nested").unwrap();
        assert_eq!(
            expand(&table, "a").unwrap(),
            Some(vec!["b".to_string(), "x".to_string()])
        );
    }

    #[test]
    fn test_expand_preserves_quoted_arguments() {
        let mut table = AliasTable::new(4);
        table.set("say", "echo").unwrap();
        assert_eq!(
            expand(&table, r#"say "two  words" """#).unwrap(),
            Some(vec!["echo".to_string(), "two  words".to_string(), String::new()])
        );
    }

    #[test]
    fn test_no_alias_no_rewrite() {
        let mut table = AliasTable::new(4);
        table.set("ll", "ls -la").unwrap();
        assert_eq!(expand(&table, "ls").unwrap(), None);
        assert_eq!(expand(&table, r#""ll""#).unwrap(), None);
    }

    #[test]
    fn test_expand_overflow() {
        let mut table = AliasTable::new(4);
        table.set("big", &"x".repeat(120)).unwrap();
        let tokens = tokenize("big some more words", 12);
        assert_eq!(
            table.expand(&tokens, 128, 12),
            Err(ShellError::BufferOverflow {
                what: "Alias expansion"
            })
        );
    }
}
