//! Command grammar
//!
//! Each command has a name pattern and an argument pattern. Grammars are
//! tried in a fixed order; the first whose name matches decides the outcome,
//! even when its arguments then fail to match.

use std::path::PathBuf;

use regex::{Captures, Regex};
use serde::Serialize;
use synnet_core::record::WORD_PATTERN;
use synnet_core::{Result, SynsetId, VertexId};

/// Which command a line was recognized as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CommandKind {
    Load,
    Lookup,
    Find,
    FindMany,
    Lca,
    Invalid,
}

impl CommandKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Load => "load",
            Self::Lookup => "lookup",
            Self::Find => "find",
            Self::FindMany => "findmany",
            Self::Lca => "lca",
            Self::Invalid => "invalid",
        }
    }
}

impl std::fmt::Display for CommandKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully parsed command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Load { synsets: PathBuf, hypernyms: PathBuf },
    Lookup(SynsetId),
    Find(String),
    FindMany(Vec<String>),
    Lca(VertexId, VertexId),
}

impl Command {
    pub fn kind(&self) -> CommandKind {
        match self {
            Self::Load { .. } => CommandKind::Load,
            Self::Lookup(_) => CommandKind::Lookup,
            Self::Find(_) => CommandKind::Find,
            Self::FindMany(_) => CommandKind::FindMany,
            Self::Lca(..) => CommandKind::Lca,
        }
    }
}

/// Outcome of matching a line against the grammar
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedCommand {
    /// Name and arguments matched
    Recognized(Command),
    /// Name matched but the arguments did not
    Malformed(CommandKind),
    /// No command name matched
    Unrecognized,
}

struct Grammar {
    kind: CommandKind,
    name: Regex,
    args: Regex,
}

impl Grammar {
    fn new(kind: CommandKind, args: &str) -> Result<Self> {
        let keyword = kind.as_str();
        Ok(Self {
            kind,
            name: Regex::new(&format!(r"^{}(?:\s|$)", keyword))?,
            args: Regex::new(&format!(r"^{}\s+{}$", keyword, args))?,
        })
    }

    fn build(&self, caps: &Captures<'_>) -> Option<Command> {
        let command = match self.kind {
            CommandKind::Load => Command::Load {
                synsets: PathBuf::from(&caps[1]),
                hypernyms: PathBuf::from(&caps[2]),
            },
            CommandKind::Lookup => Command::Lookup(caps[1].parse().ok()?),
            CommandKind::Find => Command::Find(caps[1].to_string()),
            CommandKind::FindMany => {
                Command::FindMany(caps[1].split(',').map(str::to_string).collect())
            }
            CommandKind::Lca => Command::Lca(caps[1].parse().ok()?, caps[2].parse().ok()?),
            CommandKind::Invalid => return None,
        };
        Some(command)
    }
}

/// Compiled command grammar
pub struct CommandParser {
    grammars: Vec<Grammar>,
}

impl CommandParser {
    pub fn new() -> Result<Self> {
        let words = format!("({w}(?:,{w})*)", w = WORD_PATTERN);
        let grammars = vec![
            Grammar::new(CommandKind::Load, r"(\S+)\s+(\S+)")?,
            Grammar::new(CommandKind::Lookup, r"(\d+)")?,
            Grammar::new(CommandKind::Find, &format!("({})", WORD_PATTERN))?,
            Grammar::new(CommandKind::FindMany, &words)?,
            Grammar::new(CommandKind::Lca, r"(\d+)\s+(\d+)")?,
        ];
        Ok(Self { grammars })
    }

    pub fn parse(&self, line: &str) -> ParsedCommand {
        let line = line.trim();

        let Some(grammar) = self.grammars.iter().find(|g| g.name.is_match(line)) else {
            tracing::debug!("Unrecognized command: {:?}", line);
            return ParsedCommand::Unrecognized;
        };

        match grammar.args.captures(line).and_then(|caps| grammar.build(&caps)) {
            Some(command) => ParsedCommand::Recognized(command),
            None => {
                tracing::debug!("Malformed {} command: {:?}", grammar.kind, line);
                ParsedCommand::Malformed(grammar.kind)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> ParsedCommand {
        CommandParser::new().unwrap().parse(line)
    }

    #[test]
    fn test_parse_load() {
        assert_eq!(
            parse("load data/synsets.txt data/hypernyms.txt"),
            ParsedCommand::Recognized(Command::Load {
                synsets: PathBuf::from("data/synsets.txt"),
                hypernyms: PathBuf::from("data/hypernyms.txt"),
            })
        );
        assert_eq!(parse("load only-one.txt"), ParsedCommand::Malformed(CommandKind::Load));
    }

    #[test]
    fn test_parse_lookup() {
        assert_eq!(parse("lookup 12"), ParsedCommand::Recognized(Command::Lookup(12)));
        assert_eq!(parse("lookup -3"), ParsedCommand::Malformed(CommandKind::Lookup));
        assert_eq!(parse("lookup"), ParsedCommand::Malformed(CommandKind::Lookup));
        assert_eq!(
            parse("lookup 99999999999999999999999"),
            ParsedCommand::Malformed(CommandKind::Lookup)
        );
    }

    #[test]
    fn test_parse_find_and_findmany_are_distinct() {
        assert_eq!(
            parse("find canine"),
            ParsedCommand::Recognized(Command::Find("canine".to_string()))
        );
        assert_eq!(
            parse("findmany dog,cat"),
            ParsedCommand::Recognized(Command::FindMany(vec![
                "dog".to_string(),
                "cat".to_string()
            ]))
        );
        assert_eq!(
            parse("findmany dog"),
            ParsedCommand::Recognized(Command::FindMany(vec!["dog".to_string()]))
        );
    }

    #[test]
    fn test_find_with_list_is_malformed_not_findmany() {
        assert_eq!(parse("find dog,cat"), ParsedCommand::Malformed(CommandKind::Find));
        assert_eq!(parse("findmany dog,,cat"), ParsedCommand::Malformed(CommandKind::FindMany));
    }

    #[test]
    fn test_parse_lca() {
        assert_eq!(parse("lca 1 4"), ParsedCommand::Recognized(Command::Lca(1, 4)));
        assert_eq!(parse("  lca 1   4  "), ParsedCommand::Recognized(Command::Lca(1, 4)));
        assert_eq!(parse("lca abc 4"), ParsedCommand::Malformed(CommandKind::Lca));
        assert_eq!(parse("lca 1"), ParsedCommand::Malformed(CommandKind::Lca));
    }

    #[test]
    fn test_unrecognized() {
        assert_eq!(parse(""), ParsedCommand::Unrecognized);
        assert_eq!(parse("delete 1"), ParsedCommand::Unrecognized);
        assert_eq!(parse("LCA 1 4"), ParsedCommand::Unrecognized);
        assert_eq!(parse("lcax 1 4"), ParsedCommand::Unrecognized);
    }

    #[test]
    fn test_command_kind_names() {
        assert_eq!(CommandKind::FindMany.to_string(), "findmany");
        assert_eq!(
            serde_json::to_string(&CommandKind::FindMany).unwrap(),
            "\"findmany\""
        );
        assert_eq!(Command::Lca(1, 2).kind(), CommandKind::Lca);
    }
}
