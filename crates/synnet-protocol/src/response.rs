//! Structured command responses

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Serialize, Serializer};
use synnet_core::{SynsetId, VertexId};

use crate::command::CommandKind;

/// Response to a single command line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Response {
    pub recognized_command: CommandKind,
    pub result: Payload,
}

impl Response {
    pub fn new(recognized_command: CommandKind, result: Payload) -> Self {
        Self {
            recognized_command,
            result,
        }
    }

    /// A recognized command that could not be carried out
    pub fn error(recognized_command: CommandKind) -> Self {
        Self::new(recognized_command, Payload::Error)
    }

    /// A line that matched no command
    pub fn invalid() -> Self {
        Self::new(CommandKind::Invalid, Payload::Invalid)
    }

    pub fn is_error(&self) -> bool {
        matches!(self.result, Payload::Error | Payload::Invalid)
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{recognized_command: {}, result: {}}}",
            self.recognized_command, self.result
        )
    }
}

/// Command-specific result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    Error,
    Invalid,
    Success(bool),
    Words(Vec<String>),
    Ids(BTreeSet<SynsetId>),
    IdsByWord(BTreeMap<String, BTreeSet<SynsetId>>),
    /// `None` when a queried vertex is not in the graph
    Ancestors(Option<Vec<VertexId>>),
}

impl Serialize for Payload {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Error => serializer.serialize_str("error"),
            Self::Invalid => serializer.serialize_str("invalid"),
            Self::Success(ok) => serializer.serialize_bool(*ok),
            Self::Words(words) => words.serialize(serializer),
            Self::Ids(ids) => ids.serialize(serializer),
            Self::IdsByWord(found) => found.serialize(serializer),
            Self::Ancestors(ancestors) => ancestors.serialize(serializer),
        }
    }
}

impl fmt::Display for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => f.write_str(":error"),
            Self::Invalid => f.write_str(":invalid"),
            Self::Success(ok) => write!(f, "{}", ok),
            Self::Words(words) => write!(f, "[{}]", words.join(", ")),
            Self::Ids(ids) => write!(f, "{{{}}}", join(ids)),
            Self::IdsByWord(found) => {
                let entries: Vec<String> = found
                    .iter()
                    .map(|(word, ids)| format!("{}: {{{}}}", word, join(ids)))
                    .collect();
                write!(f, "{{{}}}", entries.join(", "))
            }
            Self::Ancestors(None) => f.write_str("none"),
            Self::Ancestors(Some(ids)) => write!(f, "[{}]", join(ids)),
        }
    }
}

fn join<'a, I>(ids: I) -> String
where
    I: IntoIterator<Item = &'a SynsetId>,
{
    ids.into_iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
