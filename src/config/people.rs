use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, ErrorKind};
use std::path::Path;

/// Default people directory file name, looked up next to the dumps
pub const PEOPLE_FILE: &str = "people.json";

/// Maps a GitHub login to the chat member id used in `<@id>` mentions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PeopleDirectory {
    members: HashMap<String, String>,
}

impl PeopleDirectory {
    pub fn new(members: HashMap<String, String>) -> Self {
        Self { members }
    }

    /// Chat id for `login`. Logins mapped to an empty id count as unknown.
    pub fn mention_id(&self, login: &str) -> Option<&str> {
        self.members
            .get(login)
            .map(String::as_str)
            .filter(|id| !id.is_empty())
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Load the people directory from a JSON object file.
///
/// If the file doesn't exist, returns an empty directory.
/// If the file exists but is not a `{login: id}` object, returns an error.
pub fn load_people(path: &Path) -> Result<PeopleDirectory> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!("no people directory at {}", path.display());
            return Ok(PeopleDirectory::default());
        }
        Err(e) => {
            return Err(e).with_context(|| {
                format!("Failed to open people directory at {}", path.display())
            })
        }
    };

    let members: HashMap<String, String> = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse people directory {}", path.display()))?;

    Ok(PeopleDirectory::new(members))
}
