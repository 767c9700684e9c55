use std::path::Path;

use hashbrown::HashSet;

use crate::Error;

/// Allow-list of accepted `highway` tag values
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoadTypeFilter {
    accepted: HashSet<String>,
}

impl RoadTypeFilter {
    /// Loads one road type per line, ignoring blank lines
    ///
    /// # Errors
    ///
    /// Returns [`Error::RoadTypesNotFound`] if the file does not exist
    pub fn from_file(path: &Path) -> Result<Self, Error> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::RoadTypesNotFound(path.to_path_buf())
            } else {
                Error::IoError(e)
            }
        })?;
        Ok(Self::parse(&contents))
    }

    pub fn parse(contents: &str) -> Self {
        Self::from_tokens(contents.lines())
    }

    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let accepted = tokens
            .into_iter()
            .map(|token| token.as_ref().trim().to_string())
            .filter(|token| !token.is_empty())
            .collect();
        Self { accepted }
    }

    pub fn accepts(&self, road_type: &str) -> bool {
        self.accepted.contains(road_type)
    }

    pub fn len(&self) -> usize {
        self.accepted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accepted.is_empty()
    }
}
