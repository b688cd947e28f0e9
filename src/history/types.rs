#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub key: String,
    pub path: String,
}

impl HistoryEntry {
    pub fn new(key: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            path: path.into(),
        }
    }

    /// Parses one `key<TAB>path` record. The split happens at the first
    /// tab, so the path half may itself contain tabs. Lines without a
    /// tab or with an empty path are not records.
    pub fn parse(line: &str) -> Option<Self> {
        let (key, path) = line.split_once('\t')?;
        if path.is_empty() {
            return None;
        }
        Some(Self::new(key, path))
    }
}
