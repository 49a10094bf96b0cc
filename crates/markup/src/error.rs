#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MarkupError {
    /// No node in the searched subtree has a name starting with `name`.
    NotFound { name: String },
}

impl MarkupError {
    pub fn not_found(name: impl Into<String>) -> Self {
        MarkupError::NotFound { name: name.into() }
    }
}

impl std::fmt::Display for MarkupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MarkupError::NotFound { name } => write!(f, "could not find tag: {name}"),
        }
    }
}

impl std::error::Error for MarkupError {}

pub type MarkupResult<T> = Result<T, MarkupError>;
