/// How a region turns its cache name into the prefix of every stored key.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum KeyPrefix {
    /// `"{cache_name}::"`
    #[default]
    Simple,
    /// `"{prefix}{cache_name}::"`
    Prefixed(String),
    /// Keys are stored as serialized, regions share one key space.
    Disabled,
}

impl KeyPrefix {
    pub fn compute(&self, cache_name: &str) -> String {
        match self {
            KeyPrefix::Simple => format!("{cache_name}::"),
            KeyPrefix::Prefixed(prefix) => format!("{prefix}{cache_name}::"),
            KeyPrefix::Disabled => String::new(),
        }
    }

    pub fn uses_prefix(&self) -> bool {
        !matches!(self, KeyPrefix::Disabled)
    }
}
