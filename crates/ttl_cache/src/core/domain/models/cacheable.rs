/// Marks an operation whose result is cached under one or more cache names.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Cacheable {
    pub cache_names: Vec<String>,
}

impl Cacheable {
    pub fn new<I, S>(cache_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            cache_names: cache_names.into_iter().map(Into::into).collect(),
        }
    }
}
