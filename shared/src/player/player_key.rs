// PlayerKey
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug, PartialOrd, Ord)]
pub struct PlayerKey(u64);

impl PlayerKey {
    pub fn new(value: u64) -> Self {
        PlayerKey(value)
    }

    pub fn to_u64(&self) -> u64 {
        self.0
    }
}

/// Returns true if any of the given tags starts with `prefix`
pub fn has_permission_tag<S: AsRef<str>>(tags: &[S], prefix: &str) -> bool {
    tags.iter().any(|tag| tag.as_ref().starts_with(prefix))
}
