use std::fmt;

/// Deduplication key for a prescriber: first and last name joined by one space.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PrescriberIdentity(String);

impl PrescriberIdentity {
    pub fn from_names(first_name: &str, last_name: &str) -> Self {
        let mut identity = String::with_capacity(first_name.len() + last_name.len() + 1);
        identity.push_str(first_name);
        identity.push(' ');
        identity.push_str(last_name);
        Self(identity)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PrescriberIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
