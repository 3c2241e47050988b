use std::env;

/// Copy of the process environment, taken once at startup.
///
/// Entries keep the order they were first seen in, which is the order the
/// `env` builtin prints. A repeated name updates the value in place rather
/// than appending a duplicate. Nothing mutates the copy after
/// construction; children receive it instead of the live environment.
#[derive(Debug, Clone)]
pub struct Environment {
    entries: Vec<(String, String)>,
}

impl Environment {
    pub fn from_process() -> Self {
        Self::from_entries(env::vars())
    }

    pub fn from_entries<I>(vars: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut entries: Vec<(String, String)> = Vec::new();
        for (name, value) in vars {
            match entries.iter_mut().find(|(existing, _)| *existing == name) {
                Some(entry) => entry.1 = value,
                None => entries.push((name, value)),
            }
        }
        Environment { entries }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
