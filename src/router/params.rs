/// Arguments extracted by a successful dispatch.
///
/// Every argument declared by the matched route is present as a key, in
/// declaration order. Arguments belonging to an omitted optional parameter
/// map to `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params<'r, 'p> {
    entries: Vec<(&'r str, Option<&'p str>)>,
}

impl<'r, 'p> Params<'r, 'p> {
    pub(crate) fn new(entries: Vec<(&'r str, Option<&'p str>)>) -> Self {
        Self { entries }
    }

    /// Params for a route that captured nothing.
    pub(crate) fn absent(names: &'r [String]) -> Self {
        Self::new(names.iter().map(|name| (name.as_str(), None)).collect())
    }

    /// The captured value, `None` if absent or undeclared.
    pub fn get(&self, name: &str) -> Option<&'p str> {
        self.entries
            .iter()
            .find(|(key, _)| *key == name)
            .and_then(|(_, value)| *value)
    }

    /// Whether the matched route declares `name`, captured or not.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(key, _)| *key == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'r str, Option<&'p str>)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'r, 'p> IntoIterator for Params<'r, 'p> {
    type Item = (&'r str, Option<&'p str>);
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn should_distinguish_absent_from_undeclared() {
        let params = Params::new(vec![("id", Some("1")), ("slug", None)]);
        assert_eq!(params.get("id"), Some("1"));
        assert_eq!(params.get("slug"), None);
        assert!(params.contains("slug"));
        assert!(!params.contains("other"));
        assert_eq!(params.len(), 2);
    }
}
