use itertools::Itertools as _;
use std::collections::HashMap;

/// Ordering of the distinct values discovered for a categorical attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DomainOrder {
    /// Byte-wise string order.
    #[default]
    Lexicographic,

    /// Order of first appearance in the source column.
    FirstSeen,
}

/// The closed set of permitted values of a categorical attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Domain {
    values: Vec<String>,
    index: HashMap<String, usize>,
}

impl Domain {
    pub fn from_values<I, S>(values: I, order: DomainOrder) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let distinct = values
            .into_iter()
            .map(|v| v.as_ref().to_owned())
            .unique();
        let values = match order {
            DomainOrder::Lexicographic => distinct.sorted().collect::<Vec<_>>(),
            DomainOrder::FirstSeen => distinct.collect::<Vec<_>>(),
        };
        let index = values
            .iter()
            .enumerate()
            .map(|(i, v)| (v.clone(), i))
            .collect();
        Self { values, index }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn value(&self, index: usize) -> Option<&str> {
        self.values.get(index).map(String::as_str)
    }

    pub fn index_of(&self, value: &str) -> Option<usize> {
        self.index.get(value).copied()
    }

    pub fn contains(&self, value: &str) -> bool {
        self.index.contains_key(value)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AttributeKind {
    Numeric,
    Categorical(Domain),
}

/// A named column of a [`Table`](crate::Table).
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    name: String,
    kind: AttributeKind,
}

impl Attribute {
    pub fn numeric(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: AttributeKind::Numeric,
        }
    }

    pub fn categorical(name: impl Into<String>, domain: Domain) -> Self {
        Self {
            name: name.into(),
            kind: AttributeKind::Categorical(domain),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &AttributeKind {
        &self.kind
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self.kind, AttributeKind::Numeric)
    }

    pub fn is_categorical(&self) -> bool {
        matches!(self.kind, AttributeKind::Categorical(_))
    }

    /// Permitted values, or `None` for a numeric attribute.
    pub fn domain(&self) -> Option<&Domain> {
        match &self.kind {
            AttributeKind::Numeric => None,
            AttributeKind::Categorical(domain) => Some(domain),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lexicographic_domain_works() {
        let domain = Domain::from_values(["red", "blue", "red", "green"], DomainOrder::Lexicographic);
        assert_eq!(domain.values(), ["blue", "green", "red"]);
        assert_eq!(domain.index_of("red"), Some(2));
        assert_eq!(domain.index_of("purple"), None);
        assert_eq!(domain.value(0), Some("blue"));
        assert_eq!(domain.value(3), None);
    }

    #[test]
    fn first_seen_domain_works() {
        let domain = Domain::from_values(["red", "blue", "red", "green"], DomainOrder::FirstSeen);
        assert_eq!(domain.values(), ["red", "blue", "green"]);
        assert!(domain.contains("green"));
        assert_eq!(domain.len(), 3);
    }

    #[test]
    fn empty_domain() {
        let domain = Domain::from_values(Vec::<String>::new(), DomainOrder::default());
        assert!(domain.is_empty());
    }

    #[test]
    fn attribute_kinds() {
        let x = Attribute::numeric("x");
        assert!(x.is_numeric());
        assert!(x.domain().is_none());

        let color = Attribute::categorical(
            "color",
            Domain::from_values(["b", "a"], DomainOrder::Lexicographic),
        );
        assert!(color.is_categorical());
        assert_eq!(color.name(), "color");
        assert_eq!(color.domain().map(|d| d.len()), Some(2));
    }
}
