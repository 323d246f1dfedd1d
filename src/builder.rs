use crate::attribute::{Attribute, Domain, DomainOrder};
use crate::table::{Row, Table, Value};
use std::collections::HashSet;
use thiserror::Error;

pub const DEFAULT_CLASS_NAME: &str = "class";

/// Target column of a table.
///
/// A numeric label yields a regression target, a string label a classification target.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Label {
    #[default]
    None,
    Numeric(Vec<f64>),
    Categorical(Vec<String>),
}

impl Label {
    pub fn numeric(values: impl Into<Vec<f64>>) -> Self {
        Self::Numeric(values.into())
    }

    pub fn categorical<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Categorical(values.into_iter().map(Into::into).collect())
    }

    pub(crate) fn rows_len(&self) -> Option<usize> {
        match self {
            Self::None => None,
            Self::Numeric(v) => Some(v.len()),
            Self::Categorical(v) => Some(v.len()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct TableOptions {
    domain_order: DomainOrder,
    class_name: String,
}

impl TableOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn domain_order(mut self, order: DomainOrder) -> Self {
        self.domain_order = order;
        self
    }

    pub fn class_name(mut self, name: impl Into<String>) -> Self {
        self.class_name = name.into();
        self
    }

    /// Builds a table with these options.
    ///
    /// Numeric attributes come first, then categorical ones, each in the given order.
    /// When `include_label` is set and `label` is not [`Label::None`], a target attribute
    /// is appended last. Otherwise the label is ignored entirely.
    pub fn build(
        &self,
        name: impl Into<String>,
        numeric: Vec<(String, Vec<f64>)>,
        categorical: Vec<(String, Vec<String>)>,
        label: Label,
        include_label: bool,
    ) -> Result<Table, BuildError> {
        let name = name.into();
        let label = if include_label { label } else { Label::None };
        let rows_len = self.check_shape(&numeric, &categorical, &label)?;
        self.check_names(&numeric, &categorical, &label)?;

        let mut attributes = Vec::with_capacity(numeric.len() + categorical.len() + 1);
        attributes.extend(numeric.iter().map(|(n, _)| Attribute::numeric(n.clone())));

        let mut encoded = Vec::with_capacity(categorical.len() + 1);
        for (n, values) in &categorical {
            let (attribute, indices) = self.categorical_attribute(n, values);
            attributes.push(attribute);
            encoded.push(indices);
        }

        let target = match &label {
            Label::None => None,
            Label::Numeric(_) => Some(Attribute::numeric(self.class_name.clone())),
            Label::Categorical(values) => {
                let (attribute, indices) = self.categorical_attribute(&self.class_name, values);
                encoded.push(indices);
                Some(attribute)
            }
        };
        let has_target = target.is_some();
        attributes.extend(target);

        let rows = (0..rows_len)
            .map(|i| {
                let mut values = Vec::with_capacity(attributes.len());
                values.extend(numeric.iter().map(|(_, c)| Value::Numeric(c[i])));
                values.extend(encoded.iter().map(|c| Value::Categorical(c[i])));
                if let Label::Numeric(c) = &label {
                    values.push(Value::Numeric(c[i]));
                }
                Row::new(values)
            })
            .collect::<Vec<_>>();

        tracing::debug!(
            table = %name,
            rows = rows.len(),
            attributes = attributes.len(),
            has_target,
            "built table"
        );
        Ok(Table::from_parts(name, attributes, rows, has_target))
    }

    fn check_shape(
        &self,
        numeric: &[(String, Vec<f64>)],
        categorical: &[(String, Vec<String>)],
        label: &Label,
    ) -> Result<usize, BuildError> {
        let lens = numeric
            .iter()
            .map(|(n, c)| (n.as_str(), c.len()))
            .chain(categorical.iter().map(|(n, c)| (n.as_str(), c.len())))
            .chain(label.rows_len().map(|len| (self.class_name.as_str(), len)));

        let mut expected = None;
        for (column, got) in lens {
            match expected {
                None => expected = Some(got),
                Some(expected) if expected != got => {
                    return Err(BuildError::ShapeMismatch {
                        column: column.to_owned(),
                        expected,
                        got,
                    });
                }
                Some(_) => {}
            }
        }
        if numeric.is_empty() && categorical.is_empty() {
            return Err(BuildError::EmptyInput);
        }
        let rows_len = expected.expect("never fails");

        if rows_len == 0 {
            let empty = categorical.first().map(|(n, _)| n.as_str()).or_else(|| {
                matches!(label, Label::Categorical(_)).then(|| self.class_name.as_str())
            });
            if let Some(column) = empty {
                return Err(BuildError::EmptyColumn {
                    column: column.to_owned(),
                });
            }
        }
        Ok(rows_len)
    }

    fn check_names(
        &self,
        numeric: &[(String, Vec<f64>)],
        categorical: &[(String, Vec<String>)],
        label: &Label,
    ) -> Result<(), BuildError> {
        let target = match label {
            Label::None => None,
            _ => Some(self.class_name.as_str()),
        };
        let mut seen = HashSet::new();
        for name in numeric
            .iter()
            .map(|(n, _)| n.as_str())
            .chain(categorical.iter().map(|(n, _)| n.as_str()))
            .chain(target)
        {
            if !seen.insert(name) {
                return Err(BuildError::DuplicateAttributeName {
                    name: name.to_owned(),
                });
            }
        }
        Ok(())
    }

    fn categorical_attribute(&self, name: &str, values: &[String]) -> (Attribute, Vec<usize>) {
        let domain = Domain::from_values(values, self.domain_order);
        tracing::trace!(attribute = name, values = domain.len(), "discovered domain");

        let indices = values
            .iter()
            .map(|v| domain.index_of(v).expect("never fails"))
            .collect();
        (Attribute::categorical(name, domain), indices)
    }
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            domain_order: DomainOrder::default(),
            class_name: DEFAULT_CLASS_NAME.to_owned(),
        }
    }
}

/// Collects columns one by one before building a [`Table`].
#[derive(Debug, Clone, Default)]
pub struct TableBuilder {
    options: TableOptions,
    numeric: Vec<(String, Vec<f64>)>,
    categorical: Vec<(String, Vec<String>)>,
    label: Label,
    include_label: bool,
}

impl TableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn options(mut self, options: TableOptions) -> Self {
        self.options = options;
        self
    }

    pub fn numeric(mut self, name: impl Into<String>, values: impl Into<Vec<f64>>) -> Self {
        self.numeric.push((name.into(), values.into()));
        self
    }

    pub fn categorical<I, S>(mut self, name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values = values.into_iter().map(Into::into).collect();
        self.categorical.push((name.into(), values));
        self
    }

    /// Sets the label and marks it as included.
    pub fn label(mut self, label: Label) -> Self {
        self.label = label;
        self.include_label = true;
        self
    }

    pub fn include_label(mut self, include: bool) -> Self {
        self.include_label = include;
        self
    }

    pub fn build(self, name: impl Into<String>) -> Result<Table, BuildError> {
        self.options.build(
            name,
            self.numeric,
            self.categorical,
            self.label,
            self.include_label,
        )
    }
}

impl Table {
    /// Builds a table with default [`TableOptions`].
    pub fn build(
        name: impl Into<String>,
        numeric: Vec<(String, Vec<f64>)>,
        categorical: Vec<(String, Vec<String>)>,
        label: Label,
        include_label: bool,
    ) -> Result<Self, BuildError> {
        TableOptions::default().build(name, numeric, categorical, label, include_label)
    }
}

#[non_exhaustive]
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BuildError {
    #[error("at least one numeric or categorical column is required")]
    EmptyInput,

    #[error("column {column:?} has {got} rows, expected {expected}")]
    ShapeMismatch {
        column: String,
        expected: usize,
        got: usize,
    },

    #[error("categorical column {column:?} has no values to infer a domain from")]
    EmptyColumn { column: String },

    #[error("attribute name {name:?} is used more than once")]
    DuplicateAttributeName { name: String },
}
