use crate::attribute::{Attribute, AttributeKind};
use rand::seq::SliceRandom as _;
use rand::Rng;

/// A single cell of a [`Table`].
///
/// Categorical values are stored as indices into the attribute's [`Domain`](crate::Domain).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    Numeric(f64),
    Categorical(usize),
}

impl Value {
    pub fn as_f64(self) -> Option<f64> {
        match self {
            Self::Numeric(v) => Some(v),
            Self::Categorical(_) => None,
        }
    }

    pub fn as_index(self) -> Option<usize> {
        match self {
            Self::Numeric(_) => None,
            Self::Categorical(i) => Some(i),
        }
    }

    /// `NaN` marks a missing numeric value.
    pub fn is_missing(self) -> bool {
        matches!(self, Self::Numeric(v) if v.is_nan())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Row(Vec<Value>);

impl Row {
    pub(crate) fn new(values: Vec<Value>) -> Self {
        Self(values)
    }

    pub fn values(&self) -> &[Value] {
        &self.0
    }

    pub fn get(&self, attribute: usize) -> Option<Value> {
        self.0.get(attribute).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A labeled attribute-value dataset.
///
/// Tables are built by [`TableOptions::build`](crate::TableOptions::build) and never
/// change afterwards. The target attribute, when present, is always the last one.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    name: String,
    attributes: Vec<Attribute>,
    rows: Vec<Row>,
    target_index: Option<usize>,
}

impl Table {
    pub(crate) fn from_parts(
        name: String,
        attributes: Vec<Attribute>,
        rows: Vec<Row>,
        has_target: bool,
    ) -> Self {
        debug_assert!(rows.iter().all(|r| r.len() == attributes.len()));
        debug_assert!(!has_target || !attributes.is_empty());

        let target_index = if has_target {
            Some(attributes.len() - 1)
        } else {
            None
        };
        Self {
            name,
            attributes,
            rows,
            target_index,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    pub fn attribute(&self, index: usize) -> Option<&Attribute> {
        self.attributes.get(index)
    }

    pub fn attribute_by_name(&self, name: &str) -> Option<(usize, &Attribute)> {
        self.attributes
            .iter()
            .enumerate()
            .find(|(_, a)| a.name() == name)
    }

    pub fn attribute_count(&self) -> usize {
        self.attributes.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    pub fn target_index(&self) -> Option<usize> {
        self.target_index
    }

    pub fn target(&self) -> Option<&Attribute> {
        self.target_index.map(|i| &self.attributes[i])
    }

    /// Values of one attribute in row order.
    ///
    /// # Panics
    ///
    /// Panics if `attribute` is out of range.
    pub fn column(&self, attribute: usize) -> impl '_ + Iterator<Item = Value> + Clone {
        assert!(attribute < self.attributes.len());
        self.rows.iter().map(move |r| r.0[attribute])
    }

    /// Values of a numeric attribute, or `None` if it is categorical or out of range.
    pub fn numeric_column(&self, attribute: usize) -> Option<impl '_ + Iterator<Item = f64> + Clone> {
        if !self.attribute(attribute)?.is_numeric() {
            return None;
        }
        Some(self.column(attribute).filter_map(Value::as_f64))
    }

    /// The token of a categorical cell.
    pub fn category(&self, row: usize, attribute: usize) -> Option<&str> {
        let index = self.row(row)?.get(attribute)?.as_index()?;
        match self.attributes[attribute].kind() {
            AttributeKind::Categorical(domain) => domain.value(index),
            AttributeKind::Numeric => None,
        }
    }

    pub fn shuffled<R: Rng + ?Sized>(&self, rng: &mut R) -> Self {
        let mut rows = self.rows.clone();
        rows.shuffle(rng);
        self.with_rows(rows)
    }

    /// Draws `row_count()` rows with replacement.
    pub fn bootstrap_sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Self {
        let n = self.rows.len();
        let rows = (0..n)
            .map(|_| self.rows[rng.gen_range(0..n)].clone())
            .collect();
        self.with_rows(rows)
    }

    /// Splits the rows into `[0, row)` and `[row, row_count())`.
    ///
    /// # Panics
    ///
    /// Panics if `row > row_count()`.
    pub fn split_at(&self, row: usize) -> (Self, Self) {
        let (head, tail) = self.rows.split_at(row);
        (self.with_rows(head.to_vec()), self.with_rows(tail.to_vec()))
    }

    fn with_rows(&self, rows: Vec<Row>) -> Self {
        Self {
            name: self.name.clone(),
            attributes: self.attributes.clone(),
            rows,
            target_index: self.target_index,
        }
    }
}
