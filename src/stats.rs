use crate::attribute::AttributeKind;
use crate::table::{Table, Value};
use ordered_float::OrderedFloat;

#[derive(Debug, Clone, PartialEq)]
pub enum AttributeSummary {
    /// Statistics over the non-missing values of a numeric attribute.
    Numeric {
        count: usize,
        missing: usize,
        min: Option<f64>,
        max: Option<f64>,
        mean: Option<f64>,
        stddev: Option<f64>,
    },

    /// Occurrences of each domain value, in domain order.
    Categorical { counts: Vec<usize> },
}

impl Table {
    /// # Panics
    ///
    /// Panics if `attribute` is out of range.
    pub fn summary(&self, attribute: usize) -> AttributeSummary {
        match self.attributes()[attribute].kind() {
            AttributeKind::Numeric => {
                let present = self
                    .column(attribute)
                    .filter(|v| !v.is_missing())
                    .filter_map(Value::as_f64);
                let count = present.clone().count();
                let (mean, stddev) = mean_and_stddev(present.clone()).unzip();
                AttributeSummary::Numeric {
                    count,
                    missing: self.row_count() - count,
                    min: present.clone().min_by_key(|&v| OrderedFloat(v)),
                    max: present.max_by_key(|&v| OrderedFloat(v)),
                    mean,
                    stddev,
                }
            }
            AttributeKind::Categorical(domain) => {
                let mut counts = vec![0; domain.len()];
                for i in self.column(attribute).filter_map(Value::as_index) {
                    counts[i] += 1;
                }
                AttributeSummary::Categorical { counts }
            }
        }
    }
}

fn mean_and_stddev(xs: impl Iterator<Item = f64> + Clone) -> Option<(f64, f64)> {
    let mut count = 0;
    let mut total = 0.0;
    for x in xs.clone() {
        count += 1;
        total += x;
    }
    if count == 0 {
        return None;
    }

    let n = count as f64;
    let m = total / n;
    let s = (xs.map(|x| (x - m).powi(2)).sum::<f64>() / n).sqrt();
    Some((m, s))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{Label, TableBuilder};

    #[test]
    fn numeric_summary_works() -> Result<(), anyhow::Error> {
        let table = TableBuilder::new()
            .numeric("x", vec![2.0, f64::NAN, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0])
            .build("t")?;

        assert_eq!(
            table.summary(0),
            AttributeSummary::Numeric {
                count: 8,
                missing: 1,
                min: Some(2.0),
                max: Some(9.0),
                mean: Some(5.0),
                stddev: Some(2.0),
            }
        );
        Ok(())
    }

    #[test]
    fn all_missing_summary() -> Result<(), anyhow::Error> {
        let table = TableBuilder::new()
            .numeric("x", vec![f64::NAN, f64::NAN])
            .build("t")?;

        assert_eq!(
            table.summary(0),
            AttributeSummary::Numeric {
                count: 0,
                missing: 2,
                min: None,
                max: None,
                mean: None,
                stddev: None,
            }
        );
        Ok(())
    }

    #[test]
    fn categorical_summary_works() -> Result<(), anyhow::Error> {
        let table = TableBuilder::new()
            .categorical("color", ["red", "blue", "red", "green", "red"])
            .label(Label::categorical(["a", "b", "a", "a", "a"]))
            .build("t")?;

        // Domain is [blue, green, red].
        assert_eq!(
            table.summary(0),
            AttributeSummary::Categorical {
                counts: vec![1, 1, 3]
            }
        );
        assert_eq!(
            table.summary(1),
            AttributeSummary::Categorical { counts: vec![4, 1] }
        );
        Ok(())
    }
}
