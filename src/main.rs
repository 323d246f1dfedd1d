use anyhow::Context as _;
use clap::{Parser, ValueEnum};
use labeltable::{export, BuildError, DomainOrder, Label, Table, TableOptions, DEFAULT_CLASS_NAME};
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Deserialize)]
struct Column<T> {
    name: String,
    data: Vec<T>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum LabelData {
    Numeric(Vec<f64>),
    Categorical(Vec<String>),
}

// `null` numeric cells become missing values.
#[derive(Debug, Deserialize)]
struct Input {
    name: String,
    #[serde(default)]
    numeric: Vec<Column<Option<f64>>>,
    #[serde(default)]
    categorical: Vec<Column<String>>,
    label: Option<LabelData>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Csv,
    Arff,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Order {
    Lexicographic,
    FirstSeen,
}

/// Reads columns as JSON from stdin and writes the labeled table to stdout.
#[derive(Debug, Parser)]
#[command(name = "labeltable", version)]
struct Opt {
    /// Output format
    #[arg(long, value_enum, default_value = "csv")]
    format: Format,

    /// Ignore the label even if the input has one
    #[arg(long)]
    no_label: bool,

    /// Ordering of discovered categorical values
    #[arg(long, value_enum, default_value = "lexicographic")]
    domain_order: Order,

    /// Name of the target attribute
    #[arg(long, default_value = DEFAULT_CLASS_NAME)]
    class_name: String,
}

fn build_table(input: Input, options: &TableOptions, include_label: bool) -> Result<Table, BuildError> {
    let label = match input.label {
        None => Label::None,
        Some(LabelData::Numeric(v)) => Label::Numeric(v),
        Some(LabelData::Categorical(v)) => Label::Categorical(v),
    };
    let numeric = input
        .numeric
        .into_iter()
        .map(|c| (c.name, c.data.into_iter().map(|v| v.unwrap_or(f64::NAN)).collect()))
        .collect();
    let categorical = input
        .categorical
        .into_iter()
        .map(|c| (c.name, c.data))
        .collect();
    options.build(input.name, numeric, categorical, label, include_label)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let opt = Opt::parse();
    let input: Input = serde_json::from_reader(std::io::stdin().lock())
        .context("failed to parse input columns")?;

    let order = match opt.domain_order {
        Order::Lexicographic => DomainOrder::Lexicographic,
        Order::FirstSeen => DomainOrder::FirstSeen,
    };
    let options = TableOptions::new()
        .domain_order(order)
        .class_name(opt.class_name);
    let table = build_table(input, &options, !opt.no_label)?;

    let stdout = std::io::stdout();
    match opt.format {
        Format::Csv => export::write_csv(&table, stdout.lock())?,
        Format::Arff => export::write_arff(&table, stdout.lock())?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use labeltable::Value;

    fn build(json: &str) -> Result<Table, anyhow::Error> {
        let input: Input = serde_json::from_str(json)?;
        Ok(build_table(input, &TableOptions::default(), true)?)
    }

    #[test]
    fn numeric_label_is_regression_target() -> Result<(), anyhow::Error> {
        let table = build(r#"{"name": "t", "numeric": [{"name": "x", "data": [1, 2]}], "label": [0.5, 1.5]}"#)?;
        assert_eq!(table.target_index(), Some(1));
        assert!(table.target().map_or(false, |a| a.is_numeric()));
        assert_eq!(
            table.numeric_column(1).expect("never fails").collect::<Vec<_>>(),
            vec![0.5, 1.5]
        );
        Ok(())
    }

    #[test]
    fn string_label_is_classification_target() -> Result<(), anyhow::Error> {
        let table = build(
            r#"{"name": "t", "categorical": [{"name": "color", "data": ["red", "blue"]}], "label": ["yes", "no"]}"#,
        )?;
        let domain = table.target().and_then(|a| a.domain()).expect("never fails");
        assert_eq!(domain.values(), ["no", "yes"]);
        assert_eq!(table.category(0, 1), Some("yes"));
        Ok(())
    }

    #[test]
    fn absent_label_has_no_target() -> Result<(), anyhow::Error> {
        let table = build(r#"{"name": "t", "numeric": [{"name": "x", "data": [1, 2, 3]}]}"#)?;
        assert_eq!(table.attribute_count(), 1);
        assert_eq!(table.target_index(), None);
        Ok(())
    }

    #[test]
    fn null_cells_are_missing() -> Result<(), anyhow::Error> {
        let table = build(r#"{"name": "t", "numeric": [{"name": "x", "data": [1, null, 3]}]}"#)?;
        let missing = table.column(0).map(Value::is_missing).collect::<Vec<_>>();
        assert_eq!(missing, vec![false, true, false]);
        Ok(())
    }

    #[test]
    fn mixed_label_is_rejected() {
        let input = serde_json::from_str::<Input>(
            r#"{"name": "t", "numeric": [{"name": "x", "data": [1, 2]}], "label": [1, "a"]}"#,
        );
        assert!(input.is_err());
    }

    #[test]
    fn excluded_label_is_ignored() -> Result<(), anyhow::Error> {
        let input: Input = serde_json::from_str(
            r#"{"name": "t", "numeric": [{"name": "x", "data": [1, 2]}], "label": ["a"]}"#,
        )?;
        let table = build_table(input, &TableOptions::default(), false)?;
        assert_eq!(table.target_index(), None);
        Ok(())
    }
}
