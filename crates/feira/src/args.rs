//! SQL argument builder.
//!
//! Turns a record into three parallel sequences — column names, positional
//! placeholders and bound values — covering exactly the fields that carry a
//! value. Placeholder numbering starts at `$1` and increments only for
//! included fields, so the generated statement never has numbering gaps.
//!
//! Absence is explicit: optional fields go through [`SqlArgs::push_opt`] and
//! a `None` is skipped. There is no "zero value means omit" sentinel, so a
//! missing coordinate is distinguishable from a coordinate legitimately at
//! `0.0`.

use std::sync::Arc;
use tokio_postgres::types::ToSql;

/// Maps a record's fields to column/value pairs, in field declaration order.
///
/// Column names are the field identifiers lower-cased with no other
/// transformation (no snake_case insertion); implementations write them out
/// literally, so the mapping is checked by the statement tests rather than
/// derived at runtime.
pub trait BindArgs {
    /// Push every present field of `self` into `args`.
    fn bind(&self, args: &mut SqlArgs);
}

/// Accumulator for columns, placeholders and parameter values.
///
/// Values are stored as `Arc<dyn ToSql>` so the builder stays clonable and
/// the borrow for execution (`as_refs`) is trivial to produce.
#[derive(Clone, Default)]
pub struct SqlArgs {
    exclude: Vec<String>,
    columns: Vec<String>,
    placeholders: Vec<String>,
    values: Vec<Arc<dyn ToSql + Send + Sync>>,
}

impl SqlArgs {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Exclude the given column names regardless of their value.
    ///
    /// Used for store-managed columns such as the creation timestamp, which
    /// must never be written by generic statement construction.
    pub fn exclude(mut self, columns: &[&str]) -> Self {
        self.exclude.extend(columns.iter().map(|c| c.to_string()));
        self
    }

    /// Collect the bound fields of a record.
    pub fn bind_record(mut self, record: &impl BindArgs) -> Self {
        record.bind(&mut self);
        self
    }

    /// Push a required field.
    pub fn push<T: ToSql + Send + Sync + 'static>(&mut self, column: &str, value: T) {
        if self.is_excluded(column) {
            return;
        }
        self.values.push(Arc::new(value));
        self.placeholders.push(format!("${}", self.values.len()));
        self.columns.push(column.to_string());
    }

    /// Push an optional field; `None` means "not provided" and is skipped.
    pub fn push_opt<T: ToSql + Send + Sync + 'static>(&mut self, column: &str, value: Option<T>) {
        if let Some(v) = value {
            self.push(column, v);
        }
    }

    /// Append a bare value with no column, returning its 1-based placeholder
    /// index. Used for trailing WHERE parameters.
    pub fn push_value<T: ToSql + Send + Sync + 'static>(&mut self, value: T) -> usize {
        self.values.push(Arc::new(value));
        self.values.len()
    }

    fn is_excluded(&self, column: &str) -> bool {
        self.exclude.iter().any(|c| c == column)
    }

    /// Number of included fields.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether no field was included.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Included column names, in push order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Positional placeholders, parallel to [`SqlArgs::columns`].
    pub fn placeholders(&self) -> &[String] {
        &self.placeholders
    }

    /// `col1,col2,…` for an INSERT column list.
    pub fn column_list(&self) -> String {
        self.columns.join(",")
    }

    /// `$1,$2,…` for an INSERT VALUES list.
    pub fn placeholder_list(&self) -> String {
        self.placeholders.join(",")
    }

    /// `col1 = $1,col2 = $2,…` for an UPDATE SET list.
    pub fn set_list(&self) -> String {
        self.pairs().collect::<Vec<_>>().join(",")
    }

    /// `col1 = $1 AND col2 = $2 AND …` for a WHERE clause.
    pub fn where_list(&self) -> String {
        self.pairs().collect::<Vec<_>>().join(" AND ")
    }

    fn pairs(&self) -> impl Iterator<Item = String> + '_ {
        self.columns
            .iter()
            .zip(&self.placeholders)
            .map(|(c, p)| format!("{c} = {p}"))
    }

    /// All values as references for tokio-postgres execution.
    pub fn as_refs(&self) -> Vec<&(dyn ToSql + Sync)> {
        self.values
            .iter()
            .map(|v| &**v as &(dyn ToSql + Sync))
            .collect()
    }
}

impl std::fmt::Debug for SqlArgs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqlArgs")
            .field("columns", &self.columns)
            .field("placeholders", &self.placeholders)
            .field("values", &self.values.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Probe {
        name: Option<String>,
        number: Option<i32>,
        street: Option<String>,
    }

    impl BindArgs for Probe {
        fn bind(&self, args: &mut SqlArgs) {
            args.push_opt("name", self.name.clone());
            args.push_opt("number", self.number);
            args.push_opt("street", self.street.clone());
        }
    }

    #[test]
    fn sequences_are_parallel_and_ordered() {
        let args = SqlArgs::new().bind_record(&Probe {
            name: Some("RAPOSO TAVARES".into()),
            number: Some(500),
            street: Some("Rua dos Bobos".into()),
        });

        assert_eq!(args.columns(), &["name", "number", "street"]);
        assert_eq!(args.placeholders(), &["$1", "$2", "$3"]);
        assert_eq!(args.as_refs().len(), 3);
    }

    #[test]
    fn skipped_fields_leave_no_numbering_gap() {
        let args = SqlArgs::new().bind_record(&Probe {
            name: Some("PIRITUBA".into()),
            number: None,
            street: Some("Rua X".into()),
        });

        assert_eq!(args.columns(), &["name", "street"]);
        assert_eq!(args.placeholders(), &["$1", "$2"]);
    }

    #[test]
    fn fully_absent_record_yields_empty_sequences() {
        let args = SqlArgs::new().bind_record(&Probe {
            name: None,
            number: None,
            street: None,
        });

        assert!(args.is_empty());
        assert!(args.columns().is_empty());
        assert!(args.placeholders().is_empty());
        assert!(args.as_refs().is_empty());
    }

    #[test]
    fn excluded_column_never_appears_regardless_of_value() {
        let mut args = SqlArgs::new().exclude(&["createdat"]);
        args.push("name", "LAPA");
        args.push("createdat", "2022-01-01");
        args.push("street", "Rua Y");

        assert_eq!(args.columns(), &["name", "street"]);
        assert_eq!(args.placeholders(), &["$1", "$2"]);
    }

    #[test]
    fn trailing_value_numbering_continues_after_fields() {
        let mut args = SqlArgs::new();
        args.push("name", "LAPA");
        args.push("street", "Rua Y");
        let idx = args.push_value("some-id");

        assert_eq!(idx, 3);
        assert_eq!(args.len(), 2);
        assert_eq!(args.as_refs().len(), 3);
    }

    #[test]
    fn rendered_lists() {
        let mut args = SqlArgs::new();
        args.push("district", "district9");
        args.push("region5", "west");

        assert_eq!(args.column_list(), "district,region5");
        assert_eq!(args.placeholder_list(), "$1,$2");
        assert_eq!(args.set_list(), "district = $1,region5 = $2");
        assert_eq!(args.where_list(), "district = $1 AND region5 = $2");
    }
}
