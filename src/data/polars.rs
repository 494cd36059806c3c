//! Polars data frames as [`Table`](super::Table).
//!
//! Float and integer columns are numeric columns, string columns are text columns.
//! Any data frame can then feed a [`CsvSource`](super::CsvSource) through
//! [`CsvSourceBuilder::from_table`](super::CsvSourceBuilder::from_table).
use polars::prelude::*;

use crate::data;

impl data::F64Column for Float64Chunked {
    fn len(&self) -> usize {
        self.len()
    }

    fn f64_iter(&self) -> Box<dyn Iterator<Item = Option<f64>> + '_> {
        Box::new(self.iter().map(|v| v.filter(|v| !v.is_nan())))
    }
}

impl data::F64Column for Int64Chunked {
    fn len(&self) -> usize {
        self.len()
    }

    fn f64_iter(&self) -> Box<dyn Iterator<Item = Option<f64>> + '_> {
        Box::new(self.iter().map(|v| v.map(|v| v as f64)))
    }
}

impl data::StrColumn for StringChunked {
    fn len(&self) -> usize {
        self.len()
    }

    fn str_iter(&self) -> Box<dyn Iterator<Item = Option<&str>> + '_> {
        Box::new(self.iter())
    }
}

#[inline]
fn series_len(s: &Series) -> usize {
    s.len()
}

impl data::Column for Series {
    fn len(&self) -> usize {
        series_len(self)
    }

    fn f64(&self) -> Option<&dyn data::F64Column> {
        if let Some(s) = self.try_f64() {
            Some(s as &dyn data::F64Column)
        } else {
            self.try_i64().map(|s| s as &dyn data::F64Column)
        }
    }

    fn str(&self) -> Option<&dyn data::StrColumn> {
        self.try_str().map(|s| s as &dyn data::StrColumn)
    }
}

impl data::Table for DataFrame {
    fn names(&self) -> Vec<&str> {
        self.get_column_names()
            .into_iter()
            .map(|n| n.as_str())
            .collect()
    }

    fn column(&self, name: &str) -> Option<&dyn data::Column> {
        self.column(name)
            .map(|c| c.as_materialized_series() as &dyn data::Column)
            .ok()
    }
}
