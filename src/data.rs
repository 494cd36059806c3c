//! Data sources of the plotted series.
//!
//! Each series reads its data from a [`DataSource`], which exposes an independent variable
//! (strictly increasing) and a dependent variable of the same length.
//! Two implementations are provided:
//!  - [`BasicSource`] holds vectors given by the caller
//!  - [`CsvSource`] extracts two columns of a [`Table`], after optional row filtering,
//!    range bounding and processing.
//!
//! Custom sources implement [`DataSource`] directly.
//!
//! Tables are collections of named columns. [`TableSource`] is a simple owned table,
//! filled by hand or by the CSV parser (feature `data-csv`).
//! Polars data frames are also tables when the `data-polars` feature is enabled.
use std::fmt;

use crate::eng;

mod basic;
mod csv_source;

#[cfg(feature = "data-csv")]
mod csv;
#[cfg(feature = "data-polars")]
pub mod polars;

pub use basic::BasicSource;
#[cfg(feature = "data-csv")]
pub use csv::{CsvColSpec, CsvParseError, CsvParser};
pub use csv_source::{CsvSource, CsvSourceBuilder, ProcError, ProcFn, RowFilter};

/// Number of significant digits kept from the data.
pub(crate) const PRECISION: usize = 10;

/// One of the two variables of a data source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Var {
    /// The independent variable
    Indep,
    /// The dependent variable
    Dep,
}

impl fmt::Display for Var {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Var::Indep => f.write_str("independent"),
            Var::Dep => f.write_str("dependent"),
        }
    }
}

/// Errors of data sources
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// The two variables don't have the same number of elements
    LengthMismatch {
        /// Length of the independent variable
        indep: usize,
        /// Length of the dependent variable
        dep: usize,
    },
    /// A variable has no element
    EmptyVar(Var),
    /// A variable contains NaN or infinite values
    NonFinite(Var),
    /// The independent variable is not strictly increasing
    NotIncreasing,
    /// The declared minimum is greater than the declared maximum
    InvalidBounds {
        /// Declared minimum
        min: f64,
        /// Declared maximum
        max: f64,
    },
    /// No element of the independent variable is within the declared bounds
    EmptyAfterBounding,
    /// A column could not be found in the table
    UnknownColumn {
        /// Column name
        name: String,
        /// Role of the column
        var: Var,
    },
    /// A column exists but does not hold numbers
    NonNumericColumn {
        /// Column name
        name: String,
    },
    /// A column of the row filter could not be found in the table
    RowFilterColumn {
        /// Column name
        name: String,
    },
    /// A row filter column was given without accepted value
    EmptyRowFilter {
        /// Column name
        name: String,
    },
    /// A variable is empty after row filtering and null removal
    FilteredEmpty(Var),
    /// The processing function returned an error
    Processing {
        /// Name of the processing function
        name: String,
        /// Error message
        message: String,
    },
    /// The processing function returned variables of different lengths
    ProcessedLengthMismatch,
    /// The processing function returned an empty variable
    ProcessedEmpty(Var),
    /// The processing function returned an invalid independent variable
    ProcessedNotIncreasing,
    /// CSV parsing error
    #[cfg(feature = "data-csv")]
    Csv(CsvParseError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::LengthMismatch { indep, dep } => write!(
                f,
                "independent and dependent variables must have the same number of elements ({indep} != {dep})"
            ),
            Error::EmptyVar(var) => write!(f, "{var} variable is empty"),
            Error::NonFinite(var) => write!(f, "{var} variable contains non-finite values"),
            Error::NotIncreasing => write!(f, "independent variable is not strictly increasing"),
            Error::InvalidBounds { min, max } => write!(
                f,
                "independent variable minimum ({min}) is greater than maximum ({max})"
            ),
            Error::EmptyAfterBounding => write!(
                f,
                "independent variable is empty after minimum/maximum range bounding"
            ),
            Error::UnknownColumn { name, var } => {
                write!(f, "column '{name}' ({var} column label) could not be found")
            }
            Error::NonNumericColumn { name } => write!(f, "column '{name}' is not numeric"),
            Error::RowFilterColumn { name } => {
                write!(f, "column '{name}' in row filter could not be found")
            }
            Error::EmptyRowFilter { name } => {
                write!(f, "row filter of column '{name}' has no value")
            }
            Error::FilteredEmpty(var) => write!(f, "filtered {var} variable is empty"),
            Error::Processing { name, message } => {
                write!(f, "processing function {name} failed: {message}")
            }
            Error::ProcessedLengthMismatch => write!(
                f,
                "processed independent and dependent variables are of different length"
            ),
            Error::ProcessedEmpty(var) => write!(f, "processed {var} variable is empty"),
            Error::ProcessedNotIncreasing => write!(
                f,
                "processed independent variable is not strictly increasing"
            ),
            #[cfg(feature = "data-csv")]
            Error::Csv(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            #[cfg(feature = "data-csv")]
            Error::Csv(err) => Some(err),
            _ => None,
        }
    }
}

#[cfg(feature = "data-csv")]
impl From<CsvParseError> for Error {
    fn from(err: CsvParseError) -> Self {
        Error::Csv(err)
    }
}

/// The data of a series: an independent and a dependent variable.
///
/// Implementations must guarantee that both variables have the same length,
/// that they only hold finite values and that the independent variable is strictly increasing.
/// [`check_vars`] is available to validate data in custom setters.
///
/// Stringification is done by [`fmt::Display`]. [`write_vars`] prints the variables
/// in the format shared by the provided sources.
pub trait DataSource: fmt::Display + fmt::Debug {
    /// The independent variable
    fn indep_var(&self) -> &[f64];

    /// The dependent variable
    fn dep_var(&self) -> &[f64];

    /// Replace the independent variable.
    /// The new variable must have the same length as the dependent variable.
    fn set_indep_var(&mut self, indep_var: Vec<f64>) -> Result<(), Error>;

    /// Replace the dependent variable.
    /// The new variable must have the same length as the independent variable.
    fn set_dep_var(&mut self, dep_var: Vec<f64>) -> Result<(), Error>;

    /// Declared lower bound of the independent variable, if any
    fn indep_min(&self) -> Option<f64> {
        None
    }

    /// Declared upper bound of the independent variable, if any
    fn indep_max(&self) -> Option<f64> {
        None
    }

    /// Number of data points
    fn len(&self) -> usize {
        self.indep_var().len()
    }
}

/// Check the invariants of a pair of variables
pub fn check_vars(indep_var: &[f64], dep_var: &[f64]) -> Result<(), Error> {
    if indep_var.is_empty() {
        return Err(Error::EmptyVar(Var::Indep));
    }
    if dep_var.is_empty() {
        return Err(Error::EmptyVar(Var::Dep));
    }
    if indep_var.len() != dep_var.len() {
        return Err(Error::LengthMismatch {
            indep: indep_var.len(),
            dep: dep_var.len(),
        });
    }
    check_finite(indep_var, Var::Indep)?;
    check_finite(dep_var, Var::Dep)?;
    check_increasing(indep_var)
}

fn check_finite(var: &[f64], which: Var) -> Result<(), Error> {
    if var.iter().all(|v| v.is_finite()) {
        Ok(())
    } else {
        Err(Error::NonFinite(which))
    }
}

fn check_increasing(indep_var: &[f64]) -> Result<(), Error> {
    if indep_var.windows(2).all(|w| w[1] > w[0]) {
        Ok(())
    } else {
        Err(Error::NotIncreasing)
    }
}

/// Round every value to the data precision
pub(crate) fn round_var(mut var: Vec<f64>) -> Vec<f64> {
    for v in var.iter_mut() {
        *v = eng::round_mantissa(*v, PRECISION);
    }
    var
}

/// Raw variables, declared bounds and the resulting bounded variables.
/// Shared by the provided sources.
#[derive(Debug, Clone)]
pub(crate) struct BoundedVars {
    raw_indep: Vec<f64>,
    raw_dep: Vec<f64>,
    min: Option<f64>,
    max: Option<f64>,
    indep: Vec<f64>,
    dep: Vec<f64>,
}

impl BoundedVars {
    pub(crate) fn new(indep_var: Vec<f64>, dep_var: Vec<f64>) -> Result<Self, Error> {
        let raw_indep = round_var(indep_var);
        let raw_dep = round_var(dep_var);
        check_vars(&raw_indep, &raw_dep)?;
        Ok(BoundedVars {
            indep: raw_indep.clone(),
            dep: raw_dep.clone(),
            raw_indep,
            raw_dep,
            min: None,
            max: None,
        })
    }

    pub(crate) fn indep(&self) -> &[f64] {
        &self.indep
    }

    pub(crate) fn dep(&self) -> &[f64] {
        &self.dep
    }

    pub(crate) fn min(&self) -> Option<f64> {
        self.min
    }

    pub(crate) fn max(&self) -> Option<f64> {
        self.max
    }

    pub(crate) fn set_vars(&mut self, indep_var: Vec<f64>, dep_var: Vec<f64>) -> Result<(), Error> {
        let raw_indep = round_var(indep_var);
        let raw_dep = round_var(dep_var);
        check_vars(&raw_indep, &raw_dep)?;
        let (indep, dep) = bound(&raw_indep, &raw_dep, self.min, self.max)?;
        self.raw_indep = raw_indep;
        self.raw_dep = raw_dep;
        self.indep = indep;
        self.dep = dep;
        Ok(())
    }

    pub(crate) fn set_indep(&mut self, indep_var: Vec<f64>) -> Result<(), Error> {
        let dep = self.raw_dep.clone();
        self.set_vars(indep_var, dep)
    }

    pub(crate) fn set_dep(&mut self, dep_var: Vec<f64>) -> Result<(), Error> {
        let indep = self.raw_indep.clone();
        self.set_vars(indep, dep_var)
    }

    pub(crate) fn set_bounds(&mut self, min: Option<f64>, max: Option<f64>) -> Result<(), Error> {
        let min = min.map(|v| eng::round_mantissa(v, PRECISION));
        let max = max.map(|v| eng::round_mantissa(v, PRECISION));
        if let (Some(min), Some(max)) = (min, max) {
            if min > max {
                return Err(Error::InvalidBounds { min, max });
            }
        }
        let (indep, dep) = bound(&self.raw_indep, &self.raw_dep, min, max)?;
        self.min = min;
        self.max = max;
        self.indep = indep;
        self.dep = dep;
        Ok(())
    }
}

/// Keep the points whose independent value is within `[min, max]`
fn bound(
    indep: &[f64],
    dep: &[f64],
    min: Option<f64>,
    max: Option<f64>,
) -> Result<(Vec<f64>, Vec<f64>), Error> {
    let min = min.unwrap_or(f64::NEG_INFINITY);
    let max = max.unwrap_or(f64::INFINITY);
    let (indep, dep): (Vec<f64>, Vec<f64>) = indep
        .iter()
        .zip(dep.iter())
        .filter(|(x, _)| **x >= min && **x <= max)
        .map(|(x, y)| (*x, *y))
        .unzip();
    if indep.is_empty() {
        return Err(Error::EmptyAfterBounding);
    }
    Ok((indep, dep))
}

const VECTOR_WIDTH: usize = 50;

/// Write the values of a vector as `[ 1.0, 2.0, 3.0 ]`,
/// wrapping lines at 50 characters and indenting continuation lines by `indent`.
pub fn write_vector(f: &mut fmt::Formatter<'_>, values: &[f64], indent: usize) -> fmt::Result {
    let items: Vec<String> = values.iter().map(|v| format!("{v:?}")).collect();
    let mut col = indent + 1;
    f.write_str("[")?;
    for (i, item) in items.iter().enumerate() {
        let last = i + 1 == items.len();
        let sep = if last { "" } else { "," };
        let len = item.len() + sep.len() + 1;
        let tail = if last { 2 } else { 0 };
        if i > 0 && col + len + tail > VECTOR_WIDTH {
            write!(f, "\n{:indent$}", "")?;
            col = indent;
        }
        write!(f, " {item}{sep}")?;
        col += len;
    }
    f.write_str(" ]")
}

/// Write the independent and dependent variables of a data source
pub fn write_vars(f: &mut fmt::Formatter<'_>, src: &dyn DataSource) -> fmt::Result {
    const INDEP: &str = "Independent variable: ";
    const DEP: &str = "Dependent variable: ";
    f.write_str(INDEP)?;
    write_vector(f, src.indep_var(), INDEP.len())?;
    writeln!(f)?;
    f.write_str(DEP)?;
    write_vector(f, src.dep_var(), DEP.len())
}

pub(crate) fn write_bounds(f: &mut fmt::Formatter<'_>, min: Option<f64>, max: Option<f64>) -> fmt::Result {
    match min {
        Some(min) => writeln!(f, "Independent variable minimum: {}", fmt_num(min))?,
        None => writeln!(f, "Independent variable minimum: -inf")?,
    }
    match max {
        Some(max) => writeln!(f, "Independent variable maximum: {}", fmt_num(max)),
        None => writeln!(f, "Independent variable maximum: +inf"),
    }
}

/// Integers without fractional part, others in shortest form (`2`, `0.5`, `2e-12`)
fn fmt_num(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e16 {
        format!("{v}")
    } else {
        format!("{v:?}")
    }
}

/// Sample value of a column, borrowing string data.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum Sample<'a> {
    /// Null value
    #[default]
    Null,
    /// Numeric value
    Num(f64),
    /// Text value
    Str(&'a str),
}

impl Sample<'_> {
    /// Check if the sample is null
    pub fn is_null(&self) -> bool {
        matches!(self, Sample::Null)
    }

    /// Get the sample as a numeric value, if possible
    pub fn as_num(&self) -> Option<f64> {
        match self {
            Sample::Num(v) => Some(*v),
            _ => None,
        }
    }

    /// Check whether this sample matches an owned one.
    /// Numbers match when they are equal once rounded to the data precision.
    pub fn matches(&self, other: &OwnedSample) -> bool {
        match (self, other) {
            (Sample::Null, OwnedSample::Null) => true,
            (Sample::Num(a), OwnedSample::Num(b)) => {
                eng::round_mantissa(*a, PRECISION) == eng::round_mantissa(*b, PRECISION)
            }
            (Sample::Str(a), OwnedSample::Str(b)) => *a == b.as_str(),
            _ => false,
        }
    }
}

/// Owned version of [`Sample`], used to describe row filters.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum OwnedSample {
    /// Null value
    #[default]
    Null,
    /// Numeric value
    Num(f64),
    /// Text value
    Str(String),
}

impl fmt::Display for OwnedSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OwnedSample::Null => f.write_str("(null)"),
            OwnedSample::Num(v) => write!(f, "{v}"),
            OwnedSample::Str(s) => f.write_str(s),
        }
    }
}

impl From<f64> for OwnedSample {
    fn from(val: f64) -> Self {
        OwnedSample::Num(val)
    }
}

impl From<i64> for OwnedSample {
    fn from(val: i64) -> Self {
        OwnedSample::Num(val as f64)
    }
}

impl From<i32> for OwnedSample {
    fn from(val: i32) -> Self {
        OwnedSample::Num(val as f64)
    }
}

impl From<&str> for OwnedSample {
    fn from(val: &str) -> Self {
        OwnedSample::Str(val.to_string())
    }
}

impl From<String> for OwnedSample {
    fn from(val: String) -> Self {
        OwnedSample::Str(val)
    }
}

/// Trait for a column of unspecified type.
pub trait Column: fmt::Debug {
    /// Get the length of the column
    fn len(&self) -> usize;

    /// Get the column as a f64 column, if possible
    fn f64(&self) -> Option<&dyn F64Column> {
        None
    }

    /// Get the column as a str column, if possible
    fn str(&self) -> Option<&dyn StrColumn> {
        None
    }

    /// Get an iterator over the samples in the column
    fn sample_iter(&self) -> Box<dyn Iterator<Item = Sample<'_>> + '_> {
        if let Some(col) = self.f64() {
            Box::new(col.f64_iter().map(|v| v.map_or(Sample::Null, Sample::Num)))
        } else if let Some(col) = self.str() {
            Box::new(col.str_iter().map(|v| v.map_or(Sample::Null, Sample::Str)))
        } else {
            Box::new(std::iter::repeat_n(Sample::Null, self.len()))
        }
    }
}

/// Trait for a column of f64 values
pub trait F64Column: fmt::Debug {
    /// Get the length of the column
    fn len(&self) -> usize;

    /// Get an iterator over the f64 values in the column.
    /// Null and NaN values are yielded as `None`.
    fn f64_iter(&self) -> Box<dyn Iterator<Item = Option<f64>> + '_>;
}

/// Trait for a column of string values
pub trait StrColumn: fmt::Debug {
    /// Get the length of the column
    fn len(&self) -> usize;

    /// Get an iterator over the string values in the column
    fn str_iter(&self) -> Box<dyn Iterator<Item = Option<&str>> + '_>;
}

/// A collection of named columns
pub trait Table: fmt::Debug {
    /// Get the names of the columns in the table
    fn names(&self) -> Vec<&str>;

    /// Get a column by name
    fn column(&self, name: &str) -> Option<&dyn Column>;
}

impl F64Column for Vec<f64> {
    fn len(&self) -> usize {
        self.len()
    }

    fn f64_iter(&self) -> Box<dyn Iterator<Item = Option<f64>> + '_> {
        Box::new(
            self.iter()
                .copied()
                .map(|f| if f.is_nan() { None } else { Some(f) }),
        )
    }
}

impl Column for Vec<f64> {
    fn len(&self) -> usize {
        self.len()
    }

    fn f64(&self) -> Option<&dyn F64Column> {
        Some(self)
    }
}

impl StrColumn for Vec<Option<String>> {
    fn len(&self) -> usize {
        self.len()
    }

    fn str_iter(&self) -> Box<dyn Iterator<Item = Option<&str>> + '_> {
        Box::new(self.iter().map(|s| s.as_deref()))
    }
}

impl Column for Vec<Option<String>> {
    fn len(&self) -> usize {
        self.len()
    }

    fn str(&self) -> Option<&dyn StrColumn> {
        Some(self)
    }
}

/// Column implementation backed by vectors, type known at runtime
#[derive(Debug, Clone, PartialEq)]
pub enum VecColumn {
    /// f64 column, NaN is null
    F64(Vec<f64>),
    /// string column
    Str(Vec<Option<String>>),
}

impl From<Vec<f64>> for VecColumn {
    fn from(v: Vec<f64>) -> Self {
        VecColumn::F64(v)
    }
}

impl From<Vec<Option<String>>> for VecColumn {
    fn from(v: Vec<Option<String>>) -> Self {
        VecColumn::Str(v)
    }
}

impl From<Vec<&str>> for VecColumn {
    fn from(v: Vec<&str>) -> Self {
        VecColumn::Str(v.into_iter().map(|s| Some(s.to_string())).collect())
    }
}

impl Column for VecColumn {
    fn len(&self) -> usize {
        match self {
            VecColumn::F64(v) => v.len(),
            VecColumn::Str(v) => v.len(),
        }
    }

    fn f64(&self) -> Option<&dyn F64Column> {
        match self {
            VecColumn::F64(v) => Some(v),
            _ => None,
        }
    }

    fn str(&self) -> Option<&dyn StrColumn> {
        match self {
            VecColumn::Str(v) => Some(v),
            _ => None,
        }
    }
}

/// Simple table backed by vectors.
/// This table owns the data and ensures that all columns have the same length.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableSource {
    heads: Vec<String>,
    columns: Vec<VecColumn>,
    len: usize,
}

impl TableSource {
    /// Create a new empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the column names
    pub fn heads(&self) -> &[String] {
        &self.heads
    }

    /// Add a column with the given name.
    /// A column of the same name is replaced.
    /// Shorter columns are padded with null values.
    pub fn add_column(&mut self, name: &str, col: VecColumn) {
        if let Some(pos) = self.heads.iter().position(|h| h == name) {
            self.columns[pos] = col;
        } else {
            self.heads.push(name.to_string());
            self.columns.push(col);
        }
        self.len = self.columns.iter().map(|c| c.len()).max().unwrap_or(0);
        for col in &mut self.columns {
            match col {
                VecColumn::F64(vec) => vec.resize(self.len, f64::NAN),
                VecColumn::Str(vec) => vec.resize(self.len, None),
            }
        }
    }

    /// Add a column with the given name, returning self for chaining
    pub fn with_column(mut self, name: &str, col: VecColumn) -> Self {
        self.add_column(name, col);
        self
    }

    /// Add a f64 column with the given name, returning self for chaining
    pub fn with_f64_column(mut self, name: &str, col: Vec<f64>) -> Self {
        self.add_column(name, VecColumn::F64(col));
        self
    }

    /// Add a string column with the given name, returning self for chaining
    pub fn with_str_column(mut self, name: &str, col: Vec<Option<String>>) -> Self {
        self.add_column(name, VecColumn::Str(col));
        self
    }

    /// Get the number of rows in the table
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check whether the table has no row
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Table for TableSource {
    fn names(&self) -> Vec<&str> {
        self.heads.iter().map(|s| s.as_str()).collect()
    }

    fn column(&self, name: &str) -> Option<&dyn Column> {
        let idx = self.heads.iter().position(|k| k == name)?;
        self.columns.get(idx).map(|c| c as &dyn Column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Stored {
        indep: Vec<f64>,
        dep: Vec<f64>,
    }

    impl fmt::Display for Stored {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write_vars(f, self)
        }
    }

    impl DataSource for Stored {
        fn indep_var(&self) -> &[f64] {
            &self.indep
        }

        fn dep_var(&self) -> &[f64] {
            &self.dep
        }

        fn set_indep_var(&mut self, indep_var: Vec<f64>) -> Result<(), Error> {
            check_vars(&indep_var, &self.dep)?;
            self.indep = indep_var;
            Ok(())
        }

        fn set_dep_var(&mut self, dep_var: Vec<f64>) -> Result<(), Error> {
            check_vars(&self.indep, &dep_var)?;
            self.dep = dep_var;
            Ok(())
        }
    }

    #[test]
    fn custom_source_display() {
        let src = Stored {
            indep: vec![1.0, 2.0, 3.0],
            dep: vec![-1.0, 1.0, -1.0],
        };
        assert_eq!(
            src.to_string(),
            "Independent variable: [ 1.0, 2.0, 3.0 ]\nDependent variable: [ -1.0, 1.0, -1.0 ]"
        );
    }

    #[test]
    fn custom_source_setters() {
        let mut src = Stored {
            indep: vec![1.0, 2.0, 3.0],
            dep: vec![-1.0, 1.0, -1.0],
        };
        assert_eq!(
            src.set_indep_var(vec![1.0, 2.0]),
            Err(Error::LengthMismatch { indep: 2, dep: 3 })
        );
        assert_eq!(
            src.set_indep_var(vec![1.0, 3.0, 2.0]),
            Err(Error::NotIncreasing)
        );
        src.set_dep_var(vec![0.0, 0.5, 1.0]).unwrap();
        assert_eq!(src.dep_var(), &[0.0, 0.5, 1.0]);
        assert_eq!(src.indep_min(), None);
    }

    #[test]
    fn vector_wrapping() {
        struct V(Vec<f64>);
        impl fmt::Display for V {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write_vector(f, &self.0, 4)
            }
        }
        let v = V((1..=12).map(|i| i as f64 * 100.0).collect());
        let s = v.to_string();
        assert!(s.starts_with("[ 100.0, 200.0,"));
        assert!(s.ends_with(" 1200.0 ]"));
        for line in s.lines() {
            assert!(line.len() <= VECTOR_WIDTH, "line too long: {line:?}");
        }
        assert!(s.lines().skip(1).all(|l| l.starts_with("    ")));
    }

    #[test]
    fn check_vars_errors() {
        assert_eq!(check_vars(&[], &[]), Err(Error::EmptyVar(Var::Indep)));
        assert_eq!(check_vars(&[1.0], &[]), Err(Error::EmptyVar(Var::Dep)));
        assert_eq!(
            check_vars(&[1.0, f64::NAN], &[1.0, 2.0]),
            Err(Error::NonFinite(Var::Indep))
        );
        assert_eq!(
            check_vars(&[1.0, 2.0], &[1.0, f64::INFINITY]),
            Err(Error::NonFinite(Var::Dep))
        );
        assert_eq!(check_vars(&[1.0, 1.0], &[1.0, 2.0]), Err(Error::NotIncreasing));
        assert_eq!(check_vars(&[1.0], &[5.0]), Ok(()));
    }

    #[test]
    fn table_source_padding() {
        let table = TableSource::new()
            .with_f64_column("x", vec![1.0, 2.0, 3.0])
            .with_str_column("name", vec![Some("a".to_string())]);
        assert_eq!(table.len(), 3);
        assert_eq!(table.names(), vec!["x", "name"]);

        let names: Vec<Sample> = table.column("name").unwrap().sample_iter().collect();
        assert_eq!(names, vec![Sample::Str("a"), Sample::Null, Sample::Null]);

        let x: Vec<Option<f64>> = table.column("x").unwrap().f64().unwrap().f64_iter().collect();
        assert_eq!(x, vec![Some(1.0), Some(2.0), Some(3.0)]);
        assert!(table.column("y").is_none());
    }

    #[test]
    fn sample_matching() {
        assert!(Sample::Num(0.1 + 0.2).matches(&OwnedSample::Num(0.3)));
        assert!(Sample::Str("on").matches(&"on".into()));
        assert!(!Sample::Str("on").matches(&OwnedSample::Num(1.0)));
        assert!(Sample::Null.matches(&OwnedSample::Null));
    }
}
