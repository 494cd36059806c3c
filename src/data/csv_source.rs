use std::fmt;
use std::sync::Arc;

#[cfg(feature = "data-csv")]
use super::CsvParser;
use super::{
    BoundedVars, DataSource, Error, OwnedSample, Sample, Table, Var, write_bounds, write_vars,
};

/// Error type returned by processing functions
pub type ProcError = Box<dyn std::error::Error + Send + Sync>;

/// Processing function of a [`CsvSource`].
///
/// It receives the bounded independent and dependent variables
/// and returns the processed ones, possibly with a different length.
pub type ProcFn =
    dyn Fn(&[f64], &[f64]) -> Result<(Vec<f64>, Vec<f64>), ProcError> + Send + Sync;

/// Row filter of a [`CsvSource`].
///
/// A row is kept when, for every filtered column, its value is one of the accepted values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowFilter {
    entries: Vec<(String, Vec<OwnedSample>)>,
}

impl RowFilter {
    /// An empty filter, accepting all rows
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept rows whose column `col` holds `value`
    pub fn with_value(self, col: &str, value: impl Into<OwnedSample>) -> Self {
        self.with_values(col, [value])
    }

    /// Accept rows whose column `col` holds one of `values`
    pub fn with_values<V>(mut self, col: &str, values: impl IntoIterator<Item = V>) -> Self
    where
        V: Into<OwnedSample>,
    {
        let values = values.into_iter().map(Into::into);
        if let Some((_, vals)) = self.entries.iter_mut().find(|(c, _)| c == col) {
            vals.extend(values);
        } else {
            self.entries.push((col.to_string(), values.collect()));
        }
        self
    }

    /// Whether the filter accepts all rows
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Compute the mask of accepted rows of `table`
    fn mask(&self, table: &dyn Table, len: usize) -> Result<Vec<bool>, Error> {
        let mut mask = vec![true; len];
        for (name, values) in &self.entries {
            if values.is_empty() {
                return Err(Error::EmptyRowFilter { name: name.clone() });
            }
            let col = table
                .column(name)
                .ok_or_else(|| Error::RowFilterColumn { name: name.clone() })?;
            for (keep, sample) in mask.iter_mut().zip(col.sample_iter()) {
                *keep = *keep && values.iter().any(|v| sample.matches(v));
            }
        }
        Ok(mask)
    }
}

impl fmt::Display for RowFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.entries.is_empty() {
            return f.write_str("None");
        }
        let mut entries: Vec<_> = self.entries.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        for (name, values) in entries {
            write!(f, "\n   {name}: ")?;
            match values.as_slice() {
                [single] => write!(f, "{single}")?,
                values => {
                    let values: Vec<String> = values.iter().map(|v| v.to_string()).collect();
                    write!(f, "[{}]", values.join(", "))?
                }
            }
        }
        Ok(())
    }
}

/// Builder of a [`CsvSource`], created by [`CsvSource::builder`].
#[derive(Clone)]
pub struct CsvSourceBuilder {
    indep_col: String,
    dep_col: String,
    rfilter: RowFilter,
    indep_min: Option<f64>,
    indep_max: Option<f64>,
    proc: Option<(String, Arc<ProcFn>)>,
}

impl fmt::Debug for CsvSourceBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CsvSourceBuilder")
            .field("indep_col", &self.indep_col)
            .field("dep_col", &self.dep_col)
            .field("rfilter", &self.rfilter)
            .field("indep_min", &self.indep_min)
            .field("indep_max", &self.indep_max)
            .field("proc", &self.proc.as_ref().map(|(name, _)| name))
            .finish()
    }
}

impl CsvSourceBuilder {
    /// Keep only the rows accepted by `rfilter`
    pub fn with_row_filter(mut self, rfilter: RowFilter) -> Self {
        self.rfilter = rfilter;
        self
    }

    /// Restrict the independent variable to values greater than or equal to `min`
    pub fn with_indep_min(mut self, min: f64) -> Self {
        self.indep_min = Some(min);
        self
    }

    /// Restrict the independent variable to values less than or equal to `max`
    pub fn with_indep_max(mut self, max: f64) -> Self {
        self.indep_max = Some(max);
        self
    }

    /// Process the variables after extraction and range bounding.
    /// `name` identifies the function in messages and in the source description.
    pub fn with_proc<F>(mut self, name: &str, proc: F) -> Self
    where
        F: Fn(&[f64], &[f64]) -> Result<(Vec<f64>, Vec<f64>), ProcError> + Send + Sync + 'static,
    {
        self.proc = Some((name.to_string(), Arc::new(proc)));
        self
    }

    /// Parse CSV text with the default parser and build the source from it
    #[cfg(feature = "data-csv")]
    pub fn parse(self, data: &str) -> Result<CsvSource, Error> {
        self.parse_with(&CsvParser::new(), data)
    }

    /// Parse CSV text with `parser` and build the source from it
    #[cfg(feature = "data-csv")]
    pub fn parse_with(self, parser: &CsvParser, data: &str) -> Result<CsvSource, Error> {
        let table = parser.parse(data)?;
        self.from_table(&table)
    }

    /// Build the source from the columns of `table`.
    ///
    /// The steps are:
    ///  1. the row filter is applied
    ///  2. rows where either variable is null are dropped
    ///  3. the data is reversed if the independent variable is decreasing
    ///  4. the independent variable range is bounded
    ///  5. the processing function is called
    pub fn from_table(self, table: &dyn Table) -> Result<CsvSource, Error> {
        let indep_col = numeric_column(table, &self.indep_col, Var::Indep)?;
        let dep_col = numeric_column(table, &self.dep_col, Var::Dep)?;

        let mask = self.rfilter.mask(table, indep_col.len().max(dep_col.len()))?;

        let mut any_indep = false;
        let mut indep = Vec::new();
        let mut dep = Vec::new();
        let rows = indep_col.sample_iter().zip(dep_col.sample_iter()).zip(mask);
        for ((x, y), keep) in rows {
            if !keep {
                continue;
            }
            any_indep |= x.as_num().is_some();
            if let (Some(x), Some(y)) = (x.as_num(), y.as_num()) {
                indep.push(x);
                dep.push(y);
            }
        }
        if indep.is_empty() {
            let var = if any_indep { Var::Dep } else { Var::Indep };
            return Err(Error::FilteredEmpty(var));
        }

        if indep.len() > 1 && indep.windows(2).all(|w| w[1] < w[0]) {
            log::debug!("reversing decreasing column '{}'", self.indep_col);
            indep.reverse();
            dep.reverse();
        }

        let mut vars = BoundedVars::new(indep, dep)?;
        vars.set_bounds(self.indep_min, self.indep_max)?;

        if let Some((name, proc)) = &self.proc {
            let (indep, dep) = run_proc(name, proc.as_ref(), vars.indep(), vars.dep())?;
            vars.set_vars(indep, dep)?;
        }

        Ok(CsvSource {
            indep_col: self.indep_col,
            dep_col: self.dep_col,
            rfilter: self.rfilter,
            proc_name: self.proc.map(|(name, _)| name),
            vars,
        })
    }
}

fn numeric_column<'a>(
    table: &'a dyn Table,
    name: &str,
    var: Var,
) -> Result<&'a dyn super::Column, Error> {
    let col = table.column(name).ok_or_else(|| Error::UnknownColumn {
        name: name.to_string(),
        var,
    })?;
    if col.f64().is_none() {
        return Err(Error::NonNumericColumn {
            name: name.to_string(),
        });
    }
    Ok(col)
}

fn run_proc(
    name: &str,
    proc: &ProcFn,
    indep: &[f64],
    dep: &[f64],
) -> Result<(Vec<f64>, Vec<f64>), Error> {
    let (indep, dep) = proc(indep, dep).map_err(|err| Error::Processing {
        name: name.to_string(),
        message: err.to_string(),
    })?;
    if indep.is_empty() {
        return Err(Error::ProcessedEmpty(Var::Indep));
    }
    if dep.is_empty() {
        return Err(Error::ProcessedEmpty(Var::Dep));
    }
    if indep.len() != dep.len() {
        return Err(Error::ProcessedLengthMismatch);
    }
    if indep.iter().any(|v| !v.is_finite()) || indep.windows(2).any(|w| w[1] <= w[0]) {
        return Err(Error::ProcessedNotIncreasing);
    }
    Ok((indep, dep))
}

/// Data source reading two numeric columns of a table, typically parsed from CSV text.
///
/// ```
/// use pplot::data::{CsvSource, DataSource};
///
/// let csv = "Col1,Col2\n0E-12,10\n1E-12,0\n2E-12,20\n3E-12,-10\n4E-12,30\n";
/// let src = CsvSource::builder("Col1", "Col2")
///     .with_indep_min(2e-12)
///     .with_proc("to_ps", |x, y| {
///         let x = x.iter().map(|x| x / 1e-12).collect();
///         let y = y.iter().map(|v| v - y[0]).collect();
///         Ok((x, y))
///     })
///     .parse(csv)
///     .unwrap();
/// assert_eq!(src.indep_var(), &[2.0, 3.0, 4.0]);
/// assert_eq!(src.dep_var(), &[0.0, -30.0, 10.0]);
/// ```
#[derive(Debug, Clone)]
pub struct CsvSource {
    indep_col: String,
    dep_col: String,
    rfilter: RowFilter,
    proc_name: Option<String>,
    vars: BoundedVars,
}

impl CsvSource {
    /// Start building a source from the independent and dependent column names
    pub fn builder(indep_col: &str, dep_col: &str) -> CsvSourceBuilder {
        CsvSourceBuilder {
            indep_col: indep_col.to_string(),
            dep_col: dep_col.to_string(),
            rfilter: RowFilter::new(),
            indep_min: None,
            indep_max: None,
            proc: None,
        }
    }

    /// Name of the independent variable column
    pub fn indep_col(&self) -> &str {
        &self.indep_col
    }

    /// Name of the dependent variable column
    pub fn dep_col(&self) -> &str {
        &self.dep_col
    }

    /// The row filter applied at extraction
    pub fn row_filter(&self) -> &RowFilter {
        &self.rfilter
    }

    /// Set or remove the lower bound of the independent variable
    pub fn set_indep_min(&mut self, min: Option<f64>) -> Result<(), Error> {
        let max = self.vars.max();
        self.vars.set_bounds(min, max)
    }

    /// Set or remove the upper bound of the independent variable
    pub fn set_indep_max(&mut self, max: Option<f64>) -> Result<(), Error> {
        let min = self.vars.min();
        self.vars.set_bounds(min, max)
    }
}

impl DataSource for CsvSource {
    fn indep_var(&self) -> &[f64] {
        self.vars.indep()
    }

    fn dep_var(&self) -> &[f64] {
        self.vars.dep()
    }

    fn set_indep_var(&mut self, indep_var: Vec<f64>) -> Result<(), Error> {
        self.vars.set_indep(indep_var)
    }

    fn set_dep_var(&mut self, dep_var: Vec<f64>) -> Result<(), Error> {
        self.vars.set_dep(dep_var)
    }

    fn indep_min(&self) -> Option<f64> {
        self.vars.min()
    }

    fn indep_max(&self) -> Option<f64> {
        self.vars.max()
    }
}

impl fmt::Display for CsvSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Row filter: {}", self.rfilter)?;
        writeln!(f, "Independent column label: {}", self.indep_col)?;
        writeln!(f, "Dependent column label: {}", self.dep_col)?;
        writeln!(
            f,
            "Processing function: {}",
            self.proc_name.as_deref().unwrap_or("None")
        )?;
        write_bounds(f, self.vars.min(), self.vars.max())?;
        write_vars(f, self)
    }
}
