use super::{TableSource, VecColumn};

/// Errors of the CSV parser
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CsvParseError {
    /// The text has no header line
    Empty,
    /// Two columns have the same title
    DuplicateTitle { title: String },
    /// A row has more fields than the header
    ColCount { line: usize },
    /// A field could not be parsed to the column type
    ColType { line: usize },
    /// A column spec refers to an unknown title
    UnknownCol { title: String },
    /// A column spec refers to an out of range index
    UnknownColIdx { idx: usize },
    /// The text has a header but no data row
    NoData,
}

impl std::fmt::Display for CsvParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CsvParseError::Empty => write!(f, "CSV data is empty"),
            CsvParseError::DuplicateTitle { title } => {
                write!(f, "column headers are not unique ('{title}')")
            }
            CsvParseError::ColCount { line } => {
                write!(f, "inconsistent column count at line {line}")
            }
            CsvParseError::ColType { line } => {
                write!(f, "inconsistent column type at line {line}")
            }
            CsvParseError::UnknownCol { title } => {
                write!(f, "unknown column title {title}")
            }
            CsvParseError::UnknownColIdx { idx } => {
                write!(f, "unknown column index {idx}")
            }
            CsvParseError::NoData => write!(f, "CSV data has no valid data"),
        }
    }
}

impl std::error::Error for CsvParseError {}

/// CSV parsing spec for a specific column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CsvColSpec {
    /// Numeric if the first non-empty field is a number, text otherwise
    #[default]
    Auto,
    /// Numeric column, empty fields are null
    F64,
    /// Text column
    Str,
}

#[derive(Debug, Clone)]
enum ColId {
    Tit(String),
    Idx(usize),
}

#[derive(Debug, Clone)]
enum CsvColumn {
    F64(Vec<f64>),
    Str(Vec<Option<String>>),
}

/// A minimal CSV parser, building a [`TableSource`] from in-memory text.
///
/// The first line is the header. Fields are trimmed and may be surrounded by double quotes.
/// Empty fields are null values.
#[derive(Debug, Clone)]
pub struct CsvParser {
    sep: char,
    col_specs: Vec<(ColId, CsvColSpec)>,
}

impl Default for CsvParser {
    fn default() -> Self {
        Self::new()
    }
}

impl CsvParser {
    /// A parser with comma separator and automatic column types
    pub fn new() -> Self {
        CsvParser {
            sep: ',',
            col_specs: Vec::new(),
        }
    }

    /// Set the field separator
    pub fn with_sep(mut self, sep: char) -> Self {
        self.sep = sep;
        self
    }

    /// Set the type of the column with the given title
    pub fn with_col_spec(mut self, title: &str, spec: CsvColSpec) -> Self {
        self.col_specs.push((ColId::Tit(title.to_string()), spec));
        self
    }

    /// Set the type of the column at the given index
    pub fn with_col_spec_idx(mut self, idx: usize, spec: CsvColSpec) -> Self {
        self.col_specs.push((ColId::Idx(idx), spec));
        self
    }

    /// Parse the CSV text
    pub fn parse(&self, data: &str) -> Result<TableSource, CsvParseError> {
        let mut lines = data
            .lines()
            .enumerate()
            .filter(|(_, l)| !l.trim().is_empty());
        let Some((_, head_line)) = lines.next() else {
            return Err(CsvParseError::Empty);
        };
        let header: Vec<&str> = split_fields(head_line, self.sep).collect();
        for (i, title) in header.iter().enumerate() {
            if header[..i].contains(title) {
                return Err(CsvParseError::DuplicateTitle {
                    title: title.to_string(),
                });
            }
        }

        let mut specs = vec![CsvColSpec::Auto; header.len()];
        for (id, spec) in &self.col_specs {
            let idx = match id {
                ColId::Tit(title) => header
                    .iter()
                    .position(|h| *h == title.as_str())
                    .ok_or_else(|| CsvParseError::UnknownCol {
                        title: title.clone(),
                    })?,
                ColId::Idx(idx) if *idx < header.len() => *idx,
                ColId::Idx(idx) => return Err(CsvParseError::UnknownColIdx { idx: *idx }),
            };
            specs[idx] = *spec;
        }

        // Auto columns get their type at their first non-null value.
        // Once a type is determined, all following rows must comply.
        let mut columns: Vec<Option<CsvColumn>> = specs
            .iter()
            .map(|spec| match spec {
                CsvColSpec::F64 => Some(CsvColumn::F64(Vec::new())),
                CsvColSpec::Str => Some(CsvColumn::Str(Vec::new())),
                CsvColSpec::Auto => None,
            })
            .collect();

        let mut row_count = 0;
        for (lidx, line) in lines {
            let line_num = lidx + 1;
            let fields: Vec<&str> = split_fields(line, self.sep).collect();
            if fields.len() > columns.len() {
                return Err(CsvParseError::ColCount { line: line_num });
            }
            for (cidx, col) in columns.iter_mut().enumerate() {
                let data = fields.get(cidx).copied().unwrap_or("");
                match col {
                    None if data.is_empty() => (),
                    None => *col = Some(guess_column_type(data, row_count)),
                    Some(col) => parse_column_data(data, col, line_num)?,
                }
            }
            row_count += 1;
        }
        if row_count == 0 {
            return Err(CsvParseError::NoData);
        }

        let mut src = TableSource::new();
        for (title, csv_col) in header.iter().zip(columns) {
            let col = match csv_col {
                Some(CsvColumn::F64(vec)) => VecColumn::F64(vec),
                Some(CsvColumn::Str(vec)) => VecColumn::Str(vec),
                // only empty fields
                None => VecColumn::F64(vec![f64::NAN; row_count]),
            };
            src.add_column(title, col);
        }
        Ok(src)
    }
}

fn split_fields(line: &str, sep: char) -> impl Iterator<Item = &str> {
    line.split(sep).map(|s| {
        let s = s.trim();
        s.strip_prefix('"')
            .and_then(|s| s.strip_suffix('"'))
            .unwrap_or(s)
    })
}

fn guess_column_type(data: &str, num_nulls: usize) -> CsvColumn {
    if let Ok(d) = data.parse::<f64>() {
        let mut vec: Vec<f64> = vec![f64::NAN; num_nulls];
        vec.push(d);
        CsvColumn::F64(vec)
    } else {
        let mut vec: Vec<Option<String>> = vec![None; num_nulls];
        vec.push(Some(data.to_string()));
        CsvColumn::Str(vec)
    }
}

fn parse_column_data(data: &str, col: &mut CsvColumn, line: usize) -> Result<(), CsvParseError> {
    match col {
        CsvColumn::F64(vec) => {
            if data.is_empty() {
                vec.push(f64::NAN);
            } else if let Ok(d) = data.parse::<f64>() {
                vec.push(d);
            } else {
                return Err(CsvParseError::ColType { line });
            }
        }
        CsvColumn::Str(vec) => {
            if data.is_empty() {
                vec.push(None);
            } else {
                vec.push(Some(data.to_string()));
            }
        }
    }
    Ok(())
}
