use std::fmt;

use super::{BoundedVars, DataSource, Error, write_bounds, write_vars};

/// Data source holding the variables given by the caller.
///
/// Values are rounded to 10 significant digits.
/// An optional `[indep_min, indep_max]` range restricts the points exposed to the series.
#[derive(Debug, Clone)]
pub struct BasicSource {
    vars: BoundedVars,
}

impl BasicSource {
    /// Build a source from an independent and a dependent variable.
    ///
    /// Both must have the same non-zero length, hold finite values,
    /// and the independent variable must be strictly increasing.
    pub fn new(indep_var: Vec<f64>, dep_var: Vec<f64>) -> Result<Self, Error> {
        Ok(BasicSource {
            vars: BoundedVars::new(indep_var, dep_var)?,
        })
    }

    /// Restrict the independent variable to values greater than or equal to `min`
    pub fn with_indep_min(mut self, min: f64) -> Result<Self, Error> {
        self.set_indep_min(Some(min))?;
        Ok(self)
    }

    /// Restrict the independent variable to values less than or equal to `max`
    pub fn with_indep_max(mut self, max: f64) -> Result<Self, Error> {
        self.set_indep_max(Some(max))?;
        Ok(self)
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

    /// Replace both variables at once, possibly with a different length
    pub fn set_vars(&mut self, indep_var: Vec<f64>, dep_var: Vec<f64>) -> Result<(), Error> {
        self.vars.set_vars(indep_var, dep_var)
    }
}

impl DataSource for BasicSource {
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

impl fmt::Display for BasicSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_bounds(f, self.vars.min(), self.vars.max())?;
        write_vars(f, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounded_display() {
        let src = BasicSource::new(vec![1.0, 2.0, 3.0, 4.0], vec![1.0, -10.0, 10.0, 5.0])
            .unwrap()
            .with_indep_min(2.0)
            .unwrap()
            .with_indep_max(3.0)
            .unwrap();
        assert_eq!(src.indep_var(), &[2.0, 3.0]);
        assert_eq!(src.dep_var(), &[-10.0, 10.0]);
        assert_eq!(
            src.to_string(),
            "Independent variable minimum: 2\n\
             Independent variable maximum: 3\n\
             Independent variable: [ 2.0, 3.0 ]\n\
             Dependent variable: [ -10.0, 10.0 ]"
        );
    }

    #[test]
    fn unbounded_display() {
        let src = BasicSource::new(vec![1.0, 2.0], vec![0.5, 0.25]).unwrap();
        assert_eq!(
            src.to_string(),
            "Independent variable minimum: -inf\n\
             Independent variable maximum: +inf\n\
             Independent variable: [ 1.0, 2.0 ]\n\
             Dependent variable: [ 0.5, 0.25 ]"
        );
    }

    #[test]
    fn rounding() {
        let src = BasicSource::new(vec![0.1 + 0.2, 1.0], vec![1.0 / 3.0, 2.0]).unwrap();
        assert_eq!(src.indep_var(), &[0.3, 1.0]);
        assert_eq!(src.dep_var(), &[0.3333333333, 2.0]);
    }

    #[test]
    fn validation() {
        assert_eq!(
            BasicSource::new(vec![1.0, 2.0], vec![1.0]).unwrap_err(),
            Error::LengthMismatch { indep: 2, dep: 1 }
        );
        assert_eq!(
            BasicSource::new(vec![2.0, 1.0], vec![1.0, 2.0]).unwrap_err(),
            Error::NotIncreasing
        );

        let src = BasicSource::new(vec![1.0, 2.0, 3.0], vec![1.0, 2.0, 3.0])
            .unwrap()
            .with_indep_min(2.5)
            .unwrap();
        assert_eq!(
            src.clone().with_indep_max(2.0).unwrap_err(),
            Error::InvalidBounds { min: 2.5, max: 2.0 }
        );
        assert_eq!(
            src.with_indep_min(10.0).unwrap_err(),
            Error::EmptyAfterBounding
        );
    }

    #[test]
    fn setters_keep_bounds() {
        let mut src = BasicSource::new(vec![1.0, 2.0, 3.0], vec![1.0, 2.0, 3.0])
            .unwrap()
            .with_indep_max(2.0)
            .unwrap();
        src.set_dep_var(vec![10.0, 20.0, 30.0]).unwrap();
        assert_eq!(src.dep_var(), &[10.0, 20.0]);

        // a failed update leaves the source untouched
        assert!(src.set_indep_var(vec![1.0, 2.0]).is_err());
        assert_eq!(src.indep_var(), &[1.0, 2.0]);
        assert_eq!(src.len(), 2);

        src.set_vars(vec![0.0, 1.0, 1.5, 2.0, 4.0], vec![0.0; 5]).unwrap();
        assert_eq!(src.indep_var(), &[0.0, 1.0, 1.5, 2.0]);

        src.set_indep_max(None).unwrap();
        assert_eq!(src.indep_max(), None);
        assert_eq!(src.len(), 5);
    }
}
