//! Tick selection.
//!
//! Linear axes get evenly spaced ticks at a "nice" step: 1, 2 or 5 times a power of ten.
//! Logarithmic axes get one tick per decade.
//! All ticks are labelled in engineering notation (see [`crate::eng`]).
use std::collections::HashSet;
use std::fmt;

use super::axis::NumBounds;
use crate::eng;

/// Configuration of the tick selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickConfig {
    min_ticks: usize,
    suggested_max_ticks: usize,
    precision: usize,
}

impl Default for TickConfig {
    fn default() -> Self {
        TickConfig {
            min_ticks: 6,
            suggested_max_ticks: 10,
            precision: 10,
        }
    }
}

impl fmt::Display for TickConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "min_ticks = {}, suggested_max_ticks = {}, precision = {}",
            self.min_ticks, self.suggested_max_ticks, self.precision
        )
    }
}

impl TickConfig {
    /// Minimum number of ticks of a linear axis
    pub fn min_ticks(&self) -> usize {
        self.min_ticks
    }

    /// Maximum number of ticks of a linear axis.
    /// Interpolation overshoot can add one tick on each side.
    pub fn suggested_max_ticks(&self) -> usize {
        self.suggested_max_ticks
    }

    /// Number of significant digits kept in tick locations and labels
    pub fn precision(&self) -> usize {
        self.precision
    }

    /// Set the minimum number of ticks and return self for chaining
    pub fn with_min_ticks(self, min_ticks: usize) -> Self {
        TickConfig { min_ticks, ..self }
    }

    /// Set the suggested maximum number of ticks and return self for chaining
    pub fn with_suggested_max_ticks(self, suggested_max_ticks: usize) -> Self {
        TickConfig {
            suggested_max_ticks,
            ..self
        }
    }

    /// Set the precision and return self for chaining
    pub fn with_precision(self, precision: usize) -> Self {
        TickConfig { precision, ..self }
    }

    /// Whether the configuration can be used:
    /// at least 2 ticks, a maximum not below the minimum and a precision between 1 and 15 digits.
    pub fn is_valid(&self) -> bool {
        self.min_ticks >= 2
            && self.suggested_max_ticks >= self.min_ticks
            && (1..=15).contains(&self.precision)
    }
}

/// Tick locations of an axis, their labels and the range the axis displays
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickSet {
    locs: Vec<f64>,
    labels: Vec<String>,
    view: NumBounds,
}

impl TickSet {
    /// Tick locations, in increasing order
    pub fn locs(&self) -> &[f64] {
        &self.locs
    }

    /// One label per tick location
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// The range displayed by the axis. It includes all ticks and all data.
    pub fn view(&self) -> NumBounds {
        self.view
    }

    /// Number of ticks
    pub fn len(&self) -> usize {
        self.locs.len()
    }

    /// Whether there is no tick
    pub fn is_empty(&self) -> bool {
        self.locs.is_empty()
    }

    /// Replace the labels, keeping the locations
    pub(crate) fn with_labels(self, labels: Vec<String>) -> Self {
        TickSet { labels, ..self }
    }

    fn new(locs: Vec<f64>, view: NumBounds, precision: usize) -> Self {
        let labels = labels(&locs, precision);
        TickSet { locs, labels, view }
    }
}

// relative tolerance of grid computations
const EPS: f64 = 1e-9;

#[derive(Debug, Clone, Copy)]
struct Candidate {
    step: f64,
    start: f64,
    count: usize,
    on_grid: usize,
}

impl Candidate {
    fn new(step: f64, range: NumBounds, data: &[f64]) -> Self {
        let start = (range.start() / step + EPS).floor();
        let end = (range.end() / step - EPS).ceil();
        let count = (end - start).round().max(0.0) as usize + 1;
        let on_grid = data
            .iter()
            .filter(|v| {
                let r = *v / step;
                (r - r.round()).abs() < EPS * r.abs().max(1.0)
            })
            .count();
        Candidate {
            step,
            start,
            count,
            on_grid,
        }
    }

    /// Most on-grid points, then fewer ticks, then the smallest step
    fn better_than(&self, other: &Candidate) -> bool {
        if self.on_grid != other.on_grid {
            return self.on_grid > other.on_grid;
        }
        if self.count != other.count {
            return self.count < other.count;
        }
        self.step < other.step
    }

    fn distance(&self, config: &TickConfig) -> usize {
        if self.count < config.min_ticks {
            config.min_ticks - self.count
        } else {
            self.count.saturating_sub(config.suggested_max_ticks)
        }
    }

    /// Extend a grid with too few ticks to `count` ticks, one step at a time,
    /// alternating between the end and the start.
    fn padded(self, count: usize) -> Self {
        let pad = count.saturating_sub(self.count);
        Candidate {
            start: self.start - (pad / 2) as f64,
            count: self.count + pad,
            ..self
        }
    }

    fn loc(&self, idx: isize, precision: usize) -> f64 {
        let v = (self.start + idx as f64) * self.step;
        // no negative zero
        eng::round_mantissa(v, precision) + 0.0
    }
}

fn step_candidates(span: f64) -> impl Iterator<Item = f64> {
    let mag = span.log10().floor() as i32;
    (mag - 3..=mag + 1).flat_map(|exp| {
        [1.0, 2.0, 5.0].into_iter().map(move |mult| {
            if exp >= 0 {
                mult * 10f64.powi(exp)
            } else {
                mult / 10f64.powi(-exp)
            }
        })
    })
}

fn select_step(range: NumBounds, data: &[f64], config: &TickConfig) -> Candidate {
    let mut feasible: Option<Candidate> = None;
    // grids with too few ticks, closest to min_ticks first
    let mut short: Option<Candidate> = None;
    // grids with too many ticks, closest to suggested_max_ticks first
    let mut long: Option<Candidate> = None;
    for step in step_candidates(range.span()) {
        let cand = Candidate::new(step, range, data);
        log::trace!(
            "step {} gives {} ticks with {} data points on grid",
            step,
            cand.count,
            cand.on_grid
        );
        let slot = if cand.count < config.min_ticks {
            &mut short
        } else if cand.count > config.suggested_max_ticks {
            &mut long
        } else {
            &mut feasible
        };
        let replace = slot.is_none_or(|s| {
            let (dist, other) = (cand.distance(config), s.distance(config));
            dist < other || (dist == other && cand.better_than(&s))
        });
        if replace {
            *slot = Some(cand);
        }
    }
    match (feasible, short, long) {
        (Some(cand), _, _) => cand,
        (None, Some(cand), _) => {
            log::debug!(
                "padding {} ticks to {} for [{}, {}]",
                cand.count,
                config.min_ticks,
                range.start(),
                range.end()
            );
            cand.padded(config.min_ticks)
        }
        (None, None, Some(cand)) => {
            log::warn!(
                "no tick spacing gives between {} and {} ticks for [{}, {}], using {} ticks",
                config.min_ticks,
                config.suggested_max_ticks,
                range.start(),
                range.end(),
                cand.count
            );
            cand
        }
        // step_candidates is never empty
        (None, None, None) => Candidate::new(range.span(), range, data),
    }
}

fn degenerate(value: f64, curve: NumBounds, precision: usize) -> TickSet {
    let delta = if value == 0.0 { 1.0 } else { 0.1 * value.abs() };
    let view = NumBounds::from((value - delta, value + delta)).united(&curve);
    TickSet::new(vec![value], view, precision)
}

/// Select the ticks of a linear axis.
///
/// The ticks cover `range`. `data` are the values plotted on the axis,
/// the step that puts the most of them on a tick is preferred.
/// `curve` is the range of the interpolated curves (empty for none):
/// when it goes beyond the first or the last tick, one tick is added on that side.
///
/// When no step gives at least `min_ticks` ticks, the grid is extended by whole steps,
/// alternately after the end and before the start.
/// A degenerate range, or one that vanishes at `precision` digits, gives a single tick
/// and a view range widened by 10 %.
pub fn linear(range: NumBounds, curve: NumBounds, data: &[f64], config: &TickConfig) -> TickSet {
    if range.is_empty() {
        return TickSet::default();
    }
    let precision = config.precision;
    // a range narrower than the precision collapses onto a single tick
    if range.is_degenerate()
        || eng::round_mantissa(range.start(), precision)
            == eng::round_mantissa(range.end(), precision)
    {
        return degenerate(range.start(), curve, precision);
    }

    let cand = select_step(range, data, config);
    log::debug!(
        "selected step {} for [{}, {}] ({} ticks)",
        cand.step,
        range.start(),
        range.end(),
        cand.count
    );

    let first = cand.start * cand.step;
    let last = (cand.start + (cand.count - 1) as f64) * cand.step;
    let tol = EPS * cand.step;
    let below = !curve.is_empty() && curve.start() < first - tol;
    let above = !curve.is_empty() && curve.end() > last + tol;
    if below || above {
        log::debug!("interpolation overshoot, below: {below}, above: {above}");
    }

    let lo = if below { -1 } else { 0 };
    let hi = cand.count as isize + if above { 1 } else { 0 };
    let mut locs: Vec<f64> = (lo..hi).map(|i| cand.loc(i, precision)).collect();
    locs.dedup();

    let view = match (locs.first(), locs.last()) {
        (Some(first), Some(last)) => NumBounds::from((*first, *last)).united(&curve),
        _ => range,
    };
    TickSet::new(locs, view, precision)
}

fn decade(value: f64) -> f64 {
    let log = value.log10();
    let round = log.round();
    if (log - round).abs() < EPS { round } else { log }
}

/// Select the ticks of a logarithmic axis: one per decade, covering `range`.
///
/// When the range includes zero or negative values, the ticks start one decade below the last one.
/// A range without positive values gets ticks at 0.1 and 1.
pub fn log(range: NumBounds, config: &TickConfig) -> TickSet {
    if range.is_empty() {
        return TickSet::default();
    }
    let (start, stop) = if range.end() <= 0.0 {
        (-1, 0)
    } else {
        let stop = decade(range.end()).ceil() as i32;
        let start = if range.start() <= 0.0 {
            stop - 1
        } else {
            decade(range.start()).floor() as i32
        };
        (start, stop)
    };
    log::debug!(
        "log ticks from 1e{} to 1e{} for [{}, {}]",
        start,
        stop,
        range.start(),
        range.end()
    );

    let locs: Vec<f64> = (start..=stop)
        .map(|exp| eng::round_mantissa(10f64.powi(exp), config.precision))
        .collect();
    if locs.len() == 1 {
        let value = locs[0];
        let view = NumBounds::from((0.9 * value, 1.1 * value));
        return TickSet::new(locs, view, config.precision);
    }
    let view = NumBounds::from((locs[0], locs[locs.len() - 1]));
    TickSet::new(locs, view, config.precision)
}

/// Ticks at user locations.
/// The view range covers the ticks and `range`.
pub fn fixed(locs: &[f64], range: NumBounds, config: &TickConfig) -> TickSet {
    let view = locs.iter().collect::<NumBounds>().united(&range);
    TickSet::new(locs.to_vec(), view, config.precision)
}

/// Labels of tick locations in engineering notation.
///
/// The number of mantissa fractional digits is the smallest that makes the labels unique
/// and lets every label read back as its tick location within `precision` significant digits.
/// It is at least one when a mantissa is not an integer.
pub fn labels(locs: &[f64], precision: usize) -> Vec<String> {
    let fractional = locs.iter().any(|v| {
        let (mant, _) = eng::split(*v);
        eng::round_mantissa(mant, precision).fract() != 0.0
    });
    let min_digits = if fractional { 1 } else { 0 };
    let check = precision.saturating_sub(1);

    let format_all = |digits: usize| -> Vec<String> {
        locs.iter().map(|v| eng::format(*v, digits)).collect()
    };

    for digits in min_digits..=precision {
        let labels = format_all(digits);
        let unique = labels.iter().collect::<HashSet<_>>().len() == labels.len();
        let exact = labels.iter().zip(locs).all(|(label, v)| {
            eng::parse(label).is_ok_and(|p| {
                eng::round_mantissa(p, check) == eng::round_mantissa(*v, check)
            })
        });
        if unique && exact {
            return labels;
        }
    }
    log::debug!("tick labels need more than {precision} digits");
    format_all(precision)
}

/// Give the same number of ticks to two linear axes displayed side by side.
///
/// The axis with fewer ticks is respaced evenly between its first and last tick
/// so that both axes have as many ticks as the larger one. Axes with less than 2 ticks
/// are left untouched.
pub fn equalize(a: &mut TickSet, b: &mut TickSet, config: &TickConfig) {
    if a.len() < 2 || b.len() < 2 || a.len() == b.len() {
        return;
    }
    let count = a.len().max(b.len());
    log::debug!("equalizing axes to {count} ticks");
    for ts in [a, b] {
        if ts.len() != count {
            respace(ts, count, config.precision);
        }
    }
}

fn respace(ts: &mut TickSet, count: usize, precision: usize) {
    let first = ts.locs[0];
    let last = ts.locs[ts.locs.len() - 1];
    let step = (last - first) / (count - 1) as f64;
    let locs: Vec<f64> = (0..count)
        .map(|i| {
            if i + 1 == count {
                last
            } else {
                eng::round_mantissa(first + i as f64 * step, precision) + 0.0
            }
        })
        .collect();
    *ts = TickSet::new(locs, ts.view, precision);
}
