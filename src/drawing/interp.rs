//! Curves drawn between the data points of a series
use crate::des::Interp;

/// Number of curve points per data interval of cubic splines
const CUBIC_POINTS: usize = 20;

/// Compute the curve of a series with the given interpolation.
///
/// `xs` must be strictly increasing and of the same length as `ys`.
/// The returned curve is a polyline.
pub fn curve(interp: Interp, xs: &[f64], ys: &[f64]) -> (Vec<f64>, Vec<f64>) {
    match interp {
        Interp::Straight => (xs.to_vec(), ys.to_vec()),
        Interp::Step => step(xs, ys),
        Interp::Cubic => cubic(xs, ys),
        Interp::Linreg => linreg(xs, ys),
    }
}

/// Horizontal segments from each point to the next one
fn step(xs: &[f64], ys: &[f64]) -> (Vec<f64>, Vec<f64>) {
    let n = xs.len();
    let mut cx = Vec::with_capacity(2 * n);
    let mut cy = Vec::with_capacity(2 * n);
    for i in 0..n {
        cx.push(xs[i]);
        cy.push(ys[i]);
        if i + 1 < n {
            cx.push(xs[i + 1]);
            cy.push(ys[i]);
        }
    }
    (cx, cy)
}

/// Least squares regression line, evaluated at the data points
fn linreg(xs: &[f64], ys: &[f64]) -> (Vec<f64>, Vec<f64>) {
    let n = xs.len() as f64;
    let mean_x = xs.iter().sum::<f64>() / n;
    let mean_y = ys.iter().sum::<f64>() / n;
    let sxx: f64 = xs.iter().map(|x| (x - mean_x).powi(2)).sum();
    let sxy: f64 = xs
        .iter()
        .zip(ys)
        .map(|(x, y)| (x - mean_x) * (y - mean_y))
        .sum();
    let slope = if sxx > 0.0 { sxy / sxx } else { 0.0 };
    let cy = xs.iter().map(|x| mean_y + slope * (x - mean_x)).collect();
    (xs.to_vec(), cy)
}

/// Not-a-knot cubic spline, sampled at [`CUBIC_POINTS`] points per interval
fn cubic(xs: &[f64], ys: &[f64]) -> (Vec<f64>, Vec<f64>) {
    let n = xs.len();
    // at least 4 points are checked at panel construction
    if n < 4 {
        return (xs.to_vec(), ys.to_vec());
    }
    let m = second_derivatives(xs, ys);

    let mut cx = Vec::with_capacity((n - 1) * CUBIC_POINTS + 1);
    let mut cy = Vec::with_capacity((n - 1) * CUBIC_POINTS + 1);
    for i in 0..n - 1 {
        let (x0, x1) = (xs[i], xs[i + 1]);
        let (y0, y1) = (ys[i], ys[i + 1]);
        let (m0, m1) = (m[i], m[i + 1]);
        let h = x1 - x0;
        for k in 0..CUBIC_POINTS {
            let x = x0 + h * k as f64 / CUBIC_POINTS as f64;
            let (a, b) = (x1 - x, x - x0);
            let y = m0 * a.powi(3) / (6.0 * h)
                + m1 * b.powi(3) / (6.0 * h)
                + (y0 / h - m0 * h / 6.0) * a
                + (y1 / h - m1 * h / 6.0) * b;
            cx.push(x);
            cy.push(y);
        }
    }
    cx.push(xs[n - 1]);
    cy.push(ys[n - 1]);
    (cx, cy)
}

/// Second derivatives of the spline at the data points.
///
/// The third derivative is continuous at the second and before-last points,
/// which eliminates the first and last unknowns from the tridiagonal system.
fn second_derivatives(xs: &[f64], ys: &[f64]) -> Vec<f64> {
    let n = xs.len();
    let h: Vec<f64> = xs.windows(2).map(|w| w[1] - w[0]).collect();
    let d: Vec<f64> = ys
        .windows(2)
        .zip(&h)
        .map(|(w, h)| (w[1] - w[0]) / h)
        .collect();

    // unknowns M1 to M(n-2)
    let size = n - 2;
    let mut sub = vec![0.0; size];
    let mut diag = vec![0.0; size];
    let mut sup = vec![0.0; size];
    let mut rhs = vec![0.0; size];
    for r in 0..size {
        let i = r + 1;
        sub[r] = h[i - 1];
        diag[r] = 2.0 * (h[i - 1] + h[i]);
        sup[r] = h[i];
        rhs[r] = 6.0 * (d[i] - d[i - 1]);
    }
    let (h0, h1) = (h[0], h[1]);
    diag[0] = (h0 + h1) * (h0 + 2.0 * h1) / h1;
    sup[0] = (h1 * h1 - h0 * h0) / h1;
    let (ha, hb) = (h[n - 3], h[n - 2]);
    sub[size - 1] = (ha * ha - hb * hb) / ha;
    diag[size - 1] = (ha + hb) * (2.0 * ha + hb) / ha;

    let inner = thomas(&sub, &diag, &sup, &rhs);

    let mut m = Vec::with_capacity(n);
    m.push(((h0 + h1) * inner[0] - h0 * inner[1]) / h1);
    m.extend_from_slice(&inner);
    m.push(((ha + hb) * inner[size - 1] - hb * inner[size - 2]) / ha);
    m
}

/// Solve a tridiagonal system. `sub[0]` and `sup[len - 1]` are ignored.
fn thomas(sub: &[f64], diag: &[f64], sup: &[f64], rhs: &[f64]) -> Vec<f64> {
    let len = diag.len();
    let mut c = vec![0.0; len];
    let mut d = vec![0.0; len];
    c[0] = sup[0] / diag[0];
    d[0] = rhs[0] / diag[0];
    for i in 1..len {
        let denom = diag[i] - sub[i] * c[i - 1];
        c[i] = sup[i] / denom;
        d[i] = (rhs[i] - sub[i] * d[i - 1]) / denom;
    }
    let mut x = vec![0.0; len];
    x[len - 1] = d[len - 1];
    for i in (0..len - 1).rev() {
        x[i] = d[i] - c[i] * x[i + 1];
    }
    x
}
