use nalgebra::{
    Matrix3,
    Vector3
};

use crate::math::curve::curve::Curve;
use crate::math::curve::curveerror::CurveError;
use crate::math::curve::nonparametriccurve::nonparametriccurve::{
    NonparametricCurve,
    Point2D
};

// ─────────────────────────────────────────────
// Subpolynomial
// ─────────────────────────────────────────────

/// 單一區間上的三次多項式，以 Horner 形式存成 [d, c, b, a]：
///   S_i(x) = a + b*(x-x_i) + c*(x-x_i)^2 + d*(x-x_i)^3
#[derive(Debug, Clone, Copy)]
struct Subpolynomial {
    coefs: [f64; 4],
    lhs_x: f64,
}

impl Subpolynomial {
    fn new(coefs: [f64; 4], lhs_x: f64) -> Subpolynomial {
        Subpolynomial { coefs, lhs_x }
    }

    fn value(&self, x: f64) -> f64 {
        let t = x - self.lhs_x;
        let [d, c, b, a] = self.coefs;
        f64::mul_add(f64::mul_add(f64::mul_add(d, t, c), t, b), t, a)
    }

    fn derivative(&self, x: f64) -> f64 {
        let t = x - self.lhs_x;
        let [d, c, b, _] = self.coefs;
        f64::mul_add(f64::mul_add(3.0 * d, t, 2.0 * c), t, b)
    }

    fn second_derivative(&self, x: f64) -> f64 {
        let t = x - self.lhs_x;
        let [d, c, _, _] = self.coefs;
        f64::mul_add(6.0 * d, t, 2.0 * c)
    }
}

// ─────────────────────────────────────────────
// 共用輔助函數
// ─────────────────────────────────────────────

fn check_points(points: &[Point2D]) -> Result<(), CurveError> {
    if points.len() < 2 {
        return Err(CurveError::InsufficientPointsError {
            required: 2,
            actual: points.len(),
        });
    }
    for (index, pt) in points.iter().enumerate() {
        if !pt.x().is_finite() {
            return Err(CurveError::NonFiniteCoordinateError { index, value: pt.x() });
        }
        if !pt.y().is_finite() {
            return Err(CurveError::NonFiniteValueError { index, value: pt.y() });
        }
    }
    for (index, pair) in points.windows(2).enumerate() {
        if pair[1].x() - pair[0].x() <= 0.0 {
            return Err(CurveError::NotStrictlyIncreasingError {
                index,
                lhs: pair[0].x(),
                rhs: pair[1].x(),
            });
        }
    }
    Ok(())
}

fn interval_widths(points: &[Point2D]) -> Vec<f64> {
    points.windows(2).map(|pair| pair[1].x() - pair[0].x()).collect()
}

/// 從各節點的二階導數（moments）m[0..=n] 計算各區間的三次多項式係數。
fn cubic_coefs_from_moments(points: &[Point2D], h: &[f64], m: &[f64]) -> Vec<[f64; 4]> {
    (0..h.len())
        .map(|i| {
            let d = (m[i + 1] - m[i]) / (6.0 * h[i]);
            let c = m[i] / 2.0;
            let b = (points[i + 1].y() - points[i].y()) / h[i]
                  - h[i] * (2.0 * m[i] + m[i + 1]) / 6.0;
            let a = points[i].y();
            [d, c, b, a]
        })
        .collect()
}

/// Thomas algorithm。lower[0] 與 upper[n-1] 不會被讀取。
fn solve_tridiagonal(
    lower: &[f64],
    diag: &[f64],
    upper: &[f64],
    rhs: &[f64],
) -> Result<Vec<f64>, CurveError> {
    let n = diag.len();
    let mut c_prime = vec![0.0; n];
    let mut d_prime = vec![0.0; n];

    let mut denom = diag[0];
    for i in 0..n {
        if i > 0 {
            denom = diag[i] - lower[i] * c_prime[i - 1];
        }
        if denom == 0.0 || !denom.is_finite() {
            return Err(CurveError::SingularSystemError);
        }
        if i + 1 < n {
            c_prime[i] = upper[i] / denom;
        }
        let carried = if i > 0 { lower[i] * d_prime[i - 1] } else { 0.0 };
        d_prime[i] = (rhs[i] - carried) / denom;
    }

    let mut x = d_prime;
    for i in (0..n - 1).rev() {
        x[i] -= c_prime[i] * x[i + 1];
    }
    Ok(x)
}

// ─────────────────────────────────────────────
// Not-a-knot cubic spline
// ─────────────────────────────────────────────
//
// 內部方程式由 C² 連續性導出：
//   h[i-1]*m[i-1] + 2*(h[i-1]+h[i])*m[i] + h[i]*m[i+1]
//     = 6*( (y[i+1]-y[i])/h[i] - (y[i]-y[i-1])/h[i-1] )
//
// Not-a-knot：第三導數在 x[1] 與 x[n-1] 處連續，
//   -h[1]*m[0] + (h[0]+h[1])*m[1] - h[0]*m[2] = 0
//   -h[n-1]*m[n-2] + (h[n-2]+h[n-1])*m[n-1] - h[n-2]*m[n] = 0
//
// 用這兩條式子消去 m[0] 與 m[n]，剩下 m[1..n-1] 的三對角系統，
// 且每列皆嚴格對角佔優，Thomas algorithm 不需 pivoting：
//   (h[0]+2h[1])*m[1] + (h[1]-h[0])*m[2] = r[1]*h[1]/(h[0]+h[1])
//   (h[n-2]-h[n-1])*m[n-2] + (2h[n-2]+h[n-1])*m[n-1] = r[n-1]*h[n-2]/(h[n-2]+h[n-1])

fn generate_not_a_knot_cubic_coef_list(points: &[Point2D]) -> Result<Vec<[f64; 4]>, CurveError> {
    let h = interval_widths(points);
    let n = h.len();
    debug_assert!(n >= 3);

    let r: Vec<f64> = (0..=n)
        .map(|i| {
            if i == 0 || i == n {
                0.0
            } else {
                6.0 * (
                    (points[i + 1].y() - points[i].y()) / h[i]
                  - (points[i].y()     - points[i - 1].y()) / h[i - 1]
                )
            }
        })
        .collect();

    // 未知數 u[k] = m[k+1]，k = 0..n-2
    let size = n - 1;
    let mut lower = vec![0.0; size];
    let mut diag = vec![0.0; size];
    let mut upper = vec![0.0; size];
    let mut rhs = vec![0.0; size];

    for k in 0..size {
        let i = k + 1;
        lower[k] = h[i - 1];
        diag[k]  = 2.0 * (h[i - 1] + h[i]);
        upper[k] = h[i];
        rhs[k]   = r[i];
    }

    diag[0]  = h[0] + 2.0 * h[1];
    upper[0] = h[1] - h[0];
    rhs[0]   = r[1] * h[1] / (h[0] + h[1]);

    let (a, b) = (h[n - 2], h[n - 1]);
    lower[size - 1] = a - b;
    diag[size - 1]  = 2.0 * a + b;
    rhs[size - 1]   = r[n - 1] * a / (a + b);

    let interior = solve_tridiagonal(&lower, &diag, &upper, &rhs)?;

    let mut m = Vec::with_capacity(n + 1);
    m.push(((h[0] + h[1]) * interior[0] - h[0] * interior[1]) / h[1]);
    m.extend_from_slice(&interior);
    m.push(((a + b) * interior[size - 1] - b * interior[size - 2]) / a);

    Ok(cubic_coefs_from_moments(points, &h, &m))
}

/// 三個點時 not-a-knot 退化為通過三點的拋物線。
fn generate_parabola_coef_list(points: &[Point2D]) -> Result<Vec<[f64; 4]>, CurveError> {
    let t1 = points[1].x() - points[0].x();
    let t2 = points[2].x() - points[0].x();
    let mat = Matrix3::new(
        1.0, 0.0, 0.0,
        1.0, t1,  t1 * t1,
        1.0, t2,  t2 * t2,
    );
    let rhs = Vector3::new(points[0].y(), points[1].y(), points[2].y());
    let beta = mat
        .lu()
        .solve(&rhs)
        .ok_or(CurveError::SingularSystemError)?;

    let (b, c) = (beta[1], beta[2]);
    Ok(vec![
        [0.0, c, b, points[0].y()],
        [0.0, c, f64::mul_add(2.0 * c, t1, b), points[1].y()],
    ])
}

/// 兩個點時退化為直線。
fn generate_linear_coef_list(points: &[Point2D]) -> Vec<[f64; 4]> {
    let slope = (points[1].y() - points[0].y()) / (points[1].x() - points[0].x());
    vec![[0.0, 0.0, slope, points[0].y()]]
}

// ─────────────────────────────────────────────
// PiecewisePolynomial
// ─────────────────────────────────────────────

/// C² 連續的分段三次多項式。每段以區間左端點為局部座標原點。
#[derive(Debug, Clone)]
pub struct PiecewisePolynomial {
    max_x: f64,
    subpolynomial_list: Vec<Subpolynomial>,
}

impl PiecewisePolynomial {
    /// 以 not-a-knot 邊界條件建構三次 spline。
    ///
    /// 點數為 2 與 3 時分別退化為直線與拋物線；x 必須有限且嚴格遞增，y 必須有限。
    pub fn not_a_knot(points: Vec<Point2D>) -> Result<PiecewisePolynomial, CurveError> {
        check_points(&points)?;

        let coef_list = match points.len() {
            2 => generate_linear_coef_list(&points),
            3 => generate_parabola_coef_list(&points)?,
            _ => generate_not_a_knot_cubic_coef_list(&points)?,
        };

        let subpolynomial_list = coef_list
            .into_iter()
            .zip(&points)
            .map(|(coefs, pt)| Subpolynomial::new(coefs, pt.x()))
            .collect();

        Ok(PiecewisePolynomial {
            subpolynomial_list,
            max_x: points[points.len() - 1].x(),
        })
    }

    pub fn segment_count(&self) -> usize {
        self.subpolynomial_list.len()
    }

    /// 各段係數 [c0, c1, c2, c3]，依序為三次、二次、一次、常數項。
    pub fn coefficients(&self) -> impl ExactSizeIterator<Item = [f64; 4]> + '_ {
        self.subpolynomial_list.iter().map(|s| s.coefs)
    }

    fn find_segment(&self, x: f64) -> usize {
        if x <= self.min_x() {
            0
        } else if x >= self.max_x {
            self.subpolynomial_list.len() - 1
        } else {
            self.subpolynomial_list
                .partition_point(|s| s.lhs_x <= x)
                - 1
        }
    }
}

// ─────────────────────────────────────────────
// Trait 實作
// ─────────────────────────────────────────────

impl NonparametricCurve for PiecewisePolynomial {
    fn points(&self) -> Vec<Point2D> {
        let mut pts: Vec<Point2D> = self
            .subpolynomial_list
            .iter()
            .map(|s| Point2D::new(s.lhs_x, s.value(s.lhs_x)))
            .collect();
        let last = self.subpolynomial_list[self.subpolynomial_list.len() - 1];
        pts.push(Point2D::new(self.max_x, last.value(self.max_x)));
        pts
    }

    fn min_x(&self) -> f64 {
        self.subpolynomial_list[0].lhs_x
    }

    fn max_x(&self) -> f64 {
        self.max_x
    }
}

impl Curve for PiecewisePolynomial {
    fn value(&self, x: f64) -> f64 {
        let i = self.find_segment(x);
        self.subpolynomial_list[i].value(x)
    }

    fn derivative(&self, x: f64) -> f64 {
        let i = self.find_segment(x);
        self.subpolynomial_list[i].derivative(x)
    }

    fn second_derivative(&self, x: f64) -> f64 {
        let i = self.find_segment(x);
        self.subpolynomial_list[i].second_derivative(x)
    }
}
