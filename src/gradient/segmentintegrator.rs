use crate::math::curve::nonparametriccurve::piecewisepolynomial::PiecewisePolynomial;

/// 單段三次多項式 c0*t^3 + c1*t^2 + c2*t + c3 在 [0, width] 上的定積分。
///
/// 局部座標從 0 起算，故只需在 t = width 處求反導函數值：
///   width*(c3 + width*(c2/2 + width*(c1/3 + width*c0/4)))
pub fn segment_integral(width: f64, coefs: [f64; 4]) -> f64 {
    let [c0, c1, c2, c3] = coefs;
    width * (c3 + width * (c2 / 2.0 + width * (c1 / 3.0 + width * c0 / 4.0)))
}

/// 依座標遞增順序回傳每段 spline 的定積分。
///
/// `widths` 與 spline 的段數必須相同。
pub fn segment_integrals(widths: &[f64], spline: &PiecewisePolynomial) -> Vec<f64> {
    debug_assert_eq!(widths.len(), spline.segment_count());
    widths
        .iter()
        .zip(spline.coefficients())
        .map(|(&width, coefs)| segment_integral(width, coefs))
        .collect()
}
