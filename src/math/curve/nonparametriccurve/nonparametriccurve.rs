#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point2D {
    x: f64,
    y: f64
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Point2D {
        Point2D { x, y }
    }

    /// 將座標序列與值序列配對成節點；長度不同時以較短者為準。
    pub fn zip(xs: &[f64], ys: &[f64]) -> Vec<Point2D> {
        xs.iter()
            .zip(ys)
            .map(|(&x, &y)| Point2D::new(x, y))
            .collect()
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }
}

/// 由節點決定的曲線（插值而非參數化模型）。
pub trait NonparametricCurve {
    fn points(&self) -> Vec<Point2D>;

    fn min_x(&self) -> f64;

    fn max_x(&self) -> f64;
}
