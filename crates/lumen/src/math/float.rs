pub trait FloatAsExt: Sized {
    /// `None` when `|self| <= eps` or when `self` is NaN
    fn into_non_zero(self, eps: Self) -> Option<Self>;
}

impl FloatAsExt for f32 {
    fn into_non_zero(self, eps: Self) -> Option<Self> {
        (self.abs() > eps).then_some(self)
    }
}
