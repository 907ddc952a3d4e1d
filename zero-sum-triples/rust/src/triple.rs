use std::fmt::{self, Display, Formatter};

/// Three values drawn from distinct input positions, sorted ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Triple([i32; 3]);

impl Triple {
    pub fn new(a: i32, b: i32, c: i32) -> Self {
        let mut values = [a, b, c];
        values.sort_unstable();
        Self(values)
    }

    /// Caller guarantees `a <= b <= c`.
    pub(crate) const fn from_sorted(a: i32, b: i32, c: i32) -> Self {
        Self([a, b, c])
    }

    pub const fn as_array(&self) -> &[i32; 3] {
        &self.0
    }

    pub fn to_vec(&self) -> Vec<i32> {
        self.0.to_vec()
    }

    // Widened so that three extreme i32 values can't overflow.
    pub fn sum(&self) -> i64 {
        self.0.iter().map(|&v| v as i64).sum()
    }
}

impl Display for Triple {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.0;
        write!(f, "[{a}, {b}, {c}]")
    }
}

impl From<Triple> for [i32; 3] {
    fn from(triple: Triple) -> Self {
        triple.0
    }
}

impl From<Triple> for Vec<i32> {
    fn from(triple: Triple) -> Self {
        triple.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_sorts_values() {
        let triple = Triple::new(2, -2, 0);
        assert_eq!(triple.as_array(), &[-2, 0, 2]);
    }

    #[test]
    fn sum_does_not_overflow() {
        let triple = Triple::new(i32::MAX, i32::MAX, i32::MAX);
        assert_eq!(triple.sum(), i32::MAX as i64 * 3);

        let triple = Triple::new(i32::MIN, i32::MIN, i32::MIN);
        assert_eq!(triple.sum(), i32::MIN as i64 * 3);
    }

    #[test]
    fn display() {
        let triple = Triple::new(1, -1, 0);
        assert_eq!(triple.to_string(), "[-1, 0, 1]");
    }

    #[test]
    fn conversions() {
        let triple = Triple::new(-2, 1, 1);
        let array: [i32; 3] = triple.into();
        let vec: Vec<i32> = triple.into();
        assert_eq!(array, [-2, 1, 1]);
        assert_eq!(vec, vec![-2, 1, 1]);
    }
}
