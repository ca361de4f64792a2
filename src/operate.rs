//! Binary operator semantics with the puzzle's legality rules.
//!
//! Beyond plain arithmetic, two redundancy rules prune pairs that would
//! otherwise produce a second tree for the same value: `2 * 2` must be
//! expressed as `2 + 2`, and `4 / 2` as `4 - 2`. The pruning rules are a
//! heuristic set; the simplification pass owns final deduplication.

/// One of the four puzzle operators, packed as a 2-bit code in the
/// solvers' mutation cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Multiply,
    Divide,
    Add,
    Subtract,
}

impl Operator {
    /// Decodes the low two bits of a mutation word.
    pub fn from_bits(bits: u32) -> Operator {
        match bits & 3 {
            0 => Operator::Multiply,
            1 => Operator::Divide,
            2 => Operator::Add,
            _ => Operator::Subtract,
        }
    }
}

/// Applies `operator` to two intermediate values. `None` means the
/// combination is illegal for this puzzle and the whole candidate tree
/// must be abandoned.
pub fn apply(operator: Operator, left: i32, right: i32) -> Option<i32> {
    match operator {
        Operator::Multiply => multiply(left, right),
        Operator::Divide => divide(left, right),
        Operator::Add => Some(left + right),
        Operator::Subtract => subtract(left, right),
    }
}

fn multiply(left: i32, right: i32) -> Option<i32> {
    if left == 2 && right == 2 {
        None
    } else {
        Some(left * right)
    }
}

fn divide(numerator: i32, denominator: i32) -> Option<i32> {
    if denominator == 0
        || denominator == 1
        || numerator == 0
        || (numerator == 4 && denominator == 2)
        || numerator % denominator != 0
    {
        None
    } else {
        Some(numerator / denominator)
    }
}

fn subtract(left: i32, right: i32) -> Option<i32> {
    // Only non-negative differences are legal; a negative difference is
    // reached as an addition with a negation further up the tree.
    if left - right < 0 {
        None
    } else {
        Some(left - right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multiplies() {
        assert_eq!(apply(Operator::Multiply, 0, 3), Some(0));
        assert_eq!(apply(Operator::Multiply, 1, 7), Some(7));
        assert_eq!(apply(Operator::Multiply, 8, 7), Some(56));
        assert_eq!(apply(Operator::Multiply, 2, 9), Some(18));
        assert_eq!(apply(Operator::Multiply, 1, 2), Some(2));
    }

    #[test]
    fn rejects_two_times_two_as_similar_to_two_plus_two() {
        assert_eq!(apply(Operator::Multiply, 2, 2), None);
    }

    #[test]
    fn divides() {
        assert_eq!(apply(Operator::Divide, 3, 3), Some(1));
        assert_eq!(apply(Operator::Divide, 7, 7), Some(1));
        assert_eq!(apply(Operator::Divide, 6, 2), Some(3));
    }

    #[test]
    fn rejects_four_over_two_as_similar_to_four_minus_two() {
        assert_eq!(apply(Operator::Divide, 4, 2), None);
    }

    #[test]
    fn rejects_zero_numerator() {
        for denominator in [1, 2, 42] {
            assert_eq!(apply(Operator::Divide, 0, denominator), None);
        }
    }

    #[test]
    fn rejects_division_by_zero_and_one() {
        assert_eq!(apply(Operator::Divide, 3, 0), None);
        assert_eq!(apply(Operator::Divide, 3, 1), None);
    }

    #[test]
    fn rejects_division_with_remainder() {
        assert_eq!(apply(Operator::Divide, 3, 4), None);
    }

    #[test]
    fn adds() {
        assert_eq!(apply(Operator::Add, 0, 0), Some(0));
        assert_eq!(apply(Operator::Add, 1, 7), Some(8));
        assert_eq!(apply(Operator::Add, 8, 7), Some(15));
    }

    #[test]
    fn subtracts() {
        assert_eq!(apply(Operator::Subtract, 2, 2), Some(0));
        assert_eq!(apply(Operator::Subtract, 9, 7), Some(2));
        assert_eq!(apply(Operator::Subtract, 8, 7), Some(1));
    }

    #[test]
    fn rejects_negative_subtraction() {
        assert_eq!(apply(Operator::Subtract, 3, 4), None);
    }

    #[test]
    fn decodes_only_the_low_two_bits() {
        assert_eq!(Operator::from_bits(0), Operator::Multiply);
        assert_eq!(Operator::from_bits(1), Operator::Divide);
        assert_eq!(Operator::from_bits(2), Operator::Add);
        assert_eq!(Operator::from_bits(3), Operator::Subtract);
        assert_eq!(Operator::from_bits(0b1110), Operator::Add);
    }
}
