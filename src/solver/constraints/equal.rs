use crate::solver::{
    constraint::{BinaryPredicate, ConstraintDescriptor},
    value::ValueEquality,
};

/// Forces both endpoints to the same value.
#[derive(Debug, Clone, Copy, Default)]
pub struct Equal;

impl<V: ValueEquality> BinaryPredicate<V> for Equal {
    fn descriptor(&self) -> ConstraintDescriptor {
        ConstraintDescriptor {
            name: "equal".to_owned(),
            description: "head and tail must take the same value".to_owned(),
        }
    }

    fn consistent(&self, head_value: &V, tail_value: &V) -> bool {
        head_value == tail_value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_only_equal_pairs() {
        assert!(BinaryPredicate::consistent(&Equal, &3, &3));
        assert!(!BinaryPredicate::consistent(&Equal, &3, &4));
    }
}
