//! Pair evaluation.

use crate::cards::CardInstance;

/// Decide whether two revealed cards form a pair.
///
/// Pure: counters and card flags are updated by the caller.
#[must_use]
pub fn evaluate(a: &CardInstance, b: &CardInstance) -> bool {
    a.identity == b.identity
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardId, CATALOG};

    #[test]
    fn test_same_identity_matches() {
        let a = CardInstance::new(CardId::new(0), &CATALOG[3]);
        let b = CardInstance::new(CardId::new(5), &CATALOG[3]);
        assert!(evaluate(&a, &b));
        assert!(evaluate(&b, &a));
    }

    #[test]
    fn test_different_identity_mismatches() {
        let a = CardInstance::new(CardId::new(0), &CATALOG[0]);
        let b = CardInstance::new(CardId::new(1), &CATALOG[1]);
        assert!(!evaluate(&a, &b));
        assert!(!evaluate(&b, &a));
    }

    #[test]
    fn test_flags_do_not_affect_result() {
        let mut a = CardInstance::new(CardId::new(0), &CATALOG[2]);
        let b = CardInstance::new(CardId::new(1), &CATALOG[2]);
        a.mark_matched();
        assert!(evaluate(&a, &b));
    }
}
