use subtle::ConstantTimeEq;

/// Compares a candidate token against the stored one in constant time.
///
/// A naive `==` on strings short-circuits at the first differing byte, which
/// lets an attacker probe the token one position at a time. Length is the
/// only thing this comparison reveals.
pub(crate) fn tokens_match(stored: &str, candidate: &str) -> bool {
    candidate.as_bytes().ct_eq(stored.as_bytes()).into()
}
