//! Common types

/// Integer surrogate key used by every table in the backend.
pub type EntityId = i64;

/// Clamps an importance or rating value into the accepted 0–100 range.
pub fn clamp_importance(value: i32) -> i32 {
    value.clamp(crate::constants::MIN_IMPORTANCE, crate::constants::MAX_IMPORTANCE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_importance() {
        assert_eq!(clamp_importance(-5), 0);
        assert_eq!(clamp_importance(42), 42);
        assert_eq!(clamp_importance(250), 100);
    }
}
