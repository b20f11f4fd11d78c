//! Realism curve mapping the realism knob to the curated-list chance.

/// Realism thresholds and the curated chance from each one upwards, highest
/// first.
const CURATED_CHANCE_STEPS: [(u8, u32); 6] = [
    (95, 95),
    (90, 90),
    (80, 80),
    (70, 55),
    (60, 35),
    (40, 20),
];

/// Curated chance below the lowest step.
const CURATED_CHANCE_FLOOR: u32 = 5;

/// Returns the percentage chance of drawing a name component from a curated
/// list at the given realism.
///
/// The curve is a step function and never decreases as realism rises.
///
/// # Example
///
/// ```
/// use namegen::curated_chance;
///
/// assert_eq!(curated_chance(0), 5);
/// assert_eq!(curated_chance(50), 20);
/// assert_eq!(curated_chance(100), 95);
/// ```
#[must_use]
pub fn curated_chance(realism: u8) -> u32 {
    CURATED_CHANCE_STEPS
        .iter()
        .find(|&&(threshold, _)| realism >= threshold)
        .map_or(CURATED_CHANCE_FLOOR, |&(_, chance)| chance)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0, 5)]
    #[case(39, 5)]
    #[case(40, 20)]
    #[case(59, 20)]
    #[case(60, 35)]
    #[case(70, 55)]
    #[case(79, 55)]
    #[case(80, 80)]
    #[case(90, 90)]
    #[case(94, 90)]
    #[case(95, 95)]
    #[case(100, 95)]
    fn curve_steps(#[case] realism: u8, #[case] expected: u32) {
        assert_eq!(curated_chance(realism), expected);
    }

    #[test]
    fn curve_never_decreases() {
        let chances: Vec<u32> = (0..=100).map(curated_chance).collect();
        assert!(chances.windows(2).all(|pair| matches!(pair, [a, b] if a <= b)));
    }
}
