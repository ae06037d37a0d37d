//! Property tests for folding check results into a run.

use proptest::prelude::*;

use taskmaster_verify::{Check, CheckRun, CheckStatus};

fn status() -> impl Strategy<Value = CheckStatus> {
    prop_oneof![
        Just(CheckStatus::Pass),
        Just(CheckStatus::Warn),
        Just(CheckStatus::Fail),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: a run passes exactly when no check failed; warnings never block.
    #[test]
    fn property_all_passed_iff_no_failure(
        statuses in proptest::collection::vec(status(), 0..8)
    ) {
        let run: CheckRun = statuses
            .iter()
            .enumerate()
            .map(|(i, s)| Check::new(format!("check {}", i), *s, "detail"))
            .collect();

        let any_fail = statuses.contains(&CheckStatus::Fail);
        prop_assert_eq!(run.all_passed(), !any_fail);
        prop_assert_eq!(run.passed() + run.warnings() + run.failures(), statuses.len());
        prop_assert_eq!(run.len(), statuses.len());
    }

    /// PROPERTY: recorded order is preserved.
    #[test]
    fn property_checks_keep_recording_order(
        statuses in proptest::collection::vec(status(), 1..8)
    ) {
        let mut run = CheckRun::new();
        for (i, s) in statuses.iter().enumerate() {
            run.record(Check::new(format!("check {}", i), *s, "detail"));
        }

        for (i, check) in run.checks().iter().enumerate() {
            let expected = format!("check {}", i);
            prop_assert_eq!(check.name(), expected.as_str());
            prop_assert_eq!(check.status(), statuses[i]);
        }
    }
}
