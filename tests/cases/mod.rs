//! Shared `test_case!` macro for the integration tests.
//!
//! Forms:
//!
//! - `input` + `result`: one-shot evaluation, compared exactly
//! - `input` + `approx`: one-shot evaluation, compared within 1e-12
//! - `stack` + `input` + `result` + `after`: evaluation against a context
//!   stack given bottom-to-top, checking the stack afterwards (also
//!   bottom-to-top)

#[macro_export]
macro_rules! test_case {
    (
        $name:ident,
        input: $input:expr,
        result: $expected:expr $(,)?
    ) => {
        #[test]
        fn $name() {
            let actual = rpncalc::run($input, None).map_err(|e| e.source);
            pretty_assertions::assert_eq!(actual, $expected);
        }
    };
    (
        $name:ident,
        input: $input:expr,
        approx: $expected:expr $(,)?
    ) => {
        #[test]
        fn $name() {
            let actual = rpncalc::run($input, None)
                .expect("evaluation failed")
                .expect("no result");
            let expected: f64 = $expected;
            assert!(
                (actual - expected).abs() < 1e-12,
                "{}: expected {expected}, got {actual}",
                $input
            );
        }
    };
    (
        $name:ident,
        stack: [$($before:expr),* $(,)?],
        input: $input:expr,
        result: $expected:expr,
        after: [$($after:expr),* $(,)?] $(,)?
    ) => {
        #[test]
        fn $name() {
            let before: Vec<f64> = vec![$($before as f64),*];
            let mut stack: rpncalc::Stack = before.into_iter().collect();
            let actual = rpncalc::run($input, Some(&mut stack)).map_err(|e| e.source);
            pretty_assertions::assert_eq!(actual, $expected);

            let mut after: Vec<f64> = stack.iter().collect();
            after.reverse();
            let expected_after: Vec<f64> = vec![$($after as f64),*];
            pretty_assertions::assert_eq!(after, expected_after);
        }
    };
}
