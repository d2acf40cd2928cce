use exprcalc::interpreter::engine::Evaluator;
use exprcalc::interpreter::variables::NoVariables;
use proptest::prelude::*;

const EPSILON: f64 = 1e-4;

fn eval(source: &str) -> f64 {
    Evaluator::new(NoVariables)
        .evaluate(source)
        .expect("Evaluation failed")
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "expected {}, got {}",
        expected,
        actual
    );
}

#[test]
fn test_simple_arithmetic() {
    assert_close(eval("3 + 4"), 7.0);
    assert_close(eval("3 - 2"), 1.0);
    assert_close(eval("3 * 4"), 12.0);
    assert_close(eval("8 / 4"), 2.0);
    assert_close(eval("2 ^ 3"), 8.0);
}

#[test]
fn test_functions() {
    assert_close(eval("sqrt(4)"), 2.0);
    assert_close(eval("sin(30)"), 30f64.to_radians().sin());
    assert_close(eval("cos(60)"), 60f64.to_radians().cos());
    assert_close(eval("tan(45)"), 45f64.to_radians().tan());
}

#[test]
fn test_mixed_precedence() {
    assert_close(eval("2+2*2"), 6.0);
    assert_close(eval("(2+2)*2"), 8.0);
    assert_close(eval("2 * 3 ^ 2"), 18.0);
    assert_close(eval("-3 ^ 2"), -9.0);
    assert_close(eval("(-3) ^ 2"), 9.0);
    assert_close(eval("10 / 4 * 2"), 5.0);
    assert_close(eval("sqrt(9) * sqrt 16 - 2"), 10.0);
}

#[test]
fn test_decimal_literals() {
    assert_close(eval("0.5 + .25"), 0.75);
    assert_close(eval("1.5 * 4"), 6.0);
}

#[test]
fn test_spaces_are_insignificant() {
    assert_eq!(eval("1+2*3"), eval("  1 +  2 *   3  "));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_add_then_multiply(a in 0u16..1000, b in 0u16..1000, c in 0u16..1000) {
        let expected = f64::from(a) + f64::from(b) * f64::from(c);
        prop_assert_eq!(eval(&format!("{} + {} * {}", a, b, c)), expected);
    }

    #[test]
    fn prop_subtraction_is_left_associative(a in 0u16..1000, b in 0u16..1000, c in 0u16..1000) {
        let expected = (f64::from(a) - f64::from(b)) - f64::from(c);
        prop_assert_eq!(eval(&format!("{}-{}-{}", a, b, c)), expected);
    }

    #[test]
    fn prop_division_is_left_associative(a in 0u16..1000, b in 1u16..100, c in 1u16..100) {
        let expected = (f64::from(a) / f64::from(b)) / f64::from(c);
        prop_assert_eq!(eval(&format!("{} / {} / {}", a, b, c)), expected);
    }

    #[test]
    fn prop_power_is_right_associative(a in 1u8..4, b in 0u8..3, c in 0u8..3) {
        let expected = f64::from(a).powf(f64::from(b).powf(f64::from(c)));
        prop_assert_eq!(eval(&format!("{}^{}^{}", a, b, c)), expected);
    }

    #[test]
    fn prop_unary_minus_binds_looser_than_power(a in 0u8..20, b in 0u8..4) {
        let expected = -(f64::from(a).powf(f64::from(b)));
        prop_assert_eq!(eval(&format!("-{} ^ {}", a, b)), expected);
    }

    #[test]
    fn prop_evaluation_is_idempotent(a in 0u16..1000, b in 1u16..1000) {
        let source = format!("({} - {}) / {} * sqrt({})", a, b, b, a);
        let first = eval(&source);
        let second = eval(&source);
        prop_assert_eq!(first.to_bits(), second.to_bits());
    }
}
