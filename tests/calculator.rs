use std::thread;

use scical::{
    AngleMode, Calculator, Value, balance_parentheses, error::SampleError,
    interpreter::parser::core::DEFAULT_MAX_DEPTH,
};

fn real(calc: &Calculator, src: &str) -> f64 {
    match calc.evaluate(src) {
        Ok(value) => value.as_real()
                          .unwrap_or_else(|e| panic!("{src} gave a non-number: {e}")),
        Err(e) => panic!("{src} failed: {e}"),
    }
}

fn assert_close(actual: f64, expected: f64) {
    assert!((actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}");
}

#[test]
fn precedence_and_right_associative_power() {
    let calc = Calculator::new();
    assert_eq!(calc.calculate("2+3*4"), "14");
    assert_eq!(calc.calculate("2^3^2"), "512");
    assert_eq!(calc.calculate("2**3**2"), "512");
    assert_eq!(calc.calculate("(2+3)*4"), "20");
    assert_eq!(calc.calculate("-2**2"), "-4");
    assert_eq!(calc.calculate("2**-1"), "0.5");
    assert_eq!(calc.calculate("10 - 4 - 3"), "3");
    assert_eq!(calc.calculate("2 * 3 % 4"), "2");
}

#[test]
fn division_kinds() {
    let calc = Calculator::new();
    assert_eq!(calc.calculate("10/2"), "5.0");
    assert_eq!(calc.calculate("7//2"), "3");
    assert_eq!(calc.calculate("-7//2"), "-4");
    assert_eq!(calc.calculate("-7%3"), "2");
    assert_eq!(calc.calculate("7%-3"), "-2");
    assert_eq!(calc.calculate("7.5//2"), "3.0");
    assert_eq!(calc.calculate("-7.5%2"), "0.5");
}

#[test]
fn division_and_modulo_by_zero_fail_closed() {
    let calc = Calculator::new();
    for src in ["1/0", "1//0", "1%0", "1.5/0.0", "mod(3, 0)", "0**-1", "cot(0)", "csc(0)"] {
        assert_eq!(calc.calculate(src), "Division by zero", "{src}");
    }
}

#[test]
fn angle_mode_switching() {
    let calc = Calculator::new();
    assert_eq!(calc.angle_mode(), AngleMode::Degrees);
    assert_close(real(&calc, "sin(30)"), 0.5);
    assert_close(real(&calc, "cos(60)"), 0.5);
    assert_close(real(&calc, "tan(45)"), 1.0);

    calc.set_mode("rad");
    assert_eq!(calc.angle_mode(), AngleMode::Radians);
    assert_close(real(&calc, "sin(pi/2)"), 1.0);
    assert_close(real(&calc, "cot(pi/4)"), 1.0);

    calc.set_mode("degrees");
    calc.set_mode("");
    assert_eq!(calc.angle_mode(), AngleMode::Radians);

    calc.set_angle_mode(AngleMode::Degrees);
    assert_close(real(&calc, "sec(60)"), 2.0);
}

#[test]
fn chained_comparisons() {
    let calc = Calculator::new();
    assert_eq!(calc.calculate("1<2<3"), "True");
    assert_eq!(calc.calculate("3<2<1"), "False");
    assert_eq!(calc.calculate("1 < 3 > 2"), "True");
    assert_eq!(calc.calculate("1 == 1.0 != 2"), "True");
    assert_eq!(calc.calculate("2 >= 2 <= 1"), "False");
}

#[test]
fn chained_comparison_evaluates_every_operand() {
    let calc = Calculator::new();
    // The first pair already fails, but the last operand still runs.
    assert_eq!(calc.calculate("2 < 1 < 1/0"), "Division by zero");
    // Once a pair has failed, later pairs are not compared.
    assert_eq!(calc.calculate("2 < 1 < [1]"), "False");
    assert!(calc.calculate("1 < 2 < [1]").starts_with("Error: "));
}

#[test]
fn boolean_operators_are_eager() {
    let calc = Calculator::new();
    assert_eq!(calc.calculate("1 and 0"), "False");
    assert_eq!(calc.calculate("0 or 2"), "True");
    assert_eq!(calc.calculate("not 0"), "True");
    assert_eq!(calc.calculate("not 1 < 2"), "False");
    assert_eq!(calc.calculate("True and False or True"), "True");
    assert_eq!(calc.calculate("False and 1/0"), "Division by zero");
    assert_eq!(calc.calculate("True or foo"), "Error: Unknown name: foo");
}

#[test]
fn unknown_identifiers_and_functions() {
    let calc = Calculator::new();
    assert_eq!(calc.calculate("foo(1)"), "Error: Unknown function: foo");
    assert_eq!(calc.calculate("bar"), "Error: Unknown name: bar");
    assert!(calc.calculate("__import__(1)").starts_with("Error: "));
    assert!(calc.calculate("sin").starts_with("Error: "));
}

#[test]
fn unknown_function_fails_before_arguments_run() {
    let calc = Calculator::new();
    assert_eq!(calc.calculate("foo(1/0)"), "Error: Unknown function: foo");
}

#[test]
fn names_are_case_insensitive() {
    let calc = Calculator::new();
    assert_eq!(calc.calculate("SQRT(16)"), "4.0");
    assert_eq!(calc.calculate("PI == pi"), "True");
    assert_close(real(&calc, "E"), std::f64::consts::E);
}

#[test]
fn syntax_errors_are_reported() {
    let calc = Calculator::new();
    for src in ["1 +", "(1", "1 2", "2 $ 3", "", ")", "[1, 2", "f(1,)"] {
        assert!(calc.calculate(src).starts_with("Error: "), "{src}");
    }
}

#[test]
fn display_format() {
    let calc = Calculator::new();
    assert_eq!(calc.calculate("0.1 + 0.2"), "0.30000000000000004");
    assert_eq!(calc.calculate("1/100000"), "1e-05");
    assert_eq!(calc.calculate("2.0 ** 60"), "1.152921504606847e+18");
    assert_eq!(calc.calculate("[1, 2.5, True]"), "[1, 2.5, True]");
    assert_eq!(calc.calculate("(1,)"), "(1,)");
    assert_eq!(calc.calculate("(1, (2, 3))"), "(1, (2, 3))");
    assert_eq!(calc.calculate("[]"), "[]");
}

#[test]
fn integer_overflow_continues_as_float() {
    let calc = Calculator::new();
    assert_eq!(calc.calculate("9223372036854775807 + 1"), "9.223372036854776e+18");
    assert_eq!(calc.calculate("2 ** 64"), "1.8446744073709552e+19");
    assert!(calc.calculate("10.0 ** 400").starts_with("Error: Numerical result out of range"));
    assert!(calc.calculate("99999999999999999999").starts_with("Error: "));
}

#[test]
fn power_domain() {
    let calc = Calculator::new();
    assert!(calc.calculate("(-8) ** (1/3)").starts_with("Error: Math domain error"));
    assert_eq!(calc.calculate("(-2) ** 3"), "-8");
    assert_eq!(calc.calculate("0 ** 0"), "1");
}

#[test]
fn type_mismatches() {
    let calc = Calculator::new();
    assert!(calc.calculate("[1] + 1").starts_with("Error: Type mismatch"));
    assert!(calc.calculate("-[1]").starts_with("Error: Type mismatch"));
    assert!(calc.calculate("(1, 2) < 3").starts_with("Error: Type mismatch"));
    assert_eq!(calc.calculate("[1] == 1"), "False");
    assert_eq!(calc.calculate("True + True"), "2");
}

#[test]
fn evaluation_is_repeatable() {
    let calc = Calculator::new();
    for src in ["2+3*4", "mean(1, 2, 3)", "sin(30)", "mode(1, 1, 2, 2)", "[1, (2,)]"] {
        assert_eq!(calc.calculate(src), calc.calculate(src), "{src}");
    }
}

#[test]
fn randomized_functions_stay_in_domain() {
    let calc = Calculator::new();
    for _ in 0..100 {
        let r = real(&calc, "rand()");
        assert!((0.0..1.0).contains(&r));

        let picked = calc.evaluate("choice([1, 2, 3])").unwrap();
        assert!([Value::Integer(1), Value::Integer(2), Value::Integer(3)].contains(&picked));
    }
}

#[test]
fn no_unique_mode_is_a_value() {
    let calc = Calculator::new();
    assert_eq!(calc.calculate("mode(1,1,2,2)"), "No unique mode");
    assert_eq!(calc.evaluate("mode(1,1,2,2)").unwrap(),
               Value::Text("No unique mode".to_string()));
    assert_eq!(calc.calculate("mode(3, 1, 3)"), "3");
}

#[test]
fn evaluate_at_binds_x() {
    let calc = Calculator::new();
    assert_eq!(calc.evaluate_at("x^2 + 1", 2.0), Some(5.0));
    assert_eq!(calc.evaluate_at("X * 2", 1.5), Some(3.0));
    assert_eq!(calc.evaluate_at("x > 0", 1.0), Some(1.0));
}

#[test]
fn evaluate_at_never_raises() {
    let calc = Calculator::new();
    assert_eq!(calc.evaluate_at("1/x", 0.0), None);
    assert_eq!(calc.evaluate_at("sqrt(x)", -1.0), None);
    assert_eq!(calc.evaluate_at("x +", 1.0), None);
    assert_eq!(calc.evaluate_at("y", 1.0), None);
    assert_eq!(calc.evaluate_at("[x]", 1.0), None);
    assert_eq!(calc.evaluate_at("mode(1, 1, 2, 2)", 1.0), None);
}

#[test]
fn bindings_shadow_constants() {
    let calc = Calculator::new();
    let value = calc.evaluate_with("e + pi", &[("E", Value::Integer(1))]).unwrap();
    assert_eq!(value, Value::Real(1.0 + std::f64::consts::PI));
}

#[test]
fn deep_nesting_is_rejected() {
    let calc = Calculator::new();
    let deep = format!("{}1{}", "(".repeat(10_000), ")".repeat(10_000));
    assert!(calc.calculate(&deep).starts_with("Error: "));

    let negations = format!("{}1", "-".repeat(10_000));
    assert!(calc.calculate(&negations).starts_with("Error: "));

    let calls = format!("{}1{}", "abs(".repeat(10_000), ")".repeat(10_000));
    assert!(calc.calculate(&calls).starts_with("Error: "));

    let shallow = format!("{}1{}", "(".repeat(50), ")".repeat(50));
    assert_eq!(calc.calculate(&shallow), "1");
}

#[test]
fn deepest_accepted_input_fits_a_default_thread_stack() {
    let depth = DEFAULT_MAX_DEPTH - 1;
    let cases = [(format!("{}1{}", "(".repeat(depth), ")".repeat(depth)), "1"),
                 (format!("{}-1{}", "abs(".repeat(depth), ")".repeat(depth)), "1"),
                 (format!("{}1{}", "[".repeat(depth), "]".repeat(depth)), "]"),
                 (format!("{}1", "-".repeat(depth)), "-1")];

    let handle = thread::spawn(move || {
        let calc = Calculator::new();
        for (src, expected) in &cases {
            let result = calc.calculate(src);
            assert!(!result.starts_with("Error"), "{result}");
            assert!(result.ends_with(expected), "{result}");
        }

        let over = DEFAULT_MAX_DEPTH + 1;
        let too_deep = format!("{}1{}", "(".repeat(over), ")".repeat(over));
        assert!(calc.calculate(&too_deep).starts_with("Error: "));
    });
    assert!(handle.join().is_ok());
}

#[test]
fn max_depth_is_configurable() {
    let calc = Calculator::new().with_max_depth(5);
    assert_eq!(calc.max_depth(), 5);
    assert_eq!(calc.calculate("((1))"), "1");
    assert!(calc.calculate("((((((((1))))))))").starts_with("Error: "));
}

#[test]
fn calculator_is_shared_across_threads() {
    let calc = Calculator::new();
    thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| {
                 for _ in 0..50 {
                     // Either mode, but never a mix within one evaluation.
                     let v = real(&calc, "sin(90)");
                     assert!((v - 1.0).abs() < 1e-9 || (v - 90f64.sin()).abs() < 1e-9);
                 }
             });
        }
        s.spawn(|| {
             for _ in 0..50 {
                 calc.set_mode("rad");
                 calc.set_mode("deg");
             }
         });
    });
}

#[test]
fn sampling_a_curve() {
    let calc = Calculator::new();
    let samples = calc.sample("x^2", 0.0, 2.0, 3).unwrap();
    let points = samples.points();

    assert_eq!(points.len(), 10);
    assert_eq!(points[0], (0.0, Some(0.0)));
    assert_eq!(points[9], (2.0, Some(4.0)));
    assert!(samples.has_valid_points());

    let samples = calc.sample("sqrt(x)", -5.0, -1.0, 20).unwrap();
    assert_eq!(samples.points().len(), 20);
    assert!(!samples.has_valid_points());

    assert_eq!(calc.sample("x", 2.0, 1.0, 10),
               Err(SampleError::InvalidRange { x_min: 2.0,
                                               x_max: 1.0 }));
    assert!(calc.sample("x", 0.0, f64::INFINITY, 10).is_err());
}

#[test]
fn auto_closing_parentheses() {
    let calc = Calculator::new();
    assert_eq!(balance_parentheses("sqrt(16"), "sqrt(16)");
    assert_eq!(calc.calculate(&balance_parentheses("(1 + (2 * 3")), "7");
    assert_eq!(balance_parentheses("1 + 2"), "1 + 2");
}
