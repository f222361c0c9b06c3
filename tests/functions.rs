use scical::{
    AngleMode, Calculator, Value,
    error::{CalcError, RuntimeError},
    interpreter::{
        environment::Environment,
        evaluator::function::{builtin, core::BUILTIN_FUNCTIONS, log, min_max, random, stats},
    },
};

fn eval(src: &str) -> Value {
    Calculator::new().evaluate(src)
                     .unwrap_or_else(|e| panic!("{src} failed: {e}"))
}

fn runtime_error(src: &str) -> RuntimeError {
    match Calculator::new().evaluate(src) {
        Err(CalcError::Runtime(e)) => e,
        other => panic!("{src} should fail at runtime, got {other:?}"),
    }
}

#[test]
fn every_builtin_is_registered() {
    let env = Environment::new(AngleMode::Degrees);
    for name in BUILTIN_FUNCTIONS.iter()
                                 .chain(&["sin", "cos", "tan", "sec", "csc", "cot"])
    {
        assert!(env.function(name).is_ok(), "{name} is missing");
    }
    assert!(env.function("eval").is_err());
    assert!(env.function("print").is_err());
}

#[test]
fn square_root_and_logarithms() {
    assert_eq!(eval("sqrt(16)"), Value::Real(4.0));
    assert_eq!(eval("log(100)"), Value::Real(2.0));
    assert_eq!(eval("log(8, 2)"), Value::Real(3.0));
    assert_eq!(eval("ln(1)"), Value::Real(0.0));
    assert_eq!(eval("ln(e)"), Value::Real(1.0));
    assert_eq!(eval("ln(1000, 10)"), Value::Real(3.0));

    assert!(matches!(runtime_error("sqrt(-4)"), RuntimeError::MathDomain { .. }));
    assert!(matches!(runtime_error("log(0)"), RuntimeError::MathDomain { .. }));
    assert!(matches!(runtime_error("ln(-1)"), RuntimeError::MathDomain { .. }));
    assert_eq!(runtime_error("log(5, 1)"), RuntimeError::DivisionByZero);
}

#[test]
fn statistics() {
    assert_eq!(eval("mean(1, 2, 3)"), Value::Integer(2));
    assert_eq!(eval("mean(1, 2)"), Value::Real(1.5));
    assert_eq!(eval("mean(1.5, 2.5)"), Value::Real(2.0));
    assert_eq!(eval("median(5, 1, 3)"), Value::Integer(3));
    assert_eq!(eval("median(4, 1, 3, 2)"), Value::Real(2.5));
    assert_eq!(eval("mode(1, 2, 2, 3)"), Value::Integer(2));
    assert_eq!(eval("mode(2, 2.0, 1)"), Value::Integer(2));
    assert_eq!(eval("mode()"), Value::Text("No unique mode".to_string()));
    assert_eq!(eval("mode(1, 2, 3)"), Value::Text("No unique mode".to_string()));
    assert_eq!(eval("variance(1, 3, 5)"), Value::Integer(4));
    assert_eq!(eval("variance(1.0, 3.0, 5.0)"), Value::Real(4.0));
    assert_eq!(eval("stdev(2, 4, 4, 4, 5, 5, 7, 9)"), eval("std(2, 4, 4, 4, 5, 5, 7, 9)"));
    assert_eq!(eval("stdev(1, 3, 5)"), Value::Real(2.0));
}

#[test]
fn statistics_need_enough_values() {
    for src in ["std(1)", "stdev(1)", "variance(1)", "mean()", "median()"] {
        assert!(matches!(runtime_error(src), RuntimeError::FunctionCall { .. }), "{src}");
    }
    assert_eq!(runtime_error("variance(1)").to_string(),
               "Function call error: variance() requires at least 2 arguments (1 given)");
    assert!(matches!(runtime_error("mean(1, [2])"), RuntimeError::FunctionCall { .. }));
}

#[test]
fn min_and_max() {
    assert_eq!(eval("min(3, 1, 2)"), Value::Integer(1));
    assert_eq!(eval("max(3, 1.5)"), Value::Integer(3));
    assert_eq!(eval("max([4, 9, 2])"), Value::Integer(9));
    assert_eq!(eval("min((4, 9, 2))"), Value::Integer(2));
    assert_eq!(eval("max([1, 2], [1, 3])"), Value::List(vec![Value::Integer(1), Value::Integer(3)]));
    assert!(matches!(runtime_error("min([])"), RuntimeError::FunctionCall { .. }));
    assert!(matches!(runtime_error("max(1, [2])"), RuntimeError::TypeMismatch { .. }));
    assert!(matches!(runtime_error("min(5)"), RuntimeError::FunctionCall { .. }));
    assert!(matches!(runtime_error("max(2.5)"), RuntimeError::FunctionCall { .. }));
}

#[test]
fn abs_round_factorial_and_mod() {
    assert_eq!(eval("abs(-3)"), Value::Integer(3));
    assert_eq!(eval("abs(-2.5)"), Value::Real(2.5));
    assert_eq!(eval("round(2.5)"), Value::Integer(2));
    assert_eq!(eval("round(3.5)"), Value::Integer(4));
    assert_eq!(eval("round(-2.7)"), Value::Integer(-3));
    assert_eq!(eval("round(2.675, 1)"), Value::Real(2.7));
    assert_eq!(eval("round(2.675, 2)"), Value::Real(2.67));
    assert_eq!(eval("round(1234, -2)"), Value::Integer(1200));
    assert_eq!(eval("round(7, 2)"), Value::Integer(7));
    assert_eq!(eval("factorial(0)"), Value::Integer(1));
    assert_eq!(eval("factorial(5)"), Value::Integer(120));
    assert_eq!(eval("factorial(4.9)"), Value::Integer(24));
    assert_eq!(eval("factorial(20)"), Value::Integer(2_432_902_008_176_640_000));
    assert_eq!(eval("mod(-7, 3)"), Value::Integer(2));
    assert_eq!(eval("mod(5.5, 2)"), Value::Real(1.5));

    assert!(matches!(eval("factorial(25)"), Value::Real(_)));
    assert!(matches!(runtime_error("factorial(-1)"), RuntimeError::MathDomain { .. }));
    assert!(matches!(runtime_error("factorial(200)"), RuntimeError::Overflow { .. }));
    assert!(matches!(runtime_error("round(1, 2.5)"), RuntimeError::FunctionCall { .. }));
}

#[test]
fn arity_is_checked_before_the_call() {
    assert_eq!(runtime_error("sin(1, 2)").to_string(),
               "Function call error: sin() takes exactly one argument (2 given)");
    assert_eq!(runtime_error("rand(1)").to_string(),
               "Function call error: rand() takes no arguments (1 given)");
    assert_eq!(runtime_error("log(1, 2, 3)").to_string(),
               "Function call error: log() takes 1 to 2 arguments (3 given)");
    assert_eq!(runtime_error("mod(1)").to_string(),
               "Function call error: mod() takes exactly 2 arguments (1 given)");
    assert!(matches!(runtime_error("sqrt()"), RuntimeError::FunctionCall { .. }));
}

#[test]
fn argument_errors_propagate_unchanged() {
    assert_eq!(runtime_error("sqrt(1/0)"), RuntimeError::DivisionByZero);
    assert_eq!(runtime_error("max(1, foo)"),
               RuntimeError::UnknownName { name: "foo".to_string() });
}

#[test]
fn choice_requires_a_sequence() {
    assert!(matches!(eval("choice((7,))"), Value::Integer(7)));
    assert!(matches!(runtime_error("choice(1)"), RuntimeError::FunctionCall { .. }));
    assert!(matches!(runtime_error("choice([])"), RuntimeError::FunctionCall { .. }));
    assert!(matches!(runtime_error("choice(1, 2)"), RuntimeError::FunctionCall { .. }));
}

#[test]
fn non_numeric_arguments_are_rejected() {
    for src in ["sqrt([4])", "sin((1,))", "abs([1])", "log([10])", "factorial([3])"] {
        assert!(matches!(runtime_error(src), RuntimeError::FunctionCall { .. }), "{src}");
    }
}

#[test]
fn trig_of_an_infinite_angle_is_a_domain_error() {
    for src in ["sin(1e400)", "cos(-1e400)", "tan(1e400)", "cot(1e400)"] {
        assert!(matches!(runtime_error(src), RuntimeError::MathDomain { .. }), "{src}");
    }
}

#[test]
fn direct_calls_with_short_argument_lists_fail_cleanly() {
    let one = [Value::Integer(1)];
    let results = [builtin::sqrt(&[]),
                   builtin::abs(&[]),
                   builtin::round(&[]),
                   builtin::factorial(&[]),
                   builtin::modulo(&one),
                   log::log(&[]),
                   random::choice(&[]),
                   stats::mean(&[]),
                   stats::median(&[]),
                   stats::variance(&one),
                   stats::stdev("stdev", &one),
                   min_max::min_max("min", &[])];

    for result in results {
        assert!(matches!(result, Err(RuntimeError::FunctionCall { .. })), "{result:?}");
    }
}
