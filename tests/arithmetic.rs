use rpncalc::EvalError;

mod cases;

test_case!(
    addition,
    input: "3 4 +",
    result: Ok(Some(7.0)),
);

test_case!(
    subtraction_takes_top_from_below,
    input: "10 4 -",
    result: Ok(Some(6.0)),
);

test_case!(
    multiplication,
    input: "-3 7 *",
    result: Ok(Some(-21.0)),
);

test_case!(
    division,
    input: "7 2 /",
    result: Ok(Some(3.5)),
);

test_case!(
    division_by_zero_is_infinite,
    input: "-1 0 /",
    result: Ok(Some(f64::NEG_INFINITY)),
);

test_case!(
    floor_division,
    input: "10 3 //",
    result: Ok(Some(3.0)),
);

test_case!(
    floor_division_negative,
    input: "-10 3 //",
    result: Ok(Some(-4.0)),
);

test_case!(
    remainder_rounds_quotient_to_nearest,
    input: "10 4 %",
    result: Ok(Some(2.0)),
);

test_case!(
    remainder_can_be_negative,
    input: "11 4 %",
    result: Ok(Some(-1.0)),
);

test_case!(
    power,
    input: "2 10 ^",
    result: Ok(Some(1024.0)),
);

test_case!(
    cube_root_via_root,
    input: "8 3 root",
    approx: 2.0,
);

test_case!(
    square_root,
    input: "2 sqrt",
    approx: std::f64::consts::SQRT_2,
);

test_case!(
    cube_root,
    input: "64 cbrt",
    result: Ok(Some(4.0)),
);

test_case!(
    pi_constant,
    input: "pi",
    result: Ok(Some(std::f64::consts::PI)),
);

test_case!(
    euler_constant,
    input: "e",
    result: Ok(Some(std::f64::consts::E)),
);

test_case!(
    circle_area,
    input: "pi 2 2 ^ *",
    approx: 4.0 * std::f64::consts::PI,
);

test_case!(
    pythagorean_identity,
    input: "0.7 sin 2 ^ 0.7 cos 2 ^ +",
    approx: 1.0,
);

test_case!(
    exp_log_inverse,
    input: "5 exp log",
    approx: 5.0,
);

test_case!(
    atan_of_one,
    input: "1 atan 4 *",
    approx: std::f64::consts::PI,
);

test_case!(
    nested_expression,
    input: "5 1 2 + 4 * + 3 -",
    result: Ok(Some(14.0)),
);

test_case!(
    missing_operand,
    input: "1 +",
    result: Err(EvalError::InsufficientOperands {
        symbol: "+",
        required: 2,
        available: 1,
        span: rpncalc::token::Span(2..3),
    }),
);
