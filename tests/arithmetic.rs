mod cases;

test_case!(
    simple_addition,
    input: "1+2;",
    value: 3.0,
);

test_case!(
    decimal_literals,
    input: ".5 + 0.25;",
    value: 0.75,
);

test_case!(
    float_rounding_is_preserved,
    input: "0.1 + 0.2;",
    value: 0.30000000000000004,
);

test_case!(
    multiplication_binds_tighter,
    input: "2 * 3 + 4;",
    value: 10.0,
);

test_case!(
    parentheses_override_precedence,
    input: "(1 + 2) * (3 + 4);",
    value: 21.0,
);

// Same-precedence chains group to the right: 2 - (3 - 4)
test_case!(
    subtraction_is_right_associative,
    input: "2-3-4;",
    value: 3.0,
);

// 10 - (2 - 3)
test_case!(
    longer_subtraction_chain,
    input: "10 - 2 - 3;",
    value: 11.0,
);

// 100 / (10 / 5)
test_case!(
    division_is_right_associative,
    input: "100 / 10 / 5;",
    value: 50.0,
);

// 10 - (2 + 3)
test_case!(
    mixed_additive_chain,
    input: "10 - 2 + 3;",
    value: 5.0,
);

// 3 - ((4 * 2) - 1)
test_case!(
    mixed_levels,
    input: "3 - 4 * 2 - 1;",
    value: -4.0,
);

test_case!(
    explicit_left_grouping,
    input: "(2 - 3) - 4;",
    value: -5.0,
);

test_case!(
    variables,
    input: "x * pi;",
    value: 17.5,
);

test_case!(
    numeric_text_is_coerced,
    input: "digits * 2 - 4;",
    value: 80.0,
);

test_case!(
    blank_text_is_zero,
    input: "empty * 3 + 1;",
    value: 1.0,
);

test_case!(
    division_by_zero,
    input: "1 / 0;",
    value: f64::INFINITY,
);

test_case!(
    zero_by_zero,
    input: "zero / zero;",
    nan,
);

test_case!(
    non_numeric_text,
    input: "'abc' * 2;",
    nan,
);

test_case!(
    unbound_operand,
    input: "missing - 1;",
    nan,
);

test_case!(
    lone_decimal_point,
    input: ". + 1;",
    nan,
);

test_case!(
    group_yields_last_expression,
    input: "(1, 2, 3) + 1;",
    value: 4.0,
);

test_case!(
    program_yields_last_statement,
    input: "1; 2; x + 1;",
    value: 6.0,
);
