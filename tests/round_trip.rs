//! Printing a parsed program yields source that evaluates to the same result.

mod cases;

use dyadic::{Value, parse};
use pretty_assertions::assert_eq;

const SOURCES: &[&str] = &[
    "1+2;",
    "2-3-4;",
    "100 / 10 / 5;",
    "3 - 4 * 2 - 1;",
    "(2 - 3) - 4;",
    ".5 + .;",
    "1 / 0;",
    "1 / 0 - 1 / 0;",
    "'a'+'b';",
    r#""it's" + ' "quoted"';"#,
    "'n=' + 1 + 2;",
    "1?2:3;",
    "0?2:3;",
    "x ? (zero ? 'a' : 'b') : 'c';",
    "(1, 2, 3) + 1;",
    "add(x * 2, pi), concat(name, '!');",
    "len((1, 'four')) * 10;",
    "missing; empty ? 1 : digits - 2;",
];

fn same(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => x == y || (x.is_nan() && y.is_nan()),
        _ => a == b,
    }
}

#[test]
fn printed_program_evaluates_the_same() {
    for source in SOURCES {
        let program = parse(source).unwrap_or_else(|e| panic!("{:?}: {}", source, e));
        let printed = program.to_string();

        let expected = cases::run(source).unwrap();
        let actual = cases::run(&printed)
            .unwrap_or_else(|e| panic!("{:?} printed as {:?}: {}", source, printed, e));
        assert!(
            same(&expected, &actual),
            "{:?} gave {:?} but its printed form {:?} gave {:?}",
            source,
            expected,
            printed,
            actual
        );
    }
}

#[test]
fn printed_form_is_fully_parenthesized() {
    assert_eq!(parse("2-3-4;").unwrap().to_string(), "(2 - (3 - 4));");
    assert_eq!(parse("1?2:3;").unwrap().to_string(), "(1 ? 2 : 3);");
    assert_eq!(
        parse("add(1, 'x'), y;").unwrap().to_string(),
        "add(1, 'x'), y;"
    );
}
