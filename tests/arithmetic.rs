use calculator::{RuntimeError, add, divide, multiply, sqrt, subtract};
use rand::Rng;

struct Case {
    name:   &'static str,
    values: &'static [f64],
    want:   f64,
}

fn close_enough(a: f64, b: f64, tolerance: f64) -> bool {
    (a - b).abs() <= tolerance
}

#[test]
fn add_cases() {
    let cases = [Case { name:   "Two identical numbers",
                        values: &[2.0, 2.0],
                        want:   4.0, },
                 Case { name:   "One number is zero",
                        values: &[5.0, 0.0],
                        want:   5.0, },
                 Case { name:   "Many numbers",
                        values: &[1.0, 2.0, 3.0, 4.5],
                        want:   10.5, },
                 Case { name:   "Single number",
                        values: &[-7.25],
                        want:   -7.25, },
                 Case { name:   "No numbers",
                        values: &[],
                        want:   0.0, }];

    for case in cases {
        assert_eq!(add(case.values), case.want, "{}: add({:?})", case.name, case.values);
    }
}

#[test]
fn add_random() {
    let mut rng = rand::rng();

    for _ in 0..100 {
        let a = rng.random::<f64>() * 1000.0;
        let b = rng.random::<f64>() * -1000.0;

        assert_eq!(add(&[a, b]), a + b, "add({a}, {b})");
    }
}

#[test]
fn add_random_sequences() {
    let mut rng = rand::rng();

    for _ in 0..100 {
        let len = rng.random_range(0..20);
        let values: Vec<f64> = (0..len).map(|_| rng.random_range(-1000.0..1000.0)).collect();
        let want = values.iter().fold(0.0, |acc, x| acc + x);

        assert_eq!(add(&values), want, "add({values:?})");
    }
}

#[test]
fn subtract_cases() {
    let cases = [Case { name:   "Two identical numbers",
                        values: &[2.0, 2.0],
                        want:   0.0, },
                 Case { name:   "One negative result",
                        values: &[1.0, 6.0],
                        want:   -5.0, },
                 Case { name:   "One decimal number",
                        values: &[2.0, 0.5],
                        want:   1.5, },
                 Case { name:   "Left to right fold",
                        values: &[10.0, 3.0, 2.0],
                        want:   5.0, },
                 Case { name:   "Single number",
                        values: &[4.0],
                        want:   4.0, },
                 Case { name:   "No numbers",
                        values: &[],
                        want:   0.0, }];

    for case in cases {
        assert_eq!(subtract(case.values), case.want, "{}: subtract({:?})", case.name, case.values);
    }
}

#[test]
fn multiply_cases() {
    let cases = [Case { name:   "Two positive numbers",
                        values: &[11.0, 9.0],
                        want:   99.0, },
                 Case { name:   "Two negative numbers",
                        values: &[-2.0, -3.5],
                        want:   7.0, },
                 Case { name:   "One negative number",
                        values: &[2.0, -3.5],
                        want:   -7.0, },
                 Case { name:   "Three numbers",
                        values: &[2.0, 3.0, 4.0],
                        want:   24.0, },
                 Case { name:   "Single number",
                        values: &[8.0],
                        want:   8.0, },
                 Case { name:   "No numbers",
                        values: &[],
                        want:   0.0, }];

    for case in cases {
        assert_eq!(multiply(case.values), case.want, "{}: multiply({:?})", case.name, case.values);
    }
}

#[test]
fn divide_cases() {
    let cases = [Case { name:   "Regular division",
                        values: &[10.0, 5.0],
                        want:   2.0, },
                 Case { name:   "Decimal division",
                        values: &[10.0, 2.5],
                        want:   4.0, },
                 Case { name:   "Left to right fold",
                        values: &[100.0, 5.0, 2.0],
                        want:   10.0, },
                 Case { name:   "Zero dividend",
                        values: &[0.0, 3.0],
                        want:   0.0, },
                 Case { name:   "Single number",
                        values: &[7.0],
                        want:   7.0, },
                 Case { name:   "No numbers",
                        values: &[],
                        want:   0.0, }];

    for case in cases {
        assert_eq!(divide(case.values),
                   Ok(case.want),
                   "{}: divide({:?})",
                   case.name,
                   case.values);
    }
}

#[test]
fn divide_by_zero_reports_divisor_index() {
    assert_eq!(divide(&[10.0, 0.0]), Err(RuntimeError::DivisionByZero { index: 1 }));
    assert_eq!(divide(&[10.0, 2.0, 5.0, 0.0]),
               Err(RuntimeError::DivisionByZero { index: 3 }));
    assert_eq!(divide(&[0.0, 0.0, 1.0]), Err(RuntimeError::DivisionByZero { index: 1 }));
    assert_eq!(divide(&[1.0, -0.0]), Err(RuntimeError::DivisionByZero { index: 1 }));
}

#[test]
fn divide_by_zero_anywhere_fails() {
    let mut rng = rand::rng();

    for _ in 0..100 {
        let len = rng.random_range(2..10);
        let mut values: Vec<f64> = (0..len).map(|_| rng.random_range(1.0..100.0)).collect();
        let zero_at = rng.random_range(1..len);
        values[zero_at] = 0.0;

        assert_eq!(divide(&values), Err(RuntimeError::DivisionByZero { index: zero_at }));
    }
}

#[test]
fn sqrt_cases() {
    let cases = [("Regular square root", 10.0, 3.162_277_660_2),
                 ("Decimal square root", 7.5, 2.738_612_787_5),
                 ("Perfect square", 81.0, 9.0),
                 ("Zero", 0.0, 0.0)];

    for (name, x, want) in cases {
        let got = sqrt(x).unwrap_or_else(|e| panic!("{name}: sqrt({x}): {e}"));
        assert!(close_enough(got, want, 0.001), "{name}: sqrt({x}): want {want}, got {got}");
    }
}

#[test]
fn sqrt_squares_back() {
    let mut rng = rand::rng();

    for _ in 0..100 {
        let x = rng.random_range(0.0..1_000_000.0);
        let v = sqrt(x).unwrap_or_else(|e| panic!("sqrt({x}): {e}"));

        assert!(close_enough(v * v, x, 1e-3), "sqrt({x}) = {v}");
    }
}

#[test]
fn sqrt_of_negative_is_domain_error() {
    assert_eq!(sqrt(-2.0), Err(RuntimeError::Domain { value: -2.0 }));
    assert_eq!(sqrt(-1e-300), Err(RuntimeError::Domain { value: -1e-300 }));
    assert_eq!(sqrt(-2.0).map_err(|e| e.to_string()),
               Err("square root of negative number -2 is undefined".to_string()));
}

#[test]
fn sqrt_of_nan_is_nan() {
    assert!(sqrt(f64::NAN).is_ok_and(f64::is_nan));
}
