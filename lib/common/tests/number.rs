use objtext_common::{
    number::{index_strict, integer_lenient, real_lenient, real_strict},
    ArrayIndex, NumberError, Shortest,
};
use quickcheck_macros::quickcheck;

fn same(a: f64, b: f64) -> bool {
    a == b || (a.is_nan() && b.is_nan())
}

#[test]
fn lenient_reals() {
    assert_eq!(real_lenient::<f64>("0.123"), 0.123);
    assert_eq!(real_lenient::<f64>("1.000"), 1.0);
    assert_eq!(real_lenient::<f64>("-2.5e2"), -250.0);
    assert_eq!(real_lenient::<f64>("+4"), 4.0);
    assert_eq!(real_lenient::<f64>("1.5abc"), 1.5);
    assert_eq!(real_lenient::<f64>("-Infinity"), f64::NEG_INFINITY);
    assert!(real_lenient::<f64>("abc").is_nan());
    assert!(real_lenient::<f64>("NaN").is_nan());
    assert!(real_lenient::<f32>("").is_nan());
}

#[test]
fn strict_reals() {
    assert_eq!(real_strict::<f64>("0.5"), Ok(0.5));
    assert_eq!(
        real_strict::<f64>("1.5abc"),
        Err(NumberError::NotANumber("1.5abc".into()))
    );
    assert_eq!(
        real_strict::<f64>("inf"),
        Err(NumberError::NotFinite("inf".into()))
    );
    assert!(real_strict::<f32>("NaN").is_err());
}

#[test]
fn integers() {
    assert_eq!(integer_lenient("12"), Some(12));
    assert_eq!(integer_lenient("7abc"), Some(7));
    assert_eq!(integer_lenient("-3"), Some(-3));
    assert_eq!(integer_lenient("1.9"), Some(1));
    assert_eq!(integer_lenient(""), None);
    assert_eq!(integer_lenient("x1"), None);
    assert_eq!(integer_lenient("99999999999999999999"), None);

    assert_eq!(index_strict("3"), Ok(3));
    assert!(index_strict("0").is_err());
    assert!(index_strict("-1").is_err());
    assert!(index_strict("1.5").is_err());
    assert!(index_strict("").is_err());
}

#[test]
fn one_based_conversion() {
    assert_eq!(u32::from_one_based(1), Some(0));
    assert_eq!(u32::from_one_based(0), None);
    assert_eq!(u32::from_one_based(-4), None);
    assert_eq!(u8::from_one_based(256), Some(255));
    assert_eq!(u8::from_one_based(257), None);
    assert_eq!(i16::from_one_based(i64::MIN), None);
    assert_eq!(0u32.to_one_based(), 1);
    assert_eq!(u64::MAX.to_one_based(), i128::from(u64::MAX) + 1);
}

#[test]
fn shortest_text() {
    assert_eq!(Shortest(1.0f64).to_string(), "1");
    assert_eq!(Shortest(0.0f64).to_string(), "0");
    assert_eq!(Shortest(0.123f64).to_string(), "0.123");
    assert_eq!(Shortest(-2.5f32).to_string(), "-2.5");
    assert_eq!(Shortest(0.1f32).to_string(), "0.1");
    assert_eq!(Shortest(f64::NAN).to_string(), "NaN");
    assert_eq!(Shortest(f64::INFINITY).to_string(), "Infinity");
    assert_eq!(Shortest(f64::NEG_INFINITY).to_string(), "-Infinity");
    assert_eq!(Shortest(-0.0f64).to_string(), "-0");
}

#[test]
fn shortest_text_switches_to_exponent() {
    assert_eq!(Shortest(1e-6f64).to_string(), "0.000001");
    assert_eq!(Shortest(1e-7f64).to_string(), "1e-7");
    assert_eq!(Shortest(-2.5e-8f64).to_string(), "-2.5e-8");
    assert_eq!(Shortest(1e20f64).to_string(), "100000000000000000000");
    assert_eq!(Shortest(1e21f64).to_string(), "1e+21");
    assert_eq!(Shortest(1.5e300f64).to_string(), "1.5e+300");
    assert_eq!(Shortest(5e-324f64).to_string(), "5e-324");
    assert_eq!(Shortest(f64::MAX).to_string(), "1.7976931348623157e+308");
    assert_eq!(Shortest(1e-7f32).to_string(), "1e-7");
    assert_eq!(Shortest(f32::MAX).to_string(), "3.4028235e+38");

    for x in [1e-7, 1e21, 1.5e300, 5e-324, f64::MAX, f64::MIN_POSITIVE] {
        let text = Shortest(x).to_string();
        assert_eq!(real_lenient::<f64>(&text), x, "{text}");
        assert_eq!(real_strict::<f64>(&text), Ok(x), "{text}");
    }
}

#[quickcheck]
fn shortest_reads_back_f64(x: f64) -> bool {
    same(real_lenient::<f64>(&Shortest(x).to_string()), x)
}

#[quickcheck]
fn shortest_reads_back_f32(x: f32) -> bool {
    let y = real_lenient::<f32>(&Shortest(x).to_string());
    y == x || (x.is_nan() && y.is_nan())
}

#[quickcheck]
fn lenient_integer_matches_std(n: i64) -> bool {
    integer_lenient(&n.to_string()) == Some(n)
}
