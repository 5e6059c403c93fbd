use super::{validate, Error};

#[test]
fn display_length() {
    let err = Error::Length {
        context: "signature",
        expected: 64,
        actual: 63,
    };
    assert_eq!(
        err.to_string(),
        "signature: invalid length (expected 64, got 63)"
    );
}

#[test]
fn display_domain() {
    let err = Error::Domain {
        context: "PrimeField::inv",
        message: "inverse of zero",
    };
    assert_eq!(err.to_string(), "PrimeField::inv: inverse of zero");
}

#[test]
fn validate_length() {
    assert!(validate::length("input", 32, 32).is_ok());
    assert_eq!(
        validate::length("input", 31, 32),
        Err(Error::Length {
            context: "input",
            expected: 32,
            actual: 31,
        })
    );
}

#[test]
fn validate_conditions() {
    assert!(validate::encoding(true, "point", "bad tag").is_ok());
    assert!(matches!(
        validate::encoding(false, "point", "bad tag"),
        Err(Error::Encoding { .. })
    ));
    assert!(validate::domain(true, "scalar", "out of range").is_ok());
    assert!(matches!(
        validate::domain(false, "scalar", "out of range"),
        Err(Error::Domain { .. })
    ));
}
