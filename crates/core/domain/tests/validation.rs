use domain::ValidationError;
use domain::validation::{
    self, EMAIL_MAX, USERNAME_MAX, WORK_DESCRIPTION_MAX,
};
use rust_decimal::Decimal;

fn dec(text: &str) -> Decimal {
    text.parse().expect("decimal literal")
}

#[test]
fn required_text_trims_and_accepts() {
    let value = validation::normalize_required("  core-sw-01  ".to_string(), "username", USERNAME_MAX)
        .expect("valid");
    assert_eq!(value, "core-sw-01");
}

#[test]
fn required_text_rejects_blank() {
    let err = validation::normalize_required("   ".to_string(), "username", USERNAME_MAX)
        .expect_err("blank");
    assert_eq!(err, ValidationError::Required { field: "username" });
}

#[test]
fn required_text_rejects_over_limit() {
    let long = "x".repeat(WORK_DESCRIPTION_MAX + 1);
    let err = validation::normalize_required(long, "work_description", WORK_DESCRIPTION_MAX)
        .expect_err("too long");
    assert_eq!(
        err,
        ValidationError::TooLong {
            field: "work_description",
            max: WORK_DESCRIPTION_MAX
        }
    );
}

#[test]
fn optional_text_passes_none_through() {
    let value = validation::normalize_optional(None, "model", 100).expect("none");
    assert_eq!(value, None);
}

#[test]
fn notes_allow_empty() {
    let value = validation::normalize_notes("".to_string(), "additional_notes", 1000).expect("empty");
    assert_eq!(value, "");
}

#[test]
fn email_accepts_standard_address() {
    let value = validation::validate_email("user@example.com".to_string()).expect("valid email");
    assert_eq!(value, "user@example.com");
}

#[test]
fn email_rejects_not_an_email() {
    let err = validation::validate_email("not-an-email".to_string()).expect_err("invalid");
    assert_eq!(err, ValidationError::Pattern { field: "email" });
}

#[test]
fn email_rejects_over_limit() {
    let local = "a".repeat(EMAIL_MAX);
    let err = validation::validate_email(format!("{local}@example.com")).expect_err("too long");
    assert_eq!(
        err,
        ValidationError::TooLong {
            field: "email",
            max: EMAIL_MAX
        }
    );
}

#[test]
fn latitude_accepts_eight_decimals() {
    let value = validation::validate_latitude(dec("1.23456789")).expect("valid");
    assert_eq!(value, dec("1.23456789"));
    assert!(validation::validate_latitude(dec("-90")).is_ok());
    assert!(validation::validate_latitude(dec("90")).is_ok());
}

#[test]
fn latitude_rejects_out_of_range() {
    let err = validation::validate_latitude(dec("90.00000001")).expect_err("north of pole");
    assert_eq!(
        err,
        ValidationError::OutOfRange {
            field: "latitude",
            min: -90,
            max: 90
        }
    );
    assert!(validation::validate_latitude(dec("-91")).is_err());
}

#[test]
fn latitude_rejects_nine_decimals() {
    let err = validation::validate_latitude(dec("1.234567891")).expect_err("too precise");
    assert_eq!(
        err,
        ValidationError::TooManyDecimals {
            field: "latitude",
            max: 8
        }
    );
}

#[test]
fn latitude_ignores_trailing_zeros() {
    // 标度为 10 但数值只有 2 位有效小数
    assert!(validation::validate_latitude(dec("1.2300000000")).is_ok());
}

#[test]
fn longitude_accepts_eight_decimals() {
    assert!(validation::validate_longitude(dec("2.34567890")).is_ok());
    assert!(validation::validate_longitude(dec("-180")).is_ok());
    assert!(validation::validate_longitude(dec("180")).is_ok());
}

#[test]
fn longitude_rejects_out_of_range() {
    let err = validation::validate_longitude(dec("180.1")).expect_err("past date line");
    assert_eq!(
        err,
        ValidationError::OutOfRange {
            field: "longitude",
            min: -180,
            max: 180
        }
    );
}

#[test]
fn parse_role_reports_field_and_value() {
    let err = validation::parse_role("Manager", "role").expect_err("unknown role");
    assert_eq!(
        err,
        ValidationError::InvalidEnumValue {
            field: "role",
            value: "Manager".to_string()
        }
    );
}

#[test]
fn parse_status_reports_field_and_value() {
    let err = validation::parse_status("Done", "status").expect_err("unknown status");
    assert_eq!(
        err,
        ValidationError::InvalidEnumValue {
            field: "status",
            value: "Done".to_string()
        }
    );
}
