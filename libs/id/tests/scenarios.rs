//! End-to-end behaviour of the public API.

use chrono::NaiveDate;
use rstest::rstest;
use swid_id::{
    age_with_clock, birth_date, check_digit, classify_with, format, is_coordination_number,
    is_female, is_male, is_valid, is_valid_date, is_valid_with, is_valid_organisation, is_valid_personal,
    legal_form_of, legal_form_of_str, parse_organisation, parse_personal, years_between,
    FixedClock, FormatConfig, IdError, IdentifierKind, IdentifierVariant, LegalFormCode,
    OutputStyle, ParseOptions, PersonalId, Separator, ENSKILD_FIRMA,
};

fn clock() -> FixedClock {
    FixedClock::from_ymd(2026, 10, 17).unwrap()
}

fn classify(input: &str) -> Result<IdentifierVariant, IdError> {
    classify_with(input, &ParseOptions::default(), &clock())
}

#[rstest]
#[case("090527+1474", IdentifierKind::Personal)]
#[case("090527 1474", IdentifierKind::Personal)]
#[case("460823-9986", IdentifierKind::Personal)]
#[case("19460823-9986", IdentifierKind::Personal)]
#[case("730288-9931", IdentifierKind::Personal)]
#[case("556703-7485", IdentifierKind::Organisation)]
#[case("5567037485", IdentifierKind::Organisation)]
#[case("165567037485", IdentifierKind::Organisation)]
#[case("212000-0142", IdentifierKind::Organisation)]
#[case("857209-0606", IdentifierKind::Organisation)]
fn classifies_valid_input(#[case] input: &str, #[case] kind: IdentifierKind) {
    assert_eq!(classify(input).unwrap().kind(), kind);
}

#[rstest]
#[case("")]
#[case("abc")]
#[case("12345")]
#[case("invalid")]
#[case("not-a-number")]
#[case("090527+1475")]
#[case("090527+1474x")]
#[case("556703-7486")]
#[case("556703748")]
#[case("55567037485")]
#[case("700230-1234")]
fn rejects_invalid_input(#[case] input: &str) {
    let err = classify(input).unwrap_err();
    assert!(err.is_invalid_identifier(), "{input}: {err:?}");
    assert_eq!(err.to_string(), "invalid Swedish identity number");
    assert!(!is_valid_with(input, &ParseOptions::default(), &clock()));
}

#[test]
fn validity_depends_on_the_clock() {
    // Under a 1999 clock the short form reads as 1900-02-29, which does not
    // exist.
    let options = ParseOptions::default();
    assert!(is_valid_with("000229-1235", &options, &clock()));
    assert!(!is_valid_with(
        "000229-1235",
        &options,
        &FixedClock::from_ymd(1999, 12, 31).unwrap()
    ));
    assert!(is_valid("556703-7485", &options));
}

#[test]
fn personal_fields_from_centenarian_number() {
    let id = classify("090527+1474").unwrap();
    let pnr = id.as_personal().unwrap();
    assert_eq!(format!("{:02}", pnr.year()), "09");
    assert_eq!(format!("{:02}", pnr.month()), "05");
    assert_eq!(format!("{:02}", pnr.day()), "27");
    assert_eq!(pnr.full_year(), 1909);
    // Serial 147: the last digit is odd.
    assert!(is_male(&id).unwrap());
    assert!(!is_female(&id).unwrap());
}

#[test]
fn organisation_fields_and_legal_form() {
    let id = classify("556703-7485").unwrap();
    assert_eq!(id.as_organisation().unwrap().raw(), "5567037485");
    let form = legal_form_of(&id);
    assert_eq!(form.code, LegalFormCode::Aktiebolag);
    assert_eq!(form.name, "Aktiebolag");

    let public = classify("212000-0142").unwrap();
    assert_eq!(
        legal_form_of(&public).code,
        LegalFormCode::StatRegionerKommuner
    );
}

#[test]
fn legal_form_of_personal_is_sole_proprietorship() {
    assert_eq!(legal_form_of_str("090527+1474").unwrap(), ENSKILD_FIRMA);
    assert_eq!(
        legal_form_of_str("556703-7485").unwrap().code,
        LegalFormCode::Aktiebolag
    );
    assert!(legal_form_of_str("invalid").is_err());
    assert!(legal_form_of_str("").is_err());
}

#[test]
fn coordination_numbers_follow_options() {
    let pnr = PersonalId::parse_with_clock("730288-9931", &ParseOptions::default(), &clock())
        .unwrap();
    assert!(pnr.is_coordination_number());
    assert_eq!(pnr.birth_date(), NaiveDate::from_ymd_opt(1973, 2, 28).unwrap());

    let strict = ParseOptions::default().coordination_numbers(false);
    assert!(PersonalId::parse_with_clock("730288-9931", &strict, &clock()).is_err());
    assert!(!is_valid_personal("730288-9931", &strict));
    assert!(!is_valid_with("730288-9931", &strict, &clock()));
}

#[test]
fn interim_numbers_follow_options() {
    let lenient = ParseOptions::default().interim_numbers(true);
    let id = classify_with("000101-T220", &lenient, &clock()).unwrap();
    assert!(is_female(&id).unwrap());
    assert_eq!(format(&id, &FormatConfig::style(OutputStyle::Long)), "20000101T220");

    assert!(classify("000101-T220").is_err());
    assert!(parse_personal("000101-T220", &ParseOptions::default()).is_err());
    assert!(!is_valid_with("000101-E221", &lenient, &clock()));
}

#[test]
fn extraction_on_personal() {
    let id = classify("460823-9986").unwrap();
    assert_eq!(
        birth_date(&id).unwrap(),
        NaiveDate::from_ymd_opt(1946, 8, 23).unwrap()
    );
    assert_eq!(age_with_clock(&id, &clock()).unwrap(), 80);
    assert!(is_female(&id).unwrap());
    assert!(!is_coordination_number(&id).unwrap());
}

#[test]
fn extraction_on_organisation_is_type_mismatch() {
    let id = classify("556703-7485").unwrap();
    let err = age_with_clock(&id, &clock()).unwrap_err();
    assert!(err.is_type_mismatch());
    assert!(birth_date(&id).unwrap_err().is_type_mismatch());
    assert!(is_male(&id).unwrap_err().is_type_mismatch());
    assert!(is_coordination_number(&id).unwrap_err().is_type_mismatch());
}

#[rstest]
#[case(OutputStyle::Long, "190905271474", "165567037485")]
#[case(OutputStyle::Short, "0905271474", "5567037485")]
#[case(OutputStyle::Separated, "090527+1474", "556703-7485")]
#[case(OutputStyle::SeparatedLong, "19090527+1474", "16556703-7485")]
fn formats_both_families(
    #[case] style: OutputStyle,
    #[case] personal: &str,
    #[case] organisation: &str,
) {
    let config = FormatConfig::style(style);
    assert_eq!(format(&classify("090527+1474").unwrap(), &config), personal);
    assert_eq!(format(&classify("556703-7485").unwrap(), &config), organisation);
}

#[test]
fn explicit_separator_overrides() {
    let config = FormatConfig::default().with_separator(Separator::Dash);
    assert_eq!(format(&classify("090527+1474").unwrap(), &config), "090527-1474");

    let config = FormatConfig::default().with_separator(Separator::Plus);
    assert_eq!(format(&classify("556703-7485").unwrap(), &config), "556703+7485");
}

#[test]
fn organisation_long_and_short_are_identical() {
    assert_eq!(
        parse_organisation("165567037485").unwrap(),
        parse_organisation("5567037485").unwrap()
    );
    assert!(is_valid_organisation("165567037485"));
    assert!(!is_valid_organisation("090527+1474"));
    assert!(!is_valid_personal("5567037485", &ParseOptions::default()));
}

#[test]
fn checksum_and_calendar_scenarios() {
    assert_eq!(check_digit("811218987"), 6);
    assert_eq!(check_digit("000000000"), 0);

    assert!(is_valid_date(2000, 2, 29));
    assert!(!is_valid_date(1900, 2, 29));
    assert!(!is_valid_date(2023, 2, 30));
    assert!(!is_valid_date(2023, 13, 1));
    assert!(!is_valid_date(2023, 0, 1));

    let a = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
    let b = NaiveDate::from_ymd_opt(1990, 12, 31).unwrap();
    assert_eq!(years_between(a, b), 9);
    assert_eq!(years_between(b, a), -9);
    assert_eq!(years_between(a, a), 0);
}

#[test]
fn display_and_from_str() {
    let id: IdentifierVariant = "5567037485".parse().unwrap();
    assert_eq!(id.to_string(), "556703-7485");
    assert!("invalid".parse::<IdentifierVariant>().is_err());
}
