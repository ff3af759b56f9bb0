//! JSON shape of parsed identifiers and configuration.

use serde_json::json;
use swid_id::{
    classify_with, FixedClock, FormatConfig, OutputStyle, ParseOptions, Separator, Settings,
};

fn clock() -> FixedClock {
    FixedClock::from_ymd(2026, 10, 17).unwrap()
}

#[test]
fn personal_json() {
    let id = classify_with("090527+1474", &ParseOptions::default(), &clock()).unwrap();
    assert_eq!(
        serde_json::to_value(&id).unwrap(),
        json!({
            "type": "personal",
            "century": "19",
            "year": "09",
            "month": "05",
            "day": "27",
            "separator": "+",
            "serial": "147",
            "checkDigit": "4",
            "birthDate": "1909-05-27",
            "coordinationNumber": false,
            "interimNumber": false,
        })
    );
}

#[test]
fn organisation_json() {
    let id = classify_with("556703-7485", &ParseOptions::default(), &clock()).unwrap();
    assert_eq!(
        serde_json::to_value(&id).unwrap(),
        json!({
            "type": "organisation",
            "groupDigit": "5",
            "group": "55",
            "pseudoMonth": "67",
            "pseudoDay": "03",
            "serial": "748",
            "checkDigit": "5",
            "raw": "5567037485",
        })
    );
}

#[test]
fn settings_roundtrip() {
    let settings = Settings {
        parse: ParseOptions::default().interim_numbers(true),
        format: FormatConfig::style(OutputStyle::SeparatedLong).with_separator(Separator::Dash),
    };
    let json = serde_json::to_string(&settings).unwrap();
    let parsed: Settings = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, settings);

    let empty: Settings = serde_json::from_str("{}").unwrap();
    assert_eq!(empty, Settings::default());
}
