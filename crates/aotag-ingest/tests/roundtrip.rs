//! Property tests for template matching.
//!
//! Filenames are constructed from generated field values and fed back
//! through the matcher, which must recover the format and every field
//! exactly.

use aotag_ingest::TagParser;
use aotag_model::{DataTag, FormatType};
use proptest::prelude::*;
use serde_json::json;
use std::collections::BTreeMap;

const SESSION_TEMPLATE: &str =
    "{subject}_{date}_{eye:l}_({loc_x},{loc_y})_{fov_width}x{fov_height}_{vidnum:d}_{modality:l}.avi";

fn session_parser() -> TagParser {
    TagParser::from_value(&json!({ "video_format": SESSION_TEMPLATE }), None)
        .expect("config reads")
        .expect("config present")
}

#[test]
fn known_session_name_round_trips() {
    let parser = session_parser();
    let (format, fields) =
        parser.parse_filename("11101_20240801_OD_(-1,0)_1p5x1p5_0004_confocal.avi");
    assert_eq!(format, Some(FormatType::Video));
    assert_eq!(fields["subject"], "11101");
    assert_eq!(fields["loc_x"], "-1");
    assert_eq!(fields["loc_y"], "0");
    assert_eq!(fields["fov_width"], "1p5");
    assert_eq!(fields["vidnum"], "0004");
    assert_eq!(fields["modality"], "confocal");
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn constructed_names_round_trip(
        subject in "[A-Za-z0-9]{1,8}",
        date in "[0-9]{8}",
        eye in "O[DS]",
        loc_x in "-?[0-9]{1,2}",
        loc_y in "-?[0-9]{1,2}",
        fov_width in "[0-9]{1,2}(p[0-9])?",
        fov_height in "[0-9]{1,2}(p[0-9])?",
        vidnum in "[0-9]{1,4}",
        modality in "[a-z]{4,10}",
    ) {
        let parser = session_parser();
        let filename = format!(
            "{subject}_{date}_{eye}_({loc_x},{loc_y})_{fov_width}x{fov_height}_{vidnum}_{modality}.avi"
        );
        let (format, fields) = parser.parse_filename(&filename);
        prop_assert_eq!(format, Some(FormatType::Video));

        let mut expected = BTreeMap::new();
        for (tag, value) in [
            ("subject", &subject),
            ("date", &date),
            ("eye", &eye),
            ("loc_x", &loc_x),
            ("loc_y", &loc_y),
            ("fov_width", &fov_width),
            ("fov_height", &fov_height),
            ("vidnum", &vidnum),
            ("modality", &modality),
        ] {
            expected.insert(tag.to_string(), value.clone());
        }
        prop_assert_eq!(fields, expected);
    }

    #[test]
    fn optional_suffix_round_trips(
        subject in "[A-Za-z0-9]{1,8}",
        suffix in "(_[a-z]{1,8})?",
    ) {
        let parser = TagParser::from_value(
            &json!({ "queryloc_format": "{subject}_coords{queryloc:s?}.csv" }),
            None,
        )
        .expect("config reads")
        .expect("config present");

        let filename = format!("{subject}_coords{suffix}.csv");
        let (format, fields) = parser.parse_filename(&filename);
        prop_assert_eq!(format, Some(FormatType::QueryLoc));
        prop_assert_eq!(
            fields.get("queryloc").map(String::as_str),
            Some(suffix.as_str())
        );
    }

    #[test]
    fn arbitrary_names_never_panic(name in "\\PC{0,40}") {
        let parser = session_parser();
        let (format, fields) = parser.parse_filename(&name);
        if format.is_none() {
            prop_assert!(fields.is_empty());
        } else {
            for key in fields.keys() {
                prop_assert!(DataTag::from_name(key).is_some());
            }
        }
    }
}
