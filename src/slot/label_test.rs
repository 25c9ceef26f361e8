use super::*;

#[test]
fn table_has_48_labels_from_midnight_to_2330() {
    let all = TimeLabel::all();
    assert_eq!(all.len(), LABEL_COUNT);
    assert_eq!(all[0].as_str(), "00:00");
    assert_eq!(all[1].as_str(), "00:30");
    assert_eq!(all[47].as_str(), "23:30");
}

#[test]
fn string_order_matches_table_order() {
    let all = TimeLabel::all();
    for pair in all.windows(2) {
        assert!(pair[0] < pair[1]);
        assert!(pair[0].as_str() < pair[1].as_str());
    }
}

#[test]
fn defaults_are_nine_and_ten() {
    assert_eq!(DEFAULT_START.to_string(), "09:00");
    assert_eq!(DEFAULT_END.to_string(), "10:00");
}

#[test]
fn parse_accepts_half_hour_labels() {
    assert_eq!("09:30".parse::<TimeLabel>().unwrap().index(), 19);
    assert_eq!("00:00".parse::<TimeLabel>().unwrap().index(), 0);
    assert_eq!("23:30".parse::<TimeLabel>().unwrap().index(), 47);
}

#[test]
fn parse_rejects_malformed_labels() {
    for input in ["", "9:00", "09:15", "24:00", "09-00", "0a:00", "09:000", "+9:00"] {
        let err = input.parse::<TimeLabel>().unwrap_err();
        assert!(
            matches!(err, PcError::InvalidTimeLabel(ref s) if s == input),
            "expected rejection for {:?}",
            input
        );
    }
}

#[test]
fn from_hm_and_minutes_agree() {
    let label = TimeLabel::from_hm(14, 30).unwrap();
    assert_eq!(label.as_str(), "14:30");
    assert_eq!(label.minutes(), 14 * 60 + 30);
    assert!(TimeLabel::from_hm(14, 45).is_none());
    assert!(TimeLabel::from_hm(24, 0).is_none());
}

#[test]
fn from_index_out_of_range_is_none() {
    assert!(TimeLabel::from_index(LABEL_COUNT).is_none());
    assert_eq!(TimeLabel::from_index(20), Some(DEFAULT_END));
}

#[test]
fn serializes_as_string() {
    let json = serde_json::to_string(&DEFAULT_START).unwrap();
    assert_eq!(json, "\"09:00\"");
}
