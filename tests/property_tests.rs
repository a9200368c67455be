//! Property-based tests for fanlog using proptest

use fanlog::prelude::*;
use proptest::prelude::*;

fn any_level() -> impl Strategy<Value = Level> {
    prop_oneof![
        Just(Level::Debug),
        Just(Level::Info),
        Just(Level::Warn),
        Just(Level::Error),
        Just(Level::Fatal),
    ]
}

proptest! {
    /// Level label conversions roundtrip
    #[test]
    fn test_level_str_roundtrip(level in any_level()) {
        let label = level.as_str();
        let parsed: Level = label.parse().unwrap();
        prop_assert_eq!(level, parsed);
    }

    /// Level ordering is consistent with the numeric discriminant
    #[test]
    fn test_level_ordering(level1 in any_level(), level2 in any_level()) {
        let val1 = level1 as u8;
        let val2 = level2 as u8;

        prop_assert_eq!(level1 <= level2, val1 <= val2);
        prop_assert_eq!(level1 < level2, val1 < val2);
        prop_assert_eq!(level1 >= level2, val1 >= val2);
        prop_assert_eq!(level1 > level2, val1 > val2);
    }

    /// Parsing accepts labels in any case
    #[test]
    fn test_level_parse_case_insensitive(level in any_level(), use_lower in any::<bool>()) {
        let input = if use_lower {
            level.as_str().to_lowercase()
        } else {
            level.as_str().to_string()
        };
        let parsed: Level = input.parse().unwrap();
        prop_assert_eq!(level, parsed);
    }

    /// A rendered record embeds every field and exactly one trailing newline
    #[test]
    fn test_record_render_embeds_fields(
        level in any_level(),
        message in "[^\\r\\n]{0,120}",
    ) {
        let record = Record {
            timestamp: "2026/08/07 10:30:45".to_string(),
            source: "worker.rs:88".to_string(),
            message: message.clone(),
            level,
        };
        let line = record.render();

        prop_assert!(line.starts_with("2026/08/07 10:30:45 ["));
        prop_assert!(line.contains(level.as_str()));
        prop_assert!(line.contains("<worker.rs:88>"));
        prop_assert!(line.contains(&message));
        prop_assert!(line.ends_with('\n'));
        prop_assert_eq!(line.matches('\n').count(), 1);
    }
}
