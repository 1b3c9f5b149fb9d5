macro_rules! vevent {
    ($($name:literal => $value:expr),* $(,)?) => {{
        let lines: Vec<caldav_event::parser::ContentLine> =
            vec![$(caldav_event::parser::ContentLine::new($name, $value)),*];
        caldav_event::IcalEvent::from(lines)
    }};
}

pub mod scenarios {
    use caldav_event::{
        CalendarEvent, FieldCoercionError, FieldNotFoundError, IcalEvent, parser::ContentLine,
        types::CalDateTimeError,
    };
    use chrono::{NaiveDate, NaiveDateTime, TimeDelta};

    fn naive(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    #[test]
    fn whole_day_offsite() {
        let input = vevent! {
            "DTSTART" => "2024-01-01T00:00:00",
            "DTEND" => "2024-01-02T00:00:00",
            "SUMMARY" => "Offsite",
        };
        let event = CalendarEvent::new(&input, "etag").unwrap();
        assert!(event.is_all_day());
        assert_eq!(event.get_summary(), Ok("Offsite"));
        assert_eq!(event.get_start().unwrap().naive_local(), naive(2024, 1, 1, 0));
        assert_eq!(event.get_end().unwrap().naive_local(), naive(2024, 1, 2, 0));
    }

    #[test]
    fn one_hour_meeting() {
        let input = vevent! {
            "DTSTART" => "2024-01-01T09:00:00",
            "DTEND" => "2024-01-01T10:00:00",
        };
        let event = CalendarEvent::new(&input, "etag").unwrap();
        assert!(!event.is_all_day());
        assert_eq!(event.get_start().unwrap().naive_local(), naive(2024, 1, 1, 9));
    }

    #[test]
    fn missing_end() {
        let input = vevent! {
            "DTSTART" => "2024-01-01T00:00:00",
        };
        let event = CalendarEvent::new(&input, "etag").unwrap();
        assert!(!event.is_all_day());
        assert_eq!(
            event.get_end(),
            Err(FieldNotFoundError("DTEND".to_owned()))
        );
    }

    #[test]
    fn malformed_start() {
        let input = vevent! {
            "SUMMARY" => "Broken",
            "DTSTART" => "not-a-date",
        };
        let err = CalendarEvent::new(&input, "etag").unwrap_err();
        assert_eq!(
            err,
            FieldCoercionError {
                name: "DTSTART".to_owned(),
                value: "not-a-date".to_owned(),
                source: CalDateTimeError::InvalidFormat("not-a-date".to_owned()),
            }
        );
    }

    #[rstest::rstest]
    #[case("CREATED")]
    #[case("DTSTAMP")]
    #[case("LAST-MODIFIED")]
    #[case("DTEND")]
    fn malformed_timestamp_fails_construction(#[case] name: &str) {
        let input = IcalEvent::from(vec![
            ContentLine::new("DTSTART", "20240101T090000"),
            ContentLine::new(name, "20241301T000000"),
        ]);
        let err = CalendarEvent::new(&input, "etag").unwrap_err();
        assert_eq!(err.name, name);
    }

    #[test]
    fn start_inside_dst_gap() {
        let input = IcalEvent::from(vec![
            ContentLine::new("DTSTART", "20240331T023000").with_param("TZID", "Europe/Berlin"),
            ContentLine::new("DTEND", "20240331T033000").with_param("TZID", "Europe/Berlin"),
        ]);
        let event = CalendarEvent::new(&input, "etag").unwrap();
        let start = event.get_start().unwrap();
        assert_eq!(start.naive_local(), naive(2024, 3, 31, 2) + TimeDelta::minutes(30));
        assert_eq!(start.naive_utc(), naive(2024, 3, 31, 1) + TimeDelta::minutes(30));
        // 02:30 CET and 03:30 CEST are the same instant
        assert_eq!(start.naive_utc(), event.get_end().unwrap().naive_utc());
        assert!(!event.is_all_day());
    }

    #[test]
    fn all_day_on_skipped_midnight() {
        let input = IcalEvent::from(vec![
            ContentLine::new("DTSTART", "20181104").with_param("TZID", "America/Sao_Paulo"),
            ContentLine::new("DTEND", "20181105").with_param("TZID", "America/Sao_Paulo"),
        ]);
        let event = CalendarEvent::new(&input, "etag").unwrap();
        assert!(event.is_all_day());
        assert_eq!(event.get_start().unwrap().naive_local(), naive(2018, 11, 4, 0));
        assert_eq!(event.get_start().unwrap().naive_utc(), naive(2018, 11, 4, 3));
        assert_eq!(event.get_end().unwrap().naive_utc(), naive(2018, 11, 5, 2));
    }

    #[rstest::rstest]
    #[case(vevent! {})]
    #[case(vevent! { "SUMMARY" => "x" })]
    #[case(vevent! { "DTSTART" => "20240101", "DTEND" => "20240102", "UID" => "u" })]
    fn etag_is_passed_through(#[case] input: IcalEvent) {
        let event = CalendarEvent::new(&input, "abc123").unwrap();
        assert_eq!(event.get_etag(), "abc123");
    }
}

pub mod fields {
    use caldav_event::{CalendarEvent, FieldNotFoundError, FieldValue};
    use itertools::Itertools;

    #[test]
    fn text_fields_are_verbatim() {
        let input = vevent! {
            "UID" => "040000008200E00074C5B7101A82E008@example.com",
            "SUMMARY" => "Quarterly review\\, Q1",
            "LOCATION" => "Room 4.12; Building B",
            "DESCRIPTION" => "Agenda:\\n- numbers\\n- plans",
            "RRULE" => "FREQ=WEEKLY;BYDAY=MO",
            "X-MICROSOFT-CDO-BUSYSTATUS" => "BUSY",
            "SEQUENCE" => "0",
        };
        let event = CalendarEvent::new(&input, "etag").unwrap();
        assert_eq!(
            event.get_uid(),
            Ok("040000008200E00074C5B7101A82E008@example.com")
        );
        assert_eq!(event.get_summary(), Ok("Quarterly review\\, Q1"));
        assert_eq!(event.get_location(), Ok("Room 4.12; Building B"));
        similar_asserts::assert_eq!(event.get_description(), Ok("Agenda:\\n- numbers\\n- plans"));
        assert_eq!(
            event.get_field("RRULE"),
            Ok(&FieldValue::from("FREQ=WEEKLY;BYDAY=MO"))
        );
        assert_eq!(event.get_field("SEQUENCE"), Ok(&FieldValue::from("0")));
    }

    #[test]
    fn optional_fields_are_not_found() {
        let event = CalendarEvent::new(&vevent! { "UID" => "u" }, "etag").unwrap();
        for (result, name) in [
            (event.get_location(), "LOCATION"),
            (event.get_summary(), "SUMMARY"),
            (event.get_description(), "DESCRIPTION"),
        ] {
            assert_eq!(result, Err(FieldNotFoundError(name.to_owned())));
        }
        insta::assert_snapshot!(
            event.get_location().unwrap_err(),
            @"VEVENT field not found: LOCATION"
        );
    }

    #[test]
    fn field_listing() {
        let input = vevent! {
            "UID" => "u",
            "DTSTART" => "20240101T090000Z",
            "SUMMARY" => "s",
        };
        let event = CalendarEvent::new(&input, "etag").unwrap();
        let names = event.fields().map(|(name, _)| name).sorted().join(",");
        assert_eq!(names, "DTSTART,SUMMARY,UID");
        assert!(event.has_field("DTSTART"));
        assert!(
            event
                .fields()
                .all(|(name, value)| (name == "DTSTART") == value.as_timestamp().is_some())
        );
    }
}

pub mod errors {
    use caldav_event::{CalendarEvent, EventError, types::CalDateTime};

    fn start_of(input: &caldav_event::IcalEvent) -> Result<CalDateTime, EventError> {
        let event = CalendarEvent::new(input, "etag")?;
        Ok(*event.get_start()?)
    }

    #[test]
    fn umbrella_error() {
        assert!(start_of(&vevent! { "DTSTART" => "20240101" }).is_ok());
        assert!(matches!(
            start_of(&vevent! { "DTSTART" => "garbage" }),
            Err(EventError::FieldCoercion(_))
        ));
        let err = start_of(&vevent! { "SUMMARY" => "no start" }).unwrap_err();
        assert!(matches!(err, EventError::FieldNotFound(_)));
        insta::assert_snapshot!(err, @"VEVENT field not found: DTSTART");
    }

    #[test]
    fn coercion_error_source() {
        use std::error::Error;

        let err = CalendarEvent::new(&vevent! { "DTSTART" => "2024-02-30" }, "etag").unwrap_err();
        insta::assert_snapshot!(err, @r#"invalid value "2024-02-30" for DTSTART: Datetime out of range: 2024-02-30"#);
        insta::assert_snapshot!(
            err.source().unwrap(),
            @"Datetime out of range: 2024-02-30"
        );
    }
}

/// A component handed over by some other parser, only implementing the read contract.
pub mod foreign_component {
    use caldav_event::{CalendarEvent, Component, ComponentChild, parser::ContentLine};

    enum Node {
        Prop(ContentLine),
        Nested(&'static str),
    }

    struct ForeignEvent(Vec<Node>);

    impl Component for ForeignEvent {
        const NAMES: &[&str] = &["VEVENT"];

        fn children(&self) -> impl Iterator<Item = ComponentChild<'_>> {
            self.0.iter().map(|node| match node {
                Node::Prop(prop) => ComponentChild::Property(prop),
                Node::Nested(name) => ComponentChild::Component(*name),
            })
        }
    }

    #[test]
    fn nested_components_are_skipped() {
        let input = ForeignEvent(vec![
            Node::Prop(ContentLine::new("DTSTART", "20240601")),
            Node::Nested("VALARM"),
            Node::Prop(ContentLine::new("DTEND", "20240602")),
            Node::Nested("X-CUSTOM"),
            Node::Prop(ContentLine::new("SUMMARY", "Midsummer")),
        ]);
        let event = CalendarEvent::new(&input, "W/\"1\"").unwrap();
        assert!(event.is_all_day());
        assert_eq!(event.get_summary(), Ok("Midsummer"));
        assert_eq!(event.fields().count(), 3);
        assert_eq!(event.get_etag(), "W/\"1\"");
    }
}
