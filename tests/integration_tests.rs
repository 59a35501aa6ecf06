use chrono::{Datelike, Timelike};
use reprlit::{
    literal, parse, parse_with_options, resolve, to_string, Duration, Key, LiteralMap,
    ParseOptions, Spacing, Value,
};

const SCHEDULE: &str = "['28 days, 17:34:00', [], 'day\"s', 'of', 'our', 'lives', ('NBC', 45), \
{'running time': '45 minutes', 'channels': [13, 15, 28], 'format': 'soap'}, (5,), \
'2018-09-28 22:22:43.467435']";

#[test]
fn test_schedule_sample() {
    let value = parse(SCHEDULE);
    let items = value.as_slice().expect("sequence");
    println!("Parsed: {}", value);

    let kinds: Vec<&str> = items.iter().map(Value::type_name).collect();
    assert_eq!(
        kinds,
        vec![
            "duration",
            "sequence",
            "text",
            "text",
            "text",
            "text",
            "tuple",
            "mapping",
            "tuple",
            "timestamp"
        ]
    );

    assert_eq!(items[0], Value::Duration(Duration::new(28, 17, 34, 0)));
    assert_eq!(items[1], Value::Sequence(vec![]));
    assert_eq!(items[2], Value::from("day\"s"));
    assert_eq!(items[6], literal!(("NBC", 45)));
    assert_eq!(items[8], literal!((5,)));
}

#[test]
fn test_nesting() {
    assert_eq!(parse("[[1, 2], [3, 4]]"), literal!([[1, 2], [3, 4]]));
    assert_eq!(
        parse("{'a': {'b': [(1, 2), {}]}}"),
        literal!({"a": {"b": [(1, 2), {}]}})
    );
}

#[test]
fn test_embedded_opposite_quote() {
    assert_eq!(
        parse("['day\"s']"),
        Value::Sequence(vec![Value::from("day\"s")])
    );
    assert_eq!(
        parse("[\"it's\", 'x']"),
        Value::Sequence(vec![Value::from("it's"), Value::from("x")])
    );
}

#[test]
fn test_mapping_order_and_typing() {
    let value =
        parse("{'running time': '45 minutes', 'channels': [13, 15, 28], 'format': 'soap'}");
    let map = value.as_mapping().expect("mapping");

    let keys: Vec<&Key> = map.keys().collect();
    assert_eq!(
        keys,
        vec![
            &Key::from("running time"),
            &Key::from("channels"),
            &Key::from("format")
        ]
    );
    assert_eq!(map.get("running time"), Some(&Value::from("45 minutes")));
    assert_eq!(map.get("channels"), Some(&literal!([13, 15, 28])));
    assert_eq!(map.get("format"), Some(&Value::from("soap")));

    for (key, value) in map {
        println!("{} {} {}", key, value, value.type_name());
    }
}

#[test]
fn test_singleton_and_pair_tuples() {
    let single = parse("(5,)");
    assert_eq!(single.as_slice().map(<[Value]>::len), Some(1));
    assert_eq!(single.as_slice().unwrap()[0], Value::from(5));

    let pair = parse("('NBC', 45)");
    assert!(pair.is_tuple());
    assert_eq!(pair.as_slice().unwrap().len(), 2);
}

#[test]
fn test_top_level_duration_and_timestamp() {
    assert_eq!(
        parse("'28 days, 17:34:00'"),
        Value::Duration(Duration::new(28, 17, 34, 0))
    );

    let ts = parse("'2018-09-28 22:22:43.467435'");
    let local = ts.as_timestamp().expect("timestamp").naive_local();
    assert_eq!((local.year(), local.month(), local.day()), (2018, 9, 28));
    assert_eq!((local.hour(), local.minute(), local.second()), (22, 22, 43));
    assert_eq!(local.nanosecond() / 1_000, 467_435);
}

#[test]
fn test_malformed_passthrough() {
    for text in ["[1, 2", "{'a': 1", "(1, 2]", "[", "{'a': 1]"] {
        assert_eq!(parse(text), Value::from(text), "{text}");
    }
}

#[test]
fn test_plain_text_passthrough() {
    assert_eq!(parse("soap"), Value::from("soap"));
    assert_eq!(parse("'soap'"), Value::from("'soap'"));
    assert_eq!(parse(""), Value::from(""));
    assert_eq!(parse("42"), Value::from(42));
    assert_eq!(parse("'True'"), Value::Boolean(true));
}

#[test]
fn test_idempotence_on_text() {
    for text in ["soap", "'soap'", "45 minutes", "[1, 2", "'quoted' twice'"] {
        let once = parse(text);
        assert_eq!(resolve(once.clone()), once, "{text}");
    }
}

#[test]
fn test_numbers_inside_containers() {
    let value = parse("[1, 2.5, 1+2j, -3.0, -3, 1e5, 007, 12345678901234567890123]");
    let items = value.as_slice().unwrap();
    assert_eq!(items[0], Value::from(1));
    assert_eq!(items[1], Value::Float(2.5));
    assert_eq!(items[2].as_complex().map(|c| (c.re, c.im)), Some((1.0, 2.0)));
    assert_eq!(items[3], Value::Float(-3.0));
    assert_eq!(items[4], Value::from("-3"));
    assert_eq!(items[5], Value::from("1e5"));
    assert_eq!(items[6], Value::from(7));
    assert!(items[7].as_i64().is_none());
    assert_eq!(items[7].to_string(), "12345678901234567890123");
}

#[test]
fn test_quoted_container_is_parsed() {
    assert_eq!(parse("['[1, 2]']"), literal!([[1, 2]]));
}

#[test]
fn test_mapping_keys() {
    let value = parse("{1: 'one', (1, 2): 'pair', True: 'yes', [3]: 'list'}");
    let map = value.as_mapping().unwrap();
    assert_eq!(map.get(1), Some(&Value::from("one")));
    assert_eq!(
        map.get(Key::Tuple(vec![Key::from(1), Key::from(2)].into_boxed_slice())),
        Some(&Value::from("pair"))
    );
    assert_eq!(map.get(true), Some(&Value::from("yes")));
    assert_eq!(map.get("[3]"), Some(&Value::from("list")));
}

#[test]
fn test_duplicate_key_keeps_first_position() {
    let value = parse("{'a': 1, 'b': 2, 'a': 3}");
    let map = value.as_mapping().unwrap();
    assert_eq!(map.len(), 2);
    assert_eq!(map.get_index(0), Some((&Key::from("a"), &Value::from(3))));
}

#[test]
fn test_spacing_modes() {
    let tight = "[1,2,{'a':3}]";
    assert_eq!(parse(tight), literal!([1, 2, {"a": 3}]));

    let exact = ParseOptions::new().with_spacing(Spacing::Exact);
    assert_eq!(parse_with_options("[1, 2]", &exact), literal!([1, 2]));
    assert_eq!(
        parse_with_options("[1,   2]", &exact),
        Value::Sequence(vec![Value::from(1), Value::from("  2")])
    );
}

#[test]
fn test_unescape_option() {
    let text = r"['it\'s', 'back\\slash']";
    assert_eq!(
        parse(text),
        Value::Sequence(vec![Value::from(r"it\'s"), Value::from(r"back\\slash")])
    );

    let options = ParseOptions::new().with_unescape(true);
    assert_eq!(
        parse_with_options(text, &options),
        Value::Sequence(vec![Value::from("it's"), Value::from(r"back\slash")])
    );
}

#[test]
fn test_to_string_round_trip() {
    let value = parse(SCHEDULE);
    let rendered = to_string(&value);
    println!("Rendered: {}", rendered);
    assert_eq!(parse(&rendered), value);
}

#[test]
fn test_serialize_to_json() {
    let value = parse("{'a': [1, 2.5, True], 'b': ('x', 3), 'c': '1 day, 0:00:01'}");
    let json = serde_json::to_value(&value).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"a": [1, 2.5, true], "b": ["x", 3], "c": "1 day, 0:00:01"})
    );

    let mut map = LiteralMap::new();
    map.insert(7, Value::from("seven"));
    let json = serde_json::to_string(&Value::Mapping(map)).unwrap();
    assert_eq!(json, r#"{"7":"seven"}"#);
}

#[test]
fn test_round_trip_text_with_escapes() {
    let options = ParseOptions::new().with_unescape(true);
    let value = Value::Sequence(vec![
        Value::from("it's \"x\""),
        Value::from("a\\"),
        Value::from(1),
        Value::from(r"c:\dir\'s"),
    ]);
    let rendered = to_string(&value);
    assert_eq!(rendered, r#"['it\'s "x"', 'a\\', 1, "c:\\dir\\'s"]"#);
    assert_eq!(parse_with_options(&rendered, &options), value);

    // Without unescaping, the trailing backslash still ends its item.
    let kept = parse(&rendered);
    let items = kept.as_slice().unwrap();
    assert_eq!(items.len(), 4);
    assert_eq!(items[1], Value::from(r"a\\"));
    assert_eq!(items[2], Value::from(1));
}

#[test]
fn test_round_trip_offset_with_seconds() {
    let value = parse("['2018-09-28 22:22:43-01:00:30']");
    let ts = value.as_slice().unwrap()[0].as_timestamp().unwrap();
    assert_eq!(ts.offset().unwrap().local_minus_utc(), -3_630);

    let rendered = to_string(&value);
    assert_eq!(rendered, "['2018-09-28 22:22:43-01:00:30']");
    assert_eq!(parse(&rendered), value);
}
