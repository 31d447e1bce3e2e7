use cu_trace::parser::{match_consumption, match_instruction, parse_line, AggregationResult, ComputeUnitReading};

#[test]
fn test_parse_line_declaration_only() {
    let matched = parse_line("Program log: Instruction: UnlockTokens");
    assert_eq!(matched.instruction, Some("UnlockTokens"));
    assert!(matched.reading.is_none());
}

#[test]
fn test_parse_line_consumption_only() {
    let matched = parse_line("Program noop consumed 2 of 200000 compute units");
    assert!(matched.instruction.is_none());
    assert_eq!(matched.reading, Some(ComputeUnitReading::new(2)));
}

#[test]
fn test_parse_line_both_patterns() {
    let matched = parse_line(
        "Program log: Instruction: Weird Program abc consumed 9 of 200000 compute units",
    );
    assert_eq!(matched.instruction, Some("Weird"));
    assert_eq!(matched.reading.map(|r| r.consumed), Some(9));
}

#[test]
fn test_consumption_requires_identifier() {
    assert!(match_consumption("Program  consumed 9 of 200000 compute units").is_none());
}

#[test]
fn test_instruction_with_digits_and_underscore() {
    assert_eq!(
        match_instruction("Program log: Instruction: stake_v2"),
        Some("stake_v2")
    );
}

#[test]
fn test_reading_utilization() {
    assert_eq!(ComputeUnitReading::new(50_000).utilization(), 25.0);
}

#[test]
fn test_aggregation_result_record() {
    let mut result = AggregationResult::new();
    result.record("Foo", ComputeUnitReading::new(1));
    result.record("Bar", ComputeUnitReading::new(2));
    result.record("Foo", ComputeUnitReading::new(3));

    assert_eq!(result.len(), 2);
    assert_eq!(result.total_readings(), 3);
    assert_eq!(result.consumed("Foo"), Some(vec![1, 3]));
    assert!(result.get("Baz").is_none());
}

#[test]
fn test_aggregation_result_serializes_as_map() {
    let mut result = AggregationResult::new();
    result.record("Foo", ComputeUnitReading::new(1));

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["Foo"][0]["consumed"], 1);
    assert_eq!(json["Foo"][0]["ceiling"], 200000);
}
