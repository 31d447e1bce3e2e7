use cu_trace::aggregator::{aggregate, calculate_instruction_stats};
use cu_trace::utils::AggregateError;
use pretty_assertions::assert_eq;
use std::io::Write;
use tempfile::NamedTempFile;

fn log_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_no_matching_lines() {
    let file = log_file(
        "Program 11111111111111111111111111111111 invoke [1]\n\
         Program 11111111111111111111111111111111 success\n",
    );

    let result = aggregate(file.path()).unwrap();
    assert!(result.is_empty());
}

#[test]
fn test_empty_file() {
    let file = log_file("");
    assert!(aggregate(file.path()).unwrap().is_empty());
}

#[test]
fn test_single_instruction() {
    let file = log_file(
        "Program log: Instruction: Foo\n\
         Program abc consumed 1234 of 200000 compute units\n",
    );

    let result = aggregate(file.path()).unwrap();

    assert_eq!(result.len(), 1);
    assert_eq!(result.consumed("Foo"), Some(vec![1234]));
    assert_eq!(result.get("Foo").unwrap()[0].ceiling, 200_000);
}

#[test]
fn test_readings_keep_file_order() {
    let file = log_file(
        "Program log: Instruction: Bar\n\
         Program abc consumed 100 of 200000 compute units\n\
         Program abc consumed 200 of 200000 compute units\n",
    );

    let result = aggregate(file.path()).unwrap();
    assert_eq!(result.consumed("Bar"), Some(vec![100, 200]));
}

#[test]
fn test_reading_before_declaration_uses_empty_key() {
    let file = log_file(
        "Program abc consumed 55 of 200000 compute units\n\
         Program log: Instruction: Later\n\
         Program abc consumed 66 of 200000 compute units\n",
    );

    let result = aggregate(file.path()).unwrap();

    assert_eq!(result.consumed(""), Some(vec![55]));
    assert_eq!(result.consumed("Later"), Some(vec![66]));
}

#[test]
fn test_redeclaration_does_not_rename() {
    let file = log_file(
        "Program log: Instruction: A\n\
         Program abc consumed 10 of 200000 compute units\n\
         Program log: Instruction: B\n\
         Program abc consumed 20 of 200000 compute units\n",
    );

    let result = aggregate(file.path()).unwrap();

    assert_eq!(result.instructions().collect::<Vec<_>>(), vec!["A", "B"]);
    assert_eq!(result.consumed("A"), Some(vec![10]));
    assert_eq!(result.consumed("B"), Some(vec![20]));
}

#[test]
fn test_other_ceiling_ignored() {
    let file = log_file(
        "Program log: Instruction: Foo\n\
         Program abc consumed 300 of 1400000 compute units\n\
         Program abc consumed 400 of 200000 compute units\n",
    );

    let result = aggregate(file.path()).unwrap();
    assert_eq!(result.consumed("Foo"), Some(vec![400]));
}

#[test]
fn test_idempotent() {
    let file = log_file(
        "Program log: Instruction: Foo\n\
         Program abc consumed 1 of 200000 compute units\n\
         Program log: Instruction: Bar\n\
         Program abc consumed 2 of 200000 compute units\n",
    );

    let first = aggregate(file.path()).unwrap();
    let second = aggregate(file.path()).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_realistic_validator_log() {
    let file = log_file(
        "[2024-03-01T10:00:00.000000000Z DEBUG solana_runtime::message_processor::stable_log] Program 7aDTsspkQNGKmrexAN7FLx9oxU3iPczSSvHNggyuqYkR invoke [1]\n\
         [2024-03-01T10:00:00.000000000Z DEBUG solana_runtime::message_processor::stable_log] Program log: Instruction: AddVerifiedUser\n\
         [2024-03-01T10:00:00.000000000Z DEBUG solana_runtime::message_processor::stable_log] Program 11111111111111111111111111111111 invoke [2]\n\
         [2024-03-01T10:00:00.000000000Z DEBUG solana_runtime::message_processor::stable_log] Program 11111111111111111111111111111111 success\n\
         [2024-03-01T10:00:00.000000000Z DEBUG solana_runtime::message_processor::stable_log] Program 7aDTsspkQNGKmrexAN7FLx9oxU3iPczSSvHNggyuqYkR consumed 17431 of 200000 compute units\n\
         [2024-03-01T10:00:00.000000000Z DEBUG solana_runtime::message_processor::stable_log] Program 7aDTsspkQNGKmrexAN7FLx9oxU3iPczSSvHNggyuqYkR success\n",
    );

    let result = aggregate(file.path()).unwrap();
    assert_eq!(result.consumed("AddVerifiedUser"), Some(vec![17431]));

    let stats = calculate_instruction_stats(&result);
    assert_eq!(stats[0].max, 17431);
}

#[test]
fn test_missing_file_is_file_access_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.log");

    let err = aggregate(&missing).unwrap_err();

    assert!(matches!(err, AggregateError::FileAccess { .. }));
    assert_eq!(err.path(), &missing);
}

#[test]
fn test_declaration_and_reading_on_same_line() {
    let file = log_file(
        "Program log: Instruction: A\n\
         Program abc consumed 5 of 200000 compute units\n\
         Program log: Instruction: B Program abc consumed 9 of 200000 compute units\n",
    );

    let result = aggregate(file.path()).unwrap();

    assert_eq!(result.instructions().collect::<Vec<_>>(), vec!["A", "B"]);
    assert_eq!(result.consumed("A"), Some(vec![5]));
    assert_eq!(result.consumed("B"), Some(vec![9]));
}

#[test]
fn test_non_ascii_digits_do_not_match() {
    let file = log_file(
        "Program log: Instruction: Foo\n\
         Program abc consumed \u{661}\u{662}\u{663} of 200000 compute units\n\
         Program abc consumed 123 of 200000 compute units\n",
    );

    let result = aggregate(file.path()).unwrap();
    assert_eq!(result.consumed("Foo"), Some(vec![123]));
}
