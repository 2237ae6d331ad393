//! Structural diagnostics tests over whole documents.

use noshift::noshift::diagnose::diagnose;

// ===== Valid Code =====

#[test]
fn valid_code_is_clean() {
    assert_eq!(diagnose("const x ^- 1;"), vec![]);
    assert_eq!(diagnose("^2hello^2"), vec![]);
    assert_eq!(diagnose("// comment"), vec![]);
    assert_eq!(diagnose("/^: block ^:/"), vec![]);
    assert_eq!(diagnose("^@hello ^4^[name^]^@"), vec![]);
    assert_eq!(diagnose("^3x"), vec![]);
}

#[test]
fn all_symbol_sequences_are_valid() {
    let input = "^0 ^1 ^4 ^5 ^6 ^8 ^9 ^- ^^ ^\\ ^[ ^] ^; ^: ^, ^. ^/";
    assert_eq!(diagnose(input), vec![]);
}

#[test]
fn empty_input_is_clean() {
    assert_eq!(diagnose(""), vec![]);
}

// ===== Unclosed Constructs =====

#[test]
fn unclosed_strings_are_detected() {
    for source in ["^2hello", "^7hello", "^@hello"] {
        let errors = diagnose(source);
        assert!(!errors.is_empty(), "{:?}", source);
        assert!(
            errors.iter().any(|e| e.message.contains("Unclosed")),
            "{:?}",
            source
        );
    }
}

#[test]
fn unclosed_block_comment_is_detected() {
    let errors = diagnose("/^: this is not closed");
    assert!(errors.iter().any(|e| e.message.contains("Unclosed")));
    assert!(errors.iter().any(|e| e.message.contains("block comment")));
}

#[test]
fn unclosed_template_expression_is_detected() {
    let errors = diagnose("^@^4^[name^@");
    assert!(errors.iter().any(|e| e.message.contains("Unclosed")));
    assert!(errors
        .iter()
        .any(|e| e.message.contains("template expression")));
}

#[test]
fn unclosed_diagnostics_point_at_the_opening() {
    let errors = diagnose("let s ^- ^2abc");
    assert_eq!(errors.len(), 1);
    assert_eq!((errors[0].line, errors[0].column), (1, 10));
    assert!(errors[0].message.contains("string literal (^2...^2)"));
}

// ===== Unknown Sequences =====

#[test]
fn unknown_sequence_is_reported_at_the_caret() {
    let errors = diagnose("^x");
    assert_eq!(errors.len(), 1);
    assert_eq!((errors[0].line, errors[0].column), (1, 1));
    assert!(errors[0].message.contains("Unknown sequence '^x'"));
}

#[test]
fn capitalize_is_a_valid_sequence() {
    assert_eq!(diagnose("^3a"), vec![]);
}

// ===== Edge Cases =====

#[test]
fn lone_caret_at_end_of_file() {
    let errors = diagnose("hello ^");
    assert_eq!(errors.len(), 1);
    assert!(errors[0].message.contains("Lone '^'"));
    assert_eq!((errors[0].line, errors[0].column), (1, 7));
}

#[test]
fn capitalize_with_nothing_to_capitalize() {
    let errors = diagnose("^3");
    assert_eq!(errors.len(), 1);
    assert!(errors[0].message.contains("^3"));
}

#[test]
fn capitalize_before_a_newline_is_fine() {
    // Only the very end of input has nothing left to capitalize.
    assert_eq!(diagnose("^3x\n^3y"), vec![]);
}

#[test]
fn escaped_sequences_are_not_flagged() {
    assert_eq!(diagnose("^2\\^2 hello^2"), vec![]);
    assert_eq!(diagnose("^2a\\\\b^2"), vec![]);
}

#[test]
fn results_are_sorted_by_position() {
    // Unknown sequence on line 1, unclosed string opening on line 2.
    let errors = diagnose("^x\n^2open");
    assert_eq!(errors.len(), 2);
    assert_eq!((errors[0].line, errors[0].column), (1, 1));
    assert!(errors[0].message.contains("Unknown sequence"));
    assert_eq!((errors[1].line, errors[1].column), (2, 1));
    assert!(errors[1].message.contains("Unclosed"));
}

#[test]
fn nested_unclosed_contexts_are_each_reported() {
    let errors = diagnose("^@^4^[name");
    assert_eq!(errors.len(), 2);
    // Sorted by position: the template opens before its interpolation.
    assert!(errors[0].message.contains("template literal"));
    assert!(errors[1].message.contains("template expression"));
}
