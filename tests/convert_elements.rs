//! Forward-converter tests for individual notation elements and full
//! documents.

use noshift::noshift::convert::{convert, convert_with_warnings, ConvertOptions};
use rstest::rstest;

fn conv(source: &str) -> String {
    convert(source, &ConvertOptions::default())
}

// ===== Symbol Mapping =====

#[rstest]
#[case("^0", "^")]
#[case("^1", "!")]
#[case("^4", "$")]
#[case("^5", "%")]
#[case("^6", "&")]
#[case("^8", "(")]
#[case("^9", ")")]
#[case("^-", "=")]
#[case("^^", "~")]
#[case("^\\", "|")]
#[case("^[", "{")]
#[case("^]", "}")]
#[case("^;", "+")]
#[case("^:", "*")]
#[case("^,", "<")]
#[case("^.", ">")]
#[case("^/", "?")]
fn symbol_substitution(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(conv(input), expected);
}

#[test]
fn string_delimiters_produce_quoted_strings() {
    assert_eq!(conv("^2hello^2"), "\"hello\"");
    assert_eq!(conv("^7hello^7"), "'hello'");
    assert_eq!(conv("^@hello^@"), "`hello`");
}

#[test]
fn substitution_is_position_independent() {
    assert_eq!(conv("a^1b^1c"), "a!b!c");
    assert_eq!(conv("^8^9"), "()");
    assert_eq!(conv("^-^."), "=>");
    assert_eq!(conv("^;^;"), "++");
}

// ===== Capitalize Modifier =====

#[test]
fn capitalize_upper_cases_the_next_character() {
    assert_eq!(conv("^3x"), "X");
    assert_eq!(conv("^3a^3b^3c"), "ABC");
}

#[test]
fn capitalize_applies_inside_strings_by_default() {
    assert_eq!(conv("^2^3hello^2"), "\"Hello\"");
    assert_eq!(conv("^@^3hello^@"), "`Hello`");
}

#[test]
fn capitalize_in_strings_can_be_disabled() {
    let options = ConvertOptions {
        capitalize_in_strings: false,
    };
    assert_eq!(convert("^2^3hello^2", &options), "\"^3hello\"");
    // Outside strings the modifier still applies.
    assert_eq!(convert("^3x ^2^3y^2", &options), "X \"^3y\"");
}

#[test]
fn capitalize_is_inert_inside_comments() {
    assert_eq!(conv("// ^3hello"), "// ^3hello");
}

// ===== String Literals =====

#[test]
fn escaped_delimiters_stay_literal_content() {
    assert_eq!(conv("^2quote: \\^2^2"), "\"quote: ^2\"");
    assert_eq!(conv("^7quote: \\^7^7"), "'quote: ^7'");
    assert_eq!(conv("^@backtick: \\^@^@"), "`backtick: ^@`");
}

#[test]
fn escaped_capitalize_stays_literal_content() {
    assert_eq!(conv("^2literal \\^3 here^2"), "\"literal ^3 here\"");
}

#[test]
fn other_sequences_inside_strings_are_not_reinterpreted() {
    assert_eq!(conv("^2a ^1 b^2"), "\"a ^1 b\"");
    assert_eq!(conv("^7a ^2 b^7"), "'a ^2 b'");
}

// ===== Comments =====

#[test]
fn line_comments_pass_through() {
    assert_eq!(conv("// this is a comment"), "// this is a comment");
    assert_eq!(conv("// ^1 ^2 ^3x"), "// ^1 ^2 ^3x");
}

#[test]
fn block_comments_translate_only_their_delimiters() {
    assert_eq!(conv("/^: block comment ^:/"), "/* block comment */");
    assert_eq!(conv("/^: ^1 ^2 ^3x ^:/"), "/* ^1 ^2 ^3x */");
    assert_eq!(
        conv("/^:\n  multi-line\n  comment\n^:/"),
        "/*\n  multi-line\n  comment\n*/"
    );
}

#[test]
fn comment_after_code_on_the_same_line() {
    assert_eq!(
        conv("const x ^- ^2text^2; // comment\nconst y ^- 1;"),
        "const x = \"text\"; // comment\nconst y = 1;"
    );
}

// ===== Template Expressions =====

#[test]
fn interpolation_opens_and_closes() {
    assert_eq!(conv("^@^4^[name^]^@"), "`${name}`");
    assert_eq!(conv("^@hello ^4^[name^]^@"), "`hello ${name}`");
    assert_eq!(conv("^@^4^[a^] ^4^[b^]^@"), "`${a} ${b}`");
}

#[test]
fn short_interpolation_opener_is_accepted() {
    assert_eq!(conv("^@^4[name^]^@"), "`${name}`");
}

#[test]
fn nested_strings_in_interpolations_are_raw() {
    assert_eq!(conv("^@^4^[^2hello^2^]^@"), "`${\"hello\"}`");
    // Sequences inside the nested string are not reinterpreted.
    assert_eq!(conv("^@^4^[^2a ^1 b^2^]^@"), "`${\"a ^1 b\"}`");
}

#[test]
fn plain_dollar_inside_template_stays_literal() {
    assert_eq!(conv("^@cost: ^4 5^@"), "`cost: ^4 5`");
}

// ===== Documents =====

#[test]
fn hello_world() {
    insta::assert_snapshot!(
        conv("console.log^8^2^3hello, ^3world!^2^9;"),
        @r#"console.log("Hello, World!");"#
    );
}

#[test]
fn class_declaration() {
    assert_eq!(conv("class ^3animal ^[\n^]"), "class Animal {\n}");
}

#[test]
fn arrow_function() {
    insta::assert_snapshot!(
        conv("const add ^- ^8a, b^9 ^-^. a ^; b;"),
        @"const add = (a, b) => a + b;"
    );
}

#[test]
fn all_string_kinds() {
    assert_eq!(conv("const s1 ^- ^2^3hello^2;"), "const s1 = \"Hello\";");
    assert_eq!(conv("const s2 ^- ^7^3world^7;"), "const s2 = 'World';");
    assert_eq!(
        conv("const s3 ^- ^@^4^[s1^] ^4^[s2^]^@;"),
        "const s3 = `${s1} ${s2}`;"
    );
    assert_eq!(conv("const s4 ^- ^2quote: \\^2^2;"), "const s4 = \"quote: ^2\";");
}

#[test]
fn object_literal() {
    let input = "const obj ^- ^[\n  name: ^2^3no^3shift^2,\n  version: 1\n^];";
    let expected = "const obj = {\n  name: \"NoShift\",\n  version: 1\n};";
    assert_eq!(conv(input), expected);
}

#[test]
fn conditional() {
    let input =
        "if ^8x ^. 5^9 ^[\n  console.log^8^2big^2^9;\n^] else ^[\n  console.log^8^2small^2^9;\n^]";
    let expected =
        "if (x > 5) {\n  console.log(\"big\");\n} else {\n  console.log(\"small\");\n}";
    assert_eq!(conv(input), expected);
}

#[test]
fn for_loop() {
    let input = "for ^8let i ^- 0; i ^, 3; i^;^;^9 ^[\n  console.log^8i^9;\n^]";
    let expected = "for (let i = 0; i < 3; i++) {\n  console.log(i);\n}";
    assert_eq!(conv(input), expected);
}

#[test]
fn class_with_constructor_and_method() {
    let input = [
        "class ^3animal ^[",
        "  constructor^8name^9 ^[",
        "    this.name ^- name;",
        "  ^]",
        "",
        "  speak^8^9 ^[",
        "    console.log^8^@^4^[this.name^] speaks.^@^9;",
        "  ^]",
        "^]",
    ]
    .join("\n");
    let expected = [
        "class Animal {",
        "  constructor(name) {",
        "    this.name = name;",
        "  }",
        "",
        "  speak() {",
        "    console.log(`${this.name} speaks.`);",
        "  }",
        "}",
    ]
    .join("\n");
    assert_eq!(conv(&input), expected);
}

// ===== Edge Cases =====

#[test]
fn empty_and_plain_inputs_are_identity() {
    assert_eq!(conv(""), "");
    assert_eq!(conv("console.log"), "console.log");
}

#[test]
fn unterminated_contexts_degrade_with_a_warning() {
    let result = convert_with_warnings("^@^4^[name", &ConvertOptions::default());
    assert_eq!(result.output, "`${name");
    assert_eq!(result.warnings.len(), 1);
    assert!(result.warnings[0].message.contains("template expression"));

    let clean = convert_with_warnings("^2done^2", &ConvertOptions::default());
    assert!(clean.warnings.is_empty());
}
