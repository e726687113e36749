use crate::add_test;
use crate::common::{Fixture, HIGH_BYTES, NO_LETTERS, SAMPLE_TEXT};

// A missing input file is fatal and prints no report
add_test!(missing_input_fails, async {
    let fixture = Fixture::new();

    let output = fixture.run_cargo("case-serial", &["--in", "absent.bin"]).await;
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stderr.contains("absent.bin"));
    assert!(output.stderr.contains("cannot read input"));
    assert!(output.stdout.is_empty());
    assert!(!fixture.file_exists("out_serial.bin"));
});

// A value flag at the end of the command line is fatal
add_test!(missing_value_is_fatal, async {
    let fixture = Fixture::with_file("input.bin", SAMPLE_TEXT.as_bytes());

    let output = fixture.run_cargo("case-serial", &["--mode"]).await;
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stderr.contains("missing value for --mode"));
    assert!(!fixture.file_exists("out_serial.bin"));
});

// Test empty input
add_test!(empty_input, async {
    let fixture = Fixture::with_file("input.bin", b"");

    let output = fixture.run_cargo("case-serial", &[]).await;
    assert!(output.status.success());
    assert!(output.stdout.starts_with("serial,upper,0,"));

    fixture.assert_file("out_serial.bin", b"");
});

// Input without letters is copied unchanged
add_test!(no_letters_unchanged, async {
    let fixture = Fixture::with_file("input.bin", NO_LETTERS);

    for mode in ["upper", "lower"] {
        let output = fixture.run_cargo("case-serial", &["--mode", mode]).await;
        assert!(output.status.success());
        fixture.assert_file("out_serial.bin", NO_LETTERS);
    }
});

// Only ASCII letters change; other bytes pass through
add_test!(non_ascii_bytes_unchanged, async {
    let fixture = Fixture::with_file("input.bin", HIGH_BYTES);

    let output = fixture.run_cargo("case-serial", &[]).await;
    assert!(output.status.success());

    let expected: Vec<u8> = HIGH_BYTES.iter().map(u8::to_ascii_uppercase).collect();
    fixture.assert_file("out_serial.bin", &expected);
});

// The output path must be creatable
add_test!(unwritable_output_fails, async {
    let fixture = Fixture::with_file("input.bin", SAMPLE_TEXT.as_bytes());
    let out = fixture.path("missing-dir/out.bin");

    let output = fixture.run_cargo("case-serial", &["--out", &out]).await;
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stderr.contains("cannot create output"));
    assert!(output.stdout.is_empty());
});
