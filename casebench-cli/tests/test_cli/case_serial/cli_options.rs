use crate::add_test;
use crate::common::{Fixture, SAMPLE_TEXT};

// Test the human-readable report
add_test!(text_report_layout, async {
    let fixture = Fixture::with_file("input.bin", SAMPLE_TEXT.as_bytes());

    let output = fixture
        .run_cargo("case-serial", &["--mode", "lower", "--report", "text"])
        .await;
    assert!(output.status.success());

    let line = output.stdout.trim_end();
    let prefix = format!("[serial] mode=lower bytes={} proc_ms=", SAMPLE_TEXT.len());
    assert!(line.starts_with(&prefix), "report: {line}");
    assert!(line.contains(" io_ms="));
    assert!(line.contains(" VmRSS_KiB="));
});

// Any report name other than `csv` selects text
add_test!(unknown_report_selects_text, async {
    let fixture = Fixture::with_file("input.bin", SAMPLE_TEXT.as_bytes());

    for report in ["CSV", "json", "Text"] {
        let output = fixture.run_cargo("case-serial", &["--report", report]).await;
        assert!(output.status.success());
        assert!(output.stdout.starts_with("[serial] mode=upper "), "report {report:?}");
    }
});

// Any mode other than `lower` converts to upper case but is reported as given
add_test!(unknown_mode_label_is_kept, async {
    let fixture = Fixture::with_file("input.bin", SAMPLE_TEXT.as_bytes());

    for mode in ["LOWER", "title", "upper"] {
        let output = fixture.run_cargo("case-serial", &["--mode", mode]).await;
        assert!(output.status.success());
        let prefix = format!("serial,{mode},{},", SAMPLE_TEXT.len());
        assert!(output.stdout.starts_with(&prefix), "report: {}", output.stdout);
        fixture.assert_file("out_serial.bin", SAMPLE_TEXT.to_ascii_uppercase().as_bytes());
    }
});

// The text report echoes the mode label verbatim
add_test!(text_report_keeps_mode_label, async {
    let fixture = Fixture::with_file("input.bin", SAMPLE_TEXT.as_bytes());

    let output = fixture
        .run_cargo("case-serial", &["--mode", "LOWER", "--report", "text"])
        .await;
    assert!(output.status.success());
    assert!(output.stdout.starts_with("[serial] mode=LOWER bytes="));

    fixture.assert_file("out_serial.bin", SAMPLE_TEXT.to_ascii_uppercase().as_bytes());
});

// Unknown flags and stray arguments are ignored
add_test!(unknown_flags_are_ignored, async {
    let fixture = Fixture::with_file("input.bin", SAMPLE_TEXT.as_bytes());

    let output = fixture
        .run_cargo(
            "case-serial",
            &["--threads", "stray", "--mode", "lower", "--chunk"],
        )
        .await;
    assert!(output.status.success(), "stderr: {}", output.stderr);

    fixture.assert_file("out_serial.bin", SAMPLE_TEXT.to_ascii_lowercase().as_bytes());
});

// Values may start with a dash
add_test!(dash_prefixed_path, async {
    let fixture = Fixture::with_file("-input.txt", SAMPLE_TEXT.as_bytes());

    let output = fixture
        .run_cargo("case-serial", &["--in", "-input.txt", "--out", "-output.txt"])
        .await;
    assert!(output.status.success(), "stderr: {}", output.stderr);

    fixture.assert_file("-output.txt", SAMPLE_TEXT.to_ascii_uppercase().as_bytes());
});

// Test help output
add_test!(help_exits_successfully, async {
    let fixture = Fixture::new();

    let output = fixture.run_cargo("case-serial", &["-h"]).await;
    assert!(output.status.success());
    assert!(output.stdout.contains("--mode"));
    assert!(!fixture.file_exists("out_serial.bin"));
});
