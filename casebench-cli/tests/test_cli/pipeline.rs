use crate::add_test;
use crate::common::Fixture;

// Generate a letter-only corpus, lower-case it and check every byte
add_test!(generate_then_lower, async {
    let fixture = Fixture::new();

    let generated = fixture.path("t.bin");
    let converted = fixture.path("t2.bin");

    let output = fixture
        .run_cargo(
            "gen-text",
            &["--size", "1024", "--alpha", "100", "--seed", "1", "--out", &generated],
        )
        .await;
    assert!(output.status.success());

    let output = fixture
        .run_cargo(
            "case-serial",
            &["--in", &generated, "--mode", "lower", "--out", &converted],
        )
        .await;
    assert!(output.status.success());
    assert!(output.stdout.starts_with("serial,lower,1024,"));

    let original = fixture.read("t.bin");
    let converted = fixture.read("t2.bin");
    assert_eq!(converted.len(), 1024);
    assert!(converted.iter().all(u8::is_ascii_lowercase));
    assert_eq!(converted, original.to_ascii_lowercase());
});

// Upper-casing a mixed corpus touches only letters
add_test!(generate_then_upper, async {
    let fixture = Fixture::new();

    let output = fixture
        .run_cargo("gen-text", &["--size", "64K", "--alpha", "30", "--seed", "5"])
        .await;
    assert!(output.status.success());

    let output = fixture
        .run_cargo("case-serial", &["--report", "text"])
        .await;
    assert!(output.status.success());
    assert!(output.stdout.starts_with("[serial] mode=upper bytes=65536 "));

    let original = fixture.read("input.bin");
    let converted = fixture.read("out_serial.bin");
    assert!(!converted.iter().any(u8::is_ascii_lowercase));
    for (before, after) in original.iter().zip(&converted) {
        if !before.is_ascii_alphabetic() {
            assert_eq!(before, after);
        }
    }
});
