use crate::add_test;
use crate::common::Fixture;

// Compare against the reference generator when it is installed as `gen_text`
add_test!(matches_reference_generator, async {
    let fixture = Fixture::new();

    let cases: [&[&str]; 4] = [
        &["--size", "64K"],
        &["--size", "10000", "--alpha", "30", "--seed", "7"],
        &["--size", "1K", "--alpha", "-5", "--seed", "0"],
        &["--size", "2.5K", "--alpha", "100", "--align", "64", "--misalign", "3"],
    ];

    for args in cases {
        let ours = fixture.path("ours.bin");
        let theirs = fixture.path("theirs.bin");

        let mut our_args = args.to_vec();
        our_args.extend(["--out", ours.as_str()]);
        let output = fixture.run_cargo("gen-text", &our_args).await;
        assert!(output.status.success());

        let mut system_args = args.to_vec();
        system_args.extend(["--out", theirs.as_str()]);
        let Some(system_output) = fixture.run_system("gen_text", &system_args).await else {
            return;
        };
        assert!(system_output.status.success());

        assert!(
            fixture.read("ours.bin") == fixture.read("theirs.bin"),
            "output differs for {args:?}"
        );
    }
});
