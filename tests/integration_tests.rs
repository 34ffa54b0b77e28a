//! Integration tests for the counter and harness through the public API

use fizzbuzz_bench::config::{CliArgs, ConfigBuilder};
use fizzbuzz_bench::{classify, measure, AppConfig, ConfigError, Forward, Harness, Triple, Variant};

mod common;
use common::{brute_force, closed_form, REFERENCE_BOUND};

/// **What is tested:** Regression oracle at the reference bound
/// **Why it is tested:** 100000 is the bound the tool is normally run with
/// **Test conditions:** classify(100000) against the brute-force oracle and a known literal
/// **Expectations:** (33333, 16667, 16667) from every source
#[test]
fn test_reference_bound_matches_oracle() {
    let expected = Triple::new(33_333, 16_667, 16_667);

    assert_eq!(brute_force(REFERENCE_BOUND), expected);
    assert_eq!(closed_form(REFERENCE_BOUND), expected);
    assert_eq!(classify(REFERENCE_BOUND), expected);
    for variant in Variant::ALL {
        assert_eq!(variant.forward(REFERENCE_BOUND), expected, "{variant}");
    }
}

/// **What is tested:** Literal values for tiny bounds
/// **Why it is tested:** Documents the precedence rule on hand-checkable inputs
/// **Test conditions:** Bounds 1, 2, 6, 7, 12
/// **Expectations:** Values computed by hand
#[test]
fn test_literal_small_bounds() {
    assert_eq!(classify(1), Triple::new(0, 0, 1));
    assert_eq!(classify(2), Triple::new(0, 0, 1));
    assert_eq!(classify(6), Triple::new(2, 1, 1));
    assert_eq!(classify(7), Triple::new(2, 1, 2));
    assert_eq!(classify(12), Triple::new(4, 2, 2));
}

/// **What is tested:** Oracle agreement over a contiguous range of bounds
/// **Why it is tested:** Catches off-by-one errors at every residue mod 6
/// **Test conditions:** Every bound in -6..=300
/// **Expectations:** classify matches both oracles exactly
#[test]
fn test_oracle_agreement_range() {
    for n in -6..=300 {
        assert_eq!(classify(n), brute_force(n), "n = {n}");
        assert_eq!(classify(n), closed_form(n), "n = {n}");
    }
}

/// **What is tested:** Full pipeline from CLI arguments to a written report
/// **Why it is tested:** Validates config, harness and report together
/// **Test conditions:** Two runs of native and opaque variants with n = 6
/// **Expectations:** Four blocks, run headers, every result is [2, 1, 1]
#[test]
fn test_pipeline_report() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_cli(CliArgs {
        count: 6,
        runs: 2,
        variants: vec![Variant::Native, Variant::Opaque],
        all: false,
    })?;

    let mut output = Vec::new();
    let measurements = Harness::new(&config).run(&mut output)?;
    let text = String::from_utf8(output)?;

    assert_eq!(measurements.len(), 4);
    assert_eq!(text.matches("[2, 1, 1]\n").count(), 4);
    assert!(text.contains("Run: 0"));
    assert!(text.contains("Run: 1"));
    assert_eq!(
        text.matches("Time taken (Native Opaque) (usec): ").count(),
        2
    );
    Ok(())
}

/// **What is tested:** Configuration validation surfaced through the public API
/// **Why it is tested:** Zero runs must be rejected before any measurement
/// **Test conditions:** CliArgs with runs = 0
/// **Expectations:** InvalidCliArgument error
#[test]
fn test_zero_runs_rejected() {
    let result = AppConfig::from_cli(CliArgs {
        count: 10,
        runs: 0,
        variants: vec![Variant::Native],
        all: false,
    });
    assert!(matches!(
        result,
        Err(ConfigError::InvalidCliArgument { .. })
    ));
}

/// **What is tested:** Timing of a non-trivial workload
/// **Why it is tested:** Elapsed time is non-negative and both resolutions agree
/// **Test conditions:** One measured classify call at the reference bound, then a harness run
/// **Expectations:** millis == micros / 1000 for every sample
#[test]
fn test_timing_resolutions_consistent() -> Result<(), Box<dyn std::error::Error>> {
    let (triple, sample) = measure(|| classify(REFERENCE_BOUND));
    assert_eq!(triple, closed_form(REFERENCE_BOUND));
    assert!(sample.end() >= sample.start());
    assert_eq!(sample.millis(), sample.micros() / 1000);

    let config = ConfigBuilder::new(REFERENCE_BOUND)
        .with_variants(Variant::ALL.to_vec())
        .build();
    let measurements = Harness::new(&config).run(&mut std::io::sink())?;
    for m in measurements {
        assert_eq!(m.sample.millis(), m.sample.micros() / 1000, "{}", m.label);
    }
    Ok(())
}
