use fib_bench::{runner, Config};
use fib_bench_core::Algorithm;

fn run_capturing(config: &Config) -> (Vec<runner::Report>, String) {
    let mut out = Vec::new();
    let reports = runner::run(config, &mut out).unwrap();
    (reports, String::from_utf8(out).unwrap())
}

#[test]
fn skips_naive_recursion_at_the_limit() {
    let config = Config {
        index: 35,
        recursion_limit: 35,
    };
    let (reports, output) = run_capturing(&config);

    assert_eq!(reports.len(), 3);
    assert!(reports.iter().all(|r| r.algorithm != Algorithm::Recursive));
    assert!(!output.contains("Recursive:"));
}

#[test]
fn runs_naive_recursion_below_the_limit() {
    let config = Config {
        index: 10,
        recursion_limit: 35,
    };
    let (reports, output) = run_capturing(&config);

    assert_eq!(reports.len(), 4);
    assert_eq!(reports[0].algorithm, Algorithm::Recursive);
    assert!(output.contains("Recursive: 55"));
}

#[test]
fn reported_values_agree_at_the_default_index() {
    let (reports, _) = run_capturing(&Config::default());

    assert!(!reports.is_empty());
    assert!(reports.iter().all(|r| r.value == 2880067194370816120));
}

#[test]
fn report_shape() {
    let config = Config {
        index: 20,
        recursion_limit: 35,
    };
    let (_, output) = run_capturing(&config);

    // Every benchmarked call contributes exactly three lines: a blank
    // line, the result line, and the elapsed-time line.
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 12);
    for chunk in lines.chunks(3) {
        assert_eq!(chunk[0], "");
        assert!(chunk[1].ends_with(": 6765"), "unexpected line {:?}", chunk[1]);
        assert!(chunk[2].starts_with("Elapsed time: "), "{:?}", chunk[2]);
        assert!(chunk[2].ends_with(" milliseconds"), "{:?}", chunk[2]);
    }
}

#[test]
fn timings_are_non_negative() {
    let config = Config {
        index: 25,
        recursion_limit: 35,
    };
    let (reports, _) = run_capturing(&config);

    assert!(reports.iter().all(|r| r.timing.as_millis_f64() >= 0.0));
}

#[test]
fn rejects_an_index_past_the_domain() {
    let config = Config {
        index: fib_bench_core::MAX_INDEX + 1,
        recursion_limit: 35,
    };
    let mut out = Vec::new();

    let err = runner::run(&config, &mut out).unwrap_err();
    assert!(matches!(err, runner::Error::Compute(_)));
}
