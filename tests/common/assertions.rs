//! Domain-specific assertion macros for claire harnesses.
//!
//! These add context-rich failure messages that make it clear *which* queue,
//! metric or token was wrong, and print what was available instead.

// ---------------------------------------------------------------------------
// Parsed output assertions
// ---------------------------------------------------------------------------

/// Assert that a queue-stat table has `queue.column == value`.
///
/// ```rust
/// assert_queue_stat!(stats, "orders", "message_count", "42");
/// ```
#[macro_export]
macro_rules! assert_queue_stat {
    ($stats:expr, $queue:expr, $column:expr, $value:expr) => {{
        let stats: &claire::QueueStats = &$stats;
        let (queue, column, expected): (&str, &str, &str) = ($queue, $column, $value);
        let Some(row) = stats.get(queue) else {
            panic!(
                "assert_queue_stat! failed: queue {:?} not found.\n  Available: {:?}",
                queue,
                stats.keys().collect::<Vec<_>>()
            );
        };
        match row.get(column) {
            Some(actual) if actual == expected => {}
            Some(actual) => panic!(
                "assert_queue_stat! failed:\n  {}.{}\n  expected: {:?}\n  actual:   {:?}",
                queue, column, expected, actual
            ),
            None => panic!(
                "assert_queue_stat! failed: column {:?} missing for {:?}.\n  Columns: {:?}",
                column,
                queue,
                row.keys().collect::<Vec<_>>()
            ),
        }
    }};
}

/// Assert that a perf summary has `metric == value`.
#[macro_export]
macro_rules! assert_metric {
    ($summary:expr, $metric:expr, $value:expr) => {{
        let summary: &claire::PerfSummary = &$summary;
        let (metric, expected): (&str, &str) = ($metric, $value);
        match summary.get(metric) {
            Some(actual) if actual == expected => {}
            Some(actual) => panic!(
                "assert_metric! failed:\n  {}\n  expected: {:?}\n  actual:   {:?}",
                metric, expected, actual
            ),
            None => panic!(
                "assert_metric! failed: metric {:?} not found.\n  Available: {:?}",
                metric,
                summary.keys().collect::<Vec<_>>()
            ),
        }
    }};
}

// ---------------------------------------------------------------------------
// Client assertions
// ---------------------------------------------------------------------------

/// Assert that a client call failed as unsupported for the given target.
#[macro_export]
macro_rules! assert_unsupported {
    ($result:expr, $container:expr) => {{
        match $result {
            Err(claire::ClientError::Unsupported { container, .. }) => {
                assert_eq!(container, $container, "unsupported error names the wrong target");
            }
            Err(other) => panic!("assert_unsupported! failed: unexpected error: {other}"),
            Ok(_) => panic!("assert_unsupported! failed: operation silently succeeded"),
        }
    }};
}

// ---------------------------------------------------------------------------
// Argv helpers
// ---------------------------------------------------------------------------

/// Assert that every token appears in `argv` exactly once.
pub fn assert_tokens_once(argv: &[String], tokens: &[&str]) {
    for token in tokens {
        let count = argv.iter().filter(|t| t == token).count();
        assert_eq!(
            count, 1,
            "token {token:?} appears {count} times in {argv:?}"
        );
    }
}
