use std::env;

use anyhow::{bail, Result};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use zero_sum_triples::{find_zero_sum_triples, input};

const CASES: &[(&str, &[[i32; 3]])] = &[
    ("[-1, 0, 1]", &[[-1, 0, 1]]),
    ("[0, 0, 0, 0]", &[[0, 0, 0]]),
    ("[-2, 0, 1, 1, 2]", &[[-2, 0, 2], [-2, 1, 1]]),
    ("[]", &[]),
    ("[-2, -1, 0, 1, 2]", &[[-2, 0, 2], [-1, 0, 1]]),
];

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = env::args().skip(1).collect::<Vec<_>>();
    if args.is_empty() {
        return run_cases();
    }

    let values = input::parse_values(&args)?;
    let triples = find_zero_sum_triples(&values);
    info!(len = values.len(), found = triples.len(), "search complete");

    for triple in triples {
        println!("{triple}");
    }

    Ok(())
}

fn run_cases() -> Result<()> {
    let mut failed = 0;

    for &(case, expected) in CASES {
        let values = input::parse_list(case)?;

        let mut result = find_zero_sum_triples(&values)
            .into_iter()
            .map(<[i32; 3]>::from)
            .collect::<Vec<_>>();
        result.sort_unstable();

        let mut expected = expected.to_vec();
        expected.sort_unstable();

        if result == expected {
            info!(case, "case passed");
        } else {
            error!(case, ?expected, ?result, "case failed");
            failed += 1;
        }
    }

    if failed > 0 {
        bail!("{failed} of {} cases failed", CASES.len());
    }

    info!(cases = CASES.len(), "all cases passed");
    Ok(())
}
