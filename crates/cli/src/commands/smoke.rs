// Path: crates/cli/src/commands/smoke.rs

use anyhow::{Context, Result};
use clap::Parser;
use classify_types::{ClassifyRequest, ClassifyResponse};
use std::time::Duration;

#[derive(Parser, Debug)]
pub struct SmokeArgs {
    /// Full URL of the classification endpoint.
    #[clap(long, default_value = "http://127.0.0.1:8000/classify")]
    pub url: String,

    /// Per-request timeout in seconds.
    #[clap(long, default_value_t = 30)]
    pub timeout_secs: u64,
}

pub(crate) struct SmokeCase {
    pub name: &'static str,
    pub data: &'static [&'static str],
    pub expected_concat: &'static str,
    pub expected_sum: &'static str,
}

pub(crate) const CASES: &[SmokeCase] = &[
    SmokeCase {
        name: "numbers, letters and a symbol",
        data: &["a", "1", "334", "4", "R", "$"],
        expected_concat: "Ra",
        expected_sum: "339",
    },
    SmokeCase {
        name: "several symbols",
        data: &["2", "a", "y", "4", "&", "-", "*", "5", "92", "b"],
        expected_concat: "ByA",
        expected_sum: "103",
    },
    SmokeCase {
        name: "letters only",
        data: &["A", "ABcD", "DOE"],
        expected_concat: "EoDdCbAa",
        expected_sum: "0",
    },
];

/// Returns a description of every field where `resp` disagrees with the case.
pub(crate) fn check_case(case: &SmokeCase, resp: &ClassifyResponse) -> Vec<String> {
    let mut mismatches = Vec::new();
    if !resp.is_success {
        mismatches.push("is_success is false".to_string());
    }
    if resp.result.concat_string != case.expected_concat {
        mismatches.push(format!(
            "concat_string: expected {:?}, got {:?}",
            case.expected_concat, resp.result.concat_string
        ));
    }
    if resp.result.sum != case.expected_sum {
        mismatches.push(format!(
            "sum: expected {:?}, got {:?}",
            case.expected_sum, resp.result.sum
        ));
    }
    // The remote buckets must agree with the local classifier.
    if resp.result != classify_core::process(case.data) {
        mismatches.push("buckets differ from local classification".to_string());
    }
    mismatches
}

pub async fn run(args: SmokeArgs) -> Result<()> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(args.timeout_secs))
        .build()?;

    println!("Testing: {}", args.url);
    println!("{}", "=".repeat(60));

    let mut failed = 0usize;
    for (i, case) in CASES.iter().enumerate() {
        println!("\nTest {}: {}", i + 1, case.name);
        println!("Input: {:?}", case.data);

        let body = ClassifyRequest {
            data: case.data.iter().map(|s| s.to_string()).collect(),
        };
        let resp = client
            .post(&args.url)
            .json(&body)
            .send()
            .await
            .with_context(|| format!("Failed to reach {}", args.url))?;

        let status = resp.status();
        if !status.is_success() {
            println!("FAILED: HTTP {}", status);
            failed += 1;
            continue;
        }
        let parsed: ClassifyResponse = resp.json().await.context("Invalid response body")?;
        let mismatches = check_case(case, &parsed);
        if mismatches.is_empty() {
            println!("OK: concat_string={} sum={}", parsed.result.concat_string, parsed.result.sum);
        } else {
            failed += 1;
            for m in &mismatches {
                println!("MISMATCH: {}", m);
            }
            println!("Full response: {}", serde_json::to_string_pretty(&parsed)?);
        }
    }

    println!("\n{}", "=".repeat(60));
    if failed > 0 {
        anyhow::bail!("{} of {} smoke cases failed", failed, CASES.len());
    }
    println!("All {} smoke cases passed.", CASES.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use classify_types::Identity;

    #[test]
    fn local_classifier_passes_every_case() {
        let identity = Identity::default();
        for case in CASES {
            let resp = ClassifyResponse::success(&identity, classify_core::process(case.data));
            assert!(check_case(case, &resp).is_empty(), "case {}", case.name);
        }
    }

    #[test]
    fn failure_envelope_is_reported() {
        let resp = ClassifyResponse::failure(&Identity::default());
        let mismatches = check_case(&CASES[0], &resp);
        assert!(mismatches.iter().any(|m| m.contains("is_success")));
        assert!(mismatches.iter().any(|m| m.starts_with("sum")));
        assert!(mismatches.iter().any(|m| m.starts_with("concat_string")));
    }
}
