// Path: crates/cli/src/commands/run.rs

use anyhow::Result;
use clap::Parser;

#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Tokens to classify, in order. Signed values such as `-5` are taken literally.
    #[clap(allow_hyphen_values = true, num_args = 0..)]
    pub tokens: Vec<String>,

    /// Print compact JSON instead of pretty-printed.
    #[clap(long)]
    pub compact: bool,
}

pub fn run(args: RunArgs) -> Result<()> {
    let result = classify_core::process(&args.tokens);
    let out = if args.compact {
        serde_json::to_string(&result)?
    } else {
        serde_json::to_string_pretty(&result)?
    };
    println!("{}", out);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hyphenated_tokens_are_positional() {
        let args = RunArgs::try_parse_from(["run", "-5", "a", "+5", ""]).unwrap();
        assert_eq!(args.tokens, vec!["-5", "a", "+5", ""]);
        assert!(!args.compact);
    }
}
