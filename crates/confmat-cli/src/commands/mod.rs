pub mod calc;
pub mod form;
pub mod render;
pub mod server;

use clap::Args;

use confmat_core::ConfusionCounts;

/// The four counts, shared by every command that takes them.
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct CountsArgs {
    /// True positives (TP)
    #[arg(long, default_value_t = 0)]
    pub tp: u64,

    /// False negatives (FN)
    #[arg(long = "fn", default_value_t = 0)]
    pub fn_: u64,

    /// True negatives (TN)
    #[arg(long, default_value_t = 0)]
    pub tn: u64,

    /// False positives (FP)
    #[arg(long, default_value_t = 0)]
    pub fp: u64,
}

impl From<CountsArgs> for ConfusionCounts {
    fn from(a: CountsArgs) -> Self {
        ConfusionCounts::new(a.tp, a.fn_, a.tn, a.fp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        counts: CountsArgs,
    }

    #[test]
    fn parses_all_four_counts() {
        let cli = TestCli::parse_from([
            "confmat", "--tp", "50", "--fn", "10", "--tn", "30", "--fp", "5",
        ]);
        let counts: ConfusionCounts = cli.counts.into();
        assert_eq!(counts, ConfusionCounts::new(50, 10, 30, 5));
    }

    #[test]
    fn missing_counts_default_to_zero() {
        let cli = TestCli::parse_from(["confmat", "--tn", "10"]);
        let counts: ConfusionCounts = cli.counts.into();
        assert_eq!(counts, ConfusionCounts::new(0, 0, 10, 0));
    }

    #[test]
    fn negative_counts_are_rejected() {
        assert!(TestCli::try_parse_from(["confmat", "--tp", "-1"]).is_err());
        assert!(TestCli::try_parse_from(["confmat", "--fp", "2.5"]).is_err());
    }
}
