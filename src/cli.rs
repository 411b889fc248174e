use clap::Parser;
use std::path::PathBuf;

use password_stretcher::MangleConfig;

#[derive(Parser)]
#[command(name = "password-stretcher")]
#[command(version)]
#[command(about = "Grow a wordlist into a stream of mutated password candidates", long_about = None)]
pub struct Args {
    /// Wordlist to stretch (default: STDIN)
    #[arg(short = 'r', long, value_name = "FILE")]
    pub wordlist: Option<PathBuf>,

    /// "leetspeak" mutations
    #[arg(short = 'L', long)]
    pub leet: bool,

    /// Common upper/lowercase variations
    #[arg(short = 'c', long)]
    pub cap: bool,

    /// All possible case combinations
    #[arg(short = 'C', long)]
    pub capswap: bool,

    /// Double each word (e.g. "Pass" --> "PassPass")
    #[arg(short = 'd', long)]
    pub double: bool,

    /// Max permutation depth (careful! massive output)
    #[arg(short = 'P', long, default_value_t = 1, value_name = "INT")]
    pub permutations: usize,

    /// Target total output size in words (derived automatically if omitted)
    #[arg(short = 's', long, value_name = "INT")]
    pub target_size: Option<u64>,
}

impl Args {
    pub fn mangle_config(&self) -> MangleConfig {
        MangleConfig {
            perm_depth: self.permutations,
            double: self.double,
            leet: self.leet,
            cap: self.cap,
            capswap: self.capswap,
            target_size: self.target_size,
        }
    }
}
