// Fri Oct 16 2026 - Alex

use crate::config::Config;
use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "struct-tetris")]
#[command(author = "Alex")]
#[command(version = "1.0.0")]
#[command(about = "Reorders struct fields to minimize padding", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true, default_value = "warn")]
    pub log_level: String,

    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Optimize the first struct declared in a source file
    Optimize(OptimizeArgs),
    /// Print the most frequent words of a text
    TopWords(TopWordsArgs),
}

#[derive(ClapArgs, Debug)]
pub struct OptimizeArgs {
    pub path: PathBuf,

    /// Print the report without rewriting the file
    #[arg(long)]
    pub dry_run: bool,

    /// Write the best brute force ordering instead of the greedy one
    #[arg(long)]
    pub write_best: bool,

    #[arg(long)]
    pub json: bool,

    /// Show field offsets next to each field
    #[arg(long)]
    pub offsets: bool,

    #[arg(long)]
    pub word_size: Option<usize>,

    #[arg(long)]
    pub top_k: Option<usize>,

    #[arg(long)]
    pub max_fields: Option<usize>,
}

impl OptimizeArgs {
    /// Command line flags override the loaded config.
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(word_size) = self.word_size {
            config = config.with_word_size(word_size);
        }
        if let Some(top_k) = self.top_k {
            config = config.with_top_k(top_k);
        }
        if let Some(limit) = self.max_fields {
            config = config.with_max_brute_force_fields(limit);
        }
        if self.dry_run {
            config = config.with_write_back(false);
        }
        config
    }
}

#[derive(ClapArgs, Debug)]
pub struct TopWordsArgs {
    /// File to read the text from
    #[arg(required_unless_present = "text", conflicts_with = "text")]
    pub path: Option<PathBuf>,

    #[arg(short, long)]
    pub text: Option<String>,

    #[arg(short = 'n', long, default_value = "10", allow_negative_numbers = true)]
    pub count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_optimize() {
        let args = Args::try_parse_from([
            "struct-tetris",
            "optimize",
            "file.go",
            "--dry-run",
            "--top-k",
            "5",
            "--log-level",
            "debug",
        ])
        .unwrap();

        assert_eq!(args.log_level, "debug");
        match args.command {
            Command::Optimize(opt) => {
                assert_eq!(opt.path, PathBuf::from("file.go"));
                let config = opt.apply(Config::default());
                assert_eq!(config.top_k, 5);
                assert!(!config.write_back);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_top_words_text() {
        let args = Args::try_parse_from(["struct-tetris", "top-words", "--text", "a b a", "-n", "1"]).unwrap();
        match args.command {
            Command::TopWords(tw) => {
                assert_eq!(tw.text.as_deref(), Some("a b a"));
                assert_eq!(tw.count, 1);
                assert!(tw.path.is_none());
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_top_words_needs_input() {
        assert!(Args::try_parse_from(["struct-tetris", "top-words"]).is_err());
    }
}
