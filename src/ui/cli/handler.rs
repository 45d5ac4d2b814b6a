// Fri Oct 16 2026 - Alex

use super::args::{Args, Command, OptimizeArgs, TopWordsArgs};
use crate::config::Config;
use crate::output::ReportFormatter;
use crate::source::StructSource;
use crate::structure::{Optimizer, StructureValidator, TypeCatalog};
use crate::utils::logging;
use crate::utils::pluralize;
use crate::words::top_words;
use anyhow::Context;
use colored::Colorize;
use std::fs;

pub struct CommandHandler {
    use_color: bool,
}

impl CommandHandler {
    pub fn new() -> Self {
        Self { use_color: true }
    }

    pub fn execute(mut self, args: Args) -> anyhow::Result<()> {
        logging::init_logger(logging::level_from_str(&args.log_level));

        if args.no_color {
            self.use_color = false;
            colored::control::set_override(false);
        }

        let config = match &args.config {
            Some(path) => Config::load(path)
                .with_context(|| format!("failed to load config {}", path.display()))?,
            None => Config::default(),
        };

        match args.command {
            Command::Optimize(opt_args) => self.handle_optimize(config, opt_args),
            Command::TopWords(tw_args) => self.handle_top_words(tw_args),
        }
    }

    fn handle_optimize(&self, config: Config, args: OptimizeArgs) -> anyhow::Result<()> {
        let config = args.apply(config);
        config.validate()?;

        let catalog = TypeCatalog::from_config(&config);
        let mut source = StructSource::load(&args.path)?;
        let fields = StructureValidator::new(&catalog)
            .parse_fields(source.field_lines())
            .context("struct field error")?;

        log::info!(
            "optimizing {} in {}",
            pluralize(fields.len(), "field", "fields"),
            args.path.display()
        );

        let report = Optimizer::from_config(&config).run(fields)?;
        let formatter = ReportFormatter::new()
            .with_color(self.use_color)
            .with_offsets(args.offsets);

        if args.json {
            println!("{}", formatter.render_json(source.name(), &report)?);
        } else {
            print!("{}", formatter.render(&report));
        }

        if config.write_back {
            source.apply(report.write_back_ordering(args.write_best))?;
            source.save()?;
            if !args.json {
                println!("{} {}", "Struct rewritten:".green(), args.path.display());
            }
        }
        Ok(())
    }

    fn handle_top_words(&self, args: TopWordsArgs) -> anyhow::Result<()> {
        let text = match (&args.text, &args.path) {
            (Some(text), _) => text.clone(),
            (None, Some(path)) => fs::read_to_string(path)
                .with_context(|| format!("could not read file: {}", path.display()))?,
            (None, None) => anyhow::bail!("either a path or --text is required"),
        };

        for (rank, word) in top_words(&text, args.count).iter().enumerate() {
            println!("{:>3}. {}", rank + 1, word);
        }
        Ok(())
    }
}

impl Default for CommandHandler {
    fn default() -> Self {
        Self::new()
    }
}
