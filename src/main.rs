use anyhow::Result;
use clap::Parser;
use levelfmt::cli::{Args, Commands};
use levelfmt::config::Config;
use levelfmt::logging::Logger;
use levelfmt::{
    ColoredStyler, LogLevel, PlainStyler, TextStyler, log_gt, log_gte, log_lt, log_lte,
    render_message_prefix_with,
};

fn main() -> Result<()> {
    let args = Args::parse();
    if args.no_color {
        colored::control::set_override(false);
    }
    let config = Config::load(args.config.as_deref())?;

    let color = args.color(config.output.color);
    if !color {
        colored::control::set_override(false);
    }
    let min_level = args.min_level.unwrap_or(config.output.min_level);
    let mut logger = Logger::new(min_level, color);
    let styler: &dyn TextStyler = if color { &ColoredStyler } else { &PlainStyler };

    match args.command {
        Commands::Prefix {
            level,
            depth,
            message,
        } => {
            logger.log(LogLevel::Trace, &format!("Rendering {level} at depth {depth}"));
            let prefix = render_message_prefix_with(styler, level, usize::from(depth));
            println!("{prefix}{}", message.join(" "));
        }
        Commands::Compare { fst, snd } => {
            logger.group(&format!("Comparing {fst} with {snd}"));
            logger.log(
                LogLevel::Debug,
                &format!("ranks {} and {}", fst.rank(), snd.rank()),
            );
            logger.group_end();
            println!("{fst} <  {snd}: {}", log_lt(fst, snd));
            println!("{fst} <= {snd}: {}", log_lte(fst, snd));
            println!("{fst} >  {snd}: {}", log_gt(fst, snd));
            println!("{fst} >= {snd}: {}", log_gte(fst, snd));
        }
        Commands::Levels => {
            for level in LogLevel::ALL {
                let prefix = render_message_prefix_with(styler, level, 0);
                println!("{prefix} rank {}", level.rank());
            }
        }
    }

    Ok(())
}
