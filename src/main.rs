use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use pizza_menu::config::{DEFAULT_CLOSE_HOUR, DEFAULT_OPEN_HOUR};
use pizza_menu::{Config, MenuSource, OpeningHours, PizzaMenu, logging};
use tracing::error;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file to load the menu from instead of the house menu
    #[arg(short, long, conflicts_with = "empty")]
    menu: Option<PathBuf>,

    /// Show an empty menu
    #[arg(long)]
    empty: bool,

    /// Hour the shop opens (0-23)
    #[arg(long, default_value_t = DEFAULT_OPEN_HOUR)]
    open_hour: u32,

    /// Hour the shop closes, inclusive (0-23)
    #[arg(long, default_value_t = DEFAULT_CLOSE_HOUR)]
    close_hour: u32,

    /// Pretend the current hour is this instead of reading the clock
    #[arg(long)]
    hour: Option<u32>,

    /// Print the page once as plain text and exit
    #[arg(short, long)]
    print: bool,

    /// File to write logs to
    #[arg(long, default_value = "pizza-menu.log")]
    log_file: PathBuf,
}

impl Args {
    fn config(&self) -> Result<Config> {
        let menu = match (&self.menu, self.empty) {
            (Some(path), _) => MenuSource::File(path.clone()),
            (None, true) => MenuSource::Empty,
            (None, false) => MenuSource::Builtin,
        };

        Ok(Config {
            menu,
            hours: OpeningHours::new(self.open_hour, self.close_hour)?,
            hour_override: self.hour,
        })
    }
}

fn main() {
    let args = Args::parse();

    let guard = match logging::init(&args.log_file)
        .with_context(|| format!("failed to open log file {}", args.log_file.display()))
    {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Error running pizza menu: {:#}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&args) {
        error!("{:#}", e);
        drop(guard);
        eprintln!("Error running pizza menu: {:#}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let board = PizzaMenu::from_config(&args.config()?)?;

    if args.print {
        println!("{}", board.render_text());
        return Ok(());
    }

    board.run()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::error::ErrorKind;
    use pizza_menu::ConfigError;

    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("pizza-menu").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults_to_house_menu() {
        let config = parse(&[]).config().unwrap();
        assert_eq!(config.menu, MenuSource::Builtin);
        assert_eq!(config.hours, OpeningHours::default());
        assert_eq!(config.hour_override, None);
    }

    #[test]
    fn test_empty_flag() {
        let config = parse(&["--empty"]).config().unwrap();
        assert_eq!(config.menu, MenuSource::Empty);
    }

    #[test]
    fn test_menu_file_flag() {
        let config = parse(&["--menu", "menus/winter.json", "--hour", "9"])
            .config()
            .unwrap();
        assert_eq!(
            config.menu,
            MenuSource::File(PathBuf::from("menus/winter.json"))
        );
        assert_eq!(config.hour_override, Some(9));
    }

    #[test]
    fn test_menu_and_empty_conflict() {
        let err = Args::try_parse_from(["pizza-menu", "--menu", "a.json", "--empty"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
    }

    #[test]
    fn test_custom_hours() {
        let config = parse(&["--open-hour", "7", "--close-hour", "23"])
            .config()
            .unwrap();
        assert_eq!(config.hours, OpeningHours::new(7, 23).unwrap());
    }

    #[test]
    fn test_invalid_window_rejected() {
        let err = parse(&["--open-hour", "22", "--close-hour", "8"])
            .config()
            .unwrap_err();
        assert_eq!(
            err.downcast_ref::<ConfigError>(),
            Some(&ConfigError::InvertedHours { open: 22, close: 8 })
        );

        let err = parse(&["--close-hour", "24"]).config().unwrap_err();
        assert_eq!(
            err.downcast_ref::<ConfigError>(),
            Some(&ConfigError::HourOutOfRange(24))
        );
    }

    #[test]
    fn test_print_and_log_file() {
        let args = parse(&["-p", "--log-file", "/tmp/menu.log"]);
        assert!(args.print);
        assert_eq!(args.log_file, PathBuf::from("/tmp/menu.log"));
    }
}
