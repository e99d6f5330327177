mod demo;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use patternbook_config::AppConfig;
use patternbook_core::history::HistoryConfig;
use patternbook_core::{EditCommand, ErasePolicy, Style};

/// Runnable demonstrations of the Memento, Builder and Composite patterns.
#[derive(Parser, Debug)]
#[command(name = "patternbook", version, about)]
struct Cli {
    /// Config file to use instead of the default location.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Fail when erasing more characters than the text holds.
    #[arg(long, global = true)]
    strict_erase: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
enum Command {
    /// Text editor with snapshot-based undo/redo.
    Memento {
        /// Steps such as `write=Hello`, `erase=6`, `undo`, `redo`.
        /// Runs the Hello/World walkthrough when empty.
        steps: Vec<EditCommand>,
    },
    /// City assembled by a director.
    Builder {
        /// Modern, Medieval or Futuristic. Defaults to the configured style.
        #[arg(long)]
        style: Option<Style>,
    },
    /// Bundle priced like a single product.
    Composite,
    /// Every demonstration in turn.
    All,
}

/// Effective settings after applying CLI flags on top of the config file.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Settings {
    history: HistoryConfig,
    erase_policy: ErasePolicy,
    city_style: Style,
}

impl Cli {
    /// `--config` if given, else the default config location.
    fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(AppConfig::config_path)
    }

    /// Resolves settings. Flags win over the config file.
    fn resolve(&self, config: &AppConfig) -> Result<Settings> {
        let erase_policy = if self.strict_erase || config.strict_erase {
            ErasePolicy::Strict
        } else {
            ErasePolicy::Clamp
        };
        let city_style = match &self.command {
            Some(Command::Builder { style: Some(style) }) => *style,
            _ => config.city_style.parse()?,
        };
        Ok(Settings {
            history: HistoryConfig::with_max_depth(config.max_history_depth),
            erase_policy,
            city_style,
        })
    }
}

/// Renders the output lines of one command.
fn run(command: Command, settings: &Settings) -> Result<Vec<String>> {
    let lines = match command {
        Command::Memento { steps } => {
            let steps = if steps.is_empty() {
                demo::default_script()?
            } else {
                steps
            };
            demo::memento(&steps, settings.history, settings.erase_policy)?
        }
        Command::Builder { .. } => demo::builder(settings.city_style),
        Command::Composite => demo::composite(),
        Command::All => {
            let mut lines = vec!["== Memento ==".to_string()];
            lines.extend(demo::memento(
                &demo::default_script()?,
                settings.history,
                settings.erase_policy,
            )?);
            lines.push("== Builder ==".to_string());
            lines.extend(demo::builder(settings.city_style));
            lines.push("== Composite ==".to_string());
            lines.extend(demo::composite());
            lines
        }
    };
    Ok(lines)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config_path = cli.config_path();
    let config = AppConfig::load_or_create(&config_path);
    tracing::info!("Starting patternbook (config: {})", config_path.display());

    let settings = cli.resolve(&config)?;
    let lines = run(cli.command.unwrap_or(Command::All), &settings)?;
    for line in lines {
        println!("{line}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use patternbook_config::CITY_STYLES;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("patternbook").chain(args.iter().copied()))
            .expect("parse args")
    }

    fn resolve(args: &[&str], config: &AppConfig) -> Settings {
        parse(args).resolve(config).expect("resolve")
    }

    // --- Flag / config precedence ---

    #[test]
    fn test_defaults_come_from_config() {
        let config = AppConfig {
            max_history_depth: 7,
            strict_erase: false,
            city_style: "Futuristic".to_string(),
        };
        let settings = resolve(&[], &config);
        assert_eq!(settings.history.max_depth, 7);
        assert_eq!(settings.erase_policy, ErasePolicy::Clamp);
        assert_eq!(settings.city_style, Style::Futuristic);
    }

    #[test]
    fn test_strict_erase_flag_overrides_config() {
        let config = AppConfig::default();
        assert!(!config.strict_erase);
        let settings = resolve(&["--strict-erase", "memento"], &config);
        assert_eq!(settings.erase_policy, ErasePolicy::Strict);
    }

    #[test]
    fn test_strict_erase_flag_accepted_after_subcommand() {
        let settings = resolve(&["memento", "--strict-erase"], &AppConfig::default());
        assert_eq!(settings.erase_policy, ErasePolicy::Strict);
    }

    #[test]
    fn test_config_strict_erase_without_flag() {
        let config = AppConfig {
            strict_erase: true,
            ..AppConfig::default()
        };
        assert_eq!(resolve(&[], &config).erase_policy, ErasePolicy::Strict);
    }

    #[test]
    fn test_builder_style_flag_overrides_config() {
        let config = AppConfig {
            city_style: "Futuristic".to_string(),
            ..AppConfig::default()
        };
        let settings = resolve(&["builder", "--style", "medieval"], &config);
        assert_eq!(settings.city_style, Style::Medieval);
    }

    #[test]
    fn test_config_flag_selects_file() {
        let cli = parse(&["--config", "/tmp/elsewhere.json", "composite"]);
        assert_eq!(cli.config_path(), PathBuf::from("/tmp/elsewhere.json"));
        assert_eq!(parse(&[]).config_path(), AppConfig::config_path());
    }

    #[test]
    fn test_config_file_settings_reach_resolve() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("patternbook.json");
        std::fs::write(&path, r#"{"strict_erase": true, "city_style": "medieval"}"#).unwrap();

        let path_arg = path.to_str().unwrap();
        let cli = parse(&["--config", path_arg, "builder"]);
        let config = AppConfig::load_or_create(&cli.config_path());
        let settings = cli.resolve(&config).unwrap();
        assert_eq!(settings.erase_policy, ErasePolicy::Strict);
        assert_eq!(settings.city_style, Style::Medieval);
    }

    #[test]
    fn test_invalid_arguments_rejected() {
        let bad_style = ["patternbook", "builder", "--style", "gothic"];
        assert!(Cli::try_parse_from(bad_style).is_err());
        let bad_step = ["patternbook", "memento", "rewind"];
        assert!(Cli::try_parse_from(bad_step).is_err());
    }

    #[test]
    fn test_config_style_names_match_style_enum() {
        let names: Vec<&str> = Style::ALL.iter().map(|s| s.name()).collect();
        assert_eq!(names, CITY_STYLES);
        for name in CITY_STYLES {
            assert_eq!(name.parse::<Style>().unwrap().name(), name);
        }
    }

    // --- Command output ---

    #[test]
    fn test_strict_erase_run_fails_where_clamp_succeeds() {
        let args = ["--strict-erase", "memento", "write=ab", "erase=5"];
        let cli = parse(&args);
        let settings = cli.resolve(&AppConfig::default()).unwrap();
        assert!(run(cli.command.clone().unwrap(), &settings).is_err());

        let cli = parse(&args[1..]);
        let settings = cli.resolve(&AppConfig::default()).unwrap();
        let lines = run(cli.command.unwrap(), &settings).unwrap();
        assert_eq!(lines, vec!["ab", ""]);
    }

    #[test]
    fn test_run_all_contains_every_section() {
        let settings = resolve(&[], &AppConfig::default());
        let lines = run(Command::All, &settings).unwrap();
        assert_eq!(lines[0], "== Memento ==");
        assert_eq!(
            &lines[1..7],
            ["Hello", "Hello World", "Hello", "Hello World", "Hello", "Hello World"]
        );
        assert_eq!(lines[7], "== Builder ==");
        assert!(lines[8].starts_with("City[style=Modern"));
        assert_eq!(lines[9], "== Composite ==");
        assert_eq!(lines[10], "Total price: 60.00");
        assert_eq!(lines.len(), 11);
    }

    #[test]
    fn test_run_builder_uses_resolved_style() {
        let cli = parse(&["builder", "--style", "futuristic"]);
        let settings = cli.resolve(&AppConfig::default()).unwrap();
        let lines = run(cli.command.unwrap(), &settings).unwrap();
        assert!(lines[0].starts_with("City[style=Futuristic, house=House[style=Futuristic]"));
    }
}
