mod cli;

use clap::Parser;
use cli::{Cli, Commands};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use kisan_advisor::app::App;
use kisan_advisor::config::Config;
use kisan_advisor::error::{AdvisorError, Result};
use kisan_advisor::logic::{AdvisoryEngine, AdvisoryService};
use kisan_advisor::models::{AiResponse, ForecastDay};
use kisan_advisor::report::{
    AdvisoryView, AiResponseView, ForecastTable, ReportView, RuleList, RuleOutcomeView,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Initialize logging; RUST_LOG wins over -v
    let default_level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    if let Some(Commands::Init) = cli.command {
        Config::setup_interactive()?;
        return Ok(());
    }

    let config = load_config(&cli)?;

    match cli.command {
        None => run_tui(config).await,
        Some(Commands::Advise { json }) => {
            let mut service = AdvisoryService::new(&config);
            let report = service.refresh().await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", ReportView(&report));
            }
            Ok(())
        }
        Some(Commands::Forecast { json }) => {
            let mut service = AdvisoryService::new(&config);
            let forecast = service.fetch_forecast().await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&forecast)?);
            } else {
                println!("{}", service.location().label());
                print!("{}", ForecastTable(&forecast));
            }
            Ok(())
        }
        Some(Commands::Evaluate {
            temp,
            humidity,
            wind,
            rain,
            next_rain,
            condition,
            rule,
            json,
        }) => {
            let today = chrono::Local::now().date_naive();
            let current = ForecastDay::new(today, temp, humidity, wind, rain, condition);
            let next = ForecastDay {
                date: today.succ_opt().unwrap_or(today),
                rainfall_mm: next_rain,
                ..current.clone()
            };
            current.validate()?;
            next.validate()?;

            let engine = AdvisoryEngine::new();
            match rule {
                Some(rule_id) => {
                    let outcome = engine
                        .evaluate_rule(&rule_id, &current, &next)
                        .ok_or(AdvisorError::UnknownRule(rule_id))?;
                    if json {
                        println!("{}", serde_json::to_string_pretty(&outcome)?);
                    } else {
                        print!("{}", RuleOutcomeView(&outcome));
                    }
                }
                None => {
                    let advisory = engine.evaluate(&current, &next);
                    if json {
                        println!("{}", serde_json::to_string_pretty(&advisory)?);
                    } else {
                        print!("{}", AdvisoryView(&advisory));
                    }
                }
            }
            Ok(())
        }
        Some(Commands::Rules) => {
            print!("{}", RuleList(&AdvisoryEngine::new().list_rules()));
            Ok(())
        }
        Some(Commands::Inspect { kind, file }) => {
            let raw = std::fs::read_to_string(&file)?;
            let response = AiResponse::parse(kind, &raw)?;
            print!("{}", AiResponseView(&response));
            Ok(())
        }
        Some(Commands::Init) => Ok(()),
    }
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = if cli.config.is_some() || Config::exists(None) {
        Config::load(cli.config.clone())?
    } else {
        tracing::warn!("No config file found - using default location. Run `kisan init` to set one.");
        Config::default()
    };

    if let Some(seed) = cli.seed {
        config.forecast.seed = Some(seed);
    }

    Ok(config)
}

async fn run_tui(config: Config) -> Result<()> {
    let mut app = App::new();
    let mut service = AdvisoryService::new(&config);

    // First fetch goes through the loop so the placeholder is drawn meanwhile
    app.request_refresh();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app, &mut service).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn draw(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &App) -> Result<()> {
    terminal.draw(|f| {
        let area = f.area();
        f.render_widget(app.screen(), area);
    })?;
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    service: &mut AdvisoryService,
) -> Result<()> {
    loop {
        if app.begin_refresh() {
            draw(terminal, app)?;
            let result = service.refresh().await;
            app.finish_refresh(result);
        }

        draw(terminal, app)?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => app.quit(),
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.quit();
                    }
                    KeyCode::Char('r') => app.request_refresh(),
                    KeyCode::Left => app.prev_day(),
                    KeyCode::Right => app.next_day(),
                    _ => {}
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
