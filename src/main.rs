use clap::Parser;
use greetr::utils::{logger, validation::Validate};
use greetr::{CliConfig, GreetrConfig, LoginFlow, Page, StdoutSink};
use std::sync::Arc;

fn main() {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = run(&cli) {
        tracing::error!("❌ greetr failed: {} (Category: {:?})", e, e.category());
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }
}

fn run(cli: &CliConfig) -> greetr::Result<()> {
    let config = cli.resolve()?;
    config.validate()?;
    tracing::debug!("Resolved config: {:?}", config);

    if config.login_enabled() {
        return run_login(&config);
    }

    let formal = config.formal();
    let mut greeter = config.build_greeter()?.with_sink(StdoutSink);

    match &config.output.render_target {
        Some(target) => {
            let page = Page::new().with_element(target);
            greeter = greeter.with_dom(page.clone());
            greeter.render_to(Some(target), formal)?;
            println!("{}: {}", target, page.html(target).unwrap_or_default());
        }
        None => {
            greeter.greet(formal);
        }
    }

    if config.log_enabled() {
        greeter.log();
    }

    Ok(())
}

/// 以記憶體中的頁面模擬登入流程
fn run_login(config: &GreetrConfig) -> greetr::Result<()> {
    let selectors = config.login_selectors();
    let selected = config
        .login_language_value()
        .or(config.greeter.language.as_deref())
        .unwrap_or_default();

    let page = Page::new()
        .with_element(&selectors.container)
        .with_input(&selectors.language_input, selected)
        .with_element(&selectors.greeting_target);

    let flow = LoginFlow::new(Arc::new(page.clone()), selectors.clone())
        .with_sink(Arc::new(StdoutSink));

    let greeter = flow.login(
        config.greeter.first_name.as_deref().unwrap_or_default(),
        config.greeter.last_name.as_deref().unwrap_or_default(),
    )?;
    tracing::info!("✅ Logged in with language '{}'", greeter.language());

    println!(
        "{}: {}",
        selectors.greeting_target,
        page.html(&selectors.greeting_target).unwrap_or_default()
    );

    Ok(())
}
