use clap::Parser;
use four_pillars::utils::{logger, validation::Validate};
use four_pillars::{ChartEngine, ChartReport, CliConfig, FixedCalendar, LuckDirection, RelationFact};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting four-pillars CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let chart_file = config.resolve()?;
    if let Err(e) = chart_file.validate() {
        tracing::error!("Chart validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let birth = chart_file.birth_datetime()?;
    let gender = chart_file.gender()?;

    // 建立曆法適配器與分析引擎
    let calendar = FixedCalendar::new(chart_file.birth_context()?);
    let engine = ChartEngine::new(calendar);

    let report = engine.run(birth, gender).await?;

    match config.format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&report)?),
        _ => print_text_report(&report),
    }

    Ok(())
}

fn print_text_report(report: &ChartReport) {
    println!("八字: {}", report.chart);

    println!("\n地支藏干:");
    for fact in &report.relations {
        if matches!(fact, RelationFact::HiddenStems { .. }) {
            println!("{}", fact);
        }
    }

    println!("\n天干地支關係:");
    let combinations: Vec<_> = report
        .relations
        .iter()
        .filter(|f| !matches!(f, RelationFact::HiddenStems { .. }))
        .collect();
    if combinations.is_empty() {
        println!("無");
    }
    for fact in combinations {
        println!("{}", fact);
    }

    println!("\n刑沖害:");
    if report.conflicts.is_empty() {
        println!("無");
    }
    for fact in &report.conflicts {
        println!("{}", fact);
    }

    println!("\n文昌貴人:");
    println!("{}", report.literary_star);
    if report.literary_star.found_positions.is_empty() {
        println!("在八字中未出現文昌貴人");
    } else {
        let listed: Vec<String> = report
            .literary_star
            .found_positions
            .iter()
            .map(|p| format!("{}支", p))
            .collect();
        println!("在八字中出現在: {}", listed.join("、"));
    }

    let origin = &report.luck_origin;
    let direction = match origin.direction {
        LuckDirection::Forward => "順行",
        LuckDirection::Backward => "逆行",
    };
    println!(
        "\n起運: {}歲{}個月{}天起 (約 {}), 大運{}",
        origin.start_years,
        origin.start_months,
        origin.start_days,
        origin.start_date.format("%Y-%m-%d"),
        direction
    );

    println!("\n大運:");
    for pillar in &report.luck_pillars {
        println!("{}", pillar);
    }
}
