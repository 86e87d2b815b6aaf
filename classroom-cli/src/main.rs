use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::Path;
use tracing_subscriber::EnvFilter;

// Import from classroom-core
use classroom_core::plan::render_overview;
use classroom_core::{LearningPlan, LessonPlanner, Method, PipelineStages, PlanningConfig, StepProfiler};

// Import CLI utilities
use classroom_cli::session::plain_text;
use classroom_cli::{assemble_document_text, load_sources, Step, StudySession};

#[derive(Parser)]
#[command(name = "classroom")]
#[command(about = "Turn study documents into a lesson plan adapted to a learning method")]
struct Args {
    /// Documents to study (txt, md, or any text file); repeat for several
    #[arg(short, long, num_args = 1.., required_unless_present = "show_methods")]
    input: Vec<String>,

    /// Learning method: visual, auditory, reading, or kinesthetic
    #[arg(short, long)]
    method: Option<String>,

    /// Path to custom config file (YAML format)
    #[arg(short, long)]
    config: Option<String>,

    /// Output file path (if not specified, auto-generated based on input)
    #[arg(short, long)]
    output: Option<String>,

    /// Output format: plan, outline, or html
    #[arg(short = 'f', long, default_value = "plan")]
    output_format: String,

    /// Show the available learning methods and exit
    #[arg(long)]
    show_methods: bool,

    /// Step through the lessons in the terminal after generating the plan
    #[arg(long)]
    interactive: bool,

    /// Enable detailed profiling of all pipeline steps
    #[arg(long)]
    profile: bool,

    /// Dump the intermediate topic list and plan to a directory
    #[arg(long)]
    dump_stages: bool,

    /// Directory for stage dump output (default: test_outputs/stages)
    #[arg(long, default_value = "test_outputs/stages")]
    stages_dir: String,

    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    tracing::info!("🎓 Classroom Lesson Planner");

    if args.show_methods {
        show_methods();
        return Ok(());
    }

    let missing: Vec<&String> = args.input.iter().filter(|p| !Path::new(p).exists()).collect();
    for path in &missing {
        tracing::warn!("⚠️  Input not found at: {path}");
    }
    if missing.len() == args.input.len() {
        tracing::error!("❌ None of the input files exist. Please check the file paths.");
        std::process::exit(1);
    }

    let config = match PlanningConfig::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Invalid config: {e}");
            std::process::exit(1);
        }
    };
    if let Some(config_path) = &args.config {
        tracing::info!("📋 Loaded config from: {config_path}");
    } else {
        tracing::info!("📋 Using default config");
    }
    let planner = LessonPlanner::new(config);

    let existing: Vec<&String> = args.input.iter().filter(|p| Path::new(p).exists()).collect();
    for path in &existing {
        tracing::info!("📄 Reading: {path}");
    }
    let sources = load_sources(&existing);
    let text = assemble_document_text(&sources);

    if text.trim().is_empty() {
        tracing::error!("❌ No readable text in the given files. Please provide txt or md documents.");
        std::process::exit(1);
    }

    let selector = args.method.as_deref();
    if let Some(raw) = selector {
        if raw.parse::<Method>().is_err() {
            tracing::warn!("⚠️  Unknown learning method '{raw}', using reading");
        }
    }

    // Stage dump mode: capture and save all intermediates
    if args.dump_stages {
        tracing::info!("🔬 Pipeline stage dump mode");
        match planner.capture_stages(&text, selector) {
            Ok(stages) => {
                save_stages(&stages, &args.input, &args.stages_dir)?;
                tracing::info!("✅ All stages dumped to: {}", args.stages_dir);
            }
            Err(e) => {
                tracing::error!("❌ Stage dump failed: {e}");
                std::process::exit(1);
            }
        }
        return Ok(());
    }

    let mut profiler = StepProfiler::new(args.profile);
    let plan = match planner.generate_with_profiler(&text, selector, &mut profiler) {
        Ok(plan) => plan,
        Err(e) => {
            tracing::error!("❌ Planning failed: {e}");
            std::process::exit(1);
        }
    };
    let report = profiler.report();
    if !report.is_empty() {
        tracing::info!("📊 Performance Summary:");
        for line in report {
            tracing::info!("   {line}");
        }
    }

    tracing::info!("✅ Successfully generated lesson plan");
    tracing::info!("📊 Plan metrics:");
    tracing::info!("   - Method: {}", plan.method.label());
    tracing::info!("   - Lessons: {}", plan.lesson_count());

    let output_path = args
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&args.input, plan.method, &args.output_format));
    save_plan(&plan, &output_path, &args.output_format)?;

    if args.interactive {
        run_session(plan)?;
    }

    Ok(())
}

/// `{first input stem}_{method}_plan.{json|html}`
fn default_output_path(inputs: &[String], method: Method, format: &str) -> String {
    let input_name = inputs
        .first()
        .and_then(|p| Path::new(p).file_stem())
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    let extension = if format == "html" { "html" } else { "json" };
    format!("{input_name}_{method}_plan.{extension}")
}

fn show_methods() {
    println!("\n📚 Available Learning Methods:");
    for method in Method::ALL {
        let strategy = method.strategy();
        println!("  {:<12} {}", method.as_str(), method.label());
        println!("  {:<12} {}", "", strategy.description);
        println!("  {:<12} {}", "", strategy.approach);
    }

    println!("\n📄 Output Formats:");
    println!("  plan     - Full plan with lessons, wrapped in a versioned envelope (default)");
    println!("  outline  - Method, strategy, and topic list only");
    println!("  html     - Standalone page with every lesson");

    println!("\n📝 Usage Examples:");
    println!("  cargo run -- -i notes.md");
    println!("  cargo run -- -i notes.md -i chapter2.txt -m visual -o plan.json");
    println!("  cargo run -- -i notes.md -m kinesthetic -f html --interactive");
}

fn save_stages(stages: &PipelineStages, inputs: &[String], output_dir: &str) -> Result<()> {
    use std::fs;
    fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create {output_dir}"))?;

    // Stage 1: Topics
    let topics_path = format!("{output_dir}/stage1_topics.json");
    fs::write(&topics_path, serde_json::to_string_pretty(&stages.topics)?)?;
    tracing::info!("  💾 {} ({} topics)", topics_path, stages.topics.len());

    // Stage 2: Plan
    let plan_path = format!("{output_dir}/stage2_plan.json");
    stages.plan.save_with_format(&plan_path, "plan")?;
    tracing::info!("  💾 {} ({} lessons)", plan_path, stages.plan.lesson_count());

    // Summary file: quick reference for validation scripts
    let summary = serde_json::json!({
        "inputs": inputs,
        "captured_at": chrono::Utc::now().to_rfc3339(),
        "method": stages.plan.method,
        "stage_counts": {
            "topics": stages.topics.len(),
            "lessons": stages.plan.lesson_count(),
        }
    });
    let summary_path = format!("{output_dir}/summary.json");
    fs::write(&summary_path, serde_json::to_string_pretty(&summary)?)?;
    tracing::info!("  💾 {summary_path}");

    Ok(())
}

fn save_plan(plan: &LearningPlan, output_path: &str, format: &str) -> Result<()> {
    plan.save_with_format(output_path, format)?;

    match format {
        "outline" => tracing::info!("💾 Outline format results saved to: {output_path}"),
        "html" => tracing::info!("💾 HTML page saved to: {output_path}"),
        // unknown formats already warned inside save_with_format
        _ => tracing::info!("💾 Plan format results saved to: {output_path}"),
    }

    Ok(())
}

/// Terminal walkthrough: Enter/n next, p previous, r restart, q quit
fn run_session(plan: LearningPlan) -> Result<()> {
    let mut session = StudySession::new(plan);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!("\n{}", plain_text(&render_overview(session.plan())));
    show_lesson(&session);

    loop {
        print!(
            "\n[{}: Enter/n] [Previous: p] [Restart: r] [Quit: q] > ",
            session.next_label()
        );
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        match line.trim().to_ascii_lowercase().as_str() {
            "" | "n" => match session.next() {
                Step::Moved(_) => show_lesson(&session),
                Step::Finished => {
                    println!("\n{}", plain_text(&session.completion_message()));
                    break;
                }
            },
            "p" => {
                if session.previous() {
                    show_lesson(&session);
                } else {
                    println!("Already at the first lesson.");
                }
            }
            "r" => {
                session.restart();
                show_lesson(&session);
            }
            "q" => break,
            other => println!("Unknown command '{other}'"),
        }
    }

    Ok(())
}

fn show_lesson(session: &StudySession) {
    println!(
        "\n=== {} ({:.0}%) ===",
        session.heading(),
        session.progress_percent()
    );
    if let Some(lesson) = session.current() {
        println!("{}", plain_text(&lesson.content));
    }
}
