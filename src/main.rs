//! create-component's entry point.
//! Parses arguments, collects answers and hands them to the processor.

use create_component::{
    answers::collect_answers,
    cli::{get_args, Args},
    config::get_config,
    constants::{DEFAULT_TARGET_DIR, USER_AGENT_ENV},
    error::{default_error_handler, Result},
    loader::load_template,
    package_manager::{next_steps, pkg_from_user_agent},
    processor::Processor,
    prompt::{DefaultsPrompter, DialoguerPrompter, Prompter},
    renderer::MiniJinjaRenderer,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    // Logger configuration
    env_logger::Builder::new()
        .filter_level(if args.verbose {
            log::LevelFilter::Trace
        } else {
            log::LevelFilter::Warn
        })
        .init();

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Resolves the template directory and its scaffold configuration
/// 2. Collects answers interactively, or from defaults with `--yes`
/// 3. Generates the project
/// 4. Prints the commands to run next
fn run(args: Args) -> Result<()> {
    let engine = MiniJinjaRenderer::new();
    let prompt: Box<dyn Prompter> = if args.yes {
        Box::new(DefaultsPrompter::new())
    } else {
        Box::new(DialoguerPrompter::new())
    };

    let template_root = load_template(args.template.as_deref())?;
    let config = get_config(&template_root)?;

    let cwd = std::env::current_dir()?;
    let default_target = args.target_dir.as_deref().unwrap_or(DEFAULT_TARGET_DIR);
    let answers = collect_answers(&*prompt, &cwd, default_target, &config, args.force)?;

    let root = cwd.join(&answers.target_dir);
    let processor = Processor::new(&engine, &template_root, &config);
    let summary = processor.process(&answers, &root)?;

    if summary.git_initialized == Some(false) {
        eprintln!("Git repository could not be initialised, run `git init` manually.");
    }

    let user_agent = std::env::var(USER_AGENT_ENV).ok();
    let manager = pkg_from_user_agent(user_agent.as_deref());

    println!("\nDone. Now run:\n");
    for step in next_steps(&cwd, &summary.root, manager.as_ref()) {
        println!("  {step}");
    }
    println!();
    Ok(())
}
