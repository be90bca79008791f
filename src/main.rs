use clap::{
    crate_authors, crate_description, crate_name, crate_version, Arg, ArgAction, Command,
};
use create_hgraph_app::{api, DEFAULT_PROJECT_NAME, DEFAULT_TEMPLATE_SOURCE};

// The CLI layer should only parse inputs and forward them to library code.
fn main() -> miette::Result<()> {
    let matches = Command::new(crate_name!())
        .about(crate_description!())
        .author(crate_authors!())
        .version(crate_version!())
        .arg(
            Arg::new("name")
                .help("Name of the project directory to create")
                .default_value(DEFAULT_PROJECT_NAME),
        )
        .arg(
            Arg::new("template")
                .short('t')
                .long("template")
                .help("Template source: a local directory or a git reference (gh:account/repo)")
                .default_value(DEFAULT_TEMPLATE_SOURCE),
        )
        .arg(
            Arg::new("dry-run")
                .long("dry-run")
                .help("Preview the files that would be created without writing anything")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("skip-install")
                .long("skip-install")
                .help("Skip installing npm dependencies")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let mut logger = env_logger::Builder::from_default_env();
    if matches.get_flag("verbose") {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    let opts = api::CreateOptions {
        name: matches
            .get_one::<String>("name")
            .expect("name has a default")
            .clone(),
        template: matches
            .get_one::<String>("template")
            .expect("template has a default")
            .clone(),
        dry_run: matches.get_flag("dry-run"),
        skip_install: matches.get_flag("skip-install"),
    };

    api::create_app(&opts)?;

    Ok(())
}
