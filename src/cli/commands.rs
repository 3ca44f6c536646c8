use std::io;

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use tracing::{debug, instrument};

use crate::application::{default_scenarios, run_scenarios, ApplicationError};
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::config::{global_config_path, BenchConfig, Settings};
use crate::domain::{balanced_postorder, reconstruct, BinaryTree, Label};
use crate::render::{RenderStyle, TreeRender, TREE_STYLE_MAX_HEIGHT};

pub fn execute_command(cli: &Cli, settings: &Settings) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Rebuild {
            inorder,
            postorder,
            render,
        }) => _rebuild(inorder, postorder, render.unwrap_or(settings.render)),
        Some(Commands::Balanced { n }) => _balanced(*n),
        Some(Commands::Bench { sizes }) => {
            let mut bench = settings.bench.clone();
            if let Some(sizes) = sizes {
                bench.sizes = sizes.clone();
            }
            _bench(&bench, settings.render)
        }
        Some(Commands::Config { command }) => match command {
            ConfigCommands::Show => _config_show(settings),
            ConfigCommands::Path => _config_path(cli),
        },
        Some(Commands::Completion { shell }) => _completion(*shell),
        None => Ok(()),
    }
}

#[instrument(skip(inorder, postorder))]
fn _rebuild(inorder: &[Label], postorder: &[Label], style: RenderStyle) -> CliResult<()> {
    debug!(?inorder, ?postorder);
    let tree = reconstruct(inorder, postorder).map_err(ApplicationError::from)?;
    if tree.is_empty() {
        output::info("Empty tree");
    } else {
        warn_on_fallback(&tree, style);
        print!("{}", tree.render(style));
    }
    Ok(())
}

#[instrument]
fn _balanced(n: usize) -> CliResult<()> {
    let labels: Vec<String> = balanced_postorder(n).iter().map(Label::to_string).collect();
    output::info(&labels.join(","));
    Ok(())
}

#[instrument(skip(bench))]
fn _bench(bench: &BenchConfig, style: RenderStyle) -> CliResult<()> {
    let scenarios = default_scenarios(bench);
    if scenarios.is_empty() {
        return Err(CliError::InvalidArgs(
            "no sizes given and edge cases disabled".to_string(),
        ));
    }

    output::header("Reconstruction from inorder + postorder");
    let reports = run_scenarios(&scenarios);
    for report in &reports {
        if report.is_success() {
            output::success(report);
        } else {
            output::failure(report);
        }
    }

    if let Some(n) = bench.show_shape {
        let label = format!("n={n}");
        match reports.iter().find(|r| r.label == label).and_then(|r| r.tree()) {
            Some(tree) => {
                output::header(&format!("Shape ({label}):"));
                warn_on_fallback(tree, style);
                print!("{}", tree.render(style));
            }
            None => output::warning(&format!("no tree for {label}, shape not shown")),
        }
    }
    Ok(())
}

fn warn_on_fallback(tree: &BinaryTree, style: RenderStyle) {
    if tree.style_for(style) != style {
        output::warning(&format!(
            "tree is {} levels deep, rendering sideways (tree style max is {})",
            tree.height(),
            TREE_STYLE_MAX_HEIGHT
        ));
    }
}

fn _config_show(settings: &Settings) -> CliResult<()> {
    print!("{}", settings.to_toml()?);
    Ok(())
}

fn _config_path(cli: &Cli) -> CliResult<()> {
    match global_config_path() {
        Some(path) => output::detail(&format!("global: {}", path.display())),
        None => output::detail("global: <no config directory>"),
    }
    if let Some(local) = &cli.config {
        output::detail(&format!("local:  {}", local.display()));
    }
    Ok(())
}

fn _completion(shell: Shell) -> CliResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}
