// SPDX-License-Identifier: MIT

use clap::{Parser, Subcommand};
use dotenv::dotenv;
use exprgraph_rs::catalog::{find_category, EXAMPLE_CATEGORIES};
use exprgraph_rs::config::VizConfig;
use exprgraph_rs::expr::DocumentCompiler;
use exprgraph_rs::render::{render_graph, OutputFormat};
use exprgraph_rs::server;
use exprgraph_rs::visualize::{visualize_ast, visualize_heuristic, Visualization};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Optional YAML config file
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Visualize raw expression text with pattern matching
    Heuristic {
        /// The expression to visualize
        #[arg(short, long)]
        expr: String,

        /// Output format (defaults to the configured one)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },
    /// Visualize a compiled AST document (JSON or YAML)
    Structured {
        /// Path to the AST document
        #[arg(short, long)]
        ast: String,

        /// Output format (defaults to the configured one)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,

        /// Print the indented text tree instead of a graph
        #[arg(short, long)]
        text: bool,
    },
    /// List example expressions, optionally rendering one category
    Examples {
        /// Category to render as graphs
        #[arg(long)]
        category: Option<String>,
    },
    /// Serve the HTTP API
    Serve {
        /// Port to listen on (defaults to the configured one)
        #[arg(short, long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::init();

    let args = Args::parse();
    let config = VizConfig::load(args.config.as_deref())?;
    log::debug!("Resolved config: {:?}", config);

    match args.command {
        Commands::Heuristic { expr, format } => {
            let viz = visualize_heuristic(&expr);
            print_graph(&viz, format.unwrap_or(config.format), &config)?;
        }
        Commands::Structured { ast, format, text } => {
            let node = DocumentCompiler::new().load(&ast)?;
            log::info!("Loaded AST from {}: {}", ast, node);

            let viz = visualize_ast(&node);
            match (text, viz.text.as_deref()) {
                (true, Some(tree)) => println!("{}", tree),
                _ => print_graph(&viz, format.unwrap_or(config.format), &config)?,
            }
        }
        Commands::Examples { category } => match category {
            Some(name) => {
                let category = find_category(&name)
                    .ok_or_else(|| anyhow::anyhow!("Unknown example category: {}", name))?;
                for expression in category.expressions {
                    let viz = visualize_heuristic(expression);
                    println!("# {}", expression);
                    print_graph(&viz, config.format, &config)?;
                    println!();
                }
            }
            None => {
                for category in EXAMPLE_CATEGORIES {
                    println!("{}:", category.name);
                    for expression in category.expressions {
                        println!("  {}", expression);
                    }
                }
            }
        },
        Commands::Serve { port } => {
            server::serve(port.unwrap_or(config.port), config.mode).await?;
        }
    }

    Ok(())
}

fn print_graph(viz: &Visualization, format: OutputFormat, config: &VizConfig) -> anyhow::Result<()> {
    let output = render_graph(&viz.graph, format, &config.rankdir)?;
    println!("{}", output);
    Ok(())
}
