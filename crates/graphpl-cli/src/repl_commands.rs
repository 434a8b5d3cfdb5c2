//! REPL command handlers.
//!
//! Each command is implemented as a separate function. Handlers print their
//! own output and report refusals as messages, not errors.

use colored::Colorize;
use graphpl_core::{AddNode, Error, FeatureSet, GraphEngine, Strategy};
use serde_json::json;

use crate::repl::{OutputFormat, ReplConfig};

const FEATURE_NOT_ENABLED: &str = "Feature not enabled!";
const NODE_EXISTS: &str = "Node already exists!";

/// Result of a REPL command execution.
pub enum CommandResult {
    Continue,
    Quit,
    Error(String),
}

/// Handle one command line.
pub fn handle_command(engine: &mut GraphEngine, line: &str, config: &mut ReplConfig) -> CommandResult {
    let parts: Vec<&str> = line.split_whitespace().collect();

    match parts.as_slice() {
        [] => CommandResult::Continue,
        ["quit" | "exit" | "q"] => CommandResult::Quit,
        ["help" | "h"] => {
            print_help(engine.features());
            CommandResult::Continue
        }
        ["cycle", "checking"] => cmd_cycle(engine, config),
        ["connected", "components", rest @ ..] => cmd_components(engine, config, rest),
        ["prim"] => cmd_prim(engine, config),
        ["add", "node", name] => cmd_add_node(engine, name),
        ["add", "edge", start, end, rest @ ..] => cmd_add_edge(engine, start, end, rest),
        ["update", "node", old, new] => cmd_rename_node(engine, old, new),
        ["update", "edge", start, end, weight] => cmd_update_edge(engine, start, end, weight),
        ["print", "graph"] => cmd_print_graph(engine, config),
        ["format", format] => cmd_format(config, format),
        _ => CommandResult::Error(format!("{}: command not recognized.", line.trim())),
    }
}

/// Maps engine refusals to the user-facing message, everything else to an error.
fn report(err: &Error) -> CommandResult {
    match err {
        Error::FeatureDisabled(feature) => {
            tracing::debug!(%feature, "Command refused");
            println!("{FEATURE_NOT_ENABLED}");
            CommandResult::Continue
        }
        Error::NodeExists(_) => {
            println!("{NODE_EXISTS}");
            CommandResult::Continue
        }
        other => CommandResult::Error(other.to_string()),
    }
}

fn name_of(engine: &GraphEngine, idx: usize) -> &str {
    engine.graph().node_name(idx).unwrap_or("?")
}

fn print_json(value: &serde_json::Value) -> CommandResult {
    match serde_json::to_string_pretty(value) {
        Ok(text) => {
            println!("{text}");
            CommandResult::Continue
        }
        Err(e) => CommandResult::Error(format!("JSON encoding failed: {e}")),
    }
}

fn cmd_cycle(engine: &GraphEngine, config: &ReplConfig) -> CommandResult {
    let found = match engine.detect_cycle() {
        Ok(found) => found,
        Err(e) => return report(&e),
    };
    match config.format {
        OutputFormat::Json => print_json(&json!({ "has_cycle": found })),
        OutputFormat::Text => {
            if found {
                println!("Graph contains cycle!");
            } else {
                println!("Graph doesn't contain cycle");
            }
            CommandResult::Continue
        }
    }
}

fn cmd_components(engine: &GraphEngine, config: &ReplConfig, rest: &[&str]) -> CommandResult {
    let result = match rest {
        [] => engine.connected_components(),
        ["bfs"] => engine.connected_components_with(Strategy::Bfs),
        ["dfs"] => engine.connected_components_with(Strategy::Dfs),
        _ => return CommandResult::Error("Use: connected components [bfs|dfs]".to_string()),
    };
    let components = match result {
        Ok(components) => components,
        Err(e) => return report(&e),
    };

    match config.format {
        OutputFormat::Json => {
            let value: Vec<_> = components
                .iter()
                .map(|c| {
                    let members: Vec<&str> =
                        c.members.iter().map(|&m| name_of(engine, m)).collect();
                    json!({ "number": c.number, "members": members })
                })
                .collect();
            print_json(&json!(value))
        }
        OutputFormat::Text => {
            for component in &components {
                let members: Vec<&str> = component
                    .members
                    .iter()
                    .map(|&m| name_of(engine, m))
                    .collect();
                println!("Component {}: {}", component.number, members.join(" "));
            }
            CommandResult::Continue
        }
    }
}

fn cmd_prim(engine: &GraphEngine, config: &ReplConfig) -> CommandResult {
    let mst = match engine.minimum_spanning_tree() {
        Ok(mst) => mst,
        Err(e) => return report(&e),
    };

    match config.format {
        OutputFormat::Json => {
            let edges: Vec<_> = mst
                .edges
                .iter()
                .map(|e| {
                    json!({
                        "start": name_of(engine, e.start()),
                        "end": name_of(engine, e.end()),
                        "weight": e.weight(),
                    })
                })
                .collect();
            print_json(&json!({ "edges": edges, "total_weight": mst.total_weight }))
        }
        OutputFormat::Text => {
            println!("MST edges:");
            for edge in &mst.edges {
                println!(
                    "{}-{}-{}",
                    name_of(engine, edge.start()),
                    edge.weight(),
                    name_of(engine, edge.end())
                );
            }
            println!("Total MST weight: {}", mst.total_weight);
            CommandResult::Continue
        }
    }
}

fn cmd_add_node(engine: &mut GraphEngine, name: &str) -> CommandResult {
    match engine.add_node(name) {
        AddNode::Added(idx) => println!("Node {} added at index {idx}", name.green()),
        AddNode::AlreadyExists(_) => println!("{NODE_EXISTS}"),
    }
    CommandResult::Continue
}

fn cmd_add_edge(engine: &mut GraphEngine, start: &str, end: &str, rest: &[&str]) -> CommandResult {
    let weight = match rest {
        [] => None,
        [raw] => match raw.parse::<i64>() {
            Ok(w) => Some(w),
            Err(_) => return CommandResult::Error(format!("Invalid weight: {raw}")),
        },
        _ => return CommandResult::Error("Use: add edge <start> <end> [weight]".to_string()),
    };

    match engine.add_edge(start, end, weight) {
        Ok(()) => {
            println!("Edge {start}-{end} added");
            CommandResult::Continue
        }
        Err(Error::MissingWeight) => {
            CommandResult::Error("Use: add edge <start> <end> <weight>".to_string())
        }
        Err(Error::UnexpectedWeight) => {
            CommandResult::Error("Use: add edge <start> <end> (graph is unweighted)".to_string())
        }
        Err(e) => report(&e),
    }
}

fn cmd_rename_node(engine: &mut GraphEngine, old: &str, new: &str) -> CommandResult {
    match engine.rename_node(old, new) {
        Ok(true) => {
            println!("Node {old} renamed to {}", new.green());
            CommandResult::Continue
        }
        Ok(false) => {
            println!("Node {old} not found");
            CommandResult::Continue
        }
        Err(e) => report(&e),
    }
}

fn cmd_update_edge(engine: &mut GraphEngine, start: &str, end: &str, weight: &str) -> CommandResult {
    let Ok(weight) = weight.parse::<i64>() else {
        return CommandResult::Error(format!("Invalid weight: {weight}"));
    };
    match engine.update_edge_weight(start, end, weight) {
        Ok(count) => {
            println!("Updated {count} edge(s)");
            CommandResult::Continue
        }
        Err(e) => report(&e),
    }
}

fn cmd_print_graph(engine: &GraphEngine, config: &ReplConfig) -> CommandResult {
    let graph = engine.graph();

    if config.format == OutputFormat::Json {
        let nodes: Vec<&str> = graph.nodes().iter().map(|n| n.name()).collect();
        let value = if graph.is_weighted() {
            let edges: Vec<_> = graph
                .edges()
                .iter()
                .map(|e| {
                    json!({
                        "start": name_of(engine, e.start()),
                        "end": name_of(engine, e.end()),
                        "weight": e.weight(),
                    })
                })
                .collect();
            json!({ "nodes": nodes, "edges": edges })
        } else {
            let neighbors: serde_json::Map<_, _> = graph
                .nodes()
                .iter()
                .map(|n| {
                    let names: Vec<&str> =
                        n.neighbors().iter().map(|&m| name_of(engine, m)).collect();
                    (n.name().to_string(), json!(names))
                })
                .collect();
            json!({ "nodes": nodes, "neighbors": neighbors })
        };
        return print_json(&value);
    }

    for (idx, node) in graph.nodes().iter().enumerate() {
        if graph.is_weighted() {
            println!("Edges from node: {}", node.name().bold());
            for edge in graph.edges_of(idx).iter().filter_map(|&id| graph.edge(id)) {
                println!(
                    "{}-{}-{}",
                    name_of(engine, edge.start()),
                    edge.weight(),
                    name_of(engine, edge.end())
                );
            }
        } else {
            let names: Vec<&str> = node
                .neighbors()
                .iter()
                .map(|&m| name_of(engine, m))
                .collect();
            println!("{} neighbors: {}", node.name(), names.join(" "));
        }
    }
    CommandResult::Continue
}

fn cmd_format(config: &mut ReplConfig, format: &str) -> CommandResult {
    match format.to_lowercase().as_str() {
        "text" => config.format = OutputFormat::Text,
        "json" => config.format = OutputFormat::Json,
        _ => return CommandResult::Error("Use: format text|json".to_string()),
    }
    println!("Format: {format}");
    CommandResult::Continue
}

/// Prints the command menu for this build of the product line.
pub fn print_help(features: FeatureSet) {
    println!("\n{}", "graphpl Commands".bold().underline());
    println!();
    if features.cycle_detection {
        println!("  {}                  Check the graph for a cycle", "cycle checking".yellow());
    }
    if features.connected_components {
        println!(
            "  {}  List connected components",
            "connected components [bfs|dfs]".yellow()
        );
    }
    if features.prim {
        println!("  {}                            Minimum spanning tree", "prim".yellow());
    }
    println!("  {}                 Add a node", "add node <name>".yellow());
    if features.weighted {
        println!("  {}   Add an edge", "add edge <start> <end> <w>".yellow());
        println!("  {} Change an edge weight", "update edge <start> <end> <w>".yellow());
    } else {
        println!("  {}       Add an edge", "add edge <start> <end>".yellow());
    }
    println!("  {}         Rename a node", "update node <old> <new>".yellow());
    println!("  {}                     Show nodes and edges", "print graph".yellow());
    println!("  {}               Set output format", "format text|json".yellow());
    println!("  {}                            Show this help", "help".yellow());
    println!("  {}                            Exit", "quit".yellow());
    println!();
}
