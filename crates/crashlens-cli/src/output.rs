use crashlens_engine::AggregateNode;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;

/// Color only when a human is looking at the output.
pub fn stdout_is_tty() -> bool {
    std::io::stdout().is_terminal()
}

/// Map a token family to one of the four dashboard hues.
/// Pad before painting: ANSI escapes would break column alignment.
fn paint(text: String, family: usize, color: bool) -> String {
    if !color {
        return text;
    }
    match family % 4 {
        0 => text.blue().to_string(),
        1 => text.green().to_string(),
        2 => text.yellow().to_string(),
        _ => text.red().to_string(),
    }
}

pub fn print_section(title: &str, nodes: &[AggregateNode], color: bool) {
    println!("\n{title}");
    if nodes.is_empty() {
        println!("  (no data)");
        return;
    }
    for node in nodes {
        let label = format!("{:<28}", node.label);
        println!(
            "  {} {}",
            paint(label, node.color_token.family, color),
            node.count
        );
        for child in &node.children {
            println!("    {:<26} {}", child.label, child.count);
        }
    }
}
