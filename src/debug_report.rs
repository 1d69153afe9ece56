use verbalize::{NodeSummary, PronounceVerbose, RoundSummary};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", BOLD, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", DIM, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }
    }
}

pub fn print_run(input: &str, res: &PronounceVerbose, color: bool) {
    let palette = ansi::Palette::new(color);
    let details = &res.details;
    println!("\n{}", palette.bold(palette.paint(format!("⚙  Pronouncing: \"{}\"", input.trim()), ansi::CYAN)));
    println!("  {} {}", palette.dim("required:"), palette.paint(details.required.join(", "), ansi::BLUE));

    println!("\n{}", palette.paint("━━━ Rounds ━━━", ansi::GRAY));
    for round in &details.rounds {
        print_round(round, &palette);
    }

    println!("\n{}", palette.paint("━━━ Nodes ━━━", ansi::GRAY));
    if details.nodes.is_empty() {
        println!("{}", palette.dim("  No nodes produced"));
    }
    for (idx, node) in details.nodes.iter().enumerate() {
        println!("  {} {}", palette.paint(format!("[{}]", idx), ansi::GRAY), fmt_node(node, &palette));
    }

    println!("\n{}", palette.paint("━━━ Output ━━━", ansi::GRAY));
    println!("  {}", palette.bold(palette.paint(&res.output, ansi::GREEN)));

    println!("\n{}", palette.paint("━━━ Timing ━━━", ansi::GRAY));
    println!(
        "  Total: {}  │  Scheduler: {}  │  Rounds: {}",
        palette.paint(format!("{:?}", res.elapsed), ansi::GREEN),
        palette.paint(format!("{:?}", details.total), ansi::CYAN),
        palette.dim(details.rounds.len().to_string()),
    );
    println!();
}

fn print_round(round: &RoundSummary, palette: &ansi::Palette) {
    let changed = round.nodes_in != round.nodes_out;
    println!(
        "  {} {} {} {}",
        palette.paint(format!("Round {}:", round.round), ansi::BLUE),
        palette.paint(round.kinds.join(", "), ansi::CYAN),
        palette.dim("│"),
        if changed {
            palette.paint(format!("{} → {} nodes", round.nodes_in, round.nodes_out), ansi::GREEN)
        } else {
            palette.dim(format!("{} nodes", round.nodes_out))
        }
    );
    println!("    {}", palette.dim(format!("{:?}", round.duration)));
}

fn fmt_node(node: &NodeSummary, palette: &ansi::Palette) -> String {
    let spoken = match &node.spoken {
        Some(spoken) => palette.bold(spoken),
        None => palette.paint("(unpronounceable)", ansi::YELLOW),
    };
    format!(
        "{} {} {} {}",
        palette.paint(&node.kind, ansi::BLUE),
        palette.dim(&node.written),
        palette.dim("→"),
        spoken
    )
}
