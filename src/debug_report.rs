use cudacoach::{Origin, ReplyVerbose, RuleTrace};

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

pub fn print_run(input: &str, reply: &ReplyVerbose, color: bool) {
    let palette = ansi::Palette::new(color);
    println!("\n{}", palette.bold(palette.paint(format!("⚙  Resolving: \"{}\"", input), ansi::CYAN)));

    // Trigger scan summary
    println!("\n{}", palette.paint("━━━ Trigger scan ━━━", ansi::GRAY));
    if reply.details.topics.is_empty() {
        println!("  {}", palette.dim("No topics detected"));
    } else {
        println!("  {} {}", palette.dim("Topics:"), palette.paint(reply.details.topics.join(", "), ansi::BLUE));
    }

    // Rule walk
    println!("\n{}", palette.paint("━━━ Rule scan ━━━", ansi::GRAY));
    for trace in &reply.details.trace {
        println!("  {}", fmt_trace_row(trace, &palette));
    }
    match reply.origin {
        Origin::Intent { .. } => {
            let skipped = reply.details.rules_total - reply.details.rules_considered;
            if skipped > 0 {
                println!("  {}", palette.dim(format!("{} rules not evaluated (first match wins)", skipped)));
            }
        }
        Origin::Fallback { template } => {
            println!("  {}", palette.paint(format!("No rule matched; drew fallback template #{}", template), ansi::YELLOW));
        }
    }

    // Reply
    println!("\n{}", palette.paint("━━━ Reply ━━━", ansi::GRAY));
    let origin_label = match reply.origin {
        Origin::Intent { tag } => palette.paint(format!("[{}]", tag), ansi::GREEN),
        Origin::Fallback { template } => palette.paint(format!("[fallback #{}]", template), ansi::YELLOW),
    };
    println!("  {}", origin_label);
    for line in reply.text.lines() {
        println!("  {}", line);
    }

    // Timing
    println!("\n{}", palette.paint("━━━ Timing ━━━", ansi::GRAY));
    println!(
        "  Total: {}  │  Scan: {}  │  Rules: {}",
        palette.paint(format!("{:?}", reply.details.total), ansi::GREEN),
        palette.paint(format!("{:?}", reply.details.scan), ansi::CYAN),
        palette.dim(format!("{:?}", reply.details.evaluate)),
    );
    println!();
}

fn fmt_trace_row(trace: &RuleTrace, palette: &ansi::Palette) -> String {
    if trace.matched {
        format!(
            "{} {} {} {}",
            palette.paint("✓", ansi::GREEN),
            palette.bold(palette.paint(trace.tag, ansi::GREEN)),
            palette.dim(format!("({})", trace.topic)),
            palette.paint(format!("hit: {}", quote_phrases(&trace.hits)), ansi::CYAN),
        )
    } else if trace.hits.is_empty() {
        palette.dim(format!("✗ {}", trace.tag))
    } else {
        // Rejected, but some phrases were present (an AND gate fell short).
        format!(
            "{} {}",
            palette.dim(format!("✗ {}", trace.tag)),
            palette.paint(format!("partial: {}", quote_phrases(&trace.hits)), ansi::YELLOW),
        )
    }
}

fn quote_phrases(phrases: &[&str]) -> String {
    phrases.iter().map(|p| format!("\"{}\"", p)).collect::<Vec<_>>().join(", ")
}
