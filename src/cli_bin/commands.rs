//! Startup and interactive session for the chatbot CLI
//!
//! The session is generic over its input and output so the whole
//! conversation can be driven from tests.

use crate::cli_bin::args::Cli;
use anyhow::anyhow;
use healthbot::{load_knowledge_base, KnowledgeBase, DEFAULT_KB_PATH};
use log::{debug, info, warn};
use std::io::{self, BufRead, Write};
use std::path::Path;

const WELCOME: &str = "Welcome to the Health Information Chatbot! Type 'exit' or 'quit' to leave.";
const EXIT_WORDS: [&str; 2] = ["exit", "quit"];

/// Execute the chatbot: load the knowledge base, then answer until told to stop
pub fn run(cli: Cli) -> anyhow::Result<()> {
    debug!("Starting with args: {:?}", cli);

    let stdout = io::stdout();
    let kb = startup(Path::new(DEFAULT_KB_PATH), &mut stdout.lock())?;

    let stdin = io::stdin();
    let end = Session::new(&kb).run(stdin.lock(), stdout.lock())?;
    info!("Session finished: {:?}", end);
    Ok(())
}

/// Load the knowledge base and print the startup banner
///
/// Only a missing resource is fatal. Any other load failure is reported and
/// replaced by an empty knowledge base.
pub fn startup<W: Write>(path: &Path, out: &mut W) -> anyhow::Result<KnowledgeBase> {
    let report = match load_knowledge_base(path) {
        Ok(report) => report,
        Err(err) => {
            debug!("Knowledge base load failed: {}", err);
            writeln!(
                out,
                "Error: Knowledge base file not found at '{}'. Chatbot cannot operate.",
                path.display()
            )?;
            return Err(anyhow!("Exiting application."));
        }
    };

    if let Some(err) = &report.degraded {
        warn!("Continuing with an empty knowledge base: {}", err);
        writeln!(
            out,
            "Warning: Knowledge base at '{}' is empty or could not be loaded properly.",
            path.display()
        )?;
    }

    writeln!(out, "{}", WELCOME)?;

    let kb = report.into_knowledge_base();
    if kb.is_empty() {
        writeln!(out, "Note: Operating with an empty or problematic knowledge base.")?;
    }
    Ok(kb)
}

/// How an interactive session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user typed `exit` or `quit`
    Farewell,
    /// Input was closed
    EndOfInput,
}

/// Read-answer loop over a loaded knowledge base
pub struct Session<'a> {
    kb: &'a KnowledgeBase,
}

impl<'a> Session<'a> {
    pub fn new(kb: &'a KnowledgeBase) -> Self {
        Self { kb }
    }

    pub fn run<R: BufRead, W: Write>(&self, mut input: R, mut out: W) -> io::Result<SessionEnd> {
        let mut line = String::new();
        loop {
            write!(out, "You: ")?;
            out.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                writeln!(out)?;
                return Ok(SessionEnd::EndOfInput);
            }

            let user_input = line.trim();
            if EXIT_WORDS.contains(&user_input.to_lowercase().as_str()) {
                writeln!(out, "Chatbot: Goodbye!")?;
                return Ok(SessionEnd::Farewell);
            }

            if user_input.is_empty() {
                writeln!(out, "Chatbot: Please say something.")?;
                continue;
            }

            debug!("Answering {:?}", user_input);
            writeln!(out, "Chatbot: {}", self.kb.respond(user_input))?;
        }
    }
}
