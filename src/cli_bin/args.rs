use clap::Parser;

/// Interactive health information chatbot
///
/// Loads `data/health_info.csv` from the working directory and answers
/// questions typed at the prompt. Type `exit` or `quit` to leave.
#[derive(Parser, Debug)]
#[command(name = "healthbot", version, about, long_about)]
pub struct Cli {}
