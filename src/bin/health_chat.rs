use anyhow::Result;
use pawmi_care::domain::services::health_chat::ChatSession;
use pawmi_care::utils::logger;
use std::io::{self, BufRead, Write};

/// Interactive pet-health assistant on stdin. `/nuevo` starts over, `/salir` exits.
fn main() -> Result<()> {
    logger::init_cli_logger(false);

    let mut session = ChatSession::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!("PetCare Assistant");
    println!("🐾 {}", session.messages()[0].text);

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        match line.trim() {
            "/salir" => break,
            "/nuevo" => {
                session.clear();
                tracing::debug!("Chat cleared");
                println!("🐾 {}", session.messages()[0].text);
            }
            input => {
                if let Some(reply) = session.send(input) {
                    println!("🐾 {}", reply.text);
                }
            }
        }
    }

    Ok(())
}
