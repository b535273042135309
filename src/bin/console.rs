//! Terminal front end for the translator relay.
//!
//! Plain lines are translated as if submitted with Ctrl+Enter. Commands:
//! `:swap`, `:clear`, `:source <code>`, `:target <code>`, `:languages`, `:quit`.

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use translator_relay::frontend::{HttpRelayClient, KeyPress, RelayApi, TranslatorController};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "translator_relay=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let relay_url =
        std::env::var("RELAY_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());
    let mut controller = TranslatorController::new(HttpRelayClient::new(relay_url));
    controller.load_languages().await;
    print_selection(&controller);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim_end();
        match line.split_once(' ').unwrap_or((line, "")) {
            (":quit", _) => break,
            (":swap", _) => {
                controller.swap();
                print_selection(&controller);
                println!("{}", controller.result());
            }
            (":clear", _) => controller.clear(),
            (":source", code) => {
                if !controller.select_source(code.trim()) {
                    println!("unknown source language: {}", code.trim());
                }
                print_selection(&controller);
            }
            (":target", code) => {
                if !controller.select_target(code.trim()) {
                    println!("unknown target language: {}", code.trim());
                }
                print_selection(&controller);
            }
            (":languages", _) => {
                for option in controller.target_picker().options() {
                    println!("  {}", option.label);
                }
            }
            _ => {
                controller.set_input(line);
                controller.handle_key(KeyPress::ctrl_enter()).await;
                println!("{}", controller.result());
            }
        }
    }

    Ok(())
}

fn print_selection<R: RelayApi>(controller: &TranslatorController<R>) {
    println!(
        "[{} -> {}]",
        controller.source_picker().value().unwrap_or("-"),
        controller.target_picker().value().unwrap_or("-")
    );
}
