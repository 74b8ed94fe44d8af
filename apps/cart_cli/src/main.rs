use std::{sync::Arc, time::Duration};

use anyhow::{Context, Result};
use cart_client::{AddToCartOutcome, HttpCartTransport};
use cart_ui::{shared_document, with_document, CartController, SubmitResult};
use clap::{Parser, Subcommand, ValueEnum};
use page::StorefrontPage;
use shared::protocol::FormField;
use tracing_subscriber::EnvFilter;

mod config;

use config::{load_settings, parse_page_url};

#[derive(Parser, Debug)]
#[command(name = "cart-cli", about = "Drive the storefront cart controller from a terminal")]
struct Cli {
    /// Storefront page URL that form actions resolve against.
    #[arg(long)]
    server_url: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Submit the add-to-cart form and print the resulting page.
    Add {
        #[arg(long)]
        action: String,
        /// Form field as name=value; repeatable.
        #[arg(long = "field", value_parser = parse_field)]
        fields: Vec<FormField>,
        /// Wait for the notification and mini cart timers, then print the page again.
        #[arg(long)]
        linger: bool,
    },
    /// Replay clicks against the cart dropdown and print its state after each.
    Dropdown {
        #[arg(long, value_delimiter = ',', default_value = "toggle,outside")]
        clicks: Vec<ClickTarget>,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ClickTarget {
    Toggle,
    Panel,
    Outside,
}

fn parse_field(raw: &str) -> Result<FormField, String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected name=value, got '{raw}'"))?;
    if name.is_empty() {
        return Err(format!("field name is empty in '{raw}'"));
    }
    Ok(FormField::new(name, value))
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let mut settings = load_settings();
    if let Some(server_url) = cli.server_url {
        settings.server_url = server_url;
    }
    let page_url = parse_page_url(&settings.server_url)?;

    let mut storefront = StorefrontPage::new("");
    storefront.cart_url = settings.ui.cart_url.clone();
    let transport = Arc::new(HttpCartTransport::new(page_url));
    tracing::info!(page_url = %transport.base_url(), "storefront page ready");

    match cli.command {
        Command::Add {
            action,
            fields,
            linger,
        } => {
            storefront.form_action = action;
            storefront.fields = fields;
            let document = shared_document(storefront.build());
            let controller = CartController::install(document.clone(), transport, settings.ui);

            match controller.submit_add_to_cart().await {
                SubmitResult::Completed(outcome) => {
                    println!("{}", outcome_line(&outcome, &controller.settings().currency_symbol))
                }
                SubmitResult::NotRegistered | SubmitResult::AlreadyInFlight => {
                    anyhow::bail!("add-to-cart form is not available on the page")
                }
            }
            println!("{}", with_document(&document, |doc| doc.render_html(doc.body())));

            if linger {
                let ui = controller.settings();
                let wait = ui.notification_timeout.max(ui.mini_cart_timeout);
                tokio::time::sleep(wait + Duration::from_millis(50)).await;
                println!("{}", with_document(&document, |doc| doc.render_html(doc.body())));
            }
        }
        Command::Dropdown { clicks } => {
            let document = shared_document(storefront.build());
            let controller = CartController::install(document.clone(), transport, settings.ui);
            let dropdown = controller
                .registry()
                .dropdown
                .context("cart dropdown is not available on the page")?;

            for click in clicks {
                let target = with_document(&document, |doc| match click {
                    ClickTarget::Toggle => dropdown.toggle,
                    ClickTarget::Panel => dropdown.panel,
                    ClickTarget::Outside => doc.body(),
                });
                controller.click(target);
                let state = with_document(&document, |doc| dropdown.state(doc));
                println!("{click:?} -> {state:?}");
            }
        }
    }

    Ok(())
}

fn outcome_line(outcome: &AddToCartOutcome, currency_symbol: &str) -> String {
    let detail = match outcome {
        AddToCartOutcome::Added { message, summary } => format!(
            "{} ({})",
            message.as_deref().unwrap_or("-"),
            summary.line(currency_symbol)
        ),
        AddToCartOutcome::Rejected { error } => error.as_deref().unwrap_or("-").to_string(),
        AddToCartOutcome::Failed(err) => err.to_string(),
    };
    format!("{}: {detail}", outcome.label())
}
