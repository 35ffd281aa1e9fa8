use clap::Parser;
use miette::{IntoDiagnostic, Result, miette};
use order_capture::application::order_form::OrderForm;
use order_capture::config::OrderCaptureConfig;
use order_capture::domain::content::Language;
use order_capture::domain::form::{ContactForm, FormField};
use order_capture::domain::lifecycle::{LifecyclePhase, OrderView};
use order_capture::domain::notification::NotificationState;
use order_capture::domain::payload::compose;
use order_capture::domain::ports::{
    CartProviderBox, ContentProviderBox, OrderListenerBox, SubmissionGatewayBox,
};
use order_capture::infrastructure::http_gateway::HttpSubmissionGateway;
use order_capture::infrastructure::in_memory::InMemoryCart;
use order_capture::infrastructure::static_content::StaticContent;
use order_capture::interfaces::csv::cart_reader::CartReader;
use serde::Serialize;
use std::fs::File;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Cart CSV file with `name,quantity,price` rows
    #[arg(long)]
    cart: PathBuf,

    /// Buyer name
    #[arg(long)]
    name: Option<String>,

    /// Buyer email
    #[arg(long)]
    email: Option<String>,

    /// Buyer phone number
    #[arg(long)]
    phone: Option<String>,

    /// Delivery address
    #[arg(long)]
    address: Option<String>,

    /// Language for messages (vn or en). Overrides the config file.
    #[arg(long)]
    language: Option<Language>,

    /// TOML configuration file (endpoint URL, field entry ids, language)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the composed order instead of sending it
    #[arg(long)]
    dry_run: bool,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,
}

impl Cli {
    fn contact_fields(&self) -> [(FormField, &str); 4] {
        [
            (FormField::Name, self.name.as_deref().unwrap_or_default()),
            (FormField::Email, self.email.as_deref().unwrap_or_default()),
            (FormField::Phone, self.phone.as_deref().unwrap_or_default()),
            (FormField::Address, self.address.as_deref().unwrap_or_default()),
        ]
    }
}

#[derive(Serialize)]
struct OrderReport<'a> {
    phase: LifecyclePhase,
    view: OrderView,
    notification: &'a NotificationState,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let mut config = match &cli.config {
        Some(path) => OrderCaptureConfig::from_file(path).await.into_diagnostic()?,
        None => OrderCaptureConfig::default(),
    };
    if let Some(language) = cli.language {
        config.language = language;
    }

    let file = File::open(&cli.cart).into_diagnostic()?;
    let snapshot = CartReader::new(file).snapshot().into_diagnostic()?;
    tracing::info!(items = snapshot.items.len(), "cart loaded");

    if cli.dry_run {
        let mut form = ContactForm::new();
        for (field, value) in cli.contact_fields() {
            form.set(field, value);
        }
        let payload = compose(&form, &snapshot, &config.fields);
        if cli.json {
            println!("{}", serde_json::to_string_pretty(&payload).into_diagnostic()?);
        } else {
            for (entry, value) in payload.form_pairs() {
                println!("{entry}: {value}");
            }
        }
        return Ok(());
    }

    let cart = InMemoryCart::new(snapshot);
    let cart_handle = cart.clone();
    let listener: OrderListenerBox = Box::new(move || cart_handle.clear());
    let endpoint = config.endpoint_url().into_diagnostic()?;
    let gateway: SubmissionGatewayBox =
        Box::new(HttpSubmissionGateway::new(endpoint).into_diagnostic()?);
    let cart_provider: CartProviderBox = Box::new(cart);
    let content: ContentProviderBox = Box::new(StaticContent::new());

    let mut order = OrderForm::new(
        cart_provider,
        gateway,
        listener,
        content,
        config.fields.clone(),
        config.language,
    );
    for (field, value) in cli.contact_fields() {
        order.set_field(field, value);
    }

    let phase = order.submit().await.into_diagnostic()?;

    if cli.json {
        let report = OrderReport {
            phase,
            view: order.view(),
            notification: order.notification(),
        };
        println!("{}", serde_json::to_string_pretty(&report).into_diagnostic()?);
    }

    match phase {
        LifecyclePhase::Completed => {
            if !cli.json {
                let content = order.content();
                println!("{}", content.confirmation_title);
                println!("{}", content.confirmation_body);
                println!("{}", content.confirmation_follow_up);
                println!("{} {}", content.contact_prompt, content.contact_url);
            }
            Ok(())
        }
        _ => {
            let notification = order.notification();
            Err(miette!(
                "{} {}",
                notification.kind.title(order.language()),
                notification.message
            ))
        }
    }
}
