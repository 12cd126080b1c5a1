use std::sync::Arc;

use chrono::Utc;
use chrono_tz::Tz;
use clap::{Parser, Subcommand};
use interviewBooking::clients::page_client::ReqwestPageClient;
use interviewBooking::config::ClientSettings;
use interviewBooking::error::BookingError;
use interviewBooking::handlers::search_page::{InterviewBookingClient, SearchOutcome};
use interviewBooking::models::selection::{SelectedOption, SelectionContext};
use interviewBooking::page::document::{
    INTERVIEW_TIMES_CONTAINER, LOGOUT_HYPERLINK, MODAL_BODY, MODAL_TITLE, MemoryDocument,
    PageDocument, POSITION, USER_INFO,
};
use interviewBooking::page::navigation::ConsoleNavigator;
use interviewBooking::page::prompt::TerminalPrompt;

#[derive(Parser)]
#[command(about = "Search, inspect and book interview slots")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check login status and profile, as the page does on load.
    Session {},
    /// List available interview times for this machine's timezone.
    Load {
        #[arg(long, default_value = "")]
        position: String,
    },
    /// Show the interviewers for one slot.
    Interviewers {
        #[arg(long)]
        date: String,
        /// Option label, e.g. "9:00am-10:00am".
        #[arg(long)]
        label: String,
        #[arg(long)]
        utc: String,
    },
    /// Book a slot after confirmation.
    Book {
        #[arg(long)]
        date: String,
        #[arg(long)]
        time: String,
        #[arg(long)]
        company: String,
        #[arg(long)]
        job: String,
        #[arg(long)]
        utc: String,
    },
    /// Show the interviews already booked.
    Scheduled {
        /// IANA zone id, e.g. "America/New_York".
        #[arg(long)]
        time_zone: Option<String>,
    },
}

struct Page {
    client: InterviewBookingClient,
    document: Arc<MemoryDocument>,
    navigator: Arc<ConsoleNavigator>,
}

impl Page {
    fn new(settings: &ClientSettings) -> Result<Self, BookingError> {
        let http = Arc::new(ReqwestPageClient::new(settings)?);
        let document = Arc::new(MemoryDocument::search_page());
        let navigator = Arc::new(ConsoleNavigator::new());
        let client = InterviewBookingClient::new(
            http,
            document.clone(),
            navigator.clone(),
            Arc::new(TerminalPrompt),
            settings.timezone_offset,
        );
        Ok(Self {
            client,
            document,
            navigator,
        })
    }

    fn print_element(&self, label: &str, id: &str) {
        if let Some(content) = self.document.inner_html(id).filter(|c| !c.is_empty()) {
            println!("{label}:\n{content}");
        }
    }

    fn print_navigation(&self) {
        if let Some(target) = self.navigator.last_target() {
            println!("Page would navigate to {}", target);
        }
    }
}

pub async fn cli(settings: ClientSettings) {
    // Fine to panic here
    let cli = Cli::parse();
    let page = match Page::new(&settings) {
        Ok(page) => page,
        Err(e) => {
            println!("Failed to set up client: {}", e);
            return;
        }
    };

    if let Err(e) = run(&page, &settings, cli.command).await {
        println!("Request failed: {}", e);
    }
    page.print_navigation();
}

async fn run(page: &Page, settings: &ClientSettings, command: Commands) -> Result<(), BookingError> {
    match command {
        Commands::Session {} => {
            let outcome = page.client.on_page_load().await?;
            println!("{:?} / {:?}", outcome.logout, outcome.profile);
            if let Some(href) = page.document.attribute(LOGOUT_HYPERLINK, "href") {
                println!("Logout link: {}", href);
            }
            page.print_element("User", USER_INFO);
        }
        Commands::Load { position } => {
            page.document.set_value(POSITION, &position)?;
            println!(
                "Searching with timezone offset {}",
                page.client.timezone_offset()
            );
            if page.client.load_interviews().await? == SearchOutcome::Rendered {
                page.print_element("Interview times", INTERVIEW_TIMES_CONTAINER);
            }
        }
        Commands::Interviewers { date, label, utc } => {
            page.document.insert_select(
                &date,
                vec![SelectedOption {
                    text: label,
                    value: utc,
                }],
                0,
            );
            page.client.show_interviewers(&date).await?;
            page.print_element("Title", MODAL_TITLE);
            page.print_element("Interviewers", MODAL_BODY);
        }
        Commands::Book {
            date,
            time,
            company,
            job,
            utc,
        } => {
            let selection = SelectionContext {
                date,
                time,
                company,
                job,
                utc_start_time: utc,
            };
            let state = page.client.select_interview(&selection).await?;
            println!("Booking ended as {:?}", state);
        }
        Commands::Scheduled { time_zone } => {
            let time_zone: Tz = match time_zone {
                Some(name) => name
                    .parse()
                    .map_err(|_| BookingError::Config(format!("Unknown time zone {name}")))?,
                None => settings.time_zone,
            };
            let html = page
                .client
                .list_scheduled_interviews(time_zone, Utc::now())
                .await?;
            println!("{}", html);
        }
    }
    Ok(())
}
