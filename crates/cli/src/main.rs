use anyhow::{anyhow, Context, Result};
use browse::{Bounds, FilterValue, ListViewController, Listable, ViewResult};
use catalog::{Catalog, ExperienceLevel, Freelancer, Job, RecordId, Timestamp};
use chrono::{DateTime, Datelike, Utc};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;

/// GigBoard - freelance marketplace browser
#[derive(Parser)]
#[command(name = "gigboard")]
#[command(about = "Browse freelance jobs and freelancer profiles", long_about = None)]
struct Cli {
    /// Directory holding jobs.json and freelancers.json (built-in listings if omitted)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse job listings
    Jobs {
        #[command(flatten)]
        browse: BrowseArgs,

        /// Only remote jobs
        #[arg(long)]
        remote: bool,

        /// Only jobs from verified clients
        #[arg(long)]
        verified: bool,

        /// Only jobs posted at or after this unix timestamp
        #[arg(long)]
        posted_since: Option<Timestamp>,
    },

    /// Browse freelancer profiles
    Freelancers {
        #[command(flatten)]
        browse: BrowseArgs,

        /// Only freelancers available for new work
        #[arg(long)]
        available: bool,
    },

    /// Show one job in detail
    Job {
        #[arg(long)]
        id: RecordId,
    },

    /// Show one freelancer profile in detail
    Freelancer {
        #[arg(long)]
        id: RecordId,
    },

    /// List categories with listing counts
    Categories,
}

/// Filter, sort and paging flags shared by the browse commands
#[derive(Args)]
struct BrowseArgs {
    /// Category to include (repeat for several)
    #[arg(long = "category")]
    categories: Vec<String>,

    /// Experience level to include: entry, intermediate, expert (repeatable)
    #[arg(long = "experience")]
    experience: Vec<String>,

    /// Skill to include (repeatable)
    #[arg(long = "skill")]
    skills: Vec<String>,

    /// Lowest budget or hourly rate
    #[arg(long)]
    min_price: Option<f64>,

    /// Highest budget or hourly rate
    #[arg(long)]
    max_price: Option<f64>,

    /// Lowest rating (0-5)
    #[arg(long)]
    min_rating: Option<f64>,

    /// Location substring, case-insensitive
    #[arg(long)]
    location: Option<String>,

    /// Search titles, names and skills
    #[arg(long)]
    keyword: Option<String>,

    /// FIELD or FIELD:DIRECTION, e.g. price:asc (fields: relevance, price, date, rating)
    #[arg(long, default_value = "relevance:desc")]
    sort: String,

    /// Page number, starting at 1
    #[arg(long, default_value = "1")]
    page: i64,

    /// Listings per page
    #[arg(long, default_value = "10")]
    page_size: i64,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let catalog = match &cli.data_dir {
        Some(dir) => Catalog::load_from_dir(dir)
            .with_context(|| format!("Failed to load listings from {}", dir.display()))?,
        None => {
            tracing::info!("No data directory given, using built-in listings");
            Catalog::sample()
        }
    };

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Jobs {
            browse,
            remote,
            verified,
            posted_since,
        } => handle_jobs(&catalog, &browse, remote, verified, posted_since)?,
        Commands::Freelancers { browse, available } => {
            handle_freelancers(&catalog, &browse, available)?
        }
        Commands::Job { id } => handle_job(&catalog, id)?,
        Commands::Freelancer { id } => handle_freelancer(&catalog, id)?,
        Commands::Categories => handle_categories(&catalog),
    }

    Ok(())
}

/// Handle the 'jobs' command
fn handle_jobs(
    catalog: &Catalog,
    args: &BrowseArgs,
    remote: bool,
    verified: bool,
    posted_since: Option<Timestamp>,
) -> Result<()> {
    let mut controller = ListViewController::new(catalog.jobs());

    if remote {
        controller.set_filter("remote", FilterValue::flag(true))?;
    }
    if verified {
        controller.set_filter("verified", FilterValue::flag(true))?;
    }
    if let Some(since) = posted_since {
        controller.set_filter("posted", FilterValue::at_least(since as f64))?;
    }
    apply_browse_args(&mut controller, args)?;

    print_view("jobs", controller.view_result());
    Ok(())
}

/// Handle the 'freelancers' command
fn handle_freelancers(catalog: &Catalog, args: &BrowseArgs, available: bool) -> Result<()> {
    let mut controller = ListViewController::new(catalog.freelancers());

    if available {
        controller.set_filter("available", FilterValue::flag(true))?;
    }
    apply_browse_args(&mut controller, args)?;

    print_view("freelancers", controller.view_result());
    Ok(())
}

/// Translate the shared flags into controller calls.
///
/// Page size goes before page, since changing the size returns to page one.
fn apply_browse_args<R: Listable + Clone>(
    controller: &mut ListViewController<R>,
    args: &BrowseArgs,
) -> Result<()> {
    if !args.categories.is_empty() {
        controller.set_filter("category", FilterValue::set(args.categories.clone()))?;
    }
    if !args.experience.is_empty() {
        let levels = parse_experience(&args.experience)?;
        controller.set_filter("experience", FilterValue::set(levels.iter().map(|l| l.as_str())))?;
    }
    if !args.skills.is_empty() {
        controller.set_filter("skills", FilterValue::set(args.skills.clone()))?;
    }
    if args.min_price.is_some() || args.max_price.is_some() {
        let bounds = Bounds::new(args.min_price, args.max_price);
        controller.set_filter("price", FilterValue::Range(bounds))?;
    }
    if let Some(min_rating) = args.min_rating {
        controller.set_filter("rating", FilterValue::at_least(min_rating))?;
    }
    if let Some(location) = &args.location {
        controller.set_filter("location", FilterValue::text(location.as_str()))?;
    }
    if let Some(keyword) = &args.keyword {
        controller.set_filter("keyword", FilterValue::text(keyword.as_str()))?;
    }

    let (field, direction) = args
        .sort
        .split_once(':')
        .unwrap_or((args.sort.as_str(), "desc"));
    controller
        .set_sort(field, direction)
        .with_context(|| format!("Invalid --sort value '{}'", args.sort))?;

    controller
        .set_page_size(args.page_size)
        .context("Invalid --page-size")?;
    controller.set_page(args.page.saturating_sub(1));
    Ok(())
}

/// Parse `--experience` values, rejecting unknown levels.
fn parse_experience(values: &[String]) -> Result<Vec<ExperienceLevel>> {
    values
        .iter()
        .map(|value| {
            value
                .parse::<ExperienceLevel>()
                .with_context(|| format!("Invalid --experience value '{}'", value))
        })
        .collect()
}

/// Handle the 'job' command
fn handle_job(catalog: &Catalog, id: RecordId) -> Result<()> {
    let job = catalog
        .get_job(id)
        .ok_or_else(|| anyhow!("Job {} not found", id))?;

    println!("{}", job.title.bold().blue());
    println!("{}Client: {} {}", "• ".green(), job.client, verified_badge(job.client_verified));
    println!("{}Client rating: {}", "• ".green(), stars(job.client_rating));
    println!("{}Category: {}", "• ".green(), job.category);
    println!("{}Experience: {}", "• ".green(), job.experience_level);
    println!("{}Budget: {}", "• ".cyan(), job.budget);
    println!(
        "{}Location: {}{}",
        "• ".cyan(),
        job.location,
        if job.remote { " (remote)" } else { "" }
    );
    println!("{}Posted: {}", "• ".cyan(), age_label(job.posted_at));
    println!("{}Proposals: {}", "• ".cyan(), job.proposals);
    println!("{}Skills: {}", "• ".cyan(), job.skills.join(", "));
    Ok(())
}

/// Handle the 'freelancer' command
fn handle_freelancer(catalog: &Catalog, id: RecordId) -> Result<()> {
    let freelancer = catalog
        .get_freelancer(id)
        .ok_or_else(|| anyhow!("Freelancer {} not found", id))?;

    println!("{}", freelancer.name.bold().blue());
    println!("{}{}", "• ".green(), freelancer.title);
    println!(
        "{}Rating: {} ({} reviews)",
        "• ".green(),
        stars(freelancer.rating),
        freelancer.reviews
    );
    println!("{}Category: {}", "• ".green(), freelancer.category);
    println!("{}Experience: {}", "• ".green(), freelancer.experience_level);
    println!("{}Rate: ${:.0}/hr", "• ".cyan(), freelancer.hourly_rate);
    println!("{}Location: {}", "• ".cyan(), freelancer.location);
    println!("{}Member since: {}", "• ".cyan(), age_label(freelancer.joined_at));
    println!(
        "{}Status: {}",
        "• ".cyan(),
        if freelancer.available {
            "Available".green()
        } else {
            "Busy".yellow()
        }
    );
    println!("{}Skills: {}", "• ".cyan(), freelancer.skills.join(", "));
    Ok(())
}

/// Handle the 'categories' command
fn handle_categories(catalog: &Catalog) {
    println!("{}", "Categories:".bold().blue());
    for category in catalog.categories() {
        println!(
            "  {:<22} {:>3} jobs {:>3} freelancers",
            category.name, category.jobs, category.freelancers
        );
    }
}

// =============================================================================
// Rendering
// =============================================================================

/// One-line-per-field card for a listing
trait Card {
    fn print_card(&self);
}

impl Card for Job {
    fn print_card(&self) {
        println!(
            "{} {} {}",
            format!("#{}", self.id).dimmed(),
            self.title.bold(),
            verified_badge(self.client_verified)
        );
        println!(
            "   {} | {} | {} | {}{}",
            self.category,
            self.experience_level,
            self.budget.to_string().green(),
            self.location,
            if self.remote { " (remote)" } else { "" }
        );
        println!(
            "   {} | {} proposals | posted {}",
            stars(self.client_rating),
            self.proposals,
            age_label(self.posted_at)
        );
    }
}

impl Card for Freelancer {
    fn print_card(&self) {
        let status = if self.available {
            "available".green()
        } else {
            "busy".yellow()
        };
        println!(
            "{} {} - {} [{}]",
            format!("#{}", self.id).dimmed(),
            self.name.bold(),
            self.title,
            status
        );
        println!(
            "   {} | {} | {} | {}",
            self.category,
            self.experience_level,
            format!("${:.0}/hr", self.hourly_rate).green(),
            self.location
        );
        println!(
            "   {} ({} reviews) | {}",
            stars(self.rating),
            self.reviews,
            self.skills.join(", ")
        );
    }
}

/// Print the current page of a browse view followed by its pagination bar
fn print_view<R: Card>(noun: &str, view: &ViewResult<R>) {
    match view.display_range() {
        Some((first, last)) => println!(
            "{}",
            format!(
                "Showing {}-{} of {} {}",
                first, last, view.total_match_count, noun
            )
            .bold()
            .blue()
        ),
        None => {
            println!("{}", format!("No {} match your filters", noun).yellow());
            return;
        }
    }

    for record in &view.visible_records {
        record.print_card();
    }

    print_pagination(view);
}

fn print_pagination<R>(view: &ViewResult<R>) {
    if view.total_pages <= 1 {
        return;
    }

    let previous = if view.has_previous() {
        "< Prev".normal()
    } else {
        "< Prev".dimmed()
    };
    let next = if view.has_next() {
        "Next >".normal()
    } else {
        "Next >".dimmed()
    };
    let pages: Vec<String> = view
        .page_window(5)
        .into_iter()
        .map(|page| {
            if page == view.current_page {
                format!("[{}]", page + 1).bold().green().to_string()
            } else {
                (page + 1).to_string()
            }
        })
        .collect();

    println!();
    println!("{}  {}  {}", previous, pages.join(" "), next);
}

fn stars(rating: f64) -> String {
    let filled = rating.round().clamp(0.0, 5.0) as usize;
    format!("{}{} {:.1}", "★".repeat(filled), "☆".repeat(5 - filled), rating)
        .yellow()
        .to_string()
}

fn verified_badge(verified: bool) -> String {
    if verified {
        "✓ verified".green().to_string()
    } else {
        String::new()
    }
}

/// "today", "3 days ago", "14 months ago"
fn age_label(timestamp: Timestamp) -> String {
    age_label_at(timestamp, Utc::now())
}

fn age_label_at(timestamp: Timestamp, now: DateTime<Utc>) -> String {
    let Some(then) = DateTime::from_timestamp(timestamp, 0) else {
        return "unknown".to_string();
    };
    let days = now.signed_duration_since(then).num_days().max(0);
    match days {
        0 => "today".to_string(),
        1 => "yesterday".to_string(),
        2..=60 => format!("{} days ago", days),
        _ => {
            let months = (now.year() - then.year()) * 12 + now.month() as i32 - then.month() as i32;
            format!("{} months ago", months)
        }
    }
}
