use availability_client::{HttpScheduleApi, config::ClientConfig};
use availability_core::time::to_12_hour;
use availability_scheduler::AvailabilityScheduler;
use color_eyre::eyre::Result;
use dotenv::dotenv;
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = ClientConfig::from_env()?;

    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let api = HttpScheduleApi::new(&config)?;
    let mut scheduler = AvailabilityScheduler::new(config.preferences);
    scheduler.load(&api).await;

    print_schedule(&scheduler);

    Ok(())
}

fn print_schedule(scheduler: &AvailabilityScheduler) {
    let preferences = scheduler.preferences();
    println!(
        "Business hours (meeting duration: {} min, buffer time: {} min)",
        preferences.meeting_duration_minutes, preferences.buffer_time_minutes
    );

    for (day, schedule) in scheduler.schedule().iter() {
        let hours = if schedule.is_enabled && !schedule.time_slots.is_empty() {
            schedule
                .time_slots
                .iter()
                .map(|slot| format!("{} - {}", to_12_hour(&slot.start), to_12_hour(&slot.end)))
                .collect::<Vec<_>>()
                .join(", ")
        } else {
            "Closed".to_string()
        };
        println!("  {:<10} {}", day.name(), hours);
    }

    if !scheduler.extra_slots().is_empty() {
        println!("\nDate schedule");
        for card in scheduler.extra_slots() {
            let more = match card.total_slots {
                0 | 1 => String::new(),
                n => format!(" (+{} more)", n - 1),
            };
            println!("  {:<20} {}{}", card.formatted_date, card.time_range(), more);
        }
    }

    let issues = scheduler.validate();
    if !issues.is_empty() {
        println!("\nIssues");
        for issue in issues {
            println!("  {}", issue);
        }
    }
}
