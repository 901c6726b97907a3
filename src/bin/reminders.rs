use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use pawmi_care::domain::services::reminders::{
    appointments_for_date, load_appointments, sorted_by_date, Appointment,
};
use pawmi_care::utils::logger;

#[derive(Parser)]
#[command(name = "reminders")]
#[command(about = "List pet appointments and reminders")]
struct Args {
    /// JSON file with the appointment list
    #[arg(short, long, default_value = "appointments.json")]
    file: String,

    /// Only show events for this date (YYYY-MM-DD)
    #[arg(short, long)]
    date: Option<NaiveDate>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logger::init_cli_logger(args.verbose);

    let appointments = load_appointments(&args.file)
        .with_context(|| format!("Failed to load appointments from '{}'", args.file))?;
    tracing::debug!("Loaded {} appointments", appointments.len());

    match args.date {
        Some(date) => {
            println!("Eventos para {}", date);
            let selected = appointments_for_date(&appointments, date);
            if selected.is_empty() {
                println!("No hay eventos para esta fecha");
            }
            for appointment in selected {
                print_appointment(appointment, false);
            }
        }
        None => {
            println!("Próximos eventos");
            for appointment in sorted_by_date(&appointments) {
                print_appointment(appointment, true);
            }
        }
    }

    Ok(())
}

fn print_appointment(appointment: &Appointment, show_date: bool) {
    let when = match (&appointment.time, show_date) {
        (Some(time), true) => format!("{} {}", appointment.date, time),
        (None, true) => appointment.date.to_string(),
        (Some(time), false) => time.clone(),
        (None, false) => String::new(),
    };

    println!(
        "{} [{}] {} - {} ({})",
        appointment.kind.icon(),
        appointment.kind,
        appointment.title,
        appointment.pet_name,
        when
    );
    if !appointment.description.is_empty() {
        println!("    {}", appointment.description);
    }
}
