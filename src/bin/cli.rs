//! DentCare CLI
//!
//! Command-line console for the clinic API:
//! - Sign in and out
//! - Show the dashboard counters and a day's schedule
//! - Book appointments and change their status
//! - Register patients, list dentists and patients

use anyhow::{bail, Context as _};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::io::Write as _;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dentcare::client::{ApiClient, HttpTransport};
use dentcare::config::{generate_default_config, Config, LoggingConfig};
use dentcare::display::{format_clock, format_long_date, status_badge};
use dentcare::intake::{submit_patient, IntakeWizard};
use dentcare::model::{Appointment, AppointmentStatus, AppointmentUpdate, BloodType};
use dentcare::schedule::{submit_appointment, AppointmentDraft, SlotState};
use dentcare::session::{FileStorage, SessionCheck, SessionStore};
use dentcare::shell::landing_clinic_count;

#[derive(Parser)]
#[command(name = "dentcare")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "DentCare clinic management console")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// API base URL (overrides the config file)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Config file path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Sign in and store the session
    Login {
        username: String,
        /// Password (prompted when omitted)
        #[arg(short, long)]
        password: Option<String>,
    },

    /// Sign out and forget the stored session
    Logout,

    /// Show the signed-in user, re-validating the stored token
    Whoami,

    /// List clinics
    Clinics {
        /// Use the public listing shown on the landing page
        #[arg(long)]
        public: bool,
    },

    /// Dashboard counters and today's appointments
    Stats,

    /// Slot grid and appointments for one day
    Day {
        /// Date (YYYY-MM-DD, default: today)
        #[arg(short, long)]
        date: Option<NaiveDate>,
        /// Only this dentist's slots
        #[arg(long)]
        dentist: Option<u64>,
    },

    /// Book an appointment
    Book {
        #[arg(long)]
        dentist: u64,
        #[arg(long)]
        patient: u64,
        /// Date (YYYY-MM-DD, default: today)
        #[arg(short, long)]
        date: Option<NaiveDate>,
        /// Start time (HH:MM)
        #[arg(short, long, default_value = "09:00")]
        time: String,
        /// Length in minutes (30, 60, 90, 120)
        #[arg(long, default_value = "30")]
        duration: String,
        #[arg(long, default_value = "")]
        treatment: String,
        #[arg(long, default_value = "")]
        notes: String,
    },

    /// Change an appointment's status
    Status {
        id: u64,
        /// scheduled, confirmed, completed, cancelled, no_show
        status: String,
    },

    /// List dentists
    Dentists {
        #[arg(long)]
        clinic: Option<u64>,
    },

    /// List patients
    Patients {
        #[arg(long)]
        clinic: Option<u64>,
    },

    /// Register a patient
    PatientAdd {
        #[arg(long)]
        name: String,
        #[arg(long)]
        phone: String,
        #[arg(long, default_value = "")]
        email: String,
        /// YYYY-MM-DD
        #[arg(long, default_value = "")]
        birth_date: String,
        /// A+, A-, B+, B-, AB+, AB-, 0+, 0-
        #[arg(long, default_value = "unknown")]
        blood_type: BloodType,
        #[arg(long, default_value = "")]
        allergies: String,
        #[arg(long, default_value = "")]
        chronic_diseases: String,
        #[arg(long, default_value = "")]
        medications: String,
        #[arg(long, default_value = "")]
        emergency_name: String,
        #[arg(long, default_value = "")]
        emergency_phone: String,
        #[arg(long, default_value = "")]
        notes: String,
        /// Do not send SMS reminders
        #[arg(long)]
        no_sms: bool,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(format!("dentcare={}", logging.level)));
    let registry = tracing_subscriber::registry().with(filter);

    if logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn prompt_password() -> anyhow::Result<String> {
    print!("Şifre: ");
    std::io::stdout().flush()?;
    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn print_appointments(appointments: &[Appointment]) {
    if appointments.is_empty() {
        println!("Randevu yok");
        return;
    }

    println!("{:<6} {:<7} {:<22} {:<22} {:<18} {}", "ID", "Saat", "Hasta", "Hekim", "Tedavi", "Durum");
    println!("{}", "-".repeat(90));
    for apt in appointments {
        println!(
            "{:<6} {:<7} {:<22} {:<22} {:<18} {}",
            apt.id,
            format_clock(&apt.start_time),
            apt.patient_name,
            apt.dentist_name,
            apt.treatment_type,
            status_badge(&apt.status).label
        );
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = Config::resolve(cli.config.as_deref())?;
    init_tracing(&config.logging);

    let base_url = cli.api_url.clone().unwrap_or_else(|| config.api.base_url.clone());
    let mut session = SessionStore::new(FileStorage::new(config.session.path()));
    session.restore();

    let client = ApiClient::new(HttpTransport::new(), &base_url).with_token(session.token().map(String::from));
    tracing::debug!(base_url = %client.base_url(), signed_in = session.current().is_some(), "console ready");

    let require_session = |session: &SessionStore<FileStorage>| -> anyhow::Result<()> {
        if session.current().is_none() {
            bail!("Oturum açılmamış. Önce `dentcare login <kullanıcı>` çalıştırın.");
        }
        Ok(())
    };

    match cli.command {
        Commands::Login { username, password } => {
            let password = match password {
                Some(p) => p,
                None => prompt_password()?,
            };

            let response = client.login(&username, &password).await?;
            session
                .login(response.user, response.token)
                .context("Oturum kaydedilemedi")?;

            match session.user() {
                Some(user) if cli.format == OutputFormat::Json => print_json(user)?,
                Some(user) => println!("Hoş geldiniz, {} ({})", user.display_name(), user.role_display),
                None => {}
            }
        }

        Commands::Logout => {
            if session.current().is_some() {
                if let Err(e) = client.logout().await {
                    tracing::warn!("Server logout failed: {}", e);
                }
            }
            session.logout()?;
            println!("Çıkış yapıldı");
        }

        Commands::Whoami => match session.verify(&client).await {
            SessionCheck::NoSession => println!("Oturum açılmamış"),
            SessionCheck::Rejected => bail!("Oturum süresi dolmuş, tekrar giriş yapın"),
            SessionCheck::Valid(user) if cli.format == OutputFormat::Json => print_json(&user)?,
            SessionCheck::Valid(user) => {
                println!("{} [{}]", user.display_name(), user.initial());
                println!("Kullanıcı: {}", user.username);
                println!("Rol:       {}", user.role_display);
                if let Some(clinic) = &user.clinic {
                    println!("Klinik:    {}", clinic.name);
                }
            }
            SessionCheck::Superseded => println!("Oturum kontrol sırasında değişti, tekrar deneyin"),
            SessionCheck::Unverified(e) => {
                eprintln!("Sunucuya ulaşılamadı: {}", e);
                if let Some(user) = session.user() {
                    println!("{} (doğrulanmadı)", user.display_name());
                }
            }
        },

        Commands::Clinics { public } => {
            if public {
                let listing = client.public_clinics().await;
                if let Err(e) = &listing {
                    tracing::warn!("Clinic listing failed: {}", e);
                }
                match (&listing, cli.format) {
                    (Ok(clinics), OutputFormat::Json) => print_json(clinics)?,
                    _ => {
                        println!("{}+ klinik DentCare kullanıyor", landing_clinic_count(&listing));
                        for clinic in listing.iter().flatten() {
                            println!("  {:<4} {}", clinic.id, clinic.name);
                        }
                    }
                }
            } else {
                require_session(&session)?;
                let clinics = client.clinics().await?;
                if cli.format == OutputFormat::Json {
                    print_json(&clinics)?;
                } else {
                    println!("{:<6} {:<30} {:<16} {}", "ID", "Ad", "Telefon", "Adres");
                    println!("{}", "-".repeat(80));
                    for clinic in clinics {
                        println!("{:<6} {:<30} {:<16} {}", clinic.id, clinic.name, clinic.phone, clinic.address);
                    }
                }
            }
        }

        Commands::Stats => {
            require_session(&session)?;
            let today = Local::now().date_naive();
            let overview = client.dashboard_overview(today).await;
            let stats = overview.stats?;
            let appointments = overview.today?;

            if cli.format == OutputFormat::Json {
                print_json(&serde_json::json!({ "stats": stats, "appointments": appointments }))?;
            } else {
                println!("{}", format_long_date(today));
                println!();
                println!("Hekim Sayısı:     {}", stats.dentist_count);
                println!("Hasta Sayısı:     {}", stats.patient_count);
                println!("Bugünkü Randevu:  {}", stats.today_appointments);
                println!();
                print_appointments(&appointments);
            }
        }

        Commands::Day { date, dentist } => {
            require_session(&session)?;
            let date = date.unwrap_or_else(|| Local::now().date_naive());
            let schedule = client.day_schedule(date, dentist).await?;

            if cli.format == OutputFormat::Json {
                print_json(&serde_json::json!({
                    "date": date,
                    "availability": schedule.availability,
                    "appointments": schedule.appointments,
                }))?;
            } else {
                let (total, available, booked) = schedule.counters();
                println!("{}", format_long_date(date));
                println!("Toplam: {}  Müsait: {}  Dolu: {}", total, available, booked);
                println!();

                for tile in schedule.slot_tiles() {
                    match tile.state {
                        SlotState::Available => println!("  {}-{}  müsait", tile.start_time, tile.end_time),
                        SlotState::Booked { occupant } => {
                            println!("  {}-{}  {}", tile.start_time, tile.end_time, occupant)
                        }
                    }
                }
                println!();
                print_appointments(&schedule.appointments);
            }
        }

        Commands::Book {
            dentist,
            patient,
            date,
            time,
            duration,
            treatment,
            notes,
        } => {
            require_session(&session)?;
            let draft = AppointmentDraft {
                dentist: Some(dentist),
                patient: Some(patient),
                start_time: time,
                length: duration.parse()?,
                treatment_type: treatment,
                notes,
                ..AppointmentDraft::for_date(date.unwrap_or_else(|| Local::now().date_naive()))
            };

            let receipt = submit_appointment(&client, &draft).await?;
            if cli.format == OutputFormat::Json {
                print_json(&receipt)?;
            } else {
                println!(
                    "Randevu oluşturuldu: {} {}-{}",
                    format_long_date(draft.date),
                    format_clock(&receipt.start_time),
                    format_clock(&receipt.end_time)
                );
            }
        }

        Commands::Status { id, status } => {
            require_session(&session)?;
            let status = AppointmentStatus::from(status.as_str());
            let receipt = client.update_appointment(id, &AppointmentUpdate::status(status)).await?;
            if cli.format == OutputFormat::Json {
                print_json(&receipt)?;
            } else {
                println!("Randevu {}: {}", id, status_badge(&receipt.status).label);
            }
        }

        Commands::Dentists { clinic } => {
            require_session(&session)?;
            let dentists = client.dentists(clinic).await?;
            if cli.format == OutputFormat::Json {
                print_json(&dentists)?;
            } else if dentists.is_empty() {
                println!("Henüz hekim eklenmemiş");
            } else {
                for dentist in dentists {
                    let active = if dentist.is_active { "" } else { " (pasif)" };
                    println!("{:<5} {}{}", dentist.id, dentist.select_label(), active);
                }
            }
        }

        Commands::Patients { clinic } => {
            require_session(&session)?;
            let patients = client.patients(clinic).await?;
            if cli.format == OutputFormat::Json {
                print_json(&patients)?;
            } else {
                println!("{:<6} {:<26} {:<16} {:<28} {}", "ID", "Ad Soyad", "Telefon", "E-posta", "Kan");
                println!("{}", "-".repeat(90));
                for patient in patients {
                    println!(
                        "{:<6} {:<26} {:<16} {:<28} {}",
                        patient.id,
                        patient.name,
                        patient.phone,
                        patient.email,
                        patient.blood_type.label()
                    );
                }
            }
        }

        Commands::PatientAdd {
            name,
            phone,
            email,
            birth_date,
            blood_type,
            allergies,
            chronic_diseases,
            medications,
            emergency_name,
            emergency_phone,
            notes,
            no_sms,
        } => {
            require_session(&session)?;
            let mut wizard = IntakeWizard::new();
            wizard.draft.name = name;
            wizard.draft.phone = phone;
            wizard.draft.email = email;
            wizard.draft.date_of_birth = birth_date;
            wizard.draft.clinic = config.api.clinic_id;
            wizard.advance()?;

            wizard.draft.blood_type = blood_type;
            wizard.draft.allergies = allergies;
            wizard.draft.chronic_diseases = chronic_diseases;
            wizard.draft.current_medications = medications;
            wizard.draft.emergency_contact_name = emergency_name;
            wizard.draft.emergency_contact_phone = emergency_phone;
            wizard.draft.notes = notes;
            wizard.draft.sms_consent = !no_sms;

            let patient = submit_patient(&client, &wizard).await?;
            if cli.format == OutputFormat::Json {
                print_json(&patient)?;
            } else {
                println!("Hasta kaydedildi: {} (#{})", patient.name, patient.id);
            }
        }

        Commands::Config { output } => {
            let config = generate_default_config();

            match output {
                Some(path) => {
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, &config)?;
                    println!("Config written to {:?}", path);
                }
                None => {
                    print!("{}", config);
                }
            }
        }
    }

    Ok(())
}
