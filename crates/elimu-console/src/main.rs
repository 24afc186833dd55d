#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};
use elimu_console::client::{CampusApi, HttpApi};
use elimu_console::forms::{submit_contact, submit_registration, ContactForm, RegistrationForm};
use elimu_console::session::{Gate, Session, SessionStore};
use elimu_console::settings::{
    validate_password_change, validate_profile, Profile, SettingsStore,
};
use elimu_console::views::catalog::{CourseForm, ServiceForm};
use elimu_console::views::{admissions, dashboard, messages, payments, students};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "elimu-console")]
#[command(about = "Elimu Campus back-office console")]
struct Cli {
    #[arg(long, global = true, default_value = "http://127.0.0.1:8080")]
    api_url: String,
    #[arg(long, global = true, default_value = ".elimu-console")]
    data_dir: PathBuf,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in and persist the session.
    Login {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
    },
    /// Clear the persisted session.
    Logout,
    /// Stat tiles: totals per collection.
    Dashboard,
    /// Public admissions form.
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone: String,
        #[arg(long)]
        course: String,
    },
    /// Public contact form.
    Contact {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone: String,
        #[arg(long)]
        subject: String,
        #[arg(long)]
        message: String,
    },
    Students {
        #[command(subcommand)]
        command: StudentsCommand,
    },
    Admissions {
        #[command(subcommand)]
        command: AdmissionsCommand,
    },
    Messages {
        #[command(subcommand)]
        command: MessagesCommand,
    },
    Courses {
        #[command(subcommand)]
        command: CoursesCommand,
    },
    Services {
        #[command(subcommand)]
        command: ServicesCommand,
    },
    Payments {
        #[command(subcommand)]
        command: PaymentsCommand,
    },
    Settings {
        #[command(subcommand)]
        command: SettingsCommand,
    },
}

#[derive(Subcommand)]
enum StudentsCommand {
    List {
        #[arg(long, default_value = "")]
        search: String,
    },
    Delete {
        id: u64,
    },
}

#[derive(Subcommand)]
enum AdmissionsCommand {
    List {
        #[arg(long, default_value = "all")]
        status: String,
    },
    Approve {
        id: u64,
    },
    Reject {
        id: u64,
    },
}

#[derive(Subcommand)]
enum MessagesCommand {
    List {
        #[arg(long, default_value = "")]
        search: String,
        #[arg(long, default_value = "all")]
        subject: String,
    },
    Reply {
        id: u64,
    },
    Delete {
        id: u64,
    },
}

#[derive(Subcommand)]
enum CoursesCommand {
    List,
    Add {
        #[arg(long)]
        title: String,
        #[arg(long = "type")]
        kind: String,
        #[arg(long)]
        description: String,
        #[arg(long)]
        duration: String,
        #[arg(long)]
        certification: String,
        #[arg(long)]
        prerequisites: Option<String>,
        #[arg(long)]
        fee: String,
    },
    Edit {
        id: u64,
        #[arg(long)]
        title: String,
        #[arg(long = "type")]
        kind: String,
        #[arg(long)]
        description: String,
        #[arg(long)]
        duration: String,
        #[arg(long)]
        certification: String,
        #[arg(long)]
        prerequisites: Option<String>,
        #[arg(long)]
        fee: String,
    },
    Delete {
        id: u64,
    },
}

#[derive(Subcommand)]
enum ServicesCommand {
    List,
    Add {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: String,
        #[arg(long)]
        audience: String,
        #[arg(long)]
        fee: String,
    },
    Edit {
        id: u64,
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: String,
        #[arg(long)]
        audience: String,
        #[arg(long)]
        fee: String,
    },
    Delete {
        id: u64,
    },
}

#[derive(Subcommand)]
enum PaymentsCommand {
    List {
        #[arg(long, default_value = "")]
        search: String,
        #[arg(long, default_value = "all")]
        status: String,
    },
    Export {
        #[arg(long, default_value = "payments.csv")]
        out: PathBuf,
    },
}

#[derive(Subcommand)]
enum SettingsCommand {
    Show,
    Profile {
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        full_name: String,
        #[arg(long)]
        phone: String,
    },
    Password {
        #[arg(long)]
        current: String,
        #[arg(long)]
        new: String,
        #[arg(long)]
        confirm: String,
    },
    College {
        #[arg(long)]
        name: String,
        #[arg(long)]
        tagline: String,
        #[arg(long)]
        phone: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        location: String,
    },
    Notifications {
        #[arg(long)]
        registrations: Option<bool>,
        #[arg(long)]
        messages: Option<bool>,
    },
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

/// Admin commands pass the gate first; while anonymous they stop here with a
/// redirect message and never reach the API.
fn require_session(sessions: &SessionStore) -> Result<Session, String> {
    match sessions.gate() {
        Gate::Authenticated(session) => Ok(session),
        Gate::RedirectToLogin => {
            Err("not signed in; redirected to login (run `elimu-console login`)".to_string())
        }
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), String> {
    println!(
        "{}",
        serde_json::to_string_pretty(value).map_err(|e| e.to_string())?
    );
    Ok(())
}

#[allow(clippy::too_many_lines)]
fn run() -> Result<(), String> {
    let cli = Cli::parse();
    let api = HttpApi::new(&cli.api_url);
    let sessions = SessionStore::new(&cli.data_dir);
    let settings_store = SettingsStore::new(&cli.data_dir);

    match cli.command {
        Commands::Login { username, password } => {
            let response = api.login(&username, &password).map_err(|e| e.to_string())?;
            let session = Session {
                user: response.user,
                token: response.token,
            };
            sessions.save(&session).map_err(|e| e.to_string())?;
            println!("signed in as {}", session.user.username);
            Ok(())
        }
        Commands::Logout => {
            sessions.clear().map_err(|e| e.to_string())?;
            println!("signed out");
            Ok(())
        }
        Commands::Dashboard => {
            let session = require_session(&sessions)?;
            let totals =
                dashboard::gather(&api, &session.token).map_err(|e| e.to_string())?;
            println!("students: {}", totals.students);
            println!("messages: {}", totals.messages);
            println!("courses: {}", totals.courses);
            println!("services: {}", totals.services);
            Ok(())
        }
        Commands::Register {
            name,
            email,
            phone,
            course,
        } => {
            let form = RegistrationForm {
                name,
                email,
                phone,
                course,
            };
            let student = submit_registration(&form, &api).map_err(|e| e.to_string())?;
            println!("registration received");
            print_json(&student)
        }
        Commands::Contact {
            name,
            email,
            phone,
            subject,
            message,
        } => {
            let form = ContactForm {
                name,
                email,
                phone,
                subject,
                message,
            };
            let contact = submit_contact(&form, &api).map_err(|e| e.to_string())?;
            println!("message sent");
            print_json(&contact)
        }
        Commands::Students { command } => {
            let session = require_session(&sessions)?;
            match command {
                StudentsCommand::List { search } => {
                    let all = api.list_students(&session.token).map_err(|e| e.to_string())?;
                    print_json(&students::search(&all, &search))
                }
                StudentsCommand::Delete { id } => {
                    api.delete_student(&session.token, id).map_err(|e| e.to_string())?;
                    println!("student {id} deleted");
                    Ok(())
                }
            }
        }
        Commands::Admissions { command } => {
            let session = require_session(&sessions)?;
            match command {
                AdmissionsCommand::List { status } => {
                    let all = api.list_students(&session.token).map_err(|e| e.to_string())?;
                    for (label, count) in admissions::status_counts(&all) {
                        println!("{label}: {count}");
                    }
                    print_json(&admissions::filter_by_status(&all, &status))
                }
                AdmissionsCommand::Approve { id } => {
                    let student = admissions::approve(&api, &session.token, id)
                        .map_err(|e| e.to_string())?;
                    print_json(&student)
                }
                AdmissionsCommand::Reject { id } => {
                    let student = admissions::reject(&api, &session.token, id)
                        .map_err(|e| e.to_string())?;
                    print_json(&student)
                }
            }
        }
        Commands::Messages { command } => {
            let session = require_session(&sessions)?;
            match command {
                MessagesCommand::List { search, subject } => {
                    let all = api.list_contacts(&session.token).map_err(|e| e.to_string())?;
                    println!("subjects: {}", messages::unique_subjects(&all).join(", "));
                    print_json(&messages::filter(&all, &search, &subject))
                }
                MessagesCommand::Reply { id } => {
                    let contact =
                        api.reply_contact(&session.token, id).map_err(|e| e.to_string())?;
                    println!("message {id} marked replied");
                    print_json(&contact)
                }
                MessagesCommand::Delete { id } => {
                    api.delete_contact(&session.token, id).map_err(|e| e.to_string())?;
                    println!("message {id} deleted");
                    Ok(())
                }
            }
        }
        Commands::Courses { command } => match command {
            CoursesCommand::List => {
                let all = api.list_courses().map_err(|e| e.to_string())?;
                print_json(&all)
            }
            CoursesCommand::Add {
                title,
                kind,
                description,
                duration,
                certification,
                prerequisites,
                fee,
            } => {
                let session = require_session(&sessions)?;
                let form = CourseForm {
                    title,
                    kind,
                    description,
                    duration,
                    certification,
                    prerequisites,
                    fee,
                };
                form.validate()
                    .map_err(|errors| format!("course form invalid: {errors:?}"))?;
                let course = api
                    .create_course(&session.token, &form.payload())
                    .map_err(|e| e.to_string())?;
                print_json(&course)
            }
            CoursesCommand::Edit {
                id,
                title,
                kind,
                description,
                duration,
                certification,
                prerequisites,
                fee,
            } => {
                let session = require_session(&sessions)?;
                let form = CourseForm {
                    title,
                    kind,
                    description,
                    duration,
                    certification,
                    prerequisites,
                    fee,
                };
                form.validate()
                    .map_err(|errors| format!("course form invalid: {errors:?}"))?;
                let course = api
                    .update_course(&session.token, id, &form.payload())
                    .map_err(|e| e.to_string())?;
                print_json(&course)
            }
            CoursesCommand::Delete { id } => {
                let session = require_session(&sessions)?;
                api.delete_course(&session.token, id).map_err(|e| e.to_string())?;
                println!("course {id} deleted");
                Ok(())
            }
        },
        Commands::Services { command } => match command {
            ServicesCommand::List => {
                let all = api.list_services().map_err(|e| e.to_string())?;
                print_json(&all)
            }
            ServicesCommand::Add {
                title,
                description,
                audience,
                fee,
            } => {
                let session = require_session(&sessions)?;
                let form = ServiceForm {
                    title,
                    description,
                    audience,
                    fee,
                };
                form.validate()
                    .map_err(|errors| format!("service form invalid: {errors:?}"))?;
                let service = api
                    .create_service(&session.token, &form.payload())
                    .map_err(|e| e.to_string())?;
                print_json(&service)
            }
            ServicesCommand::Edit {
                id,
                title,
                description,
                audience,
                fee,
            } => {
                let session = require_session(&sessions)?;
                let form = ServiceForm {
                    title,
                    description,
                    audience,
                    fee,
                };
                form.validate()
                    .map_err(|errors| format!("service form invalid: {errors:?}"))?;
                let service = api
                    .update_service(&session.token, id, &form.payload())
                    .map_err(|e| e.to_string())?;
                print_json(&service)
            }
            ServicesCommand::Delete { id } => {
                let session = require_session(&sessions)?;
                api.delete_service(&session.token, id).map_err(|e| e.to_string())?;
                println!("service {id} deleted");
                Ok(())
            }
        },
        Commands::Payments { command } => {
            let session = require_session(&sessions)?;
            let ledger = api.list_payments(&session.token).map_err(|e| e.to_string())?;
            match command {
                PaymentsCommand::List { search, status } => {
                    let summary = payments::summarize(&ledger);
                    println!(
                        "confirmed revenue: KSH {} ({} confirmed, {} pending, {} failed)",
                        summary.confirmed_revenue_ksh,
                        summary.confirmed_count,
                        summary.pending_count,
                        summary.failed_count,
                    );
                    print_json(&payments::filter(&ledger, &search, &status))
                }
                PaymentsCommand::Export { out } => {
                    payments::export_csv(&ledger, &out).map_err(|e| e.to_string())?;
                    println!("wrote {}", out.display());
                    Ok(())
                }
            }
        }
        Commands::Settings { command } => {
            let _session = require_session(&sessions)?;
            let mut settings = settings_store.load();
            match command {
                SettingsCommand::Show => print_json(&settings),
                SettingsCommand::Profile {
                    username,
                    email,
                    full_name,
                    phone,
                } => {
                    let profile = Profile {
                        username,
                        email,
                        full_name,
                        phone,
                    };
                    validate_profile(&profile)
                        .map_err(|errors| format!("profile invalid: {errors:?}"))?;
                    settings.profile = profile;
                    settings_store.save(&settings).map_err(|e| e.to_string())?;
                    println!("profile updated");
                    Ok(())
                }
                SettingsCommand::Password {
                    current,
                    new,
                    confirm,
                } => {
                    validate_password_change(&current, &new, &confirm)
                        .map_err(|errors| format!("password change invalid: {errors:?}"))?;
                    println!("password updated");
                    Ok(())
                }
                SettingsCommand::College {
                    name,
                    tagline,
                    phone,
                    email,
                    location,
                } => {
                    settings.college = elimu_console::settings::CollegeInfo {
                        name,
                        tagline,
                        phone,
                        email,
                        location,
                    };
                    settings_store.save(&settings).map_err(|e| e.to_string())?;
                    println!("college info updated");
                    Ok(())
                }
                SettingsCommand::Notifications {
                    registrations,
                    messages,
                } => {
                    if let Some(on) = registrations {
                        settings.notifications.on_new_registration = on;
                    }
                    if let Some(on) = messages {
                        settings.notifications.on_new_message = on;
                    }
                    settings_store.save(&settings).map_err(|e| e.to_string())?;
                    print_json(&settings.notifications)
                }
            }
        }
    }
}
