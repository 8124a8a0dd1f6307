use anyhow::{Context, Result};
use catalog::{Catalog, CatalogProvider, Movie};
use clap::{Parser, Subcommand};
use colored::Colorize;
use profile::RegistrationForm;
use rand::rngs::StdRng;
use rand::SeedableRng;
use session::{CineMateConfig, MovieRecommendation, ProcessingDelay, RecommendationOrchestrator, Session};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;

/// CineMate - personal movie recommendations
#[derive(Parser)]
#[command(name = "cinemate")]
#[command(about = "Register once, then get movie picks matched to your taste", long_about = None)]
struct Cli {
    /// Profile store file (overrides CINEMATE_STORE_PATH)
    #[arg(short, long, global = true)]
    store: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create your profile
    Register {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        /// Must be 13 or older
        #[arg(long)]
        age: u32,

        /// Comma-separated favorite genres, e.g. "Sci-Fi, Action"
        #[arg(long, default_value = "")]
        genres: String,

        /// At least 6 characters
        #[arg(long)]
        password: String,

        /// A few words about yourself
        #[arg(long, default_value = "")]
        bio: String,
    },

    /// Show your profile
    Profile,

    /// List the movie catalog
    Movies {
        /// Only movies tagged with this genre
        #[arg(long)]
        genre: Option<String>,
    },

    /// Search for movies by title
    Search {
        /// Movie title to search for (case-insensitive substring match)
        #[arg(long)]
        title: String,
    },

    /// Get movie recommendations
    Recommend {
        /// Number of recommendations to return (defaults to CINEMATE_TOP_N)
        #[arg(long)]
        limit: Option<usize>,

        /// Show how each match score was computed
        #[arg(long)]
        explain: bool,

        /// Seed the jitter for reproducible output
        #[arg(long)]
        seed: Option<u64>,

        /// Skip the processing pause
        #[arg(long)]
        no_delay: bool,

        /// Recompute this many more times, like pressing Refresh
        #[arg(long, default_value = "0")]
        refresh: usize,
    },

    /// Mark a movie as watched
    Watch {
        /// Title or IMDb id
        #[arg(long)]
        title: String,
    },

    /// List the movies you've watched
    Watched,

    /// Forget your profile
    Logout,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = CineMateConfig::from_env()?;
    if let Some(store) = &cli.store {
        config.store_path = store.display().to_string();
    }
    debug!("Using config {:?}", config);

    let catalog = Arc::new(Catalog::builtin());
    let mut session = Session::open(config.store());

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Register {
            name,
            email,
            age,
            genres,
            password,
            bio,
        } => {
            let form = RegistrationForm {
                name,
                email,
                age,
                genres,
                bio,
                password,
            };
            handle_register(&mut session, form)?
        }
        Commands::Profile => handle_profile(&session)?,
        Commands::Movies { genre } => handle_movies(&catalog, genre)?,
        Commands::Search { title } => handle_search(&catalog, &title),
        Commands::Recommend {
            limit,
            explain,
            seed,
            no_delay,
            refresh,
        } => {
            let mut orchestrator = RecommendationOrchestrator::from_config(catalog.clone(), &config);
            if let Some(limit) = limit {
                orchestrator = orchestrator.with_top_n(limit);
            }
            if no_delay {
                orchestrator = orchestrator.with_delay(ProcessingDelay::Immediate);
            }
            handle_recommend(&orchestrator, &session, seed, refresh, explain).await?
        }
        Commands::Watch { title } => handle_watch(&mut session, &catalog, &title)?,
        Commands::Watched => handle_watched(&session)?,
        Commands::Logout => handle_logout(&mut session)?,
    }

    Ok(())
}

/// Handle the 'register' command
fn handle_register(session: &mut Session, form: RegistrationForm) -> Result<()> {
    let profile = session.register(form).context("Registration failed")?;
    println!(
        "{} Welcome to CineMate, {}!",
        "✓".green(),
        profile.name.bold()
    );
    Ok(())
}

/// Handle the 'profile' command
fn handle_profile(session: &Session) -> Result<()> {
    let profile = session.require_profile()?;

    let genres = profile
        .genres
        .iter()
        .map(|g| g.to_string())
        .collect::<Vec<_>>()
        .join(", ");

    println!("{}", format!("Profile: {}", profile.name).bold().blue());
    println!("{}Email: {}", "• ".green(), profile.email);
    println!("{}Age: {}", "• ".green(), profile.age);
    println!("{}Member since: {}", "• ".green(), profile.registration_date);
    println!("{}Bio: {}", "• ".green(), profile.bio_or_placeholder());
    println!(
        "{}Favorite genres: {}",
        "• ".cyan(),
        if genres.is_empty() { "None" } else { genres.as_str() }
    );
    println!("{}Movies watched: {}", "• ".cyan(), profile.watched_movies().len());
    Ok(())
}

/// Handle the 'movies' command
fn handle_movies(catalog: &Catalog, genre: Option<String>) -> Result<()> {
    let movies: Vec<&Movie> = match genre {
        Some(genre) => {
            let genre = catalog::parse_genre(&genre)?;
            println!("{}", format!("{} movies:", genre).bold().blue());
            catalog.get_movies_by_genre(genre)
        }
        None => {
            println!("{}", "All movies:".bold().blue());
            catalog.list_movies().iter().collect()
        }
    };

    if movies.is_empty() {
        println!("No movies found.");
    }
    for movie in movies {
        print_movie_line(movie);
    }
    Ok(())
}

/// Handle the 'search' command
fn handle_search(catalog: &Catalog, title: &str) {
    let matches = catalog.search(title);

    println!("{}", format!("Search results for '{}':", title).bold().blue());
    if matches.is_empty() {
        println!("No movies found.");
    }
    for movie in matches {
        print_movie_line(movie);
    }
}

/// Handle the 'recommend' command
async fn handle_recommend(
    orchestrator: &RecommendationOrchestrator,
    session: &Session,
    seed: Option<u64>,
    refresh: usize,
    explain: bool,
) -> Result<()> {
    // Fail before the pause rather than after it
    session.require_profile()?;

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    for pass in 0..=refresh {
        if pass > 0 {
            println!();
            println!("{}", "Refreshing...".dimmed());
        }
        println!("{}", "Generating recommendations...".italic());
        let recommendations = orchestrator.get_recommendations(session, &mut rng).await?;
        print_recommendations(&recommendations, explain);
    }
    Ok(())
}

/// Handle the 'watch' command
fn handle_watch(session: &mut Session, catalog: &Catalog, title: &str) -> Result<()> {
    let changed = session.mark_watched(catalog, title)?;
    let display = catalog.resolve(title).map(|m| m.title.as_str()).unwrap_or(title);

    if changed {
        println!("{} Marked '{}' as watched.", "✓".green(), display);
    } else {
        println!("'{}' is already in your watched list.", display);
    }
    Ok(())
}

/// Handle the 'watched' command
fn handle_watched(session: &Session) -> Result<()> {
    let watched = session.watched_movies()?;

    println!("{}", "Watched movies:".bold().blue());
    if watched.is_empty() {
        println!("You haven't marked any movies as watched yet.");
    }
    for title in watched {
        println!("{}{}", "• ".green(), title);
    }
    Ok(())
}

/// Handle the 'logout' command
fn handle_logout(session: &mut Session) -> Result<()> {
    session.logout()?;
    println!("{} Logged out. Your profile has been removed.", "✓".green());
    Ok(())
}

fn print_movie_line(movie: &Movie) {
    println!(
        "{}: {} ({}) [{}] {:.1}/10, {} min",
        movie.id.dimmed(),
        movie.title,
        movie.year,
        movie.genre_list(),
        movie.rating,
        movie.duration
    );
}

/// Print recommendation cards
fn print_recommendations(recommendations: &[MovieRecommendation], explain: bool) {
    println!("{}", "Movie Recommendations:".bold().blue());
    if recommendations.is_empty() {
        println!("No recommendations right now.");
    }

    for (i, rec) in recommendations.iter().enumerate() {
        let rank = i + 1;
        println!(
            "{}. {} ({})",
            rank.to_string().green(),
            rec.title.bold(),
            rec.year
        );
        println!(
            "   Rating: {:.1}/10 | {} min | {}",
            rec.rating,
            rec.duration,
            rec.genres.join(", ")
        );
        println!("   {}", format!("Match: {}%", rec.match_score).yellow());
        if explain {
            println!("   Explanation: {}", rec.explanation);
        }
    }
}
