use anyhow::Context;
use tracing_subscriber::EnvFilter;

use cinerec::{Config, RatingStore, RecommendationEngine, SortBy};

const USAGE: &str = "usage: cinerec <user_id> [top_n] [title|genre|score] [genre,genre,...]
       cinerec genres";

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::from_env()?;
    let args: Vec<String> = std::env::args().skip(1).collect();

    let store = RatingStore::from_files(&config.ratings_path, &config.movies_path)
        .with_context(|| {
            format!(
                "loading {} and {}",
                config.ratings_path, config.movies_path
            )
        })?;
    let mut engine = RecommendationEngine::new().with_neighbor_cap(config.neighbor_cap);
    engine.load(store);

    match args.first().map(String::as_str) {
        Some("genres") => {
            for genre in engine.list_genres() {
                println!("{genre}");
            }
            Ok(())
        }
        Some(user_arg) => {
            let user_id: u32 = user_arg
                .parse()
                .with_context(|| format!("invalid user id {user_arg:?}\n{USAGE}"))?;
            let top_n: usize = match args.get(1) {
                Some(n) => n
                    .parse()
                    .with_context(|| format!("invalid top_n {n:?}\n{USAGE}"))?,
                None => 10,
            };
            let sort_by: SortBy = match args.get(2) {
                Some(key) => key.parse().map_err(anyhow::Error::msg)?,
                None => SortBy::Score,
            };
            let genre_filter: Vec<String> = match args.get(3) {
                Some(tokens) => tokens
                    .split(',')
                    .filter(|t| !t.is_empty())
                    .map(|t| t.to_lowercase())
                    .collect(),
                None => Vec::new(),
            };

            engine.compute_similarity();
            let recommendations = engine.recommend(user_id, top_n, sort_by, &genre_filter)?;

            if recommendations.is_empty() {
                println!("No recommendations for user {user_id}");
                return Ok(());
            }
            for rec in recommendations {
                println!("{:>6.2}  {}  [{}]", rec.score, rec.title, rec.genres);
            }
            Ok(())
        }
        None => {
            eprintln!("{USAGE}");
            std::process::exit(2);
        }
    }
}
