use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Path to the `::`-delimited ratings file
    #[serde(default = "default_ratings_path")]
    pub ratings_path: String,

    /// Path to the `::`-delimited movies file
    #[serde(default = "default_movies_path")]
    pub movies_path: String,

    /// Optional cap on the neighbor scan; unset means every neighbor is
    /// considered
    #[serde(default)]
    pub neighbor_cap: Option<usize>,
}

fn default_ratings_path() -> String {
    "ratings.dat".to_string()
}

fn default_movies_path() -> String {
    "movies.dat".to_string()
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config: Config = envy::from_iter(std::iter::empty::<(String, String)>()).unwrap();
        assert_eq!(config.ratings_path, "ratings.dat");
        assert_eq!(config.movies_path, "movies.dat");
        assert_eq!(config.neighbor_cap, None);
    }

    #[test]
    fn test_overrides() {
        let vars = vec![
            ("RATINGS_PATH".to_string(), "/data/r.dat".to_string()),
            ("NEIGHBOR_CAP".to_string(), "99".to_string()),
        ];
        let config: Config = envy::from_iter(vars).unwrap();
        assert_eq!(config.ratings_path, "/data/r.dat");
        assert_eq!(config.neighbor_cap, Some(99));
    }
}
