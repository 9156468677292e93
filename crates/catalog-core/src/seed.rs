// Built-in sample data. The browser works on an in-memory catalog, so every
// run starts from this fixed set of titles and profiles.

use catalog_models::{Documentary, Movie, Profile, Series, ValidationError};

use crate::catalog::Catalog;
use crate::session::Session;

pub fn sample_catalog() -> Result<Catalog, ValidationError> {
    let mut catalog = Catalog::new();

    catalog.add(
        Movie::new(
            "M001",
            "The Matrix",
            "A computer programmer discovers a mysterious world.",
            1999,
            vec!["Action".to_string(), "Sci-Fi".to_string()],
            136,
        )?
        .into(),
    )?;

    catalog.add(
        Series::new(
            "S001",
            "Stranger Things",
            "A group of kids encounter supernatural forces and secret government exploits.",
            2016,
            vec![
                "Drama".to_string(),
                "Fantasy".to_string(),
                "Horror".to_string(),
            ],
            4,
            8,
            50,
        )?
        .into(),
    )?;

    catalog.add(
        Documentary::new(
            "D001",
            "Planet Earth",
            "An amazing look at nature and wildlife.",
            2006,
            vec!["Nature".to_string(), "Educational".to_string()],
            550,
            "Nature & Wildlife",
        )?
        .into(),
    )?;

    Ok(catalog)
}

pub fn sample_profiles() -> Result<Vec<Profile>, ValidationError> {
    Ok(vec![
        Profile::new("P1", "Adult Profile")?,
        Profile::new("P2", "Kids Profile")?.with_kids_profile(true),
    ])
}

/// A ready-to-browse session: the sample catalog with both sample profiles,
/// the adult one selected.
pub fn sample_session() -> Result<Session, ValidationError> {
    let mut session = Session::new(sample_catalog()?);
    for profile in sample_profiles()? {
        session.add_profile(profile)?;
    }
    Ok(session)
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_models::{ContentId, ProfileId};

    #[test]
    fn test_sample_catalog_contents() {
        let catalog = sample_catalog().unwrap();
        assert_eq!(catalog.len(), 3);

        let movie = catalog.get(&ContentId::new("M001")).unwrap();
        assert_eq!(movie.title(), "The Matrix");
        assert_eq!(movie.duration(), "136 minutes");
        assert_eq!(
            movie.info(),
            "The Matrix (1999) - Action, Sci-Fi - 136 minutes"
        );

        let series = catalog.get(&ContentId::new("S001")).unwrap();
        assert_eq!(series.duration(), "26h 40m Total");
        assert!(series.supports_download());

        let documentary = catalog.get(&ContentId::new("D001")).unwrap();
        assert!(documentary.supports_user_ratings());
    }

    #[test]
    fn test_sample_session_selects_adult_profile() {
        let session = sample_session().unwrap();
        assert_eq!(session.profiles().len(), 2);
        assert_eq!(
            session.current_profile().map(|p| p.name()),
            Some("Adult Profile")
        );
        assert!(session.profiles()[1].is_kids_profile());
    }

    #[test]
    fn test_browse_and_watch_scenario() {
        let mut session = sample_session().unwrap();
        let movie_id = ContentId::new("M001");
        let series_id = ContentId::new("S001");

        // Queue up two titles, watch the movie twice.
        {
            let profile = session.current_profile_mut().unwrap();
            assert!(profile.add_to_watchlist(&movie_id));
            assert!(profile.add_to_watchlist(&series_id));
            assert!(!profile.add_to_watchlist(&movie_id));

            profile.add_to_watch_history(movie_id.clone(), 40.0);
            profile.add_to_watch_history(movie_id.clone(), 90.0);
        }

        // Rate the movie from the catalog side.
        let movie = session.catalog_mut().get_mut(&movie_id).unwrap();
        movie.add_rating(5.0).unwrap();
        movie.add_rating(4.0).unwrap();
        assert!((movie.rating() - 4.5).abs() < 1e-9);

        // The kids profile sees none of the adult profile's state.
        let kids_id = session.profiles()[1].id().clone();
        assert!(session.switch_profile(&kids_id));
        let kids = session.current_profile().unwrap();
        assert!(kids.watchlist().is_empty());
        assert_eq!(kids.watch_progress(&movie_id), 0.0);

        // The adult profile kept most-recent-wins progress.
        let adult = session.profile(&ProfileId::new("P1")).unwrap();
        assert_eq!(adult.watch_progress(&movie_id), 90.0);
        assert_eq!(adult.watchlist().len(), 2);
    }

    #[test]
    fn test_series_totals_scenario() {
        // A two season show, eight 45-minute episodes per season.
        let series = Series::new(
            "S100",
            "Example",
            "",
            2020,
            vec!["Drama".to_string()],
            2,
            8,
            45,
        )
        .unwrap();
        assert_eq!(series.duration(), "12h 0m Total");

        use catalog_models::Downloadable;
        assert_eq!(series.download_size(), 2 * 8 * 500 * 1024 * 1024);
    }
}
